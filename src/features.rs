use log::warn;
use sc2_proto::common::ImageData;
use sc2_proto::sc2api::{Observation, PlayerCommon};
use sc2_proto::score::Score;
use sc2_proto::spatial::{FeatureLayers, FeatureLayersMinimap};
use thiserror::Error;

/// Screen feature layers, in the order the output files are keyed by.
pub const SCREEN_FEATURES: [&str; 17] = [
    "height_map",
    "visibility_map",
    "creep",
    "power",
    "player_id",
    "player_relative",
    "unit_type",
    "selected",
    "unit_hit_point",
    "unit_hit_point_ratio",
    "unit_energy",
    "unit_energy_ratio",
    "unit_shield",
    "unit_shield_ratio",
    "unit_density",
    "unit_density_ratio",
    "effects",
];

/// Minimap feature layers.
pub const MINIMAP_FEATURES: [&str; 7] = [
    "height_map",
    "visibility_map",
    "creep",
    "camera",
    "player_id",
    "player_relative",
    "selected",
];

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("unsupported bits_per_pixel {0}")]
    BadBitsPerPixel(i32),
    #[error("plane {name}: expected {expected} bytes, got {got}")]
    BadLength { name: &'static str, expected: usize, got: usize },
    #[error("observation carries no feature layer data; was the interface configured for feature layers?")]
    NoFeatureLayers,
}

/// One decoded feature plane, row-major.
#[derive(Debug, Clone)]
pub struct Plane {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<i32>,
}

/// Everything pulled from a single observation.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub game_loop: u32,
    pub screen: Vec<Plane>,
    pub minimap: Vec<Plane>,
    pub player: Vec<i64>,
    pub score_cumulative: Vec<i64>,
}

/// Decode a packed `ImageData` payload into row-major i32 values.
///
/// The game packs planes as 1 bit per pixel (MSB first within a byte),
/// or 8/16/32 bits little-endian.
pub fn unpack_plane(
    name: &'static str,
    bits_per_pixel: i32,
    cols: usize,
    rows: usize,
    bytes: &[u8],
) -> Result<Vec<i32>, FeatureError> {
    let pixels = rows * cols;
    match bits_per_pixel {
        1 => {
            let expected = (pixels + 7) / 8;
            if bytes.len() != expected {
                return Err(FeatureError::BadLength { name, expected, got: bytes.len() });
            }
            let mut out = Vec::with_capacity(pixels);
            for i in 0..pixels {
                let byte = bytes[i / 8];
                out.push(((byte >> (7 - (i % 8))) & 1) as i32);
            }
            Ok(out)
        }
        8 => {
            if bytes.len() != pixels {
                return Err(FeatureError::BadLength { name, expected: pixels, got: bytes.len() });
            }
            Ok(bytes.iter().map(|&b| b as i32).collect())
        }
        16 => {
            let expected = pixels * 2;
            if bytes.len() != expected {
                return Err(FeatureError::BadLength { name, expected, got: bytes.len() });
            }
            Ok(bytes
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]) as i32)
                .collect())
        }
        32 => {
            let expected = pixels * 4;
            if bytes.len() != expected {
                return Err(FeatureError::BadLength { name, expected, got: bytes.len() });
            }
            Ok(bytes
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect())
        }
        other => Err(FeatureError::BadBitsPerPixel(other)),
    }
}

fn decode_image(name: &'static str, img: &ImageData) -> Result<Plane, FeatureError> {
    let cols = img.get_size().get_x() as usize;
    let rows = img.get_size().get_y() as usize;
    let values = unpack_plane(name, img.get_bits_per_pixel(), cols, rows, img.get_data())?;
    Ok(Plane { name, rows, cols, values })
}

fn screen_images<'a>(fl: &'a FeatureLayers) -> Vec<(&'static str, Option<&'a ImageData>)> {
    vec![
        ("height_map", fl.has_height_map().then(|| fl.get_height_map())),
        ("visibility_map", fl.has_visibility_map().then(|| fl.get_visibility_map())),
        ("creep", fl.has_creep().then(|| fl.get_creep())),
        ("power", fl.has_power().then(|| fl.get_power())),
        ("player_id", fl.has_player_id().then(|| fl.get_player_id())),
        ("player_relative", fl.has_player_relative().then(|| fl.get_player_relative())),
        ("unit_type", fl.has_unit_type().then(|| fl.get_unit_type())),
        ("selected", fl.has_selected().then(|| fl.get_selected())),
        ("unit_hit_point", fl.has_unit_hit_points().then(|| fl.get_unit_hit_points())),
        (
            "unit_hit_point_ratio",
            fl.has_unit_hit_points_ratio().then(|| fl.get_unit_hit_points_ratio()),
        ),
        ("unit_energy", fl.has_unit_energy().then(|| fl.get_unit_energy())),
        ("unit_energy_ratio", fl.has_unit_energy_ratio().then(|| fl.get_unit_energy_ratio())),
        ("unit_shield", fl.has_unit_shields().then(|| fl.get_unit_shields())),
        ("unit_shield_ratio", fl.has_unit_shields_ratio().then(|| fl.get_unit_shields_ratio())),
        ("unit_density", fl.has_unit_density().then(|| fl.get_unit_density())),
        ("unit_density_ratio", fl.has_unit_density_aa().then(|| fl.get_unit_density_aa())),
        ("effects", fl.has_effects().then(|| fl.get_effects())),
    ]
}

fn minimap_images<'a>(fl: &'a FeatureLayersMinimap) -> Vec<(&'static str, Option<&'a ImageData>)> {
    vec![
        ("height_map", fl.has_height_map().then(|| fl.get_height_map())),
        ("visibility_map", fl.has_visibility_map().then(|| fl.get_visibility_map())),
        ("creep", fl.has_creep().then(|| fl.get_creep())),
        ("camera", fl.has_camera().then(|| fl.get_camera())),
        ("player_id", fl.has_player_id().then(|| fl.get_player_id())),
        ("player_relative", fl.has_player_relative().then(|| fl.get_player_relative())),
        ("selected", fl.has_selected().then(|| fl.get_selected())),
    ]
}

/// The 11 scalar player stats, in fixed order.
pub fn player_row(pc: &PlayerCommon) -> Vec<i64> {
    vec![
        pc.get_player_id() as i64,
        pc.get_minerals() as i64,
        pc.get_vespene() as i64,
        pc.get_food_used() as i64,
        pc.get_food_cap() as i64,
        pc.get_food_army() as i64,
        pc.get_food_workers() as i64,
        pc.get_idle_worker_count() as i64,
        pc.get_army_count() as i64,
        pc.get_warp_gate_count() as i64,
        pc.get_larva_count() as i64,
    ]
}

/// The 13 cumulative score values, in fixed order.
pub fn score_row(score: &Score) -> Vec<i64> {
    let d = score.get_score_details();
    vec![
        score.get_score() as i64,
        d.get_idle_production_time() as i64,
        d.get_idle_worker_time() as i64,
        d.get_total_value_units() as i64,
        d.get_total_value_structures() as i64,
        d.get_killed_value_units() as i64,
        d.get_killed_value_structures() as i64,
        d.get_collected_minerals() as i64,
        d.get_collected_vespene() as i64,
        d.get_collection_rate_minerals() as i64,
        d.get_collection_rate_vespene() as i64,
        d.get_spent_minerals() as i64,
        d.get_spent_vespene() as i64,
    ]
}

/// Pull the per-frame record out of a raw observation.
///
/// Planes the game did not send are skipped with a warning rather than
/// failing the whole frame.
pub fn transform_obs(obs: &Observation) -> Result<FrameData, FeatureError> {
    if !obs.has_feature_layer_data() {
        return Err(FeatureError::NoFeatureLayers);
    }
    let layers = obs.get_feature_layer_data();

    let mut screen = Vec::with_capacity(SCREEN_FEATURES.len());
    for (name, img) in screen_images(layers.get_renders()) {
        match img {
            Some(img) => screen.push(decode_image(name, img)?),
            None => warn!("screen plane {name} missing from observation"),
        }
    }
    let mut minimap = Vec::with_capacity(MINIMAP_FEATURES.len());
    for (name, img) in minimap_images(layers.get_minimap_renders()) {
        match img {
            Some(img) => minimap.push(decode_image(name, img)?),
            None => warn!("minimap plane {name} missing from observation"),
        }
    }

    Ok(FrameData {
        game_loop: obs.get_game_loop(),
        screen,
        minimap,
        player: player_row(obs.get_player_common()),
        score_cumulative: score_row(obs.get_score()),
    })
}
