use std::path::Path;
use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::info;
use sc2_proto::sc2api::{InterfaceOptions, RequestStartReplay, ResponseReplayInfo, Status};

use crate::client::Controller;
use crate::features;
use crate::launcher::Launcher;
use crate::output::{OutputWriter, ReplaySummary};

/// Feature-layer camera width in world units, matching the interface the
/// downstream notebook was tuned against.
const CAMERA_WIDTH: f32 = 24.0;

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub step_mul: u32,
    pub fps: f64,
    pub max_game_steps: u32,
    pub observed_player: u32,
    pub disable_fog: bool,
    pub screen_resolution: i32,
    pub minimap_resolution: i32,
    /// Override for the replay's embedded map path.
    pub map_path: Option<String>,
}

#[derive(Debug)]
pub struct RunStats {
    pub frames: u32,
    pub last_game_loop: u32,
    pub score: i64,
    pub results: Vec<String>,
}

/// Observations a full replay of `game_loops` loops yields at a given
/// step multiplier.
pub fn expected_frames(game_loops: u32, step_mul: u32) -> u32 {
    game_loops / step_mul.max(1)
}

fn interface_options(cfg: &ExtractConfig) -> InterfaceOptions {
    let mut options = InterfaceOptions::new();
    options.set_score(true);
    let fl = options.mut_feature_layer();
    fl.set_width(CAMERA_WIDTH);
    fl.mut_resolution().set_x(cfg.screen_resolution);
    fl.mut_resolution().set_y(cfg.screen_resolution);
    fl.mut_minimap_resolution().set_x(cfg.minimap_resolution);
    fl.mut_minimap_resolution().set_y(cfg.minimap_resolution);
    options
}

/// Play the replay to the end (or `max_game_steps`), appending one sparse
/// record per observation under `out_dir`.
pub fn run(
    controller: &mut Controller,
    launcher: &Launcher,
    cfg: &ExtractConfig,
    replay_path: &Path,
    replay_data: Vec<u8>,
    replay_info: &ResponseReplayInfo,
    out_dir: &Path,
) -> Result<RunStats> {
    let mut start = RequestStartReplay::new();
    start.set_replay_data(replay_data);
    start.set_observed_player_id(cfg.observed_player as i32);
    start.set_disable_fog(cfg.disable_fog);
    start.set_options(interface_options(cfg));

    // Replays recorded on maps the game can't find embedded need the map
    // shipped alongside the start request.
    let map_path = cfg
        .map_path
        .clone()
        .or_else(|| Some(replay_info.get_local_map_path().to_string()).filter(|p| !p.is_empty()));
    if let Some(path) = &map_path {
        start.set_map_data(
            launcher.map_data(path).with_context(|| format!("reading map {path}"))?,
        );
    }
    controller.start_replay(start).context("starting replay")?;

    let mut writer = OutputWriter::new(out_dir, replay_path, cfg.observed_player)?;
    writer.write_summary(&ReplaySummary {
        replay: replay_path.display().to_string(),
        map_name: replay_info.get_map_name().to_string(),
        game_version: replay_info.get_game_version().to_string(),
        base_build: replay_info.get_base_build(),
        game_duration_loops: replay_info.get_game_duration_loops(),
        game_duration_seconds: replay_info.get_game_duration_seconds(),
        observed_player: cfg.observed_player,
        step_mul: cfg.step_mul,
    })?;
    info!("writing observations to {}", writer.dir().display());

    let total_loops = replay_info.get_game_duration_loops();
    info!(
        "{} loops at step_mul {} -> {} observations",
        total_loops,
        cfg.step_mul,
        expected_frames(total_loops, cfg.step_mul)
    );
    let progress = ProgressBar::new(total_loops as u64);
    let frame_budget = if cfg.fps > 0.0 {
        Some(Duration::from_secs_f64(1.0 / cfg.fps))
    } else {
        None
    };

    let mut stats = RunStats { frames: 0, last_game_loop: 0, score: 0, results: Vec::new() };
    loop {
        let frame_start = Instant::now();
        controller.step(cfg.step_mul)?;
        let response = controller.observe()?;
        let frame = features::transform_obs(response.get_observation())?;

        writer.write_frame(&frame)?;
        stats.frames += 1;
        stats.last_game_loop = frame.game_loop;
        stats.score = frame.score_cumulative[0];
        progress.set_position((frame.game_loop as u64).min(total_loops as u64));

        if !response.get_player_result().is_empty() {
            stats.results = response
                .get_player_result()
                .iter()
                .map(|r| format!("player {}: {:?}", r.get_player_id(), r.get_result()))
                .collect();
            break;
        }
        if cfg.max_game_steps > 0 && frame.game_loop >= cfg.max_game_steps {
            info!("reached max game steps ({})", cfg.max_game_steps);
            break;
        }
        // Some replays end without reporting a result for the observed side.
        if controller.status() == Status::ended {
            break;
        }
        if let Some(budget) = frame_budget {
            let elapsed = frame_start.elapsed();
            if elapsed < budget {
                sleep(budget - elapsed);
            }
        }
    }
    progress.finish_and_clear();
    writer.finish()?;

    info!(
        "extracted {} frames ({} game loops), final score {}",
        stats.frames, stats.last_game_loop, stats.score
    );
    for result in &stats.results {
        info!("{result}");
    }
    Ok(stats)
}
