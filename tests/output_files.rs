use std::fs;
use std::path::Path;

use sc2grid::features::{FrameData, Plane};
use sc2grid::output::{OutputWriter, ReplaySummary};

fn test_frame(game_loop: u32) -> FrameData {
    FrameData {
        game_loop,
        screen: vec![Plane {
            name: "unit_type",
            rows: 2,
            cols: 2,
            values: vec![0, 48, 0, 0],
        }],
        minimap: vec![Plane {
            name: "camera",
            rows: 2,
            cols: 2,
            values: vec![1, 1, 0, 0],
        }],
        player: vec![1, 50, 0, 12, 15, 0, 12, 0, 0, 0, 0],
        score_cumulative: vec![1050, 0, 0, 600, 400, 0, 0, 1050, 0, 0, 0, 50, 0],
    }
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn frames_append_per_feature_files() {
    let out_dir = Path::new("target/output_files_test");
    let _ = fs::remove_dir_all(out_dir);

    let replay = Path::new("games/TestGame.SC2Replay");
    let mut writer = OutputWriter::new(out_dir, replay, 2).unwrap();
    assert_eq!(writer.dir(), out_dir.join("TestGame.SC2Replayplayer_2"));

    writer.write_frame(&test_frame(10)).unwrap();
    writer.write_frame(&test_frame(20)).unwrap();
    writer.finish().unwrap();

    // Three CSR rows per frame per spatial feature.
    let screen = lines(&writer.dir().join("screen_unit_type.txt"));
    assert_eq!(screen.len(), 6);
    assert_eq!(screen[0], "48");
    assert_eq!(screen[1], "1");
    assert_eq!(screen[2], "0,1,1");
    assert_eq!(screen[3..6], screen[0..3]);

    let minimap = lines(&writer.dir().join("minimap_camera.txt"));
    assert_eq!(minimap.len(), 6);
    assert_eq!(minimap[0], "1,1");
    assert_eq!(minimap[1], "0,1");
    assert_eq!(minimap[2], "0,2,2");

    // One row per frame per scalar feature.
    let game_loop = lines(&writer.dir().join("game_loop.txt"));
    assert_eq!(game_loop, vec!["10", "20"]);
    let player = lines(&writer.dir().join("player.txt"));
    assert_eq!(player.len(), 2);
    assert_eq!(player[0], "1,50,0,12,15,0,12,0,0,0,0");
    let score = lines(&writer.dir().join("score_cumulative.txt"));
    assert_eq!(score.len(), 2);
    assert!(score[0].starts_with("1050,"));
}

#[test]
fn summary_is_valid_json() {
    let out_dir = Path::new("target/output_summary_test");
    let _ = fs::remove_dir_all(out_dir);

    let writer = OutputWriter::new(out_dir, Path::new("Ladder.SC2Replay"), 1).unwrap();
    writer
        .write_summary(&ReplaySummary {
            replay: "Ladder.SC2Replay".to_string(),
            map_name: "Acolyte LE".to_string(),
            game_version: "3.16.1".to_string(),
            base_build: 55958,
            game_duration_loops: 12600,
            game_duration_seconds: 562.5,
            observed_player: 1,
            step_mul: 10,
        })
        .unwrap();

    let raw = fs::read_to_string(writer.dir().join("info.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["map_name"], "Acolyte LE");
    assert_eq!(parsed["base_build"], 55958);
    assert_eq!(parsed["step_mul"], 10);
}
