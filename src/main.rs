use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use sc2grid::client::Controller;
use sc2grid::extract::{self, ExtractConfig};
use sc2grid::launcher::Launcher;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser, Debug)]
#[command(version, about = "Extract sparse feature-layer observations from an SC2 replay", long_about = None)]
struct Args {
    /// Path to the .SC2Replay file to extract
    #[arg(long)]
    replay: PathBuf,

    /// Override the map for this replay
    #[arg(long)]
    map_path: Option<String>,

    /// Run the game client headless
    #[arg(long)]
    norender: bool,

    /// Observe the whole map regardless of vision
    #[arg(long)]
    disable_fog: bool,

    /// Frames per second to play the replay at (<= 0 for unthrottled)
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Game steps per observation
    #[arg(long, default_value_t = 10)]
    step_mul: u32,

    /// Which player to observe
    #[arg(long, default_value_t = 1)]
    observed_player: u32,

    /// Resolution of the screen feature layers
    #[arg(long, default_value_t = 84)]
    screen_resolution: i32,

    /// Resolution of the minimap feature layers
    #[arg(long, default_value_t = 64)]
    minimap_resolution: i32,

    /// Stop after this many game steps (0 = play the whole replay)
    #[arg(long, default_value_t = 0)]
    max_game_steps: u32,

    /// Directory the per-replay output folder is created under
    #[arg(long, default_value = "replay_data")]
    out_dir: PathBuf,

    /// Port the game client listens on
    #[arg(long, default_value_t = 8167)]
    port: u16,

    /// SC2 install directory (falls back to SC2PATH, then default locations)
    #[arg(long)]
    sc2_path: Option<PathBuf>,
}

/// Replays are version-locked; anything else won't start.
fn is_replay_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("sc2replay"))
        .unwrap_or(false)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !is_replay_file(&args.replay) {
        anyhow::bail!("replay must end in .SC2Replay: {}", args.replay.display());
    }
    if args.step_mul == 0 {
        anyhow::bail!("--step-mul must be at least 1");
    }
    let replay_data = fs::read(&args.replay)
        .with_context(|| format!("reading replay {}", args.replay.display()))?;

    let launcher = Launcher::new(args.sc2_path.clone())?;
    let mut process = launcher.launch(None, args.port, args.norender)?;
    let mut controller = Controller::connect("127.0.0.1", args.port, CONNECT_TIMEOUT)?;
    controller.ping()?;

    let info = controller.replay_info(replay_data.clone())?;
    info!(
        "replay: map {:?}, version {}, base build {}, {} loops ({:.0}s)",
        info.get_map_name(),
        info.get_game_version(),
        info.get_base_build(),
        info.get_game_duration_loops(),
        info.get_game_duration_seconds(),
    );
    for player in info.get_player_info() {
        info!(
            "player {}: {:?}, apm {}, mmr {}",
            player.get_player_info().get_player_id(),
            player.get_player_result().get_result(),
            player.get_player_apm(),
            player.get_player_mmr(),
        );
    }

    // The replay only plays on the build that recorded it. Relaunch with
    // the matching binary when it's installed, otherwise try anyway.
    if info.get_base_build() != process.base_build() {
        if launcher.has_base(info.get_base_build()) {
            info!(
                "switching from base build {} to {}",
                process.base_build(),
                info.get_base_build()
            );
            controller.quit();
            drop(process);
            process = launcher.launch(Some(info.get_base_build()), args.port, args.norender)?;
            controller = Controller::connect("127.0.0.1", args.port, CONNECT_TIMEOUT)?;
            controller.ping()?;
        } else {
            warn!(
                "replay was recorded on base build {} but only {} is installed; the game may refuse it",
                info.get_base_build(),
                process.base_build()
            );
        }
    }

    let cfg = ExtractConfig {
        step_mul: args.step_mul,
        fps: args.fps,
        max_game_steps: args.max_game_steps,
        observed_player: args.observed_player,
        disable_fog: args.disable_fog,
        screen_resolution: args.screen_resolution,
        minimap_resolution: args.minimap_resolution,
        map_path: args.map_path.clone(),
    };
    let stats = extract::run(
        &mut controller,
        &launcher,
        &cfg,
        &args.replay,
        replay_data,
        &info,
        &args.out_dir,
    )?;

    controller.quit();
    drop(process);

    println!("Frames: {}", stats.frames);
    println!("Score: {}", stats.score);
    for result in &stats.results {
        println!("Result: {result}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn replay_extension_check() {
        assert!(is_replay_file(std::path::Path::new("games/x.SC2Replay")));
        assert!(is_replay_file(std::path::Path::new("x.sc2replay")));
        assert!(!is_replay_file(std::path::Path::new("x.rep")));
        assert!(!is_replay_file(std::path::Path::new("SC2Replay")));
    }
}
