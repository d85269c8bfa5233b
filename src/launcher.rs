use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no SC2 install found; set SC2PATH or pass --sc2-path (tried {tried:?})")]
    InstallNotFound { tried: Vec<PathBuf> },
    #[error("no Base* builds under {0}")]
    NoVersions(PathBuf),
    #[error("base build {0} is not installed")]
    BuildMissing(u32),
    #[error(transparent)]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, LaunchError>;

/// Locates an SC2 install and spawns versioned game binaries from it.
///
/// The install keeps one binary per protocol-breaking patch under
/// `Versions/Base<build>/`, and a replay only plays on the build that
/// produced it.
pub struct Launcher {
    install_dir: PathBuf,
}

impl Launcher {
    /// Use an explicit install dir, or fall back to `SC2PATH`, or the
    /// platform's default install location.
    pub fn new(install_dir: Option<PathBuf>) -> Result<Self> {
        let mut tried = Vec::new();
        let mut candidates = Vec::new();
        if let Some(dir) = install_dir {
            candidates.push(dir);
        }
        if let Ok(dir) = std::env::var("SC2PATH") {
            candidates.push(PathBuf::from(dir));
        }
        if let Ok(home) = std::env::var("HOME") {
            candidates.push(Path::new(&home).join("StarCraftII"));
        }
        candidates.push(PathBuf::from("/Applications/StarCraft II"));
        candidates.push(PathBuf::from("C:\\Program Files (x86)\\StarCraft II"));

        for dir in candidates {
            if dir.join("Versions").is_dir() {
                debug!("using SC2 install at {}", dir.display());
                return Ok(Launcher { install_dir: dir });
            }
            tried.push(dir);
        }
        Err(LaunchError::InstallNotFound { tried })
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Installed base builds, ascending.
    pub fn base_builds(&self) -> Result<Vec<u32>> {
        let versions = self.install_dir.join("Versions");
        let mut builds = Vec::new();
        for entry in fs::read_dir(&versions)? {
            let name = entry?.file_name();
            if let Some(build) = name
                .to_str()
                .and_then(|n| n.strip_prefix("Base"))
                .and_then(|n| n.parse::<u32>().ok())
            {
                builds.push(build);
            }
        }
        if builds.is_empty() {
            return Err(LaunchError::NoVersions(versions));
        }
        builds.sort_unstable();
        Ok(builds)
    }

    pub fn has_base(&self, build: u32) -> bool {
        self.install_dir.join("Versions").join(format!("Base{build}")).is_dir()
    }

    fn exec_path(&self, build: u32) -> PathBuf {
        let base = self.install_dir.join("Versions").join(format!("Base{build}"));
        if cfg!(target_os = "windows") {
            base.join("SC2_x64.exe")
        } else if cfg!(target_os = "macos") {
            base.join("SC2.app/Contents/MacOS/SC2")
        } else {
            base.join("SC2_x64")
        }
    }

    /// Read map bytes for a replay whose map is not embedded. Relative
    /// paths resolve against the install's `Maps` directory.
    pub fn map_data(&self, map_path: &str) -> Result<Vec<u8>> {
        let path = Path::new(map_path);
        let resolved =
            if path.is_absolute() { path.to_path_buf() } else { self.install_dir.join("Maps").join(path) };
        Ok(fs::read(resolved)?)
    }

    /// Spawn the game listening on `port`. `build: None` picks the newest
    /// installed build.
    pub fn launch(&self, build: Option<u32>, port: u16, headless: bool) -> Result<GameProcess> {
        let build = match build {
            Some(b) if self.has_base(b) => b,
            Some(b) => return Err(LaunchError::BuildMissing(b)),
            None => self
                .base_builds()?
                .pop()
                .ok_or_else(|| LaunchError::NoVersions(self.install_dir.join("Versions")))?,
        };
        let exec = self.exec_path(build);
        info!("launching {} on port {port}", exec.display());
        let child = Command::new(&exec)
            .arg("-listen")
            .arg("127.0.0.1")
            .arg("-port")
            .arg(port.to_string())
            .arg("-dataDir")
            .arg(&self.install_dir)
            .arg("-displayMode")
            .arg(if headless { "0" } else { "1" })
            .current_dir(&self.install_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(GameProcess { child, base_build: build, port })
    }
}

/// A running game client; killed when dropped.
pub struct GameProcess {
    child: Child,
    base_build: u32,
    port: u16,
}

impl GameProcess {
    pub fn base_build(&self) -> u32 {
        self.base_build
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Drop for GameProcess {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            warn!("failed to kill SC2 (pid {}): {e}", self.child.id());
        }
        let _ = self.child.wait();
    }
}
