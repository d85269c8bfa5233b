use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::features::FrameData;
use crate::sparse::CsrMatrix;

/// One-shot replay metadata dumped next to the feature files.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    pub replay: String,
    pub map_name: String,
    pub game_version: String,
    pub base_build: u32,
    pub game_duration_loops: u32,
    pub game_duration_seconds: f32,
    pub observed_player: u32,
    pub step_mul: u32,
}

/// Appends frames to one CSV file per feature under
/// `<out_dir>/<replay_name>player_<id>/`.
///
/// Spatial features get three rows per frame (data, indices, indptr of the
/// CSR encoding); scalar features get one row per frame.
pub struct OutputWriter {
    dir: PathBuf,
    files: HashMap<String, BufWriter<File>>,
}

impl OutputWriter {
    pub fn new(out_dir: &Path, replay_path: &Path, observed_player: u32) -> io::Result<Self> {
        let replay_name = replay_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "replay".to_string());
        let dir = out_dir.join(format!("{replay_name}player_{observed_player}"));
        create_dir_all(&dir)?;
        Ok(OutputWriter { dir, files: HashMap::new() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file(&mut self, name: &str) -> io::Result<&mut BufWriter<File>> {
        let path = self.dir.join(format!("{name}.txt"));
        match self.files.entry(name.to_string()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(v) => {
                let f = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(v.insert(BufWriter::new(f)))
            }
        }
    }

    fn write_row<T: Display>(w: &mut impl Write, row: &[T]) -> io::Result<()> {
        let joined = row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        writeln!(w, "{joined}")
    }

    fn write_sparse(&mut self, name: &str, m: &CsrMatrix) -> io::Result<()> {
        let w = self.file(name)?;
        Self::write_row(w, &m.data)?;
        Self::write_row(w, &m.indices)?;
        Self::write_row(w, &m.indptr)
    }

    pub fn write_frame(&mut self, frame: &FrameData) -> io::Result<()> {
        for plane in &frame.screen {
            let m = CsrMatrix::from_dense(&plane.values, plane.rows, plane.cols);
            self.write_sparse(&format!("screen_{}", plane.name), &m)?;
        }
        for plane in &frame.minimap {
            let m = CsrMatrix::from_dense(&plane.values, plane.rows, plane.cols);
            self.write_sparse(&format!("minimap_{}", plane.name), &m)?;
        }
        let w = self.file("player")?;
        Self::write_row(w, &frame.player)?;
        let w = self.file("game_loop")?;
        Self::write_row(w, &[frame.game_loop])?;
        let w = self.file("score_cumulative")?;
        Self::write_row(w, &frame.score_cumulative)
    }

    pub fn write_summary(&self, summary: &ReplaySummary) -> io::Result<()> {
        let f = File::create(self.dir.join("info.json"))?;
        serde_json::to_writer_pretty(BufWriter::new(f), summary)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn finish(&mut self) -> io::Result<()> {
        for w in self.files.values_mut() {
            w.flush()?;
        }
        Ok(())
    }
}
