// Replay extraction pipeline: launch SC2, drive a replay, dump sparse layers
pub mod client;
pub mod extract;
pub mod features;
pub mod launcher;
pub mod output;
pub mod sparse;
