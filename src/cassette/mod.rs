//! Record/replay infrastructure for deterministic local runs and tests.

pub mod format;
pub mod load;
pub mod recorder;
pub mod replayer;
