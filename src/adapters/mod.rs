//! Adapter implementations for port traits.
//!
//! - `live/`: AWS SDK clients, `reqwest`, system clock and RNG
//! - `recording/`: Record interactions to cassettes
//! - `replaying/`: Replay interactions from cassettes

pub mod live;
pub mod recording;
pub mod replaying;
