//! System clock and random seed source.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::ports::{Clock, SeedSource};

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Seeds drawn uniformly from `0..=u32::MAX` with the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSeed;

impl SeedSource for RandomSeed {
    fn next_seed(&self) -> u32 {
        rand::thread_rng().gen_range(0..=u32::MAX)
    }
}
