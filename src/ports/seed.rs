//! Seed source port for image generation noise.

/// Source of generation seeds.
pub trait SeedSource: Send + Sync {
    /// Next seed, anywhere in the full `u32` range.
    fn next_seed(&self) -> u32;
}
