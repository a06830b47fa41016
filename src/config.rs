//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DrawingError;
use crate::params::{validate_cfg_scale, validate_model_id, validate_steps, validate_style_preset};

/// Environment variable holding the destination bucket name.
pub const BUCKET_ENV: &str = "TEXT_TO_IMAGE_S3_BUCKET_NAME";
/// Environment variable holding the region used in public object URLs.
pub const REGION_ENV: &str = "AWS_REGION_NAME";
/// Environment variable overriding the scratch directory.
pub const SCRATCH_DIR_ENV: &str = "DRAWING_SCRATCH_DIR";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Object storage destination.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Image model parameters.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Local scratch file location.
    #[serde(default)]
    pub scratch: ScratchConfig,
}

/// Object storage destination.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// Bucket name.
    pub bucket: Option<String>,
    /// Region name used to build public URLs.
    pub region: Option<String>,
}

/// Image model parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Bedrock model identifier.
    pub model_id: String,
    /// Style preset.
    pub style_preset: String,
    /// Classifier-free guidance scale.
    pub cfg_scale: u32,
    /// Number of diffusion steps.
    pub steps: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_id: "stability.stable-diffusion-xl-v1".to_string(),
            style_preset: "photographic".to_string(),
            cfg_scale: 15,
            steps: 50,
        }
    }
}

/// Where the generated image is written before upload.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    /// Directory for the scratch file.
    pub dir: PathBuf,
    /// File name of the scratch file.
    pub file_name: String,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("/tmp"), file_name: "stability.png".to_string() }
    }
}

/// Settings resolved once at startup and shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Destination bucket.
    pub bucket: String,
    /// Region used in public object URLs.
    pub region: String,
    /// Image model parameters.
    pub generation: GenerationConfig,
    /// Full path of the scratch image file.
    pub scratch_path: PathBuf,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Resolve settings against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if bucket or region is missing, or a generation
    /// parameter is invalid.
    pub fn settings(&self) -> Result<Settings, DrawingError> {
        self.settings_with(|name| std::env::var(name).ok())
    }

    /// Resolve settings, looking up environment overrides through `env`.
    ///
    /// Environment values take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns an error if bucket or region is missing, or a generation
    /// parameter is invalid.
    pub fn settings_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Settings, DrawingError> {
        let bucket = env(BUCKET_ENV).or_else(|| self.storage.bucket.clone()).ok_or_else(|| {
            DrawingError::MissingSetting { setting: "bucket name".into(), env_var: BUCKET_ENV.into() }
        })?;
        let region = env(REGION_ENV).or_else(|| self.storage.region.clone()).ok_or_else(|| {
            DrawingError::MissingSetting { setting: "region name".into(), env_var: REGION_ENV.into() }
        })?;

        let generation = &self.generation;
        validate_model_id(&generation.model_id).map_err(DrawingError::Config)?;
        validate_style_preset(&generation.style_preset).map_err(DrawingError::Config)?;
        validate_cfg_scale(generation.cfg_scale).map_err(DrawingError::Config)?;
        validate_steps(generation.steps).map_err(DrawingError::Config)?;

        let dir = env(SCRATCH_DIR_ENV).map_or_else(|| self.scratch.dir.clone(), PathBuf::from);

        Ok(Settings {
            bucket,
            region,
            generation: generation.clone(),
            scratch_path: dir.join(&self.scratch.file_name),
        })
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `DRAWING_CONFIG` environment variable
/// 3. `drawing.toml` in the working directory
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("DRAWING_CONFIG") {
        return PathBuf::from(p);
    }

    PathBuf::from("drawing.toml")
}
