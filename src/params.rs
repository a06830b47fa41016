//! Validation of Stable Diffusion XL generation parameters.

/// Style presets accepted by Stable Diffusion XL on Bedrock.
pub const STYLE_PRESETS: &[&str] = &[
    "3d-model",
    "analog-film",
    "anime",
    "cinematic",
    "comic-book",
    "digital-art",
    "enhance",
    "fantasy-art",
    "isometric",
    "line-art",
    "low-poly",
    "modeling-compound",
    "neon-punk",
    "origami",
    "photographic",
    "pixel-art",
    "tile-texture",
];

/// Validate the model identifier.
///
/// # Errors
///
/// Returns an error if the identifier is blank.
pub fn validate_model_id(model_id: &str) -> Result<(), String> {
    if model_id.trim().is_empty() {
        Err("Model id must not be empty".to_string())
    } else {
        Ok(())
    }
}

/// Validate that a style preset is one the model understands.
///
/// # Errors
///
/// Returns an error if the preset is not recognized.
pub fn validate_style_preset(preset: &str) -> Result<(), String> {
    if STYLE_PRESETS.contains(&preset) {
        Ok(())
    } else {
        Err(format!("Unsupported style preset '{preset}'. Valid: {}", STYLE_PRESETS.join(", ")))
    }
}

/// Validate the classifier-free guidance scale.
///
/// # Errors
///
/// Returns an error if the scale is above 35.
pub fn validate_cfg_scale(cfg_scale: u32) -> Result<(), String> {
    if cfg_scale <= 35 {
        Ok(())
    } else {
        Err(format!("Unsupported cfg_scale {cfg_scale}. Valid: 0-35"))
    }
}

/// Validate the number of diffusion steps.
///
/// # Errors
///
/// Returns an error if the step count is outside 10-150.
pub fn validate_steps(steps: u32) -> Result<(), String> {
    if (10..=150).contains(&steps) {
        Ok(())
    } else {
        Err(format!("Unsupported steps {steps}. Valid: 10-150"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_id_must_not_be_blank() {
        assert!(validate_model_id("stability.stable-diffusion-xl-v1").is_ok());
        assert!(validate_model_id("").is_err());
        assert!(validate_model_id("   ").is_err());
    }

    #[test]
    fn photographic_is_valid() {
        assert!(validate_style_preset("photographic").is_ok());
        assert!(validate_style_preset("anime").is_ok());
    }

    #[test]
    fn unknown_preset_rejected() {
        let err = validate_style_preset("watercolor").unwrap_err();
        assert!(err.contains("Unsupported style preset 'watercolor'"));
        assert!(err.contains("photographic"));
    }

    #[test]
    fn cfg_scale_bounds() {
        assert!(validate_cfg_scale(0).is_ok());
        assert!(validate_cfg_scale(15).is_ok());
        assert!(validate_cfg_scale(35).is_ok());
        assert!(validate_cfg_scale(36).is_err());
    }

    #[test]
    fn steps_bounds() {
        assert!(validate_steps(9).is_err());
        assert!(validate_steps(10).is_ok());
        assert!(validate_steps(50).is_ok());
        assert!(validate_steps(150).is_ok());
        assert!(validate_steps(151).is_err());
    }
}
