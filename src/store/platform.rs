//! Supported template platforms.

use crate::error::UnsupportedPlatform;

/// Platforms the store publishes templates for.
pub const AVAILABLE_PLATFORMS: [&str; 3] = ["armhf", "x86_64", "arm64"];

/// Check that `platform` is one the store knows about.
pub fn check_existing_platform(platform: &str) -> Result<(), UnsupportedPlatform> {
    if AVAILABLE_PLATFORMS.contains(&platform) {
        Ok(())
    } else {
        Err(UnsupportedPlatform {
            platform: platform.to_string(),
        })
    }
}
