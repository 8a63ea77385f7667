//! Resize configuration.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;

/// Default bounding box width.
pub const DEFAULT_MAX_WIDTH: u32 = 640;
/// Default bounding box height.
pub const DEFAULT_MAX_HEIGHT: u32 = 480;
/// Default JPEG quality, matching the browser canvas encoder.
pub const DEFAULT_QUALITY: u8 = 92;

/// Options for the resize pipeline.
///
/// Deserializes from partial objects; missing fields take their defaults.
/// `width`/`height` are accepted as aliases for the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeOptions {
    /// Maximum output width in pixels.
    #[serde(alias = "width")]
    pub max_width: u32,
    /// Maximum output height in pixels.
    #[serde(alias = "height")]
    pub max_height: u32,
    /// JPEG quality (1-100). Ignored for PNG.
    pub quality: u8,
    /// Resampling filter.
    pub filter: FilterType,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            quality: DEFAULT_QUALITY,
            filter: FilterType::Lanczos3,
        }
    }
}

impl ResizeOptions {
    /// Options with a custom bounding box and default encoding settings.
    pub fn with_max(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
            ..Self::default()
        }
    }
}
