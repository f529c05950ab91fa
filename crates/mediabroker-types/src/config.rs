//! Encoder configuration values.

use serde::{Deserialize, Serialize};

use crate::codec::{CodecType, H264Profile, HardwarePreference, ScalabilityMode};

/// Video encoding configuration.
///
/// Used both for capability queries and creation requests. The broker
/// never mutates a configuration; backend modules receive it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Codec to encode into.
    pub codec: CodecType,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Target frames per second.
    pub fps: u32,

    /// Target bitrate in kbps.
    pub bitrate_kbps: u32,

    /// Keyframe interval in seconds.
    pub keyframe_interval_secs: u32,

    /// H.264 profile; ignored for other codecs.
    pub profile: H264Profile,

    /// Temporal scalability mode.
    pub scalability: ScalabilityMode,

    /// Constraint on the kind of encoder that may serve the request.
    pub hardware_preference: HardwarePreference,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            codec: CodecType::H264,
            width: 1920,
            height: 1080,
            fps: 60,
            bitrate_kbps: 6000,
            keyframe_interval_secs: 2,
            profile: H264Profile::High,
            scalability: ScalabilityMode::None,
            hardware_preference: HardwarePreference::None,
        }
    }
}

impl EncoderConfig {
    /// Whether the configuration is structurally encodable at all.
    ///
    /// A config with a zero dimension or framerate cannot be served by any
    /// backend and is rejected before modules are consulted.
    pub fn sane(&self) -> bool {
        self.width > 0 && self.height > 0 && self.fps > 0
    }
}
