//! Codec identifiers and per-codec encode parameters.

use serde::{Deserialize, Serialize};

/// Video codecs the broker can be asked to encode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecType {
    /// H.264/AVC.
    H264,

    /// H.265/HEVC.
    H265,

    /// VP8.
    Vp8,

    /// VP9.
    Vp9,

    /// AV1.
    Av1,
}

impl CodecType {
    /// Returns the display name for this codec.
    pub fn name(self) -> &'static str {
        match self {
            Self::H264 => "H264",
            Self::H265 => "H265",
            Self::Vp8 => "VP8",
            Self::Vp9 => "VP9",
            Self::Av1 => "AV1",
        }
    }
}

/// Temporal-layer scalability modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalabilityMode {
    /// Single layer, no scalability.
    #[default]
    None,

    /// Two temporal layers.
    L1T2,

    /// Three temporal layers.
    L1T3,
}

impl ScalabilityMode {
    /// Number of temporal layers this mode encodes.
    pub fn temporal_layers(self) -> u8 {
        match self {
            Self::None => 1,
            Self::L1T2 => 2,
            Self::L1T3 => 3,
        }
    }
}

/// H.264 profile levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum H264Profile {
    Baseline,
    Main,
    High,
}

/// Caller constraint on the kind of encoder that may serve a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwarePreference {
    /// No constraint; any encoder will do.
    #[default]
    None,

    /// Only a hardware encoder is acceptable.
    RequireHardware,

    /// Only a software encoder is acceptable.
    RequireSoftware,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_layers() {
        assert_eq!(ScalabilityMode::None.temporal_layers(), 1);
        assert_eq!(ScalabilityMode::L1T2.temporal_layers(), 2);
        assert_eq!(ScalabilityMode::L1T3.temporal_layers(), 3);
    }

    #[test]
    fn test_codec_names() {
        assert_eq!(CodecType::H264.name(), "H264");
        assert_eq!(CodecType::Av1.name(), "AV1");
    }
}
