//! Encoded output packets produced by encoder instances.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An encoded video packet.
#[derive(Debug, Clone)]
pub struct EncodedVideoPacket {
    /// Encoded bitstream data.
    pub data: Bytes,

    /// Presentation timestamp in 100ns units.
    pub pts_100ns: u64,

    /// Decode timestamp in 100ns units.
    pub dts_100ns: u64,

    /// Whether this is a keyframe.
    pub is_keyframe: bool,

    /// Frame type for priority ordering.
    pub frame_type: FrameType,
}

/// Video frame type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FrameType {
    /// I-frame (keyframe) - highest priority.
    I = 0,

    /// P-frame - medium priority.
    P = 1,

    /// B-frame - lowest priority.
    B = 2,
}
