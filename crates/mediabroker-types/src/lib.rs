//! Shared types for the media broker.
//!
//! This crate defines the value types exchanged between the broker core,
//! its backend encoder modules, and embedding applications: codec
//! identifiers, encoder configuration, encode-support flags, execution
//! locations and the capability table.

mod codec;
mod config;
mod location;
mod packet;
mod support;

pub use codec::{CodecType, H264Profile, HardwarePreference, ScalabilityMode};
pub use config::EncoderConfig;
pub use location::ExecutionLocation;
pub use packet::{EncodedVideoPacket, FrameType};
pub use support::{EncodeSupport, EncodeSupportSet, SupportTable};
