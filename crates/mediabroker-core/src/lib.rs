//! Encoder-module brokering: capability queries and fallback creation.
//!
//! This crate selects among competing hardware/software encoder backends,
//! each bound to one execution location (GPU process, dedicated media
//! process, utility process, content process, or the in-process default),
//! and asynchronously produces a ready-to-use encoder for a requested
//! configuration. Candidates are tried in a fixed priority order; the
//! first module that accepts the configuration and materializes an
//! encoder wins, and per-candidate failures degrade to the next module
//! instead of aborting the request.

mod broker;
mod cache;
mod error;
mod queue;
mod registry;

pub use broker::EncoderBroker;
pub use cache::{
    install_process_cache, process_cache, supports_codec, SupportCache, SupportProbe,
};
pub use error::{BrokerError, EncoderError};
pub use queue::TaskQueue;
pub use registry::{ModuleProvider, ModuleRegistry, PlatformBaseline, RuntimeContext};

use async_trait::async_trait;

use mediabroker_types::{
    CodecType, EncodedVideoPacket, EncodeSupportSet, EncoderConfig, ExecutionLocation,
};

/// Result type for encoder operations.
pub type EncoderResult<T> = Result<T, EncoderError>;

/// Result type for broker operations.
pub type BrokerResult<T> = Result<T, BrokerError>;

/// Trait for video encoders produced by a backend module.
///
/// Ownership of a created encoder moves to the caller; the module that
/// produced it keeps no relationship to it afterwards.
pub trait VideoEncoder: Send {
    /// Encode a frame in NV12 format.
    fn encode(&mut self, frame: &[u8], pts_100ns: u64)
        -> EncoderResult<Option<EncodedVideoPacket>>;

    /// Flush any remaining frames.
    fn flush(&mut self) -> EncoderResult<Vec<EncodedVideoPacket>>;

    /// Check if the encoder is hardware accelerated.
    fn is_hardware_accelerated(&self) -> bool;

    /// Get encoder name for diagnostics.
    fn name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn VideoEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoEncoder")
            .field("name", &self.name())
            .field("hardware", &self.is_hardware_accelerated())
            .finish()
    }
}

/// A capability-reporting, encoder-producing backend bound to one
/// execution location.
///
/// One instance exists per location that is actually usable at runtime;
/// the registry owns them for the broker's lifetime.
#[async_trait]
pub trait EncoderModule: Send + Sync {
    /// Get module name for diagnostics.
    fn name(&self) -> &'static str;

    /// The execution location this module is bound to.
    fn location(&self) -> ExecutionLocation;

    /// Coarse support flags for a codec, regardless of configuration
    /// detail.
    fn supports_codec(&self, codec: CodecType) -> EncodeSupportSet;

    /// Support flags for this exact configuration.
    ///
    /// The default judges only structural encodability and the codec.
    /// Modules with per-configuration quirks (scalability combinations,
    /// profile limits) override this.
    fn supports(&self, config: &EncoderConfig) -> EncodeSupportSet {
        if !config.sane() {
            return EncodeSupportSet::empty();
        }
        self.supports_codec(config.codec)
    }

    /// Materialize an encoder for the configuration, bound to the given
    /// execution queue.
    ///
    /// May suspend, e.g. on a remote process handshake. A failure here is
    /// internal to the fallback chain; the broker logs it and advances to
    /// the next candidate.
    async fn create_encoder(
        &self,
        config: &EncoderConfig,
        queue: &TaskQueue,
    ) -> EncoderResult<Box<dyn VideoEncoder>>;
}
