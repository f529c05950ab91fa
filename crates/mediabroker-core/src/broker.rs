//! Encoder selection and fallback across backend modules.

use tracing::{debug, info, instrument, warn};

use mediabroker_types::{CodecType, EncodeSupportSet, EncoderConfig, HardwarePreference};

use crate::error::BrokerError;
use crate::queue::TaskQueue;
use crate::registry::{ModuleRegistry, PlatformBaseline, RuntimeContext};
use crate::{BrokerResult, VideoEncoder};

/// Brokers encoder creation across the registered backend modules.
///
/// Modules are tried in registry order until one accepts the
/// configuration and materializes an encoder. A declined probe or a
/// failed creation on one module never aborts the request; the chain
/// advances to the next candidate, and only total exhaustion is surfaced
/// to the caller.
pub struct EncoderBroker {
    registry: ModuleRegistry,
    platform: PlatformBaseline,
}

impl EncoderBroker {
    /// Builds the broker for the given runtime context. The module list
    /// is fixed here and never mutated afterwards.
    pub fn new(context: RuntimeContext) -> Self {
        let registry = ModuleRegistry::from_context(&context);
        info!(modules = registry.len(), "encoder broker initialized");
        Self {
            registry,
            platform: context.platform(),
        }
    }

    /// The registered modules, in fallback order.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Aggregate support for an exact configuration, ORed over all
    /// registered modules.
    ///
    /// Returns the empty set without consulting any module when the
    /// configuration is not structurally encodable or its scalability
    /// mode exceeds the platform baseline.
    pub fn supports(&self, config: &EncoderConfig) -> EncodeSupportSet {
        if !self.eligible(config) {
            return EncodeSupportSet::empty();
        }
        self.registry
            .iter()
            .fold(EncodeSupportSet::empty(), |acc, module| {
                acc | module.supports(config)
            })
    }

    /// Aggregate support for a codec, ORed over all registered modules.
    pub fn supports_codec(&self, codec: CodecType) -> EncodeSupportSet {
        self.registry
            .iter()
            .fold(EncodeSupportSet::empty(), |acc, module| {
                acc | module.supports_codec(codec)
            })
    }

    /// Asynchronously create an encoder for the configuration, bound to
    /// the caller-supplied queue.
    ///
    /// Candidates are attempted strictly one at a time, in registry
    /// order; the chain advances only after the previous candidate fully
    /// resolved. The returned encoder is exclusively owned by the caller.
    #[instrument(name = "create_encoder", skip_all, fields(codec = config.codec.name()))]
    pub async fn create_encoder(
        &self,
        config: &EncoderConfig,
        queue: &TaskQueue,
    ) -> BrokerResult<Box<dyn VideoEncoder>> {
        if !self.eligible(config) {
            debug!(
                scalability = ?config.scalability,
                "configuration rejected before module iteration"
            );
            return Err(BrokerError::NoEncoderAvailable);
        }

        // Fail fast when no module reports the codec at all, instead of
        // probing each module with the full configuration.
        if self.supports_codec(config.codec).is_empty() {
            debug!(codec = config.codec.name(), "codec unsupported by every module");
            return Err(BrokerError::NoEncoderAvailable);
        }

        for module in self.registry.iter() {
            let support = module.supports(config);
            if !acceptable(support, config.hardware_preference) {
                debug!(module = module.name(), "module declined configuration");
                continue;
            }

            match module.create_encoder(config, queue).await {
                Ok(encoder) => {
                    info!(
                        module = module.name(),
                        location = module.location().name(),
                        encoder = encoder.name(),
                        "encoder created"
                    );
                    return Ok(encoder);
                }
                Err(e) => {
                    warn!(
                        module = module.name(),
                        error = %e,
                        "encoder creation failed, trying next module"
                    );
                }
            }
        }

        debug!("all candidate modules exhausted");
        Err(BrokerError::NoEncoderAvailable)
    }

    /// Synchronous entry point: drives the fallback chain to completion
    /// on the calling thread.
    ///
    /// Must not be called from inside the queue's own runtime; use
    /// [`EncoderBroker::create_encoder`] there instead.
    pub fn create_encoder_blocking(
        &self,
        config: &EncoderConfig,
        queue: &TaskQueue,
    ) -> BrokerResult<Box<dyn VideoEncoder>> {
        futures::executor::block_on(self.create_encoder(config, queue))
    }

    fn eligible(&self, config: &EncoderConfig) -> bool {
        config.sane() && self.platform.supports_scalability(config.scalability)
    }
}

/// Whether a module's reported support satisfies the caller's
/// hardware/software constraint.
fn acceptable(support: EncodeSupportSet, preference: HardwarePreference) -> bool {
    match preference {
        HardwarePreference::None => !support.is_empty(),
        HardwarePreference::RequireHardware => support.has_hardware(),
        HardwarePreference::RequireSoftware => support.has_software(),
    }
}
