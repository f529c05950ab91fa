//! Runtime context and module registry construction.

use std::sync::Arc;

use tracing::debug;

use mediabroker_types::{ExecutionLocation, ScalabilityMode};

use crate::EncoderModule;

/// Platform-level ceiling for scalable encoding.
///
/// Scalability modes beyond this ceiling are rejected statically, before
/// any backend module is consulted.
#[derive(Debug, Clone, Copy)]
pub struct PlatformBaseline {
    max_temporal_layers: u8,
}

impl PlatformBaseline {
    /// Baseline with an explicit temporal-layer ceiling.
    pub fn new(max_temporal_layers: u8) -> Self {
        Self { max_temporal_layers }
    }

    /// Whether the platform can encode the given scalability mode.
    pub fn supports_scalability(&self, mode: ScalabilityMode) -> bool {
        mode.temporal_layers() <= self.max_temporal_layers
    }
}

impl Default for PlatformBaseline {
    /// Two temporal layers; three-layer modes need OS support that is not
    /// assumed present.
    fn default() -> Self {
        Self::new(2)
    }
}

/// Instantiates the backend module for one execution location.
///
/// Providers are consulted once, at broker construction.
pub trait ModuleProvider: Send + Sync {
    /// The execution location the produced module is bound to.
    fn location(&self) -> ExecutionLocation;

    /// Whether the location is usable in the current environment.
    ///
    /// Sandboxing restrictions or missing vendor support make a location
    /// structurally unavailable; that is a normal configuration outcome,
    /// not an error.
    fn available(&self) -> bool {
        true
    }

    /// Build the module. Only called when [`ModuleProvider::available`]
    /// returned true.
    fn instantiate(&self) -> Arc<dyn EncoderModule>;
}

/// Describes the runtime environment a broker is constructed in: which
/// execution locations have backend modules, and the platform baseline.
#[derive(Default)]
pub struct RuntimeContext {
    platform: PlatformBaseline,
    providers: Vec<Box<dyn ModuleProvider>>,
}

impl RuntimeContext {
    /// Context with the given platform baseline and no providers.
    pub fn new(platform: PlatformBaseline) -> Self {
        Self {
            platform,
            providers: Vec::new(),
        }
    }

    /// Registers the provider for its execution location, replacing any
    /// provider previously registered for the same location.
    pub fn register(&mut self, provider: Box<dyn ModuleProvider>) -> &mut Self {
        self.providers.retain(|p| p.location() != provider.location());
        self.providers.push(provider);
        self
    }

    /// The platform baseline for static capability checks.
    pub fn platform(&self) -> PlatformBaseline {
        self.platform
    }

    fn provider_for(&self, location: ExecutionLocation) -> Option<&dyn ModuleProvider> {
        self.providers
            .iter()
            .find(|p| p.location() == location)
            .map(|p| p.as_ref())
    }
}

/// Ordered, immutable collection of backend modules.
///
/// Built once per broker; the ordering follows
/// [`ExecutionLocation::PRIORITY`] and never changes afterwards, so reads
/// need no synchronization.
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn EncoderModule>>,
}

impl ModuleRegistry {
    /// Instantiates one module per available execution location, in
    /// priority order. Locations without a usable provider are skipped
    /// silently.
    pub fn from_context(context: &RuntimeContext) -> Self {
        let mut modules: Vec<Arc<dyn EncoderModule>> = Vec::new();

        for location in ExecutionLocation::PRIORITY {
            let Some(provider) = context.provider_for(location) else {
                continue;
            };

            if !provider.available() {
                debug!(
                    location = location.name(),
                    "execution location unavailable, skipping"
                );
                continue;
            }

            let module = provider.instantiate();
            debug!(
                module = module.name(),
                location = location.name(),
                "registered encoder module"
            );
            modules.push(module);
        }

        Self { modules }
    }

    /// Returns true if no module was registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Iterate the modules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn EncoderModule>> {
        self.modules.iter()
    }
}
