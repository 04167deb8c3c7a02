//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::SequenceService;
use crate::config::Settings;
use crate::infrastructure::traits::{InputSource, RealInputSource};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    pub sequence_service: SequenceService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealInputSource))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, input: Arc<dyn InputSource>) -> Self {
        let settings = Arc::new(settings);
        let sequence_service = SequenceService::new(input, Arc::clone(&settings));

        Self {
            settings,
            sequence_service,
        }
    }
}
