/*!
 * Process Manager Builder
 * Builder pattern for ProcessManager construction
 */

use super::ProcessManager;
use crate::monitoring::{LogObserver, ProcessObserver};
use crate::process::{ProcessFactory, RandomProcessFactory};
use crate::scene::SceneObject;
use crate::stage::StageConfig;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Builder for ProcessManager
pub struct ProcessManagerBuilder {
    config: StageConfig,
    factory: Option<Box<dyn ProcessFactory>>,
    observer: Option<Arc<dyn ProcessObserver>>,
    seed: Option<u64>,
}

impl ProcessManagerBuilder {
    /// Create a new ProcessManager builder
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            factory: None,
            observer: None,
            seed: None,
        }
    }

    /// Replace the config-driven random factory
    pub fn with_factory(mut self, factory: impl ProcessFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Receive admission and termination notifications
    pub fn with_observer(mut self, observer: Arc<dyn ProcessObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Fix the generator seed; overrides `rng_seed` from the config
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the ProcessManager and lay out its slots, CPUs and widgets
    pub fn build(self) -> ProcessManager {
        let mut features = Vec::new();

        let seed = self.seed.or(self.config.rng_seed);
        let rng = match seed {
            Some(seed) => {
                features.push(format!("seed={seed}"));
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let factory = match self.factory {
            Some(factory) => {
                features.push("custom-factory".to_string());
                factory
            }
            None => Box::new(RandomProcessFactory::new(&self.config)),
        };

        let observer = match self.observer {
            Some(observer) => {
                features.push("observer".to_string());
                observer
            }
            None => Arc::new(LogObserver),
        };

        if features.is_empty() {
            info!("Process manager initialized (defaults)");
        } else {
            info!("Process manager initialized with: {}", features.join(", "));
        }

        let mut manager = ProcessManager::from_parts(self.config, factory, observer, rng);
        manager.setup();
        manager
    }
}
