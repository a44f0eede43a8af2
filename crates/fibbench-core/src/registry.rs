//! Workload factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::BenchError;
use crate::workload::{ForeignWorkload, NativeWorkload, Workload};

/// Factory trait for looking up workloads by name.
pub trait WorkloadFactory: Send + Sync {
    /// Get or create a workload by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Workload>, BenchError>;

    /// List the canonical workload names, in benchmark order.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Workload>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_workload(name: &str) -> Result<Arc<dyn Workload>, BenchError> {
        match name {
            "ffi" | "foreign" | "c" => Ok(Arc::new(ForeignWorkload::new())),
            "rust" | "native" => Ok(Arc::new(NativeWorkload::new())),
            _ => Err(BenchError::Config(format!("unknown workload: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkloadFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Workload>, BenchError> {
        if let Some(workload) = self.cache.read().get(name) {
            return Ok(Arc::clone(workload));
        }

        let workload = Self::create_workload(name)?;
        tracing::debug!(name, workload = workload.name(), "created workload");
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&workload));
        Ok(workload)
    }

    fn available(&self) -> Vec<&str> {
        vec!["ffi", "rust"]
    }
}
