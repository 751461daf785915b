use crate::compiler::{Compiler, DEFAULT_CACHE_CAPACITY};
use crate::context::Context;

/// Configuration shared by the contexts it creates.
#[derive(Debug, Clone)]
pub struct Engine {
    cache_capacity: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Every call recompiles its literal.
    pub fn without_cache(self) -> Self {
        self.with_cache_capacity(0)
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    pub fn new_context(&self) -> Context {
        Context::with_compiler(Compiler::new(self.cache_capacity))
    }
}
