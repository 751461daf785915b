use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::CompiledPattern;

/// Bounded literal → compiled pattern map with first-in first-out eviction.
#[derive(Debug)]
pub struct PatternCache {
    capacity: usize,
    entries: HashMap<String, Arc<CompiledPattern>>,
    order: VecDeque<String>,
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, literal: &str) -> Option<Arc<CompiledPattern>> {
        self.entries.get(literal).cloned()
    }

    pub fn insert(&mut self, literal: &str, compiled: Arc<CompiledPattern>) {
        if self.entries.contains_key(literal) {
            return;
        }
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            tracing::debug!(literal = %oldest, "evicted compiled pattern");
        }
        self.order.push_back(literal.to_string());
        self.entries.insert(literal.to_string(), compiled);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
