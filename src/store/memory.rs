//! In-memory key/value store (tests and the demo binary)

use std::collections::HashMap;

use crate::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    F64(f64),
    I64(i64),
}

/// HashMap-backed store with the same per-key semantics as the real one
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(Value::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::Str(value.to_string()));
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(Value::F64(v)) => Some(*v),
            Some(Value::I64(v)) => Some(*v as f64),
            _ => None,
        }
    }

    fn set_f64(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), Value::F64(value));
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(Value::I64(v)) => Some(*v),
            _ => None,
        }
    }

    fn set_i64(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), Value::I64(value));
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_slots() {
        let mut store = MemoryStore::new();
        store.set_string("a", "blob");
        store.set_f64("b", 1.5);
        store.set_i64("c", -3);

        assert_eq!(store.get_string("a").as_deref(), Some("blob"));
        assert_eq!(store.get_f64("b"), Some(1.5));
        assert_eq!(store.get_i64("c"), Some(-3));
        // Type mismatch reads as absent
        assert_eq!(store.get_string("b"), None);
        assert_eq!(store.get_i64("missing"), None);
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new();
        store.set_string("a", "blob");
        store.remove("a");
        assert!(!store.contains("a"));
        assert!(store.is_empty());
    }
}
