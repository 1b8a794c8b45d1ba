use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The Store holds the key-value pairs shared by every connection. It is
/// designed to be cloned cheaply using reference counting, so each connection
/// task gets its own handle to the same underlying map. Every operation takes
/// the internal lock only for the duration of the single map call, which is
/// all the serialization this workload needs.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<HashMap<String, Bytes>>>,
}

impl Store {
    pub fn new() -> Store {
        Store {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    /// Inserts or overwrites. Last write wins.
    pub fn set(&self, key: String, value: Bytes) {
        self.inner.lock().unwrap().insert(key, value);
    }

    /// Removes `key`, returning the previous value if the key existed.
    pub fn remove(&self, key: &str) -> Option<Bytes> {
        self.inner.lock().unwrap().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
