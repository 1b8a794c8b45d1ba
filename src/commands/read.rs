use crate::commands::executable::Executable;
use crate::response::Response;
use crate::store::Store;

/// Get the value of `key`. If the key does not exist the `NULL` sentinel is
/// returned instead.
#[derive(Debug, PartialEq)]
pub struct Read {
    pub key: String,
}

impl Executable for Read {
    fn exec(self, store: &Store) -> Response {
        match store.get(&self.key) {
            Some(value) => Response::Value(value),
            None => Response::Null,
        }
    }
}
