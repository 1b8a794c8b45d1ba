use crate::commands::executable::Executable;
use crate::response::Response;
use crate::store::Store;

/// Remove `key`. Answers `FIN` when the key existed and `NULL` when it did
/// not; either way the key is absent afterwards.
#[derive(Debug, PartialEq)]
pub struct Delete {
    pub key: String,
}

impl Executable for Delete {
    fn exec(self, store: &Store) -> Response {
        match store.remove(&self.key) {
            Some(_) => Response::Fin,
            None => Response::Null,
        }
    }
}
