use crate::commands::executable::Executable;
use crate::response::Response;
use crate::store::Store;

/// Report the number of entries currently stored.
#[derive(Debug, PartialEq)]
pub struct Count;

impl Executable for Count {
    fn exec(self, store: &Store) -> Response {
        Response::Count(store.len())
    }
}
