use crate::commands::executable::Executable;
use crate::response::Response;
use crate::store::Store;

/// Any verb line that matches no known verb. Kept around with its raw text so
/// the connection span can log what the client actually sent.
#[derive(Debug, PartialEq)]
pub struct Unknown {
    pub verb: String,
}

impl Executable for Unknown {
    fn exec(self, _store: &Store) -> Response {
        Response::Invalid
    }
}
