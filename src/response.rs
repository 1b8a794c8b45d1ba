use bytes::Bytes;

/// One reply line sent back to the client. Every variant serializes to a
/// single newline-terminated line; `NULL` and `INVALID COMMAND` are ordinary
/// in-band replies, not errors.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// A stored value, echoed verbatim.
    Value(Bytes),
    Null,
    Fin,
    Count(usize),
    Invalid,
}

impl From<Response> for Vec<u8> {
    fn from(response: Response) -> Vec<u8> {
        match response {
            Response::Value(data) => {
                let mut out = Vec::with_capacity(data.len() + 1);
                out.extend_from_slice(&data);
                out.push(b'\n');
                out
            }
            Response::Null => b"NULL\n".to_vec(),
            Response::Fin => b"FIN\n".to_vec(),
            Response::Count(count) => format!("{}\n", count).into_bytes(),
            Response::Invalid => b"INVALID COMMAND\n".to_vec(),
        }
    }
}
