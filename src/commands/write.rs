use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::response::Response;
use crate::store::Store;

/// Insert or overwrite `key` with `value`. Always answers `FIN`.
#[derive(Debug, PartialEq)]
pub struct Write {
    pub key: String,
    pub value: Bytes,
}

impl Write {
    /// Builds a `Write` from the raw value line. Position 0 of the line holds
    /// the `:` delimiter and is dropped unconditionally, whatever byte it
    /// actually is; an empty line yields an empty value.
    pub(crate) fn new(key: String, value_line: Bytes) -> Write {
        let value = if value_line.is_empty() {
            value_line
        } else {
            value_line.slice(1..)
        };

        Write { key, value }
    }
}

impl Executable for Write {
    fn exec(self, store: &Store) -> Response {
        store.set(self.key, self.value);
        Response::Fin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn stores_value() {
        let cmd = Command::from_lines(
            Bytes::from("WRITE"),
            vec![Bytes::from("foo"), Bytes::from(":bar")],
        );

        let store = Store::new();
        let result = cmd.exec(&store);

        assert_eq!(result, Some(Response::Fin));
        assert_eq!(store.get("foo"), Some(Bytes::from("bar")));
    }

    #[test]
    fn delimiter_is_stripped_whatever_it_is() {
        let write = Write::new(String::from("foo"), Bytes::from("xbar"));
        assert_eq!(write.value, Bytes::from("bar"));
    }

    #[test]
    fn empty_value_line_does_not_panic() {
        let write = Write::new(String::from("foo"), Bytes::new());
        assert_eq!(write.value, Bytes::new());
    }

    #[test]
    fn bare_delimiter_stores_empty_value() {
        let cmd = Command::from_lines(
            Bytes::from("WRITE"),
            vec![Bytes::from("foo"), Bytes::from(":")],
        );

        let store = Store::new();
        let result = cmd.exec(&store);

        assert_eq!(result, Some(Response::Fin));
        assert_eq!(store.get("foo"), Some(Bytes::new()));
    }

    #[test]
    fn overwrite_last_write_wins() {
        let store = Store::new();

        for value_line in [":first", ":second"] {
            let cmd = Command::from_lines(
                Bytes::from("WRITE"),
                vec![Bytes::from("foo"), Bytes::from(value_line)],
            );
            cmd.exec(&store);
        }

        assert_eq!(store.get("foo"), Some(Bytes::from("second")));
        assert_eq!(store.len(), 1);
    }
}
