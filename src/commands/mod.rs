pub mod count;
pub mod delete;
pub mod executable;
pub mod read;
pub mod unknown;
pub mod write;

use bytes::Bytes;
use std::str;
use strum_macros::EnumString;

use crate::commands::executable::Executable;
use crate::response::Response;
use crate::store::Store;

use count::Count;
use delete::Delete;
use read::Read;
use unknown::Unknown;
use write::Write;

/// The recognized protocol verbs. Matching is exact and case sensitive, so
/// `read` parses to no verb at all and becomes an unknown command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verb {
    Read,
    Write,
    Count,
    Delete,
    End,
}

impl Verb {
    pub(crate) fn from_line(line: &[u8]) -> Option<Verb> {
        str::from_utf8(line).ok().and_then(|s| s.parse().ok())
    }

    /// Number of argument lines that follow the verb line on the wire.
    pub(crate) fn arity(self) -> usize {
        match self {
            Verb::Read | Verb::Delete => 1,
            Verb::Write => 2,
            Verb::Count | Verb::End => 0,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Read(Read),
    Write(Write),
    Count(Count),
    Delete(Delete),
    Unknown(Unknown),
    /// Terminates the connection. Carries no arguments and gets no response.
    End,
}

impl Command {
    /// Assembles a command from its verb line and the argument lines that
    /// followed it. The codec guarantees `args` matches the verb's arity;
    /// assembly itself never fails.
    pub(crate) fn from_lines(verb_line: Bytes, args: Vec<Bytes>) -> Command {
        let mut args = args.into_iter();

        match Verb::from_line(&verb_line) {
            Some(Verb::Read) => Command::Read(Read {
                key: line_to_string(args.next().unwrap_or_default()),
            }),
            Some(Verb::Write) => {
                let key = line_to_string(args.next().unwrap_or_default());
                Command::Write(Write::new(key, args.next().unwrap_or_default()))
            }
            Some(Verb::Count) => Command::Count(Count),
            Some(Verb::Delete) => Command::Delete(Delete {
                key: line_to_string(args.next().unwrap_or_default()),
            }),
            Some(Verb::End) => Command::End,
            None => Command::Unknown(Unknown {
                verb: line_to_string(verb_line),
            }),
        }
    }

    /// Runs the command against the store. `None` means the connection must
    /// close without sending a reply; everything else answers in-band.
    pub fn exec(self, store: &Store) -> Option<Response> {
        match self {
            Command::Read(cmd) => Some(cmd.exec(store)),
            Command::Write(cmd) => Some(cmd.exec(store)),
            Command::Count(cmd) => Some(cmd.exec(store)),
            Command::Delete(cmd) => Some(cmd.exec(store)),
            Command::Unknown(cmd) => Some(cmd.exec(store)),
            Command::End => None,
        }
    }
}

fn line_to_string(line: Bytes) -> String {
    String::from_utf8_lossy(&line).into_owned()
}
