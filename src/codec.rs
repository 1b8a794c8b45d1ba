use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

use crate::commands::{Command, Verb};
use crate::Error;

/// Decodes the newline-delimited wire format into [`Command`]s.
///
/// A command is one verb line followed by as many argument lines as the
/// verb's arity demands. Nothing is consumed from `src` until every line of
/// the command has arrived, so a command split across several socket reads is
/// reassembled on a later call instead of being dropped.
pub struct CommandCodec;

impl Decoder for CommandCodec {
    type Item = Command;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(verb_end) = find_newline(src, 0) else {
            return Ok(None);
        };

        // Unrecognized verbs have arity 0 and decode to Command::Unknown.
        let arity = Verb::from_line(&src[..verb_end]).map_or(0, Verb::arity);

        let mut end = verb_end;
        for _ in 0..arity {
            match find_newline(src, end + 1) {
                Some(next) => end = next,
                None => return Ok(None),
            }
        }

        // All lines are buffered; now consume them, dropping each '\n'.
        let mut lines = Vec::with_capacity(arity + 1);
        for _ in 0..=arity {
            let Some(line_end) = find_newline(src, 0) else {
                break;
            };
            lines.push(src.split_to(line_end).freeze());
            src.advance(1);
        }

        let mut lines = lines.into_iter();
        let verb_line = lines.next().unwrap_or_default();

        Ok(Some(Command::from_lines(verb_line, lines.collect())))
    }

    // A peer that disconnects mid-command is a normal disconnect: the partial
    // trailing command is discarded rather than reported as an error.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(command) => Ok(Some(command)),
            None => {
                src.clear();
                Ok(None)
            }
        }
    }
}

fn find_newline(src: &BytesMut, from: usize) -> Option<usize> {
    src.get(from..)?
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::read::Read;
    use crate::commands::write::Write;
    use bytes::Bytes;

    fn decode(src: &mut BytesMut) -> Option<Command> {
        CommandCodec.decode(src).unwrap()
    }

    #[test]
    fn partial_verb_line_waits() {
        let mut src = BytesMut::from(&b"REA"[..]);

        assert_eq!(decode(&mut src), None);
        assert_eq!(&src[..], b"REA");
    }

    #[test]
    fn verb_without_its_argument_waits() {
        let mut src = BytesMut::from(&b"READ\n"[..]);

        assert_eq!(decode(&mut src), None);
        // Nothing consumed: the key line may arrive with the next read.
        assert_eq!(&src[..], b"READ\n");
    }

    #[test]
    fn complete_read_command() {
        let mut src = BytesMut::from(&b"READ\nfoo\n"[..]);

        let cmd = decode(&mut src);

        assert_eq!(
            cmd,
            Some(Command::Read(Read {
                key: String::from("foo")
            }))
        );
        assert!(src.is_empty());
    }

    #[test]
    fn write_with_empty_value_line() {
        let mut src = BytesMut::from(&b"WRITE\nfoo\n\n"[..]);

        let cmd = decode(&mut src);

        assert_eq!(
            cmd,
            Some(Command::Write(Write {
                key: String::from("foo"),
                value: Bytes::new()
            }))
        );
    }

    #[test]
    fn many_commands_in_one_chunk_decode_in_order() {
        let mut src = BytesMut::from(&b"WRITE\nfoo\n:bar\nCOUNT\nPING\n"[..]);

        assert_eq!(
            decode(&mut src),
            Some(Command::Write(Write {
                key: String::from("foo"),
                value: Bytes::from("bar")
            }))
        );
        assert!(matches!(decode(&mut src), Some(Command::Count(_))));
        assert!(matches!(decode(&mut src), Some(Command::Unknown(_))));
        assert_eq!(decode(&mut src), None);
    }

    #[test]
    fn split_command_resumes_after_more_bytes_arrive() {
        let mut src = BytesMut::from(&b"WRITE\nfo"[..]);

        assert_eq!(decode(&mut src), None);

        src.extend_from_slice(b"o\n:bar\n");

        assert_eq!(
            decode(&mut src),
            Some(Command::Write(Write {
                key: String::from("foo"),
                value: Bytes::from("bar")
            }))
        );
    }

    #[test]
    fn carriage_returns_are_not_trimmed() {
        let mut src = BytesMut::from(&b"READ\r\nfoo\n"[..]);

        // "READ\r" is not a verb.
        assert!(matches!(decode(&mut src), Some(Command::Unknown(_))));
    }

    #[test]
    fn eof_discards_partial_command() {
        let mut src = BytesMut::from(&b"WRITE\nfoo\n"[..]);

        let cmd = CommandCodec.decode_eof(&mut src).unwrap();

        assert_eq!(cmd, None);
        assert!(src.is_empty());
    }
}
