use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio_util::codec::FramedRead;
use uuid::Uuid;

use crate::codec::CommandCodec;
use crate::commands::Command;
use crate::response::Response;
use crate::Error;

pub struct Connection {
    pub id: Uuid,
    // Bytes read from the socket accumulate in the framed reader's buffer
    // until they form a complete command.
    reader: FramedRead<OwnedReadHalf, CommandCodec>,
    writer: OwnedWriteHalf,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Connection {
        let (read_half, write_half) = stream.into_split();

        Connection {
            id: Uuid::new_v4(),
            reader: FramedRead::new(read_half, CommandCodec),
            writer: write_half,
        }
    }

    /// Reads the next complete command. `Ok(None)` means the peer
    /// disconnected.
    pub async fn read_command(&mut self) -> Result<Option<Command>, Error> {
        self.reader.next().await.transpose()
    }

    pub async fn write_response(&mut self, response: Response) -> Result<(), Error> {
        let bytes: Vec<u8> = response.into();
        self.writer.write_all(&bytes).await?;
        Ok(())
    }
}
