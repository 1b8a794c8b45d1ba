use std::net::SocketAddr;
use tokio::net::{TcpSocket, TcpStream};
use tracing::{debug, error, info, instrument};

use crate::connection::Connection;
use crate::store::Store;
use crate::Error;

/// Transport-layer queue of pending, not-yet-accepted connections. Arrivals
/// beyond this are refused by the kernel, not by the application.
const LISTEN_BACKLOG: u32 = 64;

/// Binds the listener and serves connections until a socket-level failure.
/// Bind, listen, and accept errors all propagate out and kill the process;
/// per-connection errors only kill that connection's task.
pub async fn run(port: u16) -> Result<(), Error> {
    let _ = tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket.bind(SocketAddr::from(([0, 0, 0, 0], port)))?;
    let listener = socket.listen(LISTEN_BACKLOG)?;

    let store = Store::new();

    info!("Key-value server listening on {}", listener.local_addr()?);

    loop {
        let (stream, client_address) = listener.accept().await?;
        let store = store.clone();
        info!("Accepted connection from {:?}", client_address);

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, client_address, store).await {
                error!("Connection error: {}", e);
            }
        });
    }
}

#[instrument(
    name = "connection",
    skip(stream, store),
    fields(connection_id, client_address)
)]
async fn handle_connection(
    stream: TcpStream,
    client_address: SocketAddr,
    store: Store,
) -> Result<(), Error> {
    let mut conn = Connection::new(stream);

    tracing::Span::current()
        .record("connection_id", conn.id.to_string())
        .record("client_address", client_address.to_string());

    while let Some(command) = conn.read_command().await? {
        debug!("Received command from client: {:?}", command);

        match command.exec(&store) {
            Some(response) => {
                debug!("Sending response to client: {:?}", response);
                conn.write_response(response).await?;
            }
            // END: close without a reply, dropping any input still buffered.
            None => break,
        }
    }

    info!("Connection closed");
    Ok(())
}
