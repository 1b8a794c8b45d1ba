use clap::Parser;
use linekv::{server, Error};

#[derive(Parser, Debug)]
struct Args {
    /// The port to listen on
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Usage errors must exit with status 1, not clap's default of 2.
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(1);
    });

    server::run(args.port).await
}
