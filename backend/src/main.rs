use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use backend::SolverConfig;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

/// Solver relay: accepts one WebSocket request per connection, runs the
/// solver once, streams its stdout back, closes.
#[derive(Parser, Debug)]
#[command(name = "backend")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Solver executable invoked once per request.
    #[arg(long, default_value = "swipl")]
    solver: String,

    /// Rules file handed to the solver with -s.
    #[arg(long, default_value = "chess.pl")]
    rules: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let solver = SolverConfig::new(args.solver, args.rules);

    let listener = TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    info!("solver relay listening on {}", args.listen);

    backend::serve(listener, solver).await.context("server error")?;
    Ok(())
}
