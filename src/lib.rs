pub mod agent;
pub mod cli;
pub mod error;
pub mod history;
pub mod models;
pub mod responder;
pub mod server;

use agent::Agent;
use cli::Args;
use history::initialize_history_store;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Host: {}", args.host);
    info!("Server Port: {}", args.port);
    info!("Debug Logging: {}", args.debug);
    info!("-------------------------");

    let agent = Agent::new(initialize_history_store());
    info!("Starting Jarvis API server on http://localhost:{}", args.port);
    let server = Server::new(args, agent);
    server.run().await?;

    Ok(())
}
