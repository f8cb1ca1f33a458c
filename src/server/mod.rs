pub mod api;

use crate::agent::Agent;
use crate::cli::Args;
use std::error::Error;

pub struct Server {
    args: Args,
    agent: Agent,
}

impl Server {
    pub fn new(args: Args, agent: Agent) -> Self {
        Self { args, agent }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let (host, port) = self.args.bind_addr();
        api::start_http_server(host, port, self.agent).await
    }
}
