use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Port for the HTTP API server to listen on.
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Interface address to bind (0.0.0.0 listens on all interfaces).
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // --- General App Args ---
    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

impl Args {
    /// Host and port pair handed to the listener; the host may be an IPv4/IPv6
    /// literal or a name to resolve.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
