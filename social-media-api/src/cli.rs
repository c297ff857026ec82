use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Socket address the API should bind to. Use port 0 for an ephemeral port.
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub listen: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_defaults_to_localhost() {
        let cli = Cli::parse_from(["social-media-api"]);
        assert_eq!(cli.listen, "127.0.0.1:8000".parse().unwrap());
    }

    #[test]
    fn listen_accepts_ephemeral_port() {
        let cli = Cli::parse_from(["social-media-api", "--listen", "0.0.0.0:0"]);
        assert_eq!(cli.listen.port(), 0);
    }
}
