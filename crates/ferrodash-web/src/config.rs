use std::net::SocketAddr;

use ferrodash_core::{DatasetSource, DatasetSources};

use crate::cli::Cli;
use crate::error::ServerError;

/// Server configuration resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub sources: DatasetSources,
    pub timeout_ms: u64,
    pub strict: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let value = format!("{}:{}", self.bind, self.port);
        value
            .parse()
            .map_err(|source| ServerError::Address { value, source })
    }
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        let defaults = DatasetSources::default();
        let pick = |flag: Option<String>, fallback: DatasetSource| {
            flag.as_deref().map(DatasetSource::parse).unwrap_or(fallback)
        };

        Self {
            bind: cli.bind,
            port: cli.port,
            sources: DatasetSources {
                series: pick(cli.series, defaults.series),
                summary: pick(cli.summary, defaults.summary),
                signals: pick(cli.signals, defaults.signals),
            },
            timeout_ms: cli.timeout_ms,
            strict: cli.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn unset_sources_fall_back_to_upstream() {
        let cli = Cli::try_parse_from(["ferrodash", "--series", "fixtures/series.csv"])
            .expect("parses");
        let config = ServerConfig::from(cli);

        assert_eq!(
            config.sources.series,
            DatasetSource::Path(PathBuf::from("fixtures/series.csv"))
        );
        assert_eq!(config.sources.summary, DatasetSources::default().summary);
        assert_eq!(config.sources.signals, DatasetSources::default().signals);
    }

    #[test]
    fn socket_addr_combines_bind_and_port() {
        let cli = Cli::try_parse_from(["ferrodash", "--bind", "0.0.0.0", "--port", "8050"])
            .expect("parses");
        let addr = ServerConfig::from(cli).socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "0.0.0.0:8050");
    }

    #[test]
    fn invalid_bind_is_reported() {
        let cli = Cli::try_parse_from(["ferrodash", "--bind", "localhost"]).expect("parses");
        let error = ServerConfig::from(cli)
            .socket_addr()
            .expect_err("hostnames are not socket addresses");
        assert_eq!(error.exit_code(), 2);
    }
}
