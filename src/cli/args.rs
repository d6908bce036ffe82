use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments for the ecobloom server
#[derive(Parser, Debug, Default)]
#[clap(
    name = "ecobloom",
    version,
    about = "Plant care tracker: catalog, garden and twice-daily watering"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Path to the plant document
    #[clap(long, value_parser)]
    pub data_file: Option<PathBuf>,

    /// Interface to listen on
    #[clap(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[clap(short, long)]
    pub port: Option<u16>,

    /// Enable debug logging
    #[clap(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Overlays the flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.debug {
            config.debug = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["ecobloom", "--port", "8081", "--debug", "--data-file", "g.json"]);
        let mut config = Config::default();

        cli.apply_to(&mut config);

        assert_eq!(config.port, 8081);
        assert!(config.debug);
        assert_eq!(config.data_file, PathBuf::from("g.json"));
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let cli = Cli::parse_from(["ecobloom"]);
        let mut config = Config {
            port: 9000,
            debug: true,
            ..Config::default()
        };

        cli.apply_to(&mut config);

        assert_eq!(config.port, 9000);
        assert!(config.debug);
    }
}
