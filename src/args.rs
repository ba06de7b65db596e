//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Browse and publish posts on a hosted microblog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "termpost", version, about)]
pub struct Args {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the blog API base URL from the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn no_flags_means_no_overrides() {
        let args = Args::parse_from(["termpost"]);
        assert!(args.config.is_none());
        assert!(args.base_url.is_none());
    }

    #[test]
    fn parses_config_and_base_url() {
        let args = Args::parse_from([
            "termpost",
            "--config",
            "/tmp/termpost.toml",
            "--base-url",
            "http://127.0.0.1:9000",
        ]);
        assert_eq!(args.config.as_deref(), Some(Path::new("/tmp/termpost.toml")));
        assert_eq!(args.base_url.as_deref(), Some("http://127.0.0.1:9000"));
    }
}
