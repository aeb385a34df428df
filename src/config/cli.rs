use crate::config::SponsorConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-sponsorship")]
#[command(about = "Decides whether a book edition qualifies for scan sponsorship")]
pub struct Cli {
    /// Path to an edition JSON file to qualify
    #[arg(long, value_name = "FILE")]
    pub edition: Option<PathBuf>,

    /// List sponsorship records for an archive username instead of qualifying
    #[arg(long, value_name = "USERNAME", conflicts_with = "edition")]
    pub sponsored_by: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the archive base URL (dedupe registry + donation page)
    #[arg(long)]
    pub ia_base_url: Option<String>,

    /// Override the holdings availability endpoint
    #[arg(long)]
    pub availability_url: Option<String>,

    /// Override the secondhand-price endpoint
    #[arg(long)]
    pub bookseller_url: Option<String>,

    /// Enable verbose output
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Command-line endpoint flags win over the config file.
    pub fn apply_overrides(&self, config: &mut SponsorConfig) {
        if let Some(url) = &self.ia_base_url {
            config.services.ia_base_url = url.clone();
        }
        if let Some(url) = &self.availability_url {
            config.services.availability_url = url.clone();
        }
        if let Some(url) = &self.bookseller_url {
            config.services.bookseller_url = url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_defaults() {
        let cli = Cli::parse_from([
            "book-sponsorship",
            "--ia-base-url",
            "https://staging.archive.org",
        ]);
        let mut config = SponsorConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.services.ia_base_url, "https://staging.archive.org");
        // unset flags leave the config alone
        assert_eq!(
            config.services.availability_url,
            "https://archive.org/services/availability/v2"
        );
    }
}
