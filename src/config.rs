use std::path::PathBuf;

use clap::Parser;

/// Startup options. Every path defaults to the file name the dashboard
/// expects next to its working directory.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Olympics 2024 medal dashboard", long_about = None)]
pub struct Config {
    /// Medal table CSV (TEAM, GOLD, SILVER, BRONZE, TOTAL)
    #[arg(long, default_value = "Olympics 2024 Medals Table.csv")]
    pub medals: PathBuf,

    /// Competition results CSV (Competitions, NOC, Rank, Gold, Silver, Bronze, Total)
    #[arg(long, default_value = "Olympics 2024.csv")]
    pub competitions: PathBuf,

    /// Sidebar logo image
    #[arg(long, default_value = "o_logo.png")]
    pub logo: PathBuf,

    /// Refuse to start when a row's medals don't add up to its total
    #[arg(long)]
    pub strict_totals: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["medal-board"]).unwrap();
        assert_eq!(config.medals, PathBuf::from("Olympics 2024 Medals Table.csv"));
        assert_eq!(config.competitions, PathBuf::from("Olympics 2024.csv"));
        assert_eq!(config.logo, PathBuf::from("o_logo.png"));
        assert!(!config.strict_totals);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "medal-board",
            "--medals",
            "m.csv",
            "--competitions",
            "c.csv",
            "--strict-totals",
        ])
        .unwrap();
        assert_eq!(config.medals, PathBuf::from("m.csv"));
        assert_eq!(config.competitions, PathBuf::from("c.csv"));
        assert!(config.strict_totals);
    }
}
