use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use surgical_log_stats::{run, AnalysisConfig, Result};

/// Cost statistics and plots for a surgical case log
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
struct Cli {
    /// JSON config file; fields it omits keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Case log to analyse (CSV or Parquet)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Procedure codes to keep, comma separated
    #[arg(long, value_delimiter = ',')]
    procs: Option<Vec<String>>,

    /// Keep only groups with strictly more cases than this
    #[arg(long)]
    min_vol: Option<usize>,

    /// Directory for the statistics file and plots
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write statistics only
    #[arg(long)]
    no_plots: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line values applied on top.
    fn resolve(self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };
        if let Some(file) = self.file {
            config.file = file;
        }
        if let Some(procs) = self.procs {
            config.procs = procs
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
        }
        if let Some(min_vol) = self.min_vol {
            config.min_vol = min_vol;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if self.no_plots {
            config.render_plots = false;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Cli::parse().resolve().and_then(|config| run(&config));
    match result {
        Ok(report) => {
            info!(
                "Done: {} cases, {} groups, {} plots",
                report.rows,
                report.groups.len(),
                report.plots.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "surgical-log-stats",
            "--file",
            "cases.csv",
            "--procs",
            "GEN 164, ROBO 040",
            "--min-vol",
            "2",
            "--no-plots",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.file, PathBuf::from("cases.csv"));
        assert_eq!(config.procs, vec!["GEN 164", "ROBO 040"]);
        assert_eq!(config.min_vol, 2);
        assert!(!config.render_plots);
        assert_eq!(config.cost1, "TX_COST");
    }

    #[test]
    fn test_cli_without_flags_uses_defaults() {
        let config = Cli::parse_from(["surgical-log-stats"]).resolve().unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }
}
