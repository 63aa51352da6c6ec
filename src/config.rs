use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AnalysisError, Result};
use crate::schema::case_log;

// ── Config ──────────────────────────────────────────────────────────────────

/// Configuration for one analysis run.
///
/// Defaults are the parameters of the standard cost study. Every field is
/// optional in a JSON config file; missing fields keep the default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Source case log (CSV, or Parquet when the extension is `.parquet`)
    pub file: PathBuf,
    /// Procedure codes kept by the procedure filter
    pub procs: Vec<String>,
    /// A group survives only with strictly more than this many cases
    pub min_vol: usize,
    /// Column used for volume filtering, violin splits and scatter colours
    pub group_param: String,
    /// First cost column analysed
    pub cost1: String,
    /// Second cost column analysed
    pub cost2: String,
    /// Numeric column plotted on scatter y (first) and x (third) axes
    pub param1: String,
    /// Numeric column plotted on the scatter x axis
    pub param2: String,
    /// Directory receiving the statistics file and the plots
    pub output_dir: PathBuf,
    /// File name of the statistics table inside `output_dir`
    pub stats_file: String,
    pub plot_width: u32,
    pub plot_height: u32,
    /// Skip PNG rendering (statistics are still written)
    pub render_plots: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("surg_full.csv"),
            procs: ["ROBO 040", "GEN 164", "GEN 084", "PEDS 218", "PEDS 282"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            min_vol: 5,
            group_param: case_log::CASE_SURGEON.to_string(),
            cost1: case_log::TX_COST.to_string(),
            cost2: case_log::SUP_COST.to_string(),
            param1: case_log::TIME_REQUIRED.to_string(),
            param2: case_log::PAT_AGE.to_string(),
            output_dir: PathBuf::from("."),
            stats_file: "Surg_Stats.csv".to_string(),
            plot_width: 1200,
            plot_height: 800,
            render_plots: true,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a JSON file. Fields absent from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.procs.is_empty() {
            return Err(AnalysisError::Config(
                "procs must name at least one procedure code".to_string(),
            ));
        }
        if self.cost1 == self.cost2 {
            return Err(AnalysisError::Config(format!(
                "cost1 and cost2 must differ (both are '{}')",
                self.cost1
            )));
        }
        if !case_log::CASE_KEY.contains(&self.group_param.as_str()) {
            return Err(AnalysisError::Config(format!(
                "group_param '{}' must be one of the case key columns {:?}",
                self.group_param,
                case_log::CASE_KEY
            )));
        }
        for (field, column) in self.analysed_columns() {
            if !case_log::PROJECTED.contains(&column) {
                return Err(AnalysisError::Config(format!(
                    "{field} '{column}' is not one of the projected columns {:?}",
                    case_log::PROJECTED
                )));
            }
        }
        if self.stats_file.trim().is_empty() {
            return Err(AnalysisError::Config("stats_file is empty".to_string()));
        }
        if self.plot_width == 0 || self.plot_height == 0 {
            return Err(AnalysisError::Config(format!(
                "plot size must be non-zero, got {}x{}",
                self.plot_width, self.plot_height
            )));
        }
        Ok(())
    }

    /// Columns plotted or summarised, with the config field naming each.
    pub fn analysed_columns(&self) -> [(&'static str, &str); 4] {
        [
            ("cost1", self.cost1.as_str()),
            ("cost2", self.cost2.as_str()),
            ("param1", self.param1.as_str()),
            ("param2", self.param2.as_str()),
        ]
    }

    pub fn stats_path(&self) -> PathBuf {
        self.output_dir.join(&self.stats_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_study_parameters() {
        let config = AnalysisConfig::default();
        assert_eq!(config.file, PathBuf::from("surg_full.csv"));
        assert_eq!(config.procs.len(), 5);
        assert!(config.procs.contains(&"PEDS 282".to_string()));
        assert_eq!(config.min_vol, 5);
        assert_eq!(config.group_param, "CASE_SURGEON");
        assert_eq!((config.cost1.as_str(), config.cost2.as_str()), ("TX_COST", "SUP_COST"));
        assert_eq!(
            (config.param1.as_str(), config.param2.as_str()),
            ("TIME_REQUIRED", "PAT_AGE")
        );
        assert_eq!(config.stats_path(), PathBuf::from("./Surg_Stats.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "min_vol": 2, "procs": ["GEN 164"] }}"#).unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.min_vol, 2);
        assert_eq!(config.procs, vec!["GEN 164".to_string()]);
        assert_eq!(config.cost1, "TX_COST");
    }

    #[test]
    fn test_unknown_json_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "min_volume": 2 }}"#).unwrap();

        let result = AnalysisConfig::from_json_file(file.path());
        assert!(matches!(result, Err(AnalysisError::Json(_))));
    }

    #[test]
    fn test_validate_rejects_empty_procs() {
        let config = AnalysisConfig {
            procs: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_unprojected_group() {
        let config = AnalysisConfig {
            group_param: "ROOM".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));

        let by_procedure = AnalysisConfig {
            group_param: case_log::PROC_ID.to_string(),
            ..Default::default()
        };
        assert!(by_procedure.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_cost_column() {
        let config = AnalysisConfig {
            cost2: "ANES_COST".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cost2"));
    }
}
