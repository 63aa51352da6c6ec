//! Driver: load → working table → summary → plots, in a fixed order.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::load_case_log;
use crate::pipeline::{build_working_table, group_volumes};
use crate::schema::case_log;
use crate::summary::SummaryTable;
use crate::visualization::{PlotJob, PlotKind};

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Cases in the working table
    pub rows: usize,
    /// Surviving groups with their case counts, first-appearance order
    pub groups: Vec<(String, usize)>,
    pub summary: SummaryTable,
    pub stats_path: PathBuf,
    /// Written plots, in call order. Empty when rendering is disabled.
    pub plots: Vec<PathBuf>,
}

/// The seven plots of a run, indexed from 1 in call order.
pub fn plan_plots(config: &AnalysisConfig) -> Vec<PlotJob> {
    let group = &config.group_param;
    let kinds = vec![
        PlotKind::BoxWithDistribution {
            value: config.cost1.clone(),
        },
        PlotKind::BoxWithDistribution {
            value: config.cost2.clone(),
        },
        PlotKind::Violin {
            value: config.cost1.clone(),
            split: group.clone(),
        },
        PlotKind::Violin {
            value: config.cost2.clone(),
            split: group.clone(),
        },
        PlotKind::Scatter {
            x: config.param2.clone(),
            y: config.param1.clone(),
            hue: group.clone(),
        },
        PlotKind::Scatter {
            x: config.param2.clone(),
            y: config.cost2.clone(),
            hue: group.clone(),
        },
        PlotKind::Scatter {
            x: config.param1.clone(),
            y: config.cost2.clone(),
            hue: group.clone(),
        },
    ];

    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| PlotJob { index: i + 1, kind })
        .collect()
}

/// Run the whole analysis for `config`.
pub fn run(config: &AnalysisConfig) -> Result<RunReport> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir)?;

    let raw = load_case_log(&config.file, &case_log::PROJECTED)?;
    let working = build_working_table(&raw, config)?;
    let groups = group_volumes(&working, &config.group_param)?;
    info!(
        "Working table: {} cases across {} {} groups",
        working.height(),
        groups.len(),
        config.group_param
    );

    let summary = SummaryTable::from_working_table(&working, &config.cost1, &config.cost2)?;
    let stats_path = config.stats_path();
    summary.write_csv(&stats_path)?;
    info!("\n{}", summary.render_table(Some("Cost Summary")));

    let mut plots = Vec::new();
    if config.render_plots {
        let size = (config.plot_width, config.plot_height);
        for job in plan_plots(config) {
            let path = config.output_dir.join(job.file_name());
            job.render(&working, &path, size)?;
            info!("Saved plot {}", path.display());
            plots.push(path);
        }
    } else {
        warn!("Plot rendering disabled; only {} was written", stats_path.display());
    }

    Ok(RunReport {
        rows: working.height(),
        groups,
        summary,
        stats_path,
        plots,
    })
}
