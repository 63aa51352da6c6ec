//! Filter/aggregate pipeline producing the working table.
//!
//! Stages run in a fixed order, each returning a new `DataFrame`:
//! procedure filter, column projection, per-case cost sum, volume filter.

use std::collections::{BTreeSet, HashMap};

use log::{debug, info};
use polars::prelude::*;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::schema::case_log;

/// Run every stage on a loaded case log.
///
/// Fails with [`AnalysisError::EmptyResult`] when the procedure filter or the
/// volume filter leaves no rows.
pub fn build_working_table(df: &DataFrame, config: &AnalysisConfig) -> Result<DataFrame> {
    let filtered = filter_procedures(df, &config.procs)?;
    info!(
        "Procedure filter kept {} of {} rows",
        filtered.height(),
        df.height()
    );
    if filtered.height() == 0 {
        return Err(AnalysisError::EmptyResult(format!(
            "procedure filter (procs: {})",
            config.procs.join(", ")
        )));
    }

    let projected = project_case_columns(&filtered)?;
    let cases = sum_costs_per_case(&projected)?;
    info!(
        "Collapsed {} cost line items into {} cases",
        projected.height(),
        cases.height()
    );

    let working = filter_low_volume(&cases, &config.group_param, config.min_vol)?;
    info!(
        "Volume filter (> {} cases per {}) kept {} of {} cases",
        config.min_vol,
        config.group_param,
        working.height(),
        cases.height()
    );
    if working.height() == 0 {
        return Err(AnalysisError::EmptyResult(format!(
            "volume filter (min_vol: {})",
            config.min_vol
        )));
    }

    for (group, count) in group_volumes(&working, &config.group_param)? {
        debug!("{} {}: {} cases", config.group_param, group, count);
    }

    Ok(working)
}

/// Keep rows whose procedure code is in `procs`.
pub fn filter_procedures(df: &DataFrame, procs: &[String]) -> Result<DataFrame> {
    let allowed: BTreeSet<&str> = procs.iter().map(|p| p.trim()).collect();
    let predicate = allowed.iter().fold(lit(false), |acc, code| {
        acc.or(col(case_log::PROC_ID).eq(lit(*code)))
    });

    Ok(df.clone().lazy().filter(predicate).collect()?)
}

/// Narrow to the identifying, cost, age and time columns.
pub fn project_case_columns(df: &DataFrame) -> Result<DataFrame> {
    Ok(df
        .clone()
        .lazy()
        .select(projected_exprs())
        .collect()?)
}

/// Collapse cost line items into one row per case.
///
/// Rows are grouped by the composite case key and the cost columns summed;
/// rows with a null in any key column are dropped. Output rows follow the
/// first appearance of each key.
pub fn sum_costs_per_case(df: &DataFrame) -> Result<DataFrame> {
    let keys_present = case_log::CASE_KEY
        .iter()
        .fold(lit(true), |acc, k| acc.and(col(*k).is_not_null()));
    let keys: Vec<Expr> = case_log::CASE_KEY.iter().map(|k| col(*k)).collect();
    let sums: Vec<Expr> = case_log::COSTS.iter().map(|c| col(*c).sum()).collect();

    Ok(df
        .clone()
        .lazy()
        .filter(keys_present)
        .group_by_stable(keys)
        .agg(sums)
        .select(projected_exprs())
        .collect()?)
}

/// Drop every row whose `group_col` group has `min_vol` rows or fewer.
pub fn filter_low_volume(df: &DataFrame, group_col: &str, min_vol: usize) -> Result<DataFrame> {
    if df.column(group_col).is_err() {
        return Err(AnalysisError::MissingColumn(group_col.to_string()));
    }

    Ok(df
        .clone()
        .lazy()
        .filter(len().over([col(group_col)]).gt(lit(min_vol as u64)))
        .collect()?)
}

/// Row count per group in first-appearance order.
pub fn group_volumes(df: &DataFrame, group_col: &str) -> Result<Vec<(String, usize)>> {
    let labels = group_labels(df, group_col)?;

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels.into_iter().flatten() {
        let n = counts.entry(label.clone()).or_insert(0);
        if *n == 0 {
            order.push(label);
        }
        *n += 1;
    }

    Ok(order
        .into_iter()
        .map(|g| {
            let n = counts[&g];
            (g, n)
        })
        .collect())
}

/// Values of `column` rendered as text, one per row. Nulls stay `None`.
pub fn group_labels(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let values = df
        .column(column)
        .map_err(|_| AnalysisError::MissingColumn(column.to_string()))?
        .cast(&DataType::String)?;
    Ok(values
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

fn projected_exprs() -> Vec<Expr> {
    case_log::PROJECTED.iter().map(|c| col(*c)).collect()
}
