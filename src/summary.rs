//! Descriptive statistics for the two analysed cost columns.

use std::fs::File;
use std::path::Path;

use log::info;
use polars::prelude::*;
use tabled::builder::Builder;

use crate::distribution::{column_values, mean, quantile_sorted, sorted, std_dev};
use crate::error::{AnalysisError, Result};
use crate::schema::stats;

/// Statistics of one numeric column, computed over its non-missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// `None` for empty input.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let data = sorted(values);
        Some(Self {
            count: data.len(),
            mean: mean(&data)?,
            std: std_dev(&data),
            min: *data.first()?,
            q25: quantile_sorted(&data, 0.25)?,
            q50: quantile_sorted(&data, 0.5)?,
            q75: quantile_sorted(&data, 0.75)?,
            max: *data.last()?,
        })
    }

    /// Values in [`stats::ROWS`] order.
    pub fn rows(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            Some(self.mean),
            self.std,
            Some(self.min),
            Some(self.q25),
            Some(self.q50),
            Some(self.q75),
            Some(self.max),
        ]
    }
}

/// Statistics for the two cost columns, in configured order.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub columns: [(String, Describe); 2],
}

impl SummaryTable {
    pub fn from_working_table(df: &DataFrame, cost1: &str, cost2: &str) -> Result<Self> {
        Ok(Self {
            columns: [
                (cost1.to_string(), describe_column(df, cost1)?),
                (cost2.to_string(), describe_column(df, cost2)?),
            ],
        })
    }

    /// One label column followed by one column per cost type.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(3);
        columns.push(Series::new(stats::LABEL.into(), stats::ROWS.to_vec()).into());
        for (name, describe) in &self.columns {
            let values: Vec<Option<f64>> = describe.rows().to_vec();
            columns.push(Series::new(name.as_str().into(), values).into());
        }
        Ok(DataFrame::new(columns)?)
    }

    /// Write the table as CSV, replacing any existing file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut df = self.to_dataframe()?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
        info!("Wrote summary statistics to {}", path.display());
        Ok(())
    }

    /// ASCII rendering for the console.
    pub fn render_table(&self, title: Option<&str>) -> String {
        let mut builder = Builder::default();
        builder.push_record(
            std::iter::once(String::new()).chain(self.columns.iter().map(|(n, _)| n.clone())),
        );
        let rows: Vec<[Option<f64>; 8]> = self.columns.iter().map(|(_, d)| d.rows()).collect();
        for (i, label) in stats::ROWS.iter().enumerate() {
            builder.push_record(
                std::iter::once(label.to_string()).chain(rows.iter().map(|r| format_stat(r[i]))),
            );
        }
        let table = builder.build().to_string();

        match title {
            Some(title) => format!("{}\n{}\n{}", title, "=".repeat(title.len()), table),
            None => table,
        }
    }
}

/// Describe one column of the working table.
///
/// A column without any non-missing value has no statistics and is an
/// [`AnalysisError::EmptyResult`].
pub fn describe_column(df: &DataFrame, column: &str) -> Result<Describe> {
    let values = column_values(df, column)?;
    Describe::from_values(&values)
        .ok_or_else(|| AnalysisError::EmptyResult(format!("statistics for {column}")))
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "NaN".to_string(),
    }
}
