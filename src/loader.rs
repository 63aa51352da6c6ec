use std::fs::File;
use std::path::Path;

use log::info;
use polars::prelude::*;

use crate::error::{AnalysisError, Result};
use crate::schema::case_log;

// ── Data loading ────────────────────────────────────────────────────────────

/// Load the case log and bring it into the typed shape the pipeline expects.
///
/// Text key columns are trimmed, the numeric columns are parsed to Float64.
/// Every column in `required` must be present.
pub fn load_case_log(path: &Path, required: &[&str]) -> Result<DataFrame> {
    let raw = read_table(path)?;
    info!(
        "Loaded {} rows x {} columns from {}",
        raw.height(),
        raw.width(),
        path.display()
    );

    require_columns(&raw, required)?;
    if raw.height() == 0 {
        return Err(AnalysisError::EmptyResult(format!(
            "loading {}",
            path.display()
        )));
    }

    let df = trim_text_columns(raw, &case_log::TEXT)?;
    parse_float_columns(df, &case_log::NUMERIC)
}

/// Read a CSV or Parquet file, chosen by extension.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let is_parquet = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));

    if is_parquet {
        let file = File::open(path)?;
        let df = ParquetReader::new(file).finish()?;
        Ok(df)
    } else {
        read_csv_as_strings(path)
    }
}

/// Read a CSV file with all columns as String dtype.
/// Trims whitespace from column names.
pub fn read_csv_as_strings(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(AnalysisError::MissingColumn(col_name.to_string()));
        }
    }
    Ok(())
}

/// Bring key columns to String and strip surrounding whitespace.
///
/// Parquet files may store ids as integers; casting keeps the case key
/// identical to what the CSV path produces.
fn trim_text_columns(df: DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let exprs: Vec<Expr> = columns
        .iter()
        .filter(|c| df.column(c).is_ok())
        .map(|c| {
            col(*c)
                .cast(DataType::String)
                .str()
                .strip_chars(lit(" \t\r\n"))
        })
        .collect();

    if exprs.is_empty() {
        return Ok(df);
    }
    Ok(df.lazy().with_columns(exprs).collect()?)
}

/// Parse columns to Float64.
///
/// Text that does not parse becomes null, and so do NaN tokens (`NaN`,
/// `nan`): a missing measurement must not count as a value.
pub fn parse_float_columns(df: DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let exprs: Vec<Expr> = columns
        .iter()
        .map(|c| {
            let parsed = match df.column(c).map(|s| s.dtype()) {
                Ok(DataType::String) => col(*c)
                    .str()
                    .strip_chars(lit(" \t\r\n"))
                    .cast(DataType::Float64),
                _ => col(*c).cast(DataType::Float64),
            };
            when(parsed.clone().is_nan())
                .then(lit(NULL).cast(DataType::Float64))
                .otherwise(parsed)
                .alias(*c)
        })
        .collect();

    Ok(df.lazy().with_columns(exprs).collect()?)
}
