use std::io::Cursor;
use std::path::PathBuf;

use polars::prelude::*;

use crate::error::ReportError;
use crate::schema::production;

/// Where the production sheet lives. Two deployments were observed in the
/// wild, one reading a shared remote workbook and one reading a local export,
/// so the source is configuration rather than a literal.
#[derive(Debug, Clone)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Url(source.to_string())
        } else {
            Self::Path(PathBuf::from(source))
        }
    }
}

/// Load the production sheet and coerce the seven required columns to their
/// working dtypes.
///
/// Cells that fail to parse become nulls; downstream they are excluded from
/// option lists and from aggregate denominators, but their rows are kept.
pub fn load_production(source: &DataSource) -> Result<DataFrame, ReportError> {
    let raw = read_csv_as_strings(source)?;
    require_columns(&raw, &production::ALL)?;

    let df = raw
        .lazy()
        .with_columns([
            parse_float(production::OIL_M3_PER_DAY),
            parse_float(production::OIL_MT_PER_DAY),
            parse_float(production::WATER_CONTENT_PCT),
            parse_int(production::YEAR),
            parse_int(production::MONTH),
        ])
        .collect()?;

    Ok(df)
}

/// Read a CSV source with all columns as String dtype.
/// Trims whitespace from column names.
fn read_csv_as_strings(source: &DataSource) -> Result<DataFrame, ReportError> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)); // all columns as String

    let mut df = match source {
        DataSource::Path(path) => options
            .try_into_reader_with_file_path(Some(path.clone()))?
            .finish()?,
        DataSource::Url(url) => {
            let body = reqwest::blocking::get(url.as_str())?
                .error_for_status()?
                .bytes()?;
            options
                .into_reader_with_file_handle(Cursor::new(body.to_vec()))
                .finish()?
        }
    };

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), ReportError> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(ReportError::MissingColumn(col_name.to_string()));
        }
    }
    Ok(())
}

/// Non-strict parse of a string column to Float64; bad cells become null.
fn parse_float(column: &str) -> Expr {
    col(column)
        .str()
        .strip_chars(lit(" \t\r\n"))
        .cast(DataType::Float64)
}

fn parse_int(column: &str) -> Expr {
    col(column)
        .str()
        .strip_chars(lit(" \t\r\n"))
        .cast(DataType::Int64)
}
