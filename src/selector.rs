use polars::prelude::*;
use pyo3::prelude::*;

use crate::error::ReportError;
use crate::schema::production;

/// The four filter values currently chosen by the host UI.
///
/// `None` means "unset, match every record". The reference dashboards never
/// leave a selector unset (every widget starts on its first option), so hosts
/// that want that behavior should start from
/// [`SelectorOptions::default_state`].
#[derive(Debug, Clone, Default)]
#[pyclass]
pub struct SelectorState {
    #[pyo3(get, set)]
    pub asset: Option<String>,
    #[pyo3(get, set)]
    pub year: Option<i64>,
    #[pyo3(get, set)]
    pub month: Option<i64>,
    #[pyo3(get, set)]
    pub well: Option<String>,
}

#[pymethods]
impl SelectorState {
    #[new]
    #[pyo3(signature = (asset=None, year=None, month=None, well=None))]
    fn new(
        asset: Option<String>,
        year: Option<i64>,
        month: Option<i64>,
        well: Option<String>,
    ) -> Self {
        Self {
            asset,
            year,
            month,
            well,
        }
    }
}

/// Sorted distinct non-null values per selector field, used to populate the
/// choice controls. Computed once per dataset load; never filtered by the
/// current selection.
#[derive(Debug, Clone)]
#[pyclass]
pub struct SelectorOptions {
    #[pyo3(get)]
    pub assets: Vec<String>,
    #[pyo3(get)]
    pub years: Vec<i64>,
    #[pyo3(get)]
    pub months: Vec<i64>,
    #[pyo3(get)]
    pub wells: Vec<String>,
}

impl SelectorOptions {
    pub fn from_frame(df: &DataFrame) -> Result<Self, ReportError> {
        Ok(Self {
            assets: distinct_strings(df, production::ASSET)?,
            years: distinct_ints(df, production::YEAR)?,
            months: distinct_ints(df, production::MONTH)?,
            wells: distinct_strings(df, production::WELL)?,
        })
    }

    /// Reject selections outside the enumerated option sets.
    pub fn validate(&self, state: &SelectorState) -> Result<(), ReportError> {
        if let Some(asset) = &state.asset {
            if !self.assets.contains(asset) {
                return Err(ReportError::InvalidSelection(format!(
                    "unknown asset '{asset}'"
                )));
            }
        }
        if let Some(year) = state.year {
            if !self.years.contains(&year) {
                return Err(ReportError::InvalidSelection(format!(
                    "unknown year {year}"
                )));
            }
        }
        if let Some(month) = state.month {
            if !self.months.contains(&month) {
                return Err(ReportError::InvalidSelection(format!(
                    "unknown month {month}"
                )));
            }
        }
        if let Some(well) = &state.well {
            if !self.wells.contains(well) {
                return Err(ReportError::InvalidSelection(format!(
                    "unknown well '{well}'"
                )));
            }
        }
        Ok(())
    }
}

#[pymethods]
impl SelectorOptions {
    /// The selection the reference dashboards start on: the first enumerated
    /// option of every field.
    pub fn default_state(&self) -> SelectorState {
        SelectorState {
            asset: self.assets.first().cloned(),
            year: self.years.first().copied(),
            month: self.months.first().copied(),
            well: self.wells.first().cloned(),
        }
    }
}

fn distinct_strings(df: &DataFrame, column: &str) -> Result<Vec<String>, ReportError> {
    let out = df
        .clone()
        .lazy()
        .select([col(column)
            .drop_nulls()
            .unique()
            .sort(SortOptions::default())])
        .collect()?;

    let values = out
        .column(column)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();
    Ok(values)
}

fn distinct_ints(df: &DataFrame, column: &str) -> Result<Vec<i64>, ReportError> {
    let out = df
        .clone()
        .lazy()
        .select([col(column)
            .drop_nulls()
            .unique()
            .sort(SortOptions::default())])
        .collect()?;

    let values = out
        .column(column)?
        .as_materialized_series()
        .i64()?
        .into_iter()
        .flatten()
        .collect();
    Ok(values)
}
