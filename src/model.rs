use polars::prelude::DataFrame;

use pyo3::prelude::*;
use pyo3_polars::PyDataFrame;

use crate::error::ReportError;
use crate::loader::{self, DataSource};
use crate::pipeline;
use crate::schema::display;
use crate::selector::{SelectorOptions, SelectorState};

/// Both outputs of one recomputation: the ranked summary table and the
/// water-content series, plus paging over the table.
#[pyclass]
pub struct DerivedView {
    summary: DataFrame,
    series: DataFrame,
    page_size: usize,
}

#[pymethods]
impl DerivedView {
    #[getter]
    fn summary(&self) -> PyDataFrame {
        PyDataFrame(self.summary.clone())
    }

    #[getter]
    fn series(&self) -> PyDataFrame {
        PyDataFrame(self.series.clone())
    }

    #[getter]
    fn page_size(&self) -> usize {
        self.page_size
    }

    fn page_count(&self) -> usize {
        pipeline::page_count(&self.summary, self.page_size)
    }

    /// One display page of the summary table. Out-of-range indices yield an
    /// empty frame.
    fn page(&self, index: usize) -> PyDataFrame {
        PyDataFrame(pipeline::page(&self.summary, index, self.page_size))
    }
}

/// One reporting session: the dataset, its enumerated selector options and
/// the display configuration. The hosting UI owns the widgets and delivers
/// selector changes one at a time; every change is answered with a freshly
/// recomputed [`DerivedView`].
#[pyclass]
pub struct ReportModel {
    source: DataSource,
    page_size: usize,
    production: Option<DataFrame>,
    options: Option<SelectorOptions>,
}

#[pymethods]
impl ReportModel {
    #[new]
    #[pyo3(signature = (source, page_size=display::PAGE_SIZE))]
    pub fn new(source: &str, page_size: usize) -> Self {
        Self {
            source: DataSource::parse(source),
            page_size,
            production: None,
            options: None,
        }
    }

    // ── Data loading ────────────────────────────────────────────────────────

    /// Load the production sheet from the configured source (local path or
    /// URL) and enumerate the selector options. Called once per session; a
    /// failure here is fatal to the session and any retry belongs to the
    /// host.
    pub fn load_production(&mut self) -> PyResult<PyDataFrame> {
        let df = loader::load_production(&self.source)?;
        self.options = Some(SelectorOptions::from_frame(&df)?);
        self.production = Some(df.clone());
        Ok(PyDataFrame(df))
    }

    // ── Selector options ────────────────────────────────────────────────────

    #[getter]
    pub fn options(&self) -> PyResult<SelectorOptions> {
        Ok(self.options_ref()?.clone())
    }

    /// The selection the reference dashboards start on: the first enumerated
    /// option of every field.
    pub fn default_selection(&self) -> PyResult<SelectorState> {
        Ok(self.options_ref()?.default_state())
    }

    // ── Recomputation ───────────────────────────────────────────────────────

    /// The command interface: one selector change in, one derived view out.
    /// Both outputs are recomputed in full; nothing is cached between calls.
    pub fn on_selector_changed(&self, state: SelectorState) -> PyResult<DerivedView> {
        self.options_ref()?.validate(&state)?;
        let records = self.records()?;
        Ok(DerivedView {
            summary: pipeline::ranked_summary(records, &state)?,
            series: pipeline::water_cut_series(records, &state)?,
            page_size: self.page_size,
        })
    }

    /// The ranked summary table alone, for hosts wiring it to its own widget.
    pub fn ranked_summary(&self, state: SelectorState) -> PyResult<PyDataFrame> {
        self.options_ref()?.validate(&state)?;
        let summary = pipeline::ranked_summary(self.records()?, &state)?;
        Ok(PyDataFrame(summary))
    }

    /// The water-content series alone.
    pub fn water_cut_series(&self, state: SelectorState) -> PyResult<PyDataFrame> {
        self.options_ref()?.validate(&state)?;
        let series = pipeline::water_cut_series(self.records()?, &state)?;
        Ok(PyDataFrame(series))
    }

    // ── Properties ──────────────────────────────────────────────────────────

    #[getter]
    fn production_df(&self) -> Option<PyDataFrame> {
        self.production.clone().map(PyDataFrame)
    }
}

// ── Private helpers ─────────────────────────────────────────────────────────

impl ReportModel {
    fn records(&self) -> Result<&DataFrame, ReportError> {
        self.production
            .as_ref()
            .ok_or_else(|| ReportError::NotLoaded("production".into()))
    }

    fn options_ref(&self) -> Result<&SelectorOptions, ReportError> {
        self.options
            .as_ref()
            .ok_or_else(|| ReportError::NotLoaded("production".into()))
    }
}
