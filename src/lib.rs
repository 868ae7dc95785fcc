use pyo3::prelude::*;
use pyo3::types::PyModule;

pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod selector;

use model::{DerivedView, ReportModel};
use selector::{SelectorOptions, SelectorState};

/// Export schema constants as Python submodules
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Production record columns
    let production = PyModule::new(m.py(), "production")?;
    production.add("WELL", schema::production::WELL)?;
    production.add("ASSET", schema::production::ASSET)?;
    production.add("OIL_M3_PER_DAY", schema::production::OIL_M3_PER_DAY)?;
    production.add("OIL_MT_PER_DAY", schema::production::OIL_MT_PER_DAY)?;
    production.add(
        "WATER_CONTENT_PCT",
        schema::production::WATER_CONTENT_PCT,
    )?;
    production.add("YEAR", schema::production::YEAR)?;
    production.add("MONTH", schema::production::MONTH)?;
    m.add_submodule(&production)?;

    // Display defaults
    let display = PyModule::new(m.py(), "display")?;
    display.add("PAGE_SIZE", schema::display::PAGE_SIZE)?;
    m.add_submodule(&display)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ReportModel>()?;
    m.add_class::<DerivedView>()?;
    m.add_class::<SelectorState>()?;
    m.add_class::<SelectorOptions>()?;
    add_schema_exports(m)?;
    Ok(())
}
