use polars::prelude::*;

use crate::error::ReportError;
use crate::schema::production;
use crate::selector::SelectorState;

/// Ranked summary table: project, filter on {asset, year, month}, normalize
/// the three measurement columns against the filtered subset, then rank by
/// normalized oil volume.
///
/// The derived columns replace the originals under the same names, so the
/// host can render the frame as-is. Everything is recomputed from scratch on
/// every call; the output is a pure function of (records, state).
pub fn ranked_summary(df: &DataFrame, state: &SelectorState) -> Result<DataFrame, ReportError> {
    let summary = df
        .clone()
        .lazy()
        .select(production::ALL.map(col))
        .filter(summary_predicate(state))
        .with_columns([
            (col(production::WATER_CONTENT_PCT)
                / col(production::WATER_CONTENT_PCT).mean()
                * lit(100.0))
            .alias(production::WATER_CONTENT_PCT),
            (col(production::OIL_M3_PER_DAY) / col(production::OIL_M3_PER_DAY).sum()
                * lit(100.0))
            .alias(production::OIL_M3_PER_DAY),
            (col(production::OIL_MT_PER_DAY) / col(production::OIL_MT_PER_DAY).mean()
                * lit(100.0))
            .alias(production::OIL_MT_PER_DAY),
        ])
        .sort(
            [production::OIL_M3_PER_DAY],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true)
                .with_maintain_order(true),
        )
        .collect()?;

    Ok(summary)
}

/// Water-content history for one well: filter on {asset, well}, project
/// (Year, WATER CONTENT%) in natural row order. Raw values, not the
/// normalized ones from the summary table.
pub fn water_cut_series(df: &DataFrame, state: &SelectorState) -> Result<DataFrame, ReportError> {
    let mut predicate = lit(true);
    if let Some(asset) = &state.asset {
        predicate = predicate.and(col(production::ASSET).eq(lit(asset.clone())));
    }
    if let Some(well) = &state.well {
        predicate = predicate.and(col(production::WELL).eq(lit(well.clone())));
    }

    let series = df
        .clone()
        .lazy()
        .filter(predicate)
        .select([col(production::YEAR), col(production::WATER_CONTENT_PCT)])
        .collect()?;

    Ok(series)
}

/// Number of fixed-size pages the frame spans.
pub fn page_count(df: &DataFrame, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    df.height().div_ceil(page_size)
}

/// One display page. Out-of-range indices yield an empty frame.
pub fn page(df: &DataFrame, index: usize, page_size: usize) -> DataFrame {
    df.slice((index * page_size) as i64, page_size)
}

// An unset selector matches every record. Equality against a null cell is
// null, so rows missing a *filtered* field drop out, while nulls in other
// columns pass through untouched.
fn summary_predicate(state: &SelectorState) -> Expr {
    let mut predicate = lit(true);
    if let Some(asset) = &state.asset {
        predicate = predicate.and(col(production::ASSET).eq(lit(asset.clone())));
    }
    if let Some(year) = state.year {
        predicate = predicate.and(col(production::YEAR).eq(lit(year)));
    }
    if let Some(month) = state.month {
        predicate = predicate.and(col(production::MONTH).eq(lit(month)));
    }
    predicate
}
