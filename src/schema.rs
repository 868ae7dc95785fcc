/// Column-name constants for the well production dataset.
/// Single source of truth - exported to Python via PyO3.

// ── Production record columns ───────────────────────────────────────────────
pub mod production {
    pub const WELL: &str = "WELL";
    pub const ASSET: &str = "Asset";
    pub const OIL_M3_PER_DAY: &str = "OIL(M3/DAY)";
    pub const OIL_MT_PER_DAY: &str = "OIL(MT/DAY)";
    pub const WATER_CONTENT_PCT: &str = "WATER CONTENT%";
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";

    pub const ALL: [&str; 7] = [
        WELL,
        ASSET,
        OIL_M3_PER_DAY,
        OIL_MT_PER_DAY,
        WATER_CONTENT_PCT,
        YEAR,
        MONTH,
    ];
}

// ── Display defaults ────────────────────────────────────────────────────────
pub mod display {
    /// Rows per page in the ranked summary table. Hosts may override this
    /// when constructing the model, but existing consumers rely on 10.
    pub const PAGE_SIZE: usize = 10;
}
