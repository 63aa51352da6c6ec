/// Column-name constants for the surgical case log.
/// Single source of truth for the loader, pipeline and reports.

// ── Case log columns ────────────────────────────────────────────────────────
pub mod case_log {
    pub const LOG_ID: &str = "LOG_ID";
    pub const PROC_ID: &str = "PROC_ID";
    pub const PROC_NAME: &str = "PROC_NAME";
    pub const CASE_SURGEON: &str = "CASE_SURGEON";
    pub const SUP_COST: &str = "SUP_COST";
    pub const TX_COST: &str = "TX_COST";
    pub const PAT_AGE: &str = "PAT_AGE";
    pub const TIME_REQUIRED: &str = "TIME_REQUIRED";

    /// Columns kept by the projection step, in output order.
    pub const PROJECTED: [&str; 8] = [
        LOG_ID,
        PROC_ID,
        PROC_NAME,
        CASE_SURGEON,
        SUP_COST,
        TX_COST,
        PAT_AGE,
        TIME_REQUIRED,
    ];

    /// Composite key identifying one case.
    pub const CASE_KEY: [&str; 6] = [
        LOG_ID,
        PROC_ID,
        PROC_NAME,
        CASE_SURGEON,
        PAT_AGE,
        TIME_REQUIRED,
    ];

    /// Columns summed across the cost line items of a case.
    pub const COSTS: [&str; 2] = [SUP_COST, TX_COST];

    /// Columns parsed to Float64 on load.
    pub const NUMERIC: [&str; 4] = [SUP_COST, TX_COST, PAT_AGE, TIME_REQUIRED];

    /// Columns trimmed of surrounding whitespace on load.
    pub const TEXT: [&str; 4] = [LOG_ID, PROC_ID, PROC_NAME, CASE_SURGEON];
}

// ── Summary statistics table ────────────────────────────────────────────────
pub mod stats {
    /// Header of the row-label column (left blank, like an unnamed index).
    pub const LABEL: &str = "";

    pub const COUNT: &str = "count";
    pub const MEAN: &str = "mean";
    pub const STD: &str = "std";
    pub const MIN: &str = "min";
    pub const Q25: &str = "25%";
    pub const Q50: &str = "50%";
    pub const Q75: &str = "75%";
    pub const MAX: &str = "max";

    pub const ROWS: [&str; 8] = [COUNT, MEAN, STD, MIN, Q25, Q50, Q75, MAX];
}
