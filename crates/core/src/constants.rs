/// Number of trailing days in the default spending trend
pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Upper bound accepted for a spending trend window
pub const MAX_TREND_DAYS: u32 = 365;

/// Date format used on the wire and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";
