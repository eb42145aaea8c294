/// Header columns a station export must carry to be loadable
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "STATION", "DATE", "TMAX", "TMIN", "PRCP", "SNOW", "DAPR", "MDPR",
];

/// Accepted DATE cell formats, tried in order
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Month axis labels, indexed by month - 1
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Precipitation unit conversion for chart series
pub const MM_PER_INCH: f64 = 25.4;

/// Histogram bin layout (°F), matching the frequency charts
pub const TEMP_BIN_WIDTH: f64 = 5.0;
pub const TMAX_BIN_START: f64 = 10.0;
pub const TMAX_BIN_END: f64 = 105.0;
pub const TMIN_BIN_START: f64 = -30.0;
pub const TMIN_BIN_END: f64 = 65.0;
