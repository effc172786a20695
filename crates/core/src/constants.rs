/// Constants used throughout the adorn codebase
// Environment variable names
pub const ADORN_LOG_VAR: &str = "ADORN_LOG";

// Default env-file name, relative to the working directory
pub const DEFAULT_ENV_FILENAME: &str = ".env";

// Display name exposed by wrappers that do not preserve target identity
pub const WRAPPER_NAME: &str = "wrapper";

// Performance report formatting
pub const REPORT_RULE_WIDTH: usize = 40;

// Report figures are decimal megabytes, not binary mebibytes
pub const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;
