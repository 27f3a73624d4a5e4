// src/config/consts.rs

// Net config
pub const PROBE_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("mvc_grade/", env!("CARGO_PKG_VERSION"));

// Routes under test
pub const INDEX_PATH: &str = "/";
pub const NICKNAME_PATH: &str = "/nickname";
pub const ATTENDEES_PATH: &str = "/attendees";
pub const SEARCH_PARAM: &str = "q";

// Query generation
pub const MAX_QUERY_ATTEMPTS: usize = 32;

// Logging
pub const LOG_ENV: &str = "MVC_GRADE_LOG";
pub const DEFAULT_LOG: &str = "warn";
pub const DEBUG_LOG: &str = "debug";
