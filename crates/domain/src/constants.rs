//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Progress scoring
pub const MAX_PROGRESS: u8 = 100;

// Tier lower bounds (inclusive), evaluated high-to-low
pub const COMPLETE_THRESHOLD: u8 = 100;
pub const NEAR_COMPLETE_THRESHOLD: u8 = 90;
pub const ON_TRACK_THRESHOLD: u8 = 70;
pub const AT_RISK_THRESHOLD: u8 = 30;

// Tier colors (CSS hex)
pub const COLOR_COMPLETE: &str = "#1E88E5";
pub const COLOR_NEAR_COMPLETE: &str = "#2E7D32";
pub const COLOR_ON_TRACK: &str = "#81C784";
pub const COLOR_AT_RISK: &str = "#FFB300";
pub const COLOR_BEHIND: &str = "#E53935";

// Project validation
pub const MIN_PROJECT_YEAR: i32 = 1900;
pub const MAX_PROJECT_YEAR: i32 = 2100;

// Date handling
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Store defaults
pub const DEFAULT_SQLITE_PATH: &str = "projboard.db";
pub const DEFAULT_JSON_PATH: &str = "projboard.json";
pub const DEFAULT_POOL_SIZE: u32 = 4;
