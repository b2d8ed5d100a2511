//! Conventional environment names.
//!
//! These are presets, not a closed set: any string is a valid
//! environment and may or may not have a block in the document.

pub const DEVELOPMENT: &str = "development";
pub const TEST: &str = "test";
pub const STAGING: &str = "staging";
pub const PRODUCTION: &str = "production";

/// Name of the block consulted when a key is missing from the current environment.
pub const DEFAULT_BLOCK: &str = "defaults";

/// Environment used when none has been selected.
pub const DEFAULT_ENVIRONMENT: &str = DEVELOPMENT;
