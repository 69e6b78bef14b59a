//! Build-time version information.
//!
//! Both values are injected at compile time through the `DOCDB_EXAMPLE_VERSION`
//! and `DOCDB_EXAMPLE_REVISION` environment variables. Builds without injection
//! report a development version and an all-zero revision.

use const_format::formatcp;

/// Semantic version of this build.
pub const VERSION: &str = match option_env!("DOCDB_EXAMPLE_VERSION") {
    Some(version) => version,
    None => "0.0.0-dev",
};

/// Source revision (commit hash) of this build.
pub const REVISION: &str = match option_env!("DOCDB_EXAMPLE_REVISION") {
    Some(revision) => revision,
    None => "0000000000000000000000000000000000000000",
};

/// Version reported in the `appVersion` field of hit responses.
pub const APP_VERSION: &str = formatcp!("{}+{}", VERSION, REVISION);

/// Version printed by the `-version` flag.
pub const DISPLAY_VERSION: &str = formatcp!("v{}+{}", VERSION, REVISION);
