//! Global constants

/// Fixed report path, relative to the working directory. Overwritten each run.
pub const REPORT_FILE: &str = "public_buckets.csv";

/// Last path segment of the well-known group URI granting access to anyone
/// (`http://acs.amazonaws.com/groups/global/AllUsers`).
pub const PUBLIC_GROUP: &str = "AllUsers";

pub const DEFAULT_PROFILE: &str = "default";
