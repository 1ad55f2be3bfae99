//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules
mod bucket_ops;
mod cred;

// -- Re-exports
pub use self::bucket_ops::{get_bucket_acl, list_buckets};
pub use self::cred::{list_profiles, new_s3_client};

// endregion: --- Modules
