//! Public-access classification of bucket ACLs.

use crate::consts::PUBLIC_GROUP;

/// One grant from a bucket ACL, reduced to what the classifier needs.
/// Canonical-user grantees (owner, specific accounts) carry no URI.
#[derive(Debug, Clone)]
pub struct AclEntry {
	pub grantee_uri: Option<String>,
	pub permission: String,
}

impl AclEntry {
	/// The group name of a URI grantee, i.e. the last path segment
	/// (e.g. `.../groups/global/AllUsers` -> `AllUsers`).
	fn group_name(&self) -> Option<&str> {
		self.grantee_uri.as_deref().and_then(|uri| uri.rsplit('/').next())
	}
}

/// One row of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicBucketRecord {
	pub bucket: String,
	pub permissions: String,
	pub account: String,
}

/// Determine whether a bucket is publicly accessible.
///
/// A bucket is public when at least one grant targets the well-known `AllUsers`
/// group. The returned record carries the permissions of the `AllUsers` grants
/// only, comma-joined in grant order. Grants with no URI grantee never match.
pub fn classify(bucket: &str, entries: &[AclEntry], account: &str) -> Option<PublicBucketRecord> {
	let permissions: Vec<&str> = entries
		.iter()
		.filter(|entry| entry.group_name() == Some(PUBLIC_GROUP))
		.map(|entry| entry.permission.as_str())
		.collect();

	if permissions.is_empty() {
		return None;
	}

	Some(PublicBucketRecord {
		bucket: bucket.to_string(),
		permissions: permissions.join(", "),
		account: account.to_string(),
	})
}

// region:    --- Tests


// endregion: --- Tests
