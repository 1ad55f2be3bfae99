use crate::audit::AclEntry;
use crate::prelude::*;
use aws_sdk_s3::Client;

pub async fn list_buckets(client: &Client) -> Result<Vec<String>> {
	let buckets_output = client.list_buckets().send().await?;
	let buckets = buckets_output.buckets.unwrap_or_default();
	Ok(buckets.into_iter().flat_map(|b| b.name).collect())
}

/// Fetch the ACL grant list for a bucket.
/// Grants with no permission are dropped; the classifier decides grantee relevance.
pub async fn get_bucket_acl(client: &Client, bucket_name: &str) -> Result<Vec<AclEntry>> {
	let acl_output = client.get_bucket_acl().bucket(bucket_name).send().await?;
	let grants = acl_output.grants.unwrap_or_default();

	let entries = grants
		.into_iter()
		.filter_map(|grant| {
			let permission = grant.permission.map(|p| p.as_str().to_string())?;
			let grantee_uri = grant.grantee.and_then(|g| g.uri);
			Some(AclEntry { grantee_uri, permission })
		})
		.collect();

	Ok(entries)
}
