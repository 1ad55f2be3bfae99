//! CSV report generation.

use crate::audit::PublicBucketRecord;
use crate::prelude::*;
use csv_async::AsyncWriter;
use std::path::Path;
use tokio::fs::File;

/// Report column names.
/// Note: `Permissons` is intentional; consumers of the original report key on
/// this exact header.
const FIELD_NAMES: [&str; 3] = ["Bucket", "Permissons", "Account"];

/// Write the report, overwriting any existing file at `path`.
/// An empty record set still produces a well-formed, header-only file.
pub async fn write_report(records: &[PublicBucketRecord], path: impl AsRef<Path>) -> Result<()> {
	let file = File::create(path).await?;
	let mut wtr = AsyncWriter::from_writer(file);

	wtr.write_record(&FIELD_NAMES).await?;

	for record in records {
		wtr.write_record([
			record.bucket.as_str(),
			record.permissions.as_str(),
			record.account.as_str(),
		])
		.await?;
	}

	wtr.flush().await?;

	Ok(())
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	fn record(bucket: &str, permissions: &str, account: &str) -> PublicBucketRecord {
		PublicBucketRecord {
			bucket: bucket.to_string(),
			permissions: permissions.to_string(),
			account: account.to_string(),
		}
	}

	#[tokio::test]
	async fn test_write_report_rows() -> Result<()> {
		// FIXTURE
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("public_buckets.csv");
		let records = vec![
			record("data-bucket", "READ, WRITE", "prod"),
			record("assets-bucket", "READ", "staging"),
		];

		// EXEC
		write_report(&records, &path).await?;

		// CHECK
		let content = std::fs::read_to_string(&path)?;
		let lines: Vec<&str> = content.trim().lines().collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "Bucket,Permissons,Account");
		assert_eq!(lines[1], "data-bucket,\"READ, WRITE\",prod");
		assert_eq!(lines[2], "assets-bucket,READ,staging");

		Ok(())
	}

	#[tokio::test]
	async fn test_write_report_empty_is_header_only() -> Result<()> {
		// FIXTURE
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("public_buckets.csv");

		// EXEC
		write_report(&[], &path).await?;

		// CHECK
		let content = std::fs::read_to_string(&path)?;
		assert_eq!(content.trim(), "Bucket,Permissons,Account");

		Ok(())
	}

	#[tokio::test]
	async fn test_write_report_overwrites() -> Result<()> {
		// FIXTURE
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("public_buckets.csv");
		write_report(&[record("old-bucket", "READ", "prod")], &path).await?;

		// EXEC - second run with a different record set
		write_report(&[record("new-bucket", "WRITE", "dev")], &path).await?;

		// CHECK
		let content = std::fs::read_to_string(&path)?;
		assert!(!content.contains("old-bucket"));
		assert!(content.contains("new-bucket,WRITE,dev"));

		Ok(())
	}
}

// endregion: --- Tests
