use crate::audit::{classify, PublicBucketRecord};
use crate::cmd::app::{cmd_app, ARG_ALL, ARG_PROFILE};
use crate::consts::{DEFAULT_PROFILE, REPORT_FILE};
use crate::prelude::*;
use crate::report::write_report;
use crate::s3w::{get_bucket_acl, list_buckets, list_profiles, new_s3_client};
use tracing::info;

mod app;

pub async fn cmd_run() -> Result<()> {
	// No argument at all, print the full help and exit 1.
	if std::env::args().len() < 2 {
		cmd_app().print_long_help()?;
		println!();
		std::process::exit(1);
	}

	let argm = cmd_app().get_matches();

	// -- Resolve the target profiles
	let profiles: Vec<String> = if argm.get_flag(ARG_ALL) {
		list_profiles().await?
	} else {
		let profile = argm
			.get_one::<String>(ARG_PROFILE.0)
			.map(|s| s.as_str())
			.unwrap_or(DEFAULT_PROFILE);
		vec![profile.to_string()]
	};

	// -- Audit each account in turn (fail-fast on any account error)
	let mut records: Vec<PublicBucketRecord> = Vec::new();

	for profile in &profiles {
		info!("Auditing AWS account '{profile}'");
		records.extend(audit_account(profile).await?);
	}
	info!("Finished auditing {} AWS account(s)", profiles.len());

	// -- Report
	if records.is_empty() {
		info!("No public buckets found");
	}
	info!("Generating csv report of all identified public buckets");
	write_report(&records, REPORT_FILE).await?;

	println!("✔ {} public bucket(s) found - report written to '{REPORT_FILE}'", records.len());

	Ok(())
}

/// Audit a single account: list its buckets, classify each bucket ACL.
async fn audit_account(profile: &str) -> Result<Vec<PublicBucketRecord>> {
	let client = new_s3_client(profile).await?;
	let buckets = list_buckets(&client).await?;

	let mut records = Vec::new();
	for bucket in buckets {
		let entries = get_bucket_acl(&client, &bucket).await?;
		if let Some(record) = classify(&bucket, &entries, profile) {
			records.push(record);
		}
	}

	Ok(records)
}
