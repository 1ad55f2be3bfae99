//! CLI surface tests. Only the offline behaviors are covered here; the AWS
//! calls themselves require live credentials.

use anyhow::Result;
use std::process::Command;

#[test]
fn test_no_args_prints_help_and_exits_1() -> Result<()> {
	// EXEC
	let output = Command::new(env!("CARGO_BIN_EXE_s3audit")).output()?;

	// CHECK
	assert_eq!(output.status.code(), Some(1));
	let out = String::from_utf8(output.stdout)?;
	assert!(out.contains("--profile"), "'--profile' was not in the help output");
	assert!(out.contains("--all"), "'--all' was not in the help output");
	assert!(out.contains("FULL_CONTROL"), "permission levels were not in the help output");

	Ok(())
}

#[test]
fn test_help_flag_exits_0() -> Result<()> {
	// EXEC
	let output = Command::new(env!("CARGO_BIN_EXE_s3audit")).arg("--help").output()?;

	// CHECK
	assert!(output.status.success());
	let out = String::from_utf8(output.stdout)?;
	assert!(out.contains("Audit s3 buckets"));

	Ok(())
}

#[test]
fn test_unknown_profile_fails_fast() -> Result<()> {
	// EXEC - empty environment, so neither the config files nor the env fallback resolve
	let output = Command::new(env!("CARGO_BIN_EXE_s3audit"))
		.env_clear()
		.args(["--profile", "no-such-profile"])
		.output()?;

	// CHECK
	assert_eq!(output.status.code(), Some(1));
	let err = String::from_utf8(output.stderr)?;
	assert!(
		err.contains("No credentials found for profile no-such-profile"),
		"unexpected stderr: {err}"
	);

	Ok(())
}
