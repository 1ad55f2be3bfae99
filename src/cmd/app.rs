use crate::consts::DEFAULT_PROFILE;
use clap::{crate_version, Arg, ArgAction, Command};

pub const ARG_PROFILE: (&str, char) = ("profile", 'p');
pub const ARG_ALL: &str = "all";

const ABOUT: &str = "Audit s3 buckets within one or all AWS accounts and generate a csv report of the public buckets with their level of access.

A public s3 bucket can grant the following access to anyone:
  - READ          Allows any user to list objects in the bucket
  - WRITE         Allows any user to create, overwrite, delete any object in the bucket
  - READ_ACP      Allows any user to read the bucket ACL
  - WRITE_ACP     Allows any user to write the bucket ACL
  - FULL_CONTROL  Allows any user READ, WRITE, READ_ACP, WRITE_ACP on the bucket";

pub fn cmd_app() -> Command {
	Command::new("s3audit")
		.version(crate_version!())
		.about(ABOUT)
		.arg(arg_profile())
		.arg(arg_all())
}

// region:    --- Args
fn arg_profile() -> Arg {
	Arg::new(ARG_PROFILE.0)
		.required(false)
		.num_args(1)
		.short(ARG_PROFILE.1)
		.long(ARG_PROFILE.0)
		.default_value(DEFAULT_PROFILE)
		.help("AWS profile name defined in the credentials configuration")
}

fn arg_all() -> Arg {
	Arg::new(ARG_ALL)
		.num_args(0)
		.long(ARG_ALL)
		.action(ArgAction::SetTrue)
		.help("Audit every AWS profile from the shared config/credentials files (takes precedence over --profile)")
}
// endregion: --- Args
