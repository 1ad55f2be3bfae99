use crate::prelude::*;
use aws_config::profile::profile_file::ProfileFiles;
use aws_config::profile::Profile;
use aws_sdk_s3::config::Builder;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;
use aws_types::os_shim_internal::{Env, Fs};
use std::env;

// Default AWS environement names (used as last fallback)
const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const AWS_ENDPOINT: &str = "AWS_ENDPOINT";

#[derive(Debug)]
struct AwsCred {
	key_id: String,
	key_secret: String,
	region: Option<String>,
	endpoint: Option<String>,
}

/// Return the names of every profile defined in the standard aws config files
/// (~/.aws/config, ~/.aws/credentials).
pub async fn list_profiles() -> Result<Vec<String>> {
	let (fs, ev) = (Fs::real(), Env::default());
	let profiles = aws_config::profile::load(&fs, &ev, &ProfileFiles::default(), None)
		.await
		.map_err(|_| Error::NoProfilesFound)?;

	let names: Vec<String> = profiles.profiles().map(String::from).collect();

	if names.is_empty() {
		return Err(Error::NoProfilesFound);
	}

	Ok(names)
}

pub async fn new_s3_client(profile: &str) -> Result<Client> {
	let cred = load_aws_cred(profile).await?;
	client_from_cred(cred)
}

fn client_from_cred(aws_cred: AwsCred) -> Result<Client> {
	let AwsCred {
		key_id,
		key_secret,
		region,
		endpoint,
	} = aws_cred;

	let cred = Credentials::new(key_id, key_secret, None, None, "loaded-from-config-or-env");

	if let (None, None) = (&region, &endpoint) {
		return Err(Error::MissingConfigMustHaveEndpointOrRegion);
	}

	let mut builder = Builder::new().credentials_provider(cred);

	if let Some(endpoint) = endpoint {
		builder = builder.endpoint_url(endpoint);
		// WORKAROUND - Right now, the aws-sdk-s3 (v0.25) throws a NoRegion on .send if no region even if we have a endpoint.
		builder = builder.region(Region::new("endpoint-region"));
	}

	if let Some(region) = region {
		builder = builder.region(Region::new(region));
	}

	let config = builder.build();
	let client = Client::from_conf(config);
	Ok(client)
}

/// Load the AwsCred for a profile
/// - First try the aws config files for that profile
/// - Then, fall back on the default AWS env keys
/// - If still not found, error
async fn load_aws_cred(profile: &str) -> Result<AwsCred> {
	let mut cred_result = load_aws_cred_from_aws_profile_configs(profile).await.ok();

	// -- Last fall back standard aws envs
	if cred_result.is_none() {
		cred_result = load_aws_cred_from_default_aws_env().await.ok();
	}

	cred_result.ok_or_else(|| Error::NoCredentialsForProfile(profile.to_string()))
}

async fn load_aws_cred_from_aws_profile_configs(profile_str: &str) -> Result<AwsCred> {
	let (fs, ev) = (Fs::real(), Env::default());
	let profiles = aws_config::profile::load(&fs, &ev, &ProfileFiles::default(), None).await;
	if let Ok(profiles) = profiles {
		if let Some(profile) = profiles.get_profile(profile_str) {
			let key_id = get_profile_value(profile, "aws_access_key_id")?;
			let key_secret = get_profile_value(profile, "aws_secret_access_key")?;
			let region = get_profile_value(profile, "region").ok();
			let endpoint = get_profile_value(profile, "endpoint").ok();

			return Ok(AwsCred {
				key_id,
				key_secret,
				region,
				endpoint,
			});
		}
	}

	Err(Error::NoCredentialsForProfile(profile_str.to_string()))
}

async fn load_aws_cred_from_default_aws_env() -> Result<AwsCred> {
	let key_id = get_env(AWS_ACCESS_KEY_ID)?;
	let key_secret = get_env(AWS_SECRET_ACCESS_KEY)?;
	let region = get_env(AWS_DEFAULT_REGION).ok();
	let endpoint = get_env(AWS_ENDPOINT).ok();

	Ok(AwsCred {
		key_id,
		key_secret,
		region,
		endpoint,
	})
}

// region:    Utils
fn get_profile_value(profile: &Profile, key: &str) -> Result<String> {
	match profile.get(key) {
		Some(value) => Ok(value.to_string()),
		None => Err(Error::NoCredentialConfig(key.to_string())),
	}
}

fn get_env(name: &str) -> Result<String> {
	match env::var(name) {
		Ok(v) => Ok(v),
		Err(_) => Err(Error::NoCredentialEnv(name.to_string())),
	}
}
// endregion: Utils
