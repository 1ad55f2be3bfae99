use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_bucket_acl::GetBucketAclError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Credential environment variable {0} not found")]
	NoCredentialEnv(String),

	#[error("Credential profile config key {0} not found")]
	NoCredentialConfig(String),

	#[error("No credentials found for profile {0}.")]
	NoCredentialsForProfile(String),

	#[error("No AWS profiles found in the shared config/credentials files (~/.aws/config, ~/.aws/credentials).")]
	NoProfilesFound,

	#[error("Missing config. The credential environment variables or config must have either a REGION or ENDPOINT. Both absent.")]
	MissingConfigMustHaveEndpointOrRegion,

	#[error("AWS Service Error. Code: {0}, Message: {1}")]
	AwsServiceError(String, String), // code, message

	#[error(transparent)]
	Csv(#[from] csv_async::Error),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// For better CLI error reporting (code + message rather than the sdk Display).
impl From<SdkError<ListBucketsError>> for Error {
	fn from(val: SdkError<ListBucketsError>) -> Self {
		let se = val.into_service_error();
		let code = se.code().unwrap_or_default().to_string();
		let message = se.message().unwrap_or_default().to_string();
		Error::AwsServiceError(code, message)
	}
}

impl From<SdkError<GetBucketAclError>> for Error {
	fn from(val: SdkError<GetBucketAclError>) -> Self {
		let se = val.into_service_error();
		let code = se.code().unwrap_or_default().to_string();
		let message = se.message().unwrap_or_default().to_string();
		Error::AwsServiceError(code, message)
	}
}
