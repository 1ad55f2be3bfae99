use cmd::cmd_run;
use tracing_subscriber::EnvFilter;

mod audit;
mod cmd;
mod consts;
mod error;
mod prelude;
mod report;
mod s3w;

pub use error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	init_tracing();

	if let Err(e) = cmd_run().await {
		eprintln!("Error:\n  {}", e);
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}
