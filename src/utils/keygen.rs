use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use pem_keygen::client::session;
use pem_keygen::utils::config::Config;
use pem_keygen::Result;
use rand::rngs::OsRng;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = Config::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&config, &mut stdin.lock(), &mut stdout.lock()) {
        error!(error = %e, "key generation failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(config: &Config, input: &mut R, output: &mut W) -> Result<usize> {
    let policy = config.bit_length_policy()?;
    debug!(?config, %policy, "starting key generator");

    let generated = session::run(input, output, &mut OsRng, config, &policy)?;

    debug!(generated, "session finished");
    Ok(generated)
}
