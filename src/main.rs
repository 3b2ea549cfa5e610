use anyhow::{Context, Result};
use clap::Parser;
use hashschema::DEFAULT_SCHEMA;
use tracing_subscriber::EnvFilter;
mod auth;

#[derive(Debug, Parser)]
#[command(name = "hashschema")]
#[command(
    version,
    about = "Creates and verifies self-describing salted password hashes."
)]
struct Cli {
    /// Verify PASSWORD against this encoded hash instead of creating one
    #[arg(long, value_name = "HASH")]
    verify: Option<String>,

    /// Plaintext password, or '-' to read it from HASHSCHEMA_PASSWORD, stdin or a prompt
    password: String,

    /// Hash schema: PBKDF2/<saltSize>/<iterations>/<hashSize>/<digest>, SSHA256/<saltSize>, SSHA or PLAIN
    #[arg(env = "HASHSCHEMA_SCHEMA", default_value = DEFAULT_SCHEMA)]
    schema: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let password = auth::resolve_password(&args.password)?;

    match args.verify {
        Some(hash) => {
            let valid = hashschema::verify(password.as_bytes(), &hash)
                .await
                .context("failed to verify password")?;
            if valid {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        None => {
            let hash = hashschema::create(password.as_bytes(), &args.schema)
                .await
                .with_context(|| format!("failed to create hash with schema '{}'", args.schema))?;
            println!("{hash}");
        }
    }

    Ok(())
}
