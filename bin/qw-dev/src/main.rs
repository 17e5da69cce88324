//! QueueWise Dev CLI
//!
//! Generates the placeholder configuration files a fresh checkout needs:
//! - `queuewise.toml` with the default settings and commented sections
//! - `.env` with the environment overrides, realtime credentials left blank
//!
//! Existing files are never touched unless `--force` is given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use qw_config::AppConfig;

/// QueueWise development setup
#[derive(Parser, Debug)]
#[command(name = "qw-dev")]
#[command(about = "Generate placeholder QueueWise configuration files")]
struct Args {
    /// Directory to write the files into
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Overwrite files that already exist
    #[arg(long)]
    force: bool,
}

const ENV_TEMPLATE: &str = "\
# QueueWise environment overrides
# Values here take precedence over queuewise.toml

QUEUEWISE_HTTP_PORT=8080
QUEUEWISE_DEV_MODE=true

# Realtime provider credentials (leave blank to use the in-process bus)
QUEUEWISE_REALTIME_ENABLED=false
QUEUEWISE_REALTIME_URL=
QUEUEWISE_REALTIME_APP_ID=
QUEUEWISE_REALTIME_KEY=
QUEUEWISE_REALTIME_SECRET=

RUST_LOG=info
LOG_FORMAT=text
";

fn main() -> Result<()> {
    qw_common::logging::init_logging("qw-dev");

    let args = Args::parse();

    write_file(
        &args.dir.join("queuewise.toml"),
        &AppConfig::example_toml(),
        args.force,
    )?;
    write_file(&args.dir.join(".env"), ENV_TEMPLATE, args.force)?;

    info!("Done. Start the server with `cargo run --bin qw-server`");
    Ok(())
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        info!(path = %path.display(), "Exists, skipping (use --force to overwrite)");
        return Ok(());
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_template_lists_realtime_credentials() {
        for key in [
            "QUEUEWISE_REALTIME_APP_ID",
            "QUEUEWISE_REALTIME_KEY",
            "QUEUEWISE_REALTIME_SECRET",
        ] {
            assert!(ENV_TEMPLATE.contains(key));
        }
    }

    #[test]
    fn test_write_file_respects_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queuewise.toml");
        std::fs::write(&path, "original").unwrap();

        write_file(&path, "replacement", false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");

        write_file(&path, "replacement", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[test]
    fn test_generated_toml_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queuewise.toml");
        write_file(&path, &AppConfig::example_toml(), false).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(config.dev_mode);
    }
}
