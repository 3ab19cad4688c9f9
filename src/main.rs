//! airbridge - air-quality forecast accessories for smart-home bridges
//!
//! Binary entry point standing in for the host runtime: it restores the
//! persisted accessory cache, fires the launch signal, and lets the platform
//! reconcile the configured locations against the registry on disk.

mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use airbridge_core::prelude::*;
use airbridge_platform::{Platform, PlatformConfig};
use clap::Parser;

use store::FileRegistry;

/// Reconcile configured forecast locations against the accessory registry
#[derive(Parser, Debug)]
#[command(name = "airbridge", version)]
#[command(about = "Air-quality forecast accessories for smart-home bridges", long_about = None)]
struct Args {
    /// Path to the platform configuration (JSON)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Accessory cache file (defaults to the local data directory)
    #[arg(long, value_name = "PATH")]
    cache: Option<PathBuf>,

    /// Force debugMode logging regardless of the configured level
    #[arg(short = 'D', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("airbridge: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    airbridge_core::logging::init()?;

    let config = PlatformConfig::load(&args.config)?;

    let cache_path = match args.cache {
        Some(path) => path,
        None => store::default_cache_path(),
    };
    let registry = FileRegistry::open(&cache_path)?;
    debug!(
        "Accessory cache: {} ({} records)",
        cache_path.display(),
        registry.records().len()
    );

    let restored = registry.records().to_vec();
    let mut platform = Platform::new(config, args.debug, registry);
    for record in restored {
        platform.configure_accessory(record);
    }
    platform.did_finish_launching();

    Ok(())
}
