//! Session-start hook: detect and cache the installed Elide version.

use elide_hooks::{logging, run_version_cache, FileVersionStore, HookError, HookOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HookError> {
    let options = HookOptions::from_env();
    // The working directory is informational only; a vanished one must not
    // stop the version query.
    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        debug!("cannot resolve working directory: {}", e);
        PathBuf::from(".")
    });
    let store = FileVersionStore::new(&options.cache_file);

    run_version_cache(&options, &store, &cwd, &mut std::io::stdout()).await?;
    Ok(())
}
