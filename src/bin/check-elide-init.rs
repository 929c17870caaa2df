//! Session-start hook: suggest `/elide:init` in uninitialized Elide projects.

use elide_hooks::{logging, HookOptions, ProjectDetector};
use tracing::debug;

fn main() {
    logging::init();

    let Ok(cwd) = std::env::current_dir() else {
        debug!("no working directory, nothing to check");
        return;
    };

    let options = HookOptions::from_env();
    if let Some(advisory) = ProjectDetector::standard(&options).advisory(&cwd) {
        println!("{}", advisory);
    }
}
