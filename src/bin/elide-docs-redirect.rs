//! Pre-fetch hook: redirect Elide documentation fetches to `llms.txt`.
//!
//! Always prints exactly one decision object.

use elide_hooks::{logging, DocsRedirector, FileVersionStore, HookOptions, ENV_TOOL_INPUT};
use std::io::{IsTerminal, Read};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// How long to wait for a piped payload before deciding without one.
const STDIN_WAIT: Duration = Duration::from_millis(500);

fn main() {
    logging::init();

    let options = HookOptions::from_env();
    let redirector = DocsRedirector::new(FileVersionStore::new(&options.cache_file));
    let payload = read_payload();

    println!("{}", redirector.decide_payload(payload.as_deref()).to_json());
}

/// The tool input from the environment, falling back to piped stdin.
///
/// Stdin is read on a detached thread so a writer that never closes the pipe
/// cannot hold the hook past [`STDIN_WAIT`].
fn read_payload() -> Option<String> {
    if let Ok(input) = std::env::var(ENV_TOOL_INPUT) {
        return Some(input);
    }

    if std::io::stdin().is_terminal() {
        return None;
    }

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut input = String::new();
        let result = std::io::stdin().lock().read_to_string(&mut input).map(|_| input);
        let _ = tx.send(result);
    });

    match rx.recv_timeout(STDIN_WAIT) {
        Ok(Ok(input)) if !input.trim().is_empty() => Some(input),
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            debug!("failed to read stdin: {}", e);
            None
        }
        Err(_) => {
            debug!("no payload on stdin within {:?}", STDIN_WAIT);
            None
        }
    }
}
