//! Runtime executable and version plumbing.
//!
//! - `find_executable`: PATH-based executable lookup
//! - `check_version`: runs `--version`, optionally bounded by a timeout
//! - `parse_version`: regex extraction of the version token

mod parser;
mod path_finder;
mod version;

pub(crate) use parser::parse_version;
pub(crate) use path_finder::{detect_install_method, find_executable};
pub(crate) use version::check_version;
