//! The module containing the crate main [`Error`] type

use std::fmt::Display;
use std::path::PathBuf;

/// The main swift-autolink-extract error type
///
/// Both variants describe a failure to launch the delegate at all. Once the delegate is running,
/// its exit status is passed through and never turned into an [`Error`].
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Error {
    /// The error when trying to start an external [`std::process::Command`] fails
    ///
    /// `LaunchError(executable_path, message)`
    LaunchError(PathBuf, String),
    /// The error when the locator executable cannot be found
    ///
    /// `ResolveError(tool_name, message)`
    ResolveError(String, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LaunchError(exec, message) => {
                write!(f, "Error launching '{}': {message}", exec.display())
            }
            Self::ResolveError(tool, message) => {
                write!(
                    f,
                    "Error resolving '{tool}': {message}. Is '{tool}' installed, executable and \
                     in the PATH?"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
