//! This module provides common utility functions
use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Result;
use log::debug;
use which::which;

use crate::error::Error;

/// Resolve the path of an executable `binary` by searching the `PATH`
///
/// If `binary` contains a path separator, it is checked as is instead of being searched for.
pub fn resolve_binary_path<T>(binary: T) -> Result<PathBuf>
where
    T: AsRef<OsStr>,
{
    let binary = binary.as_ref();
    match which(binary) {
        Ok(path) => {
            debug!("Found '{}': '{}'", binary.to_string_lossy(), path.display());
            Ok(path)
        }
        Err(error) => {
            Err(Error::ResolveError(binary.to_string_lossy().to_string(), error.to_string()).into())
        }
    }
}
