//! The module containing the [`Resolve`] capability used to find the locator executable

use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Result;

use crate::util::resolve_binary_path;

/// Turn the name of a tool into the path of an executable which can be spawned
pub trait Resolve {
    /// Resolve `name` to the path of an executable
    ///
    /// Implementations return a [`crate::error::Error::ResolveError`] if `name` cannot be found.
    fn resolve(&self, name: &OsStr) -> Result<PathBuf>;
}

/// The [`Resolve`] implementation following the system convention of searching the `PATH`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemResolver;

impl Resolve for SystemResolver {
    fn resolve(&self, name: &OsStr) -> Result<PathBuf> {
        resolve_binary_path(name)
    }
}
