//! The module containing the [`DriverArgs`], the argument vector handed to the locator

use std::ffi::{OsStr, OsString};

/// The name of the tool the locator runs
pub const FRONTEND_TOOL: &str = "swift-frontend";
/// The driver mode selecting the autolink extraction of the frontend
pub const DRIVER_MODE_FLAG: &str = "--driver-mode=swift-autolink-extract";

/// The arguments of the locator
///
/// Always starts with [`FRONTEND_TOOL`] and [`DRIVER_MODE_FLAG`] followed by the caller arguments
/// in their original order. The caller arguments are neither parsed, split nor re-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverArgs(Vec<OsString>);

impl DriverArgs {
    /// Create new `DriverArgs` from the arguments of the caller
    ///
    /// The arguments must not contain the program name.
    pub fn new<I, T>(caller_args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let caller_args = caller_args.into_iter();
        let mut args = Vec::with_capacity(caller_args.size_hint().0 + 2);
        args.push(OsString::from(FRONTEND_TOOL));
        args.push(OsString::from(DRIVER_MODE_FLAG));
        args.extend(caller_args.map(Into::into));
        Self(args)
    }

    /// The number of arguments including the two fixed ones
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments (never true, the fixed arguments are always present)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the arguments
    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.0.iter().map(OsString::as_os_str)
    }

    /// Return the arguments joined by a space for logging purposes
    pub fn to_lossy_string(&self) -> String {
        self.iter()
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DriverArgs> for Vec<OsString> {
    fn from(value: DriverArgs) -> Self {
        value.0
    }
}
