//! The module containing the [`Launcher`] which forwards the arguments to the delegate

pub mod args;
pub mod resolve;

use std::ffi::{OsStr, OsString};
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus};

use anyhow::Result;
use log::debug;

use self::args::DriverArgs;
use self::resolve::{Resolve, SystemResolver};
use crate::error::Error;

/// The exit code of the `swift-autolink-extract` binary if the delegate could not be launched
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 127;
/// The name of the locator which runs the frontend
pub const LOCATOR: &str = "xcrun";

/// The environment variables of the binary
pub mod envs {
    /// Configure the colors of the log output
    pub const SWIFT_AUTOLINK_EXTRACT_COLOR: &str = "SWIFT_AUTOLINK_EXTRACT_COLOR";
    /// Configure the log level
    pub const SWIFT_AUTOLINK_EXTRACT_LOG: &str = "SWIFT_AUTOLINK_EXTRACT_LOG";

    /// The fallback for the color configuration
    pub const CARGO_TERM_COLOR: &str = "CARGO_TERM_COLOR";
}

/// Runs the frontend through the locator and reports its exit code
#[derive(Debug, Clone)]
pub struct Launcher<R> {
    resolver: R,
}

impl<R> Launcher<R>
where
    R: Resolve,
{
    /// Create a new `Launcher` resolving the [`LOCATOR`] with the given `resolver`
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Run the delegate with the `caller_args` and wait for it to terminate
    ///
    /// The `caller_args` must not include the program name. Standard input, output and error are
    /// inherited. There is no timeout.
    ///
    /// Returns the exit code of the delegate as computed by [`exit_code`] or an error if the
    /// delegate could not be launched.
    pub fn run<I, T>(&self, caller_args: I) -> Result<i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let executable = self.resolver.resolve(OsStr::new(LOCATOR))?;
        let args = DriverArgs::new(caller_args);
        debug!(
            "Running '{}' with arguments: {}",
            executable.display(),
            args.to_lossy_string()
        );

        let mut child = Command::new(&executable)
            .args(args.iter())
            .spawn()
            .map_err(|error| Error::LaunchError(executable.clone(), error.to_string()))?;
        debug!("'{}' started with pid {}", executable.display(), child.id());

        let status = child
            .wait()
            .map_err(|error| Error::LaunchError(executable.clone(), error.to_string()))?;

        debug!("'{}' terminated with {status}", executable.display());
        Ok(exit_code(status))
    }
}

impl Default for Launcher<SystemResolver> {
    fn default() -> Self {
        Self::new(SystemResolver)
    }
}

/// Convert the [`ExitStatus`] of the delegate into the exit code of this process
///
/// An exit code is passed through unchanged. A termination by a signal results in the signal
/// number itself and if neither is present the raw wait status is used.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        code
    } else if let Some(signal) = status.signal() {
        signal
    } else {
        status.into_raw()
    }
}

/// Run the delegate with the arguments of the current process
///
/// This is the library entry point of the `swift-autolink-extract` binary. The program name is
/// skipped and all other arguments are forwarded unmodified.
pub fn run() -> Result<i32> {
    Launcher::default().run(std::env::args_os().skip(1))
}
