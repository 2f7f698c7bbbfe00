//! The `swift-autolink-extract` binary
use std::io::Write;

use colored::{control, Colorize};
use env_logger::Env;
use log::error;
use swift_autolink_extract::launcher::{envs, LAUNCH_FAILURE_EXIT_CODE};

/// The main function of the `swift-autolink-extract` binary
///
/// We initialize the logging interface and configure the usage of colors as early as possible
/// here. Then we call the main [`swift_autolink_extract::launcher::run`] library function and exit
/// with the exit code of the delegate. If the delegate could not be launched, the error is logged
/// and we exit with [`LAUNCH_FAILURE_EXIT_CODE`].
fn main() {
    // Configure the colored crate to respect SWIFT_AUTOLINK_EXTRACT_COLOR and CARGO_TERM_COLOR
    let color = std::env::var(envs::SWIFT_AUTOLINK_EXTRACT_COLOR).ok();
    if let Some(var) = color
        .clone()
        .or_else(|| std::env::var(envs::CARGO_TERM_COLOR).ok())
    {
        if var == "never" {
            control::set_override(false);
        } else if var == "always" {
            control::set_override(true);
        } else {
            // do nothing
        }
    }

    env_logger::Builder::from_env(
        Env::default()
            .filter_or(envs::SWIFT_AUTOLINK_EXTRACT_LOG, "warn")
            .write_style(color.map_or(envs::CARGO_TERM_COLOR, |_| {
                envs::SWIFT_AUTOLINK_EXTRACT_COLOR
            })),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{}: {:<5}: {}",
            record
                .module_path()
                .unwrap_or_else(|| record.module_path_static().unwrap_or("???")),
            match record.level() {
                log::Level::Error => "Error".red().bold(),
                log::Level::Warn => "Warn".yellow().bold(),
                log::Level::Info => "Info".green().bold(),
                log::Level::Debug => "Debug".blue().bold(),
                log::Level::Trace => "Trace".cyan().bold(),
            },
            record.args()
        )
    })
    .init();

    match swift_autolink_extract::launcher::run() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            error!("{error}");
            std::process::exit(LAUNCH_FAILURE_EXIT_CODE)
        }
    }
}
