//! The swift-autolink-extract library
//!
//! Runs `xcrun swift-frontend --driver-mode=swift-autolink-extract` with the arguments of the
//! caller and reports the exit code of the delegate. See [`launcher::Launcher`].

#![doc(test(attr(warn(unused))))]
#![doc(test(attr(allow(unused_extern_crates))))]

pub mod error;
pub mod launcher;
pub mod util;
