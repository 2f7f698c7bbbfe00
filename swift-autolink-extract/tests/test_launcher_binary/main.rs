#[path = "../common/mod.rs"]
mod common;

mod test_launch_failure;
