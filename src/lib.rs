#![deny(clippy::print_stdout)]

pub mod batch;
pub mod command_line;
pub mod conversion;
pub mod presenter;
pub mod rest_api;
pub mod sdf;
