//! CLI command implementations.

pub mod classify;
pub mod common;
pub mod config;
pub mod decode;
pub mod init;
pub mod palette;
