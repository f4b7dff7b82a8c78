//! CLI command implementations

pub mod anonymize;
pub mod entities;
pub mod init;
pub mod status;
pub mod validate;
