//! Shared building blocks for dchound: the directory data model, the CLI
//! runtime configuration, the error taxonomy and the output macros.

pub mod config;
pub mod directory;
pub mod error;
pub mod output;
