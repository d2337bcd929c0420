//! rdlgen-cli - Java source generation for RDL schemas
//!
//! The `rdlgen` binary is a thin clap front end over these modules:
//! - [`config`] for `rdlgen.toml`
//! - [`generate`] for the `java`, `types` and `check` commands
//! - [`java`] for model classes and [`artifacts`] for the fixed boilerplate classes
//! - [`output`] for packages, paths and headers
//! - [`logging`] for the stderr tracing subscriber

pub mod artifacts;
pub mod config;
pub mod generate;
pub mod java;
pub mod logging;
pub mod output;
