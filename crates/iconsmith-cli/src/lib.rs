//! Command-line front end for iconsmith.
//!
//! `bootstrap` is the composition root: it builds the HTTP adapters, the
//! filesystem save surface and the system browser, and hands them to an
//! [`iconsmith_core::IconStudio`]. Handlers only talk to the studio.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod browser;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod surface;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use browser::{PrintBrowser, SystemBrowser};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use surface::DirectorySurface;
