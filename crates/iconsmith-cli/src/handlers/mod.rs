//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub [async] fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Validate CLI-specific input, call the studio, format the result
//!
//! Generation, export and notification rules live in iconsmith-core.

pub mod export;
pub mod generate;
pub mod studio;
pub mod styles;
pub mod view;
