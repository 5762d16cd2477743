//! Styles command handler.

use anyhow::Result;

use crate::presentation::render_styles;

/// Print the style catalog.
pub fn execute() -> Result<()> {
    println!("{}", render_styles(None));
    Ok(())
}
