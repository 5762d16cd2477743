//! Generate command handler.

use anyhow::Result;
use iconsmith_core::{StyleId, SubmitOutcome, SubmitRejection};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_export, render_loading, render_snapshot};

/// Arguments for one-shot generation.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub topic: String,
    pub colors: String,
    pub style: u32,
    /// Save every icon into the context's output directory.
    pub export: bool,
    /// Open every icon in the browsing context.
    pub open: bool,
}

/// Generate a set, print it, then optionally export or open each icon.
///
/// # Errors
///
/// - [`CliError::Arguments`] for a blank topic or unknown style
/// - [`CliError::Generation`] carrying the notification text when the
///   request fails
pub async fn execute(ctx: &CliContext, args: GenerateArgs) -> Result<()> {
    let studio = ctx.studio();
    studio.update_form(|form| {
        form.topic = args.topic;
        form.colors = args.colors;
        form.style = StyleId(args.style);
    });
    if !studio.can_submit() {
        return Err(rejection_error(&SubmitRejection::BlankTopic).into());
    }

    println!("{}", render_loading());
    match studio.generate().await {
        SubmitOutcome::Succeeded { .. } => {}
        SubmitOutcome::Failed { message } => return Err(CliError::Generation(message).into()),
        SubmitOutcome::Rejected(rejection) => return Err(rejection_error(&rejection).into()),
        SubmitOutcome::Discarded => return Ok(()),
    }

    let snapshot = studio.snapshot();
    println!("{}", render_snapshot(&snapshot));

    if args.export && !snapshot.icons.is_empty() {
        println!();
        let outcomes = studio.export_all().await;
        for (index, (icon, outcome)) in snapshot.icons.iter().zip(&outcomes).enumerate() {
            println!("{}", render_export(index + 1, icon, outcome));
        }
    }

    if args.open {
        for icon in &snapshot.icons {
            studio.view_asset(icon);
        }
    }

    Ok(())
}

fn rejection_error(rejection: &SubmitRejection) -> CliError {
    match rejection {
        SubmitRejection::BlankTopic => CliError::Arguments("topic must not be blank".to_string()),
        SubmitRejection::UnknownStyle(id) => {
            CliError::Arguments(format!("unknown style {id} (see `iconsmith styles`)"))
        }
        other => CliError::Generation(other.to_string()),
    }
}
