//! Interactive studio session.
//!
//! Reads commands from stdin while rendering every published snapshot, so
//! loading placeholders, results and notification expiry show up as they
//! happen. Generation runs in the background; a second `generate` while
//! one is in flight is refused.

use std::sync::Arc;

use anyhow::Result;
use iconsmith_core::{
    GeneratedIcon, IconStudio, StyleCatalog, StyleId, SubmitOutcome, parse_color_list,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{
    describe_change, render_export, render_notification, render_snapshot, render_styles,
};

const HELP: &str = "\
Commands:
  topic <text>      set the topic
  colors <list>     set the palette, e.g. #FF5733, #33FF57
  style <id>        pick a style (see `styles`)
  styles            list styles
  generate          generate icons for the current prompt
  export <n>|all    save one icon or all of them
  view <n>          open one icon in the browser
  dismiss           close the current notification
  show              print the current prompt and icons
  quit              leave the session";

/// Which icons an `export` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    /// 1-based position in the grid.
    One(usize),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Topic(String),
    Colors(String),
    Style(u32),
    Styles,
    Generate,
    Export(Selection),
    View(usize),
    Dismiss,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> SessionCommand {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));
    let unknown = || SessionCommand::Unknown(line.to_string());

    match word.to_ascii_lowercase().as_str() {
        "" => SessionCommand::Empty,
        "topic" => SessionCommand::Topic(rest.to_string()),
        "colors" | "colours" => SessionCommand::Colors(rest.to_string()),
        "style" => rest.parse().map_or_else(|_| unknown(), SessionCommand::Style),
        "styles" => SessionCommand::Styles,
        "generate" | "g" => SessionCommand::Generate,
        "export" if rest.eq_ignore_ascii_case("all") => SessionCommand::Export(Selection::All),
        "export" => position(rest).map_or_else(unknown, |n| {
            SessionCommand::Export(Selection::One(n))
        }),
        "view" => position(rest).map_or_else(unknown, SessionCommand::View),
        "dismiss" => SessionCommand::Dismiss,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => unknown(),
    }
}

fn position(text: &str) -> Option<usize> {
    text.parse().ok().filter(|n| *n > 0)
}

/// Pick icons for `selection`, keeping their 1-based numbers.
pub fn select_icons(
    icons: &[GeneratedIcon],
    selection: Selection,
) -> Result<Vec<(usize, GeneratedIcon)>, String> {
    match selection {
        Selection::All if icons.is_empty() => Err("Nothing to export yet.".to_string()),
        Selection::All => Ok(icons
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, icon)| (index + 1, icon))
            .collect()),
        Selection::One(n) => n
            .checked_sub(1)
            .and_then(|index| icons.get(index))
            .map(|icon| vec![(n, icon.clone())])
            .ok_or_else(|| format!("No icon #{n}; there are {}.", icons.len())),
    }
}

/// Run the session until `quit` or end of input.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let studio = Arc::clone(ctx.studio());
    let mut updates = studio.subscribe();
    let mut previous = updates.borrow_and_update().clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}\n");
    println!("{}", render_snapshot(&previous));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = updates.borrow_and_update().clone();
                for line in describe_change(&previous, &current) {
                    println!("{line}");
                }
                previous = current;
            }
            line = lines.next_line() => {
                let Some(line) = line.map_err(CliError::from)? else {
                    break;
                };
                if !run_command(&studio, parse_line(&line)).await {
                    break;
                }
            }
        }
    }

    debug!("Studio session ended");
    studio.teardown();
    Ok(())
}

/// Returns `false` when the session should end.
async fn run_command(studio: &Arc<IconStudio>, command: SessionCommand) -> bool {
    match command {
        SessionCommand::Topic(topic) => {
            studio.update_form(|form| form.topic = topic);
        }
        SessionCommand::Colors(colors) => {
            println!("Palette: {}", parse_color_list(&colors).join(", "));
            studio.update_form(|form| form.colors = colors);
        }
        SessionCommand::Style(id) => match StyleCatalog::find(StyleId(id)) {
            Some(style) => {
                println!("Style: {}", style.name);
                studio.update_form(|form| form.style = style.id);
            }
            None => println!("Unknown style {id}; type `styles` for the list."),
        },
        SessionCommand::Styles => println!("{}", render_styles(Some(studio.form().style))),
        SessionCommand::Generate => start_generation(studio),
        SessionCommand::Export(selection) => export(studio, selection).await,
        SessionCommand::View(n) => match select_icons(&studio.snapshot().icons, Selection::One(n)) {
            Ok(picked) => picked.iter().for_each(|(_, icon)| studio.view_asset(icon)),
            Err(message) => println!("{message}"),
        },
        SessionCommand::Dismiss => studio.dismiss_notification(),
        SessionCommand::Show => show(studio),
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Quit => return false,
        SessionCommand::Empty => {}
        SessionCommand::Unknown(line) => println!("Unknown command: {line} (type `help`)"),
    }
    true
}

fn start_generation(studio: &Arc<IconStudio>) {
    if studio.is_loading() {
        println!("A generation is already in progress.");
        return;
    }
    if !studio.can_submit() {
        println!("Enter a topic first: topic <text>");
        return;
    }

    let studio = Arc::clone(studio);
    tokio::spawn(async move {
        if let SubmitOutcome::Rejected(rejection) = studio.generate().await {
            println!("{}", render_notification(&rejection.to_string()));
        }
    });
}

async fn export(studio: &IconStudio, selection: Selection) {
    let picked = match select_icons(&studio.snapshot().icons, selection) {
        Ok(picked) => picked,
        Err(message) => {
            println!("{message}");
            return;
        }
    };

    for (number, icon) in picked {
        let outcome = studio.export_asset(&icon).await;
        println!("{}", render_export(number, &icon, &outcome));
    }
}

fn show(studio: &IconStudio) {
    let form = studio.form();
    let style = StyleCatalog::find(form.style).map_or("unknown", |style| style.name);
    println!("Topic: {}", form.topic);
    println!("Palette: {}", parse_color_list(&form.colors).join(", "));
    println!("Style: {style}");
    println!("{}", render_snapshot(&studio.snapshot()));
    if let Some(message) = studio.notification() {
        println!("{}", render_notification(&message));
    }
}
