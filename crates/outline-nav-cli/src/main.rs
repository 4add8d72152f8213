//! `outline-nav` command-line host.
//!
//! Loads a source file and a saved outline, runs one navigation command from the given
//! selection and prints the resulting selection. A command that does nothing prints nothing
//! and still exits successfully.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CliArgs, format_selection};
use outline_nav::{
    EditorSession, NavigationCommand, Navigator, NavigatorConfig, OutlineNode, Selection,
};
use outline_nav_lsp::{outline_from_value, outline_from_value_utf16};
use serde_json::Value;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    if let Some(selection) = run(&args)? {
        println!("{}", format_selection(&selection));
    }
    Ok(())
}

/// Run the requested command; `None` when it left the selection unchanged.
fn run(args: &CliArgs) -> Result<Option<Selection>> {
    let source = std::fs::read_to_string(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    let config = match &args.config {
        Some(path) => NavigatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => NavigatorConfig::default(),
    };

    let document_id = args.source.display().to_string();
    let mut editor = EditorSession::new(document_id, args.language_id(), &source)
        .with_selection(args.selection());
    let outline = load_outline(&args.outline, &editor, args.utf16)?;

    let navigator = Navigator::with_config(Some(outline), config);
    let command = NavigationCommand::from(args.command);
    match navigator.execute(command, &mut editor) {
        Ok(selection) => Ok(Some(selection)),
        Err(reason) => {
            info!(command = command.id(), %reason, "selection unchanged");
            Ok(None)
        }
    }
}

fn load_outline(path: &Path, editor: &EditorSession, utf16: bool) -> Result<OutlineNode> {
    use outline_nav::EditorView;

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    // Accept a whole publishOutline params object as well as a bare tree.
    let tree = value.get("outline").unwrap_or(&value);

    let outline = if utf16 {
        outline_from_value_utf16(editor.buffer(), tree)
    } else {
        outline_from_value(tree)
    };
    outline.with_context(|| format!("{} does not contain an outline tree", path.display()))
}
