//! Command-line arguments.
//!
//! Positions are `LINE:COLUMN`, 1-based on input and output like most editors' status bars.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use outline_nav::{NavigationCommand, Position, Selection, profile_for_path};
use std::path::PathBuf;

/// Structural navigation over an analysis-server outline
#[derive(Parser, Debug)]
#[command(
    name = "outline-nav",
    version,
    about = "Structural navigation over an analysis-server outline"
)]
pub struct CliArgs {
    /// Command to run
    #[arg(value_enum)]
    pub command: CommandArg,

    /// Source file the outline describes
    #[arg(long, value_name = "FILE")]
    pub source: PathBuf,

    /// Outline JSON: a bare outline tree or a publishOutline notification's params
    #[arg(long, value_name = "FILE")]
    pub outline: PathBuf,

    /// Caret position
    #[arg(long, value_name = "LINE:COLUMN", value_parser = parse_position)]
    pub cursor: Position,

    /// Selection anchor; the selection runs from here to --cursor
    #[arg(long, value_name = "LINE:COLUMN", value_parser = parse_position)]
    pub anchor: Option<Position>,

    /// Language id of the source file [default: from the file extension, else dart]
    #[arg(long)]
    pub language: Option<String>,

    /// Navigator configuration (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Outline columns are UTF-16 code units
    #[arg(long)]
    pub utf16: bool,

    /// Log why a command did nothing
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// The selection the command starts from.
    pub fn selection(&self) -> Selection {
        Selection::new(self.anchor.unwrap_or(self.cursor), self.cursor)
    }

    /// The language id to run with.
    pub fn language_id(&self) -> String {
        self.language.clone().unwrap_or_else(|| {
            profile_for_path(&self.source.to_string_lossy())
                .map(|profile| profile.id)
                .unwrap_or_else(|| "dart".to_string())
        })
    }
}

/// Navigation commands by their command-line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommandArg {
    /// Caret to the current node's start, then to its parent's start
    Parent,
    /// Caret to the preferred child, or into a leaf's argument list
    Child,
    /// Select the next argument, element or sibling
    Next,
    /// Select the previous argument, element or sibling
    Previous,
    /// Select the node at the caret, or grow to the parent node
    SelectBlock,
    /// Caret just inside the argument list
    Enter,
}

impl From<CommandArg> for NavigationCommand {
    fn from(arg: CommandArg) -> Self {
        match arg {
            CommandArg::Parent => NavigationCommand::Parent,
            CommandArg::Child => NavigationCommand::Child,
            CommandArg::Next => NavigationCommand::NextArgument,
            CommandArg::Previous => NavigationCommand::PreviousArgument,
            CommandArg::SelectBlock => NavigationCommand::SelectCurrentBlock,
            CommandArg::Enter => NavigationCommand::EnterInvocation,
        }
    }
}

/// Parse a 1-based `LINE:COLUMN` into a 0-based position.
pub fn parse_position(text: &str) -> anyhow::Result<Position> {
    let (line, column) = text
        .split_once(':')
        .with_context(|| format!("expected LINE:COLUMN, got '{text}'"))?;
    let line: usize = line.trim().parse().context("invalid line number")?;
    let column: usize = column.trim().parse().context("invalid column number")?;
    if line == 0 || column == 0 {
        bail!("line and column are 1-based, got '{text}'");
    }
    Ok(Position::new(line - 1, column - 1))
}

/// Render a 0-based position as 1-based `LINE:COLUMN`.
pub fn format_position(pos: Position) -> String {
    format!("{}:{}", pos.line + 1, pos.character + 1)
}

/// Render a selection as `ANCHOR-ACTIVE`.
pub fn format_selection(selection: &Selection) -> String {
    format!(
        "{}-{}",
        format_position(selection.anchor),
        format_position(selection.active)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3:7").unwrap(), Position::new(2, 6));
        assert_eq!(parse_position(" 1 : 1 ").unwrap(), Position::new(0, 0));
        assert!(parse_position("0:1").is_err());
        assert!(parse_position("12").is_err());
        assert!(parse_position("a:b").is_err());
    }

    #[test]
    fn test_format_selection() {
        let selection = Selection::new(Position::new(0, 4), Position::new(1, 0));
        assert_eq!(format_selection(&selection), "1:5-2:1");
    }

    #[test]
    fn test_arguments() {
        let args = CliArgs::try_parse_from([
            "outline-nav",
            "select-block",
            "--source",
            "main.dart",
            "--outline",
            "main.json",
            "--cursor",
            "2:3",
            "--anchor",
            "2:1",
        ])
        .unwrap();
        assert_eq!(args.command, CommandArg::SelectBlock);
        assert_eq!(args.language_id(), "dart");
        assert_eq!(
            args.selection(),
            Selection::new(Position::new(1, 0), Position::new(1, 2))
        );
        assert_eq!(
            NavigationCommand::from(args.command),
            NavigationCommand::SelectCurrentBlock
        );
    }
}
