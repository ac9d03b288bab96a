//! Batch mode
//!
//! Replays a script of editor actions against a fresh expense list and
//! prints the result. One action per line:
//!
//! ```text
//! # comment
//! set Coffee        stage text (everything after the keyword's separator, verbatim)
//! add               commit the staged text
//! add Lunch         stage and commit in one step
//! delete 0          remove by position (alias: del)
//! list              print the list so far
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::display::{format_expense_json, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{ActionOutcome, ExpenseAction, ExpenseListStore};

/// Output format for printed lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array of strings
    Json,
}

/// Arguments for `expense batch`
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Script file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchCommand {
    /// Stage text
    Set(String),
    /// Commit, optionally staging text first
    Add(Option<String>),
    /// Remove by position
    Delete(usize),
    /// Print the current list
    List,
}

/// Parse a single line; `Ok(None)` for blank lines and comments
pub fn parse_line(line_no: usize, raw: &str) -> ExpenseResult<Option<BatchCommand>> {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = split_keyword(line);

    let command = match keyword.to_lowercase().as_str() {
        "set" => BatchCommand::Set(rest.unwrap_or_default().to_string()),
        // `add` followed only by whitespace commits what is already staged
        "add" => BatchCommand::Add(
            rest.filter(|r| !r.trim().is_empty())
                .map(str::to_string),
        ),
        "delete" | "del" => {
            let arg = rest.map(str::trim).unwrap_or_default();
            if arg.is_empty() {
                return Err(ExpenseError::batch(line_no, "delete needs an index"));
            }
            let index = arg.parse::<usize>().map_err(|_| {
                ExpenseError::batch(line_no, format!("invalid index '{}'", arg))
            })?;
            BatchCommand::Delete(index)
        }
        "list" if rest.map_or(true, |r| r.trim().is_empty()) => BatchCommand::List,
        "list" => {
            return Err(ExpenseError::batch(line_no, "list takes no arguments"));
        }
        other => {
            return Err(ExpenseError::batch(
                line_no,
                format!("unknown command '{}'", other),
            ));
        }
    };

    Ok(Some(command))
}

/// Split at the first whitespace character; the separator is dropped and
/// the remainder kept verbatim
fn split_keyword(line: &str) -> (&str, Option<&str>) {
    match line.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, sep)) => (&line[..i], Some(&line[i + sep.len_utf8()..])),
        None => (line, None),
    }
}

/// Parse a whole script, failing on the first bad line
pub fn parse_script(script: &str) -> ExpenseResult<Vec<BatchCommand>> {
    let mut commands = Vec::new();
    for (i, raw) in script.lines().enumerate() {
        if let Some(command) = parse_line(i + 1, raw)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Run a script against a fresh store, writing `list` output and the final
/// list to `out`
pub fn run_script<W: Write>(
    script: &str,
    format: OutputFormat,
    out: &mut W,
) -> ExpenseResult<ExpenseListStore> {
    let commands = parse_script(script)?;
    let mut store = ExpenseListStore::new();

    for command in commands {
        match command {
            BatchCommand::Set(text) => {
                store.dispatch(ExpenseAction::SetPending(text));
            }
            BatchCommand::Add(text) => {
                if let Some(text) = text {
                    store.dispatch(ExpenseAction::SetPending(text));
                }
                if store.dispatch(ExpenseAction::Add) == ActionOutcome::IgnoredBlank {
                    info!("blank input not added");
                }
            }
            BatchCommand::Delete(index) => {
                store.dispatch(ExpenseAction::Delete(index));
            }
            BatchCommand::List => {
                write_list(&store, format, out)?;
            }
        }
    }

    write_list(&store, format, out)?;
    Ok(store)
}

fn write_list<W: Write>(
    store: &ExpenseListStore,
    format: OutputFormat,
    out: &mut W,
) -> ExpenseResult<()> {
    let rendered = match format {
        OutputFormat::Table => format_expense_table(store.entries()),
        OutputFormat::Json => format_expense_json(store.entries())?,
    };
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Handle `expense batch`
pub fn handle_batch_command(args: BatchArgs) -> ExpenseResult<()> {
    let script = match &args.file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            ExpenseError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&script, args.format, &mut out)?;
    Ok(())
}
