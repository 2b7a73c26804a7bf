//! Line-oriented driver for a [`PlantStore`].
//!
//! A session reads one command per line, applies it to the store and
//! re-renders the filtered list together with the thirsty-count label.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::Context;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::{
    core::{Clock, PlantStore},
    error::PlantError,
    models::{Filter, Plant, PlantEdit, PlantId},
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),

    #[error("invalid plant id {0:?}")]
    InvalidId(String),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    Plant(#[from] PlantError),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        interval: String,
        last_watered: Option<String>,
    },
    Water(PlantId),
    Edit {
        id: PlantId,
        field: String,
        value: String,
    },
    Filter(Filter),
    WaterAll,
    Delete(PlantId),
    ClearThirsty,
    List,
    Reset,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(line)?;
        let mut args = tokens.into_iter();
        let Some(verb) = args.next() else {
            return Err(CommandError::UnknownCommand(String::new()));
        };

        let command = match verb.as_str() {
            "add" => {
                let name = required(&mut args, "add", "name")?;
                let interval = required(&mut args, "add", "interval")?;
                let last_watered = args.next();
                no_more(&mut args, "add")?;
                Command::Add {
                    name,
                    interval,
                    last_watered,
                }
            }
            "water" => {
                let id = parse_id(&required(&mut args, "water", "id")?)?;
                no_more(&mut args, "water")?;
                Command::Water(id)
            }
            "edit" => {
                let id = parse_id(&required(&mut args, "edit", "id")?)?;
                let field = required(&mut args, "edit", "field")?;
                let value = args.collect::<Vec<_>>().join(" ");
                if value.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "edit",
                        argument: "value",
                    });
                }
                Command::Edit { id, field, value }
            }
            "filter" => {
                let filter = required(&mut args, "filter", "name")?.parse::<Filter>()?;
                no_more(&mut args, "filter")?;
                Command::Filter(filter)
            }
            "delete" => {
                let id = parse_id(&required(&mut args, "delete", "id")?)?;
                no_more(&mut args, "delete")?;
                Command::Delete(id)
            }
            "water-all" => bare(&mut args, "water-all", Command::WaterAll)?,
            "clear-thirsty" => bare(&mut args, "clear-thirsty", Command::ClearThirsty)?,
            "list" => bare(&mut args, "list", Command::List)?,
            "reset" => bare(&mut args, "reset", Command::Reset)?,
            _ => return Err(CommandError::UnknownCommand(verb)),
        };
        Ok(command)
    }
}

fn required(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    args.next()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn no_more(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
) -> Result<(), CommandError> {
    match args.next() {
        Some(_) => Err(CommandError::TooManyArguments(command)),
        None => Ok(()),
    }
}

fn bare(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
    parsed: Command,
) -> Result<Command, CommandError> {
    no_more(args, command)?;
    Ok(parsed)
}

fn parse_id(raw: &str) -> Result<PlantId, CommandError> {
    raw.trim_start_matches('#')
        .parse::<u64>()
        .map(PlantId)
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// Split on whitespace; double quotes group words into one token.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Label shown under the list, e.g. "1 plant to water".
pub fn thirsty_label(count: usize) -> String {
    format!("{} plant{} to water", count, if count == 1 { "" } else { "s" })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Render each snapshot as a JSON object instead of text lines.
    pub json: bool,
    /// Abort on the first failing line instead of warning and carrying on.
    pub strict: bool,
}

/// Counts reported after a session finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub failed: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    filter: Filter,
    plants: Vec<&'a Plant>,
    thirsty_count: usize,
}

pub struct Session<C: Clock, W: Write> {
    store: PlantStore<C>,
    options: SessionOptions,
    out: W,
}

impl<C: Clock, W: Write> Session<C, W> {
    pub fn new(store: PlantStore<C>, options: SessionOptions, out: W) -> Self {
        Self {
            store,
            options,
            out,
        }
    }

    pub fn store(&self) -> &PlantStore<C> {
        &self.store
    }

    pub fn into_parts(self) -> (PlantStore<C>, W) {
        (self.store, self.out)
    }

    /// Run every line of `input`, rendering after each applied command.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let outcome = line
                .parse::<Command>()
                .and_then(|command| self.apply(command));
            match outcome {
                Ok(()) => {
                    summary.applied += 1;
                    self.render()?;
                }
                Err(e) if self.options.strict => {
                    anyhow::bail!("line {}: {}", line_no, e);
                }
                Err(e) => {
                    warn!("line {}: {}", line_no, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "session finished: {} commands applied, {} failed",
            summary.applied, summary.failed
        );
        Ok(summary)
    }

    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Add {
                name,
                interval,
                last_watered,
            } => {
                self.store
                    .add_plant(&name, &interval, last_watered.as_deref())?;
            }
            Command::Water(id) => {
                if !self.store.toggle_plant(id) {
                    return Err(PlantError::PlantNotFound(id).into());
                }
            }
            Command::Edit { id, field, value } => {
                let edit = PlantEdit::parse(&field, &value)?;
                if !self.store.update_plant_field(id, edit) {
                    return Err(PlantError::PlantNotFound(id).into());
                }
            }
            Command::Filter(filter) => self.store.set_filter(filter),
            Command::WaterAll => self.store.mark_all_watered(),
            Command::Delete(id) => {
                if !self.store.delete_plant(id) {
                    return Err(PlantError::PlantNotFound(id).into());
                }
            }
            Command::ClearThirsty => {
                self.store.delete_thirsty();
            }
            Command::List => {}
            Command::Reset => self.store.reset(),
        }
        Ok(())
    }

    /// Write the filtered list and the thirsty-count label.
    pub fn render(&mut self) -> anyhow::Result<()> {
        if self.options.json {
            let snapshot = Snapshot {
                filter: self.store.filter(),
                plants: self.store.plants(),
                thirsty_count: self.store.thirsty_count(),
            };
            serde_json::to_writer(&mut self.out, &snapshot)
                .context("Failed to write JSON snapshot")?;
            writeln!(self.out)?;
            return Ok(());
        }

        for plant in self.store.plants() {
            writeln!(
                self.out,
                "#{} {} - every {} days, last watered {} days ago{}",
                plant.id,
                plant.text,
                plant.recommended_watering,
                plant.last_watered_days,
                if plant.thirsty { " [thirsty]" } else { "" }
            )?;
        }
        writeln!(self.out, "{}", thirsty_label(self.store.thirsty_count()))?;
        writeln!(self.out)?;
        Ok(())
    }
}
