//! Line-oriented operator console
//!
//! Each input line is one action on the terminal:
//!
//! | Command | Context | Action |
//! |---------|---------|--------|
//! | `table N` | restaurant | select table N |
//! | `seat N` | table | edit seat N's order |
//! | `done` | table | back to the restaurant |
//! | `add N` | order | add menu item N |
//! | `cancel-item ID` | order | cancel an item not yet cooking |
//! | `update` | order | send pending items to the kitchen |
//! | `discard` | order | drop pending items |
//! | `kitchen` | any | open the kitchen board |
//! | `back` | kitchen | return to the suspended context |
//! | `progress ID` | kitchen | move an item to its next stage |
//! | `show` | any | redraw |
//! | `quit` | any | exit |

use crate::controller::{Context, Terminal, View};
use crate::floor::FloorError;
use shared::{ErrorCode, ItemId, MenuItemId};
use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Table(usize),
    Seat(usize),
    Done,
    Add(MenuItemId),
    CancelItem(ItemId),
    Update,
    Discard,
    Kitchen,
    Back,
    Progress(ItemId),
    Show,
    Quit,
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid item id: {0}")]
    InvalidItemId(#[from] uuid::Error),

    #[error("Kitchen is not open")]
    KitchenNotOpen,

    #[error(transparent)]
    Floor(#[from] FloorError),
}

impl ConsoleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsoleError::Floor(e) => e.code(),
            ConsoleError::KitchenNotOpen => ErrorCode::InvalidContext,
            _ => ErrorCode::InvalidRequest,
        }
    }
}

fn argument<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ConsoleError> {
    arg.ok_or(ConsoleError::MissingArgument { command, expected })
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(ConsoleError::Empty)?;
        let arg = parts.next();

        let parsed = match command.to_ascii_lowercase().as_str() {
            "table" => Self::Table(argument(arg, "table", "a table number")?.parse()?),
            "seat" => Self::Seat(argument(arg, "seat", "a seat number")?.parse()?),
            "done" => Self::Done,
            "add" => Self::Add(MenuItemId(argument(arg, "add", "a menu item number")?.parse()?)),
            "cancel-item" => {
                Self::CancelItem(argument(arg, "cancel-item", "an item id")?.parse()?)
            }
            "update" => Self::Update,
            "discard" => Self::Discard,
            "kitchen" => Self::Kitchen,
            "back" => Self::Back,
            "progress" => Self::Progress(argument(arg, "progress", "an item id")?.parse()?),
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            other => return Err(ConsoleError::Unknown(other.to_string())),
        };
        Ok(parsed)
    }
}

/// Console session around a terminal
pub struct Console<V: View> {
    terminal: Terminal<V>,
    suspended: Option<Context>,
}

impl<V: View> Console<V> {
    pub fn new(terminal: Terminal<V>) -> Self {
        Self {
            terminal,
            suspended: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<V> {
        &self.terminal
    }

    /// Run one command. Returns `false` when the console should stop.
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<bool, ConsoleError> {
        let t = &mut self.terminal;
        match command {
            ConsoleCommand::Table(index) => t.table_touched(index)?,
            ConsoleCommand::Seat(seat) => t.seat_touched(seat)?,
            ConsoleCommand::Done => t.done()?,
            ConsoleCommand::Add(menu_item) => {
                let id = t.add_item(menu_item)?;
                tracing::info!(item_id = %id, "Added");
            }
            ConsoleCommand::CancelItem(id) => {
                if !t.cancel_item(id)? {
                    tracing::info!(item_id = %id, "Item is already being prepared");
                }
            }
            ConsoleCommand::Update => t.update_order()?,
            ConsoleCommand::Discard => t.cancel_changes()?,
            ConsoleCommand::Kitchen => {
                if t.context() != Context::Kitchen {
                    self.suspended = Some(t.enter_kitchen());
                }
            }
            ConsoleCommand::Back => {
                let previous = self.suspended.take().ok_or(ConsoleError::KitchenNotOpen)?;
                t.resume(previous)?;
            }
            ConsoleCommand::Progress(id) => {
                t.progress_state(id)?;
                let next = t.button_text(id)?;
                tracing::info!(item_id = %id, next, "Progressed");
            }
            ConsoleCommand::Show => t.redraw(),
            ConsoleCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Read commands line by line until `quit` or end of input.
    /// Bad commands are logged and skipped.
    pub fn run(&mut self, input: impl BufRead) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let result = line
                .parse::<ConsoleCommand>()
                .and_then(|command| self.execute(command));
            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    let code = e.code();
                    tracing::warn!(
                        code = %code,
                        reason = code.message(),
                        error = %e,
                        input = %line,
                        "Command failed"
                    );
                }
            }
        }
        Ok(())
    }
}
