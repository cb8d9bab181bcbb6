//! Command dispatch from parsed shell commands to the contact service.

use super::command::{Command, USAGE};
use crate::error::BookResult;
use crate::services::ContactService;

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next command.
    Continue(String),

    /// Print the message and stop.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }
}

/// Run `command` against `service`.
pub fn execute(service: &mut ContactService, command: Command) -> BookResult<Outcome> {
    let message = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => service.add_contact(&name, &phone)?,
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => service.change_contact(&name, &old_phone, &new_phone)?,
        Command::Phone { name } => service.show_phone(&name)?,
        Command::All => service.list_all(),
        Command::AddBirthday { name, birthday } => service.add_birthday(&name, &birthday)?,
        Command::ShowBirthday { name } => service.show_birthday(&name)?,
        Command::Birthdays => service.upcoming_birthdays(),
        Command::Delete { name } => service.delete_contact(&name)?,
        Command::RemovePhone { name, phone } => service.remove_phone(&name, &phone)?,
        Command::Search { query } => service.search(&query),
        Command::NextBirthday { weekday } => service.next_birthday_on(&weekday)?,
        Command::Help => help_text(),
        Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
    };
    Ok(Outcome::Continue(message))
}

fn help_text() -> String {
    let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    USAGE
        .iter()
        .map(|(usage, about)| format!("  {:<width$}  {}", usage, about, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
