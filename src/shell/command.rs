//! Command parsing for the interactive shell.

use crate::error::{BookError, BookResult};

/// A parsed shell command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Delete {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Search {
        query: String,
    },
    NextBirthday {
        weekday: String,
    },
    Help,
    Exit,
}

/// One-line usage for every command, in the order `help` prints them.
pub const USAGE: &[(&str, &str)] = &[
    ("hello", "greet the bot"),
    ("add <name> <phone>", "add a contact or a phone to an existing contact"),
    ("change <name> <old phone> <new phone>", "replace a phone number"),
    ("phone <name>", "show a contact"),
    ("all", "show all contacts"),
    ("add-birthday <name> <DD.MM.YYYY>", "set a contact's birthday"),
    ("show-birthday <name>", "show a contact's birthday"),
    ("birthdays", "birthdays in the coming week"),
    ("delete <name>", "delete a contact"),
    ("remove-phone <name> <phone>", "remove a phone from a contact"),
    ("search <name or phone>", "find contacts"),
    ("next-birthday <weekday>", "next birthday falling on a weekday"),
    ("help", "show this list"),
    ("close | exit", "leave the bot"),
];

impl Command {
    /// Parse one input line.
    ///
    /// The command word is case-insensitive; arguments are split on
    /// whitespace and passed through unchanged. Returns `Ok(None)` for a
    /// blank line.
    ///
    /// # Errors
    ///
    /// - `BookError::UnknownCommand` for an unrecognized command word
    /// - `BookError::Arity` when the argument count is wrong
    pub fn parse(line: &str) -> BookResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let word = word.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match word.as_str() {
            "hello" => {
                expect_args(&word, &args, 0)?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = take_args(&word, args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take_args(&word, args)?;
                Command::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take_args(&word, args)?;
                Command::Phone { name }
            }
            "all" => {
                expect_args(&word, &args, 0)?;
                Command::All
            }
            "add-birthday" => {
                let [name, birthday] = take_args(&word, args)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take_args(&word, args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => {
                expect_args(&word, &args, 0)?;
                Command::Birthdays
            }
            "delete" => {
                let [name] = take_args(&word, args)?;
                Command::Delete { name }
            }
            "remove-phone" => {
                let [name, phone] = take_args(&word, args)?;
                Command::RemovePhone { name, phone }
            }
            "search" => {
                let [query] = take_args(&word, args)?;
                Command::Search { query }
            }
            "next-birthday" => {
                let [weekday] = take_args(&word, args)?;
                Command::NextBirthday { weekday }
            }
            "help" => {
                expect_args(&word, &args, 0)?;
                Command::Help
            }
            "close" | "exit" => {
                expect_args(&word, &args, 0)?;
                Command::Exit
            }
            _ => return Err(BookError::UnknownCommand(word)),
        };

        Ok(Some(command))
    }
}

fn expect_args(command: &str, args: &[String], expected: usize) -> BookResult<()> {
    if args.len() != expected {
        return Err(BookError::Arity {
            command: command.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn take_args<const N: usize>(command: &str, args: Vec<String>) -> BookResult<[String; N]> {
    expect_args(command, &args, N)?;
    args.try_into().map_err(|args: Vec<String>| BookError::Arity {
        command: command.to_string(),
        expected: N,
        got: args.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_parse_is_case_insensitive_for_command_word() {
        assert_eq!(
            Command::parse("ADD Alice 1234567890").unwrap(),
            Some(Command::Add {
                name: "Alice".to_string(),
                phone: "1234567890".to_string(),
            })
        );
        assert_eq!(Command::parse("Exit").unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse("close").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_change_takes_three_args() {
        assert_eq!(
            Command::parse("change Alice 1111111111 2222222222").unwrap(),
            Some(Command::Change {
                name: "Alice".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "2222222222".to_string(),
            })
        );
        assert_eq!(
            Command::parse("change Alice 2222222222").unwrap_err(),
            BookError::Arity {
                command: "change".to_string(),
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn test_parse_birthday_text_passes_through() {
        assert_eq!(
            Command::parse("add-birthday Bob 24.08.1991").unwrap(),
            Some(Command::AddBirthday {
                name: "Bob".to_string(),
                birthday: "24.08.1991".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_arity_errors() {
        assert!(matches!(
            Command::parse("add Alice"),
            Err(BookError::Arity { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            Command::parse("phone"),
            Err(BookError::Arity { expected: 1, got: 0, .. })
        ));
        assert!(matches!(
            Command::parse("all extra"),
            Err(BookError::Arity { expected: 0, got: 1, .. })
        ));
        assert_eq!(
            Command::parse("exit now").unwrap_err(),
            BookError::Arity {
                command: "exit".to_string(),
                expected: 0,
                got: 1,
            }
        );
        assert!(matches!(
            Command::parse("close the bot"),
            Err(BookError::Arity { expected: 0, got: 2, .. })
        ));
        assert!(matches!(
            Command::parse("help me"),
            Err(BookError::Arity { expected: 0, got: 1, .. })
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("fly away").unwrap_err(),
            BookError::UnknownCommand("fly".to_string())
        );
    }
}
