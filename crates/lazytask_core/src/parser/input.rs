//! Live input parsing.
//!
//! # Responsibility
//! - Tokenize one raw line and dispatch on its first token.
//! - Share per-kind parameter extraction with storage decoding.
//!
//! # Invariants
//! - Tokens are produced by single-space splitting with trailing empty
//!   tokens dropped; interior empty tokens survive, so a doubled space
//!   before an index still fails as an invalid parameter.
//! - `todo` keeps the remainder after the first space verbatim; it is
//!   never re-split.

use super::command::Command;
use super::{ParseError, ParseResult};

/// Parses one line of user input into a typed command.
///
/// # Contract
/// - Unrecognized first tokens (including an empty line) return
///   `Ok(Command::Invalid)`, never an error.
/// - `mark`/`unmark`/`delete` indices are parsed as numbers here; range
///   checking against the live list is the executor's job.
pub fn parse_input(input: &str) -> ParseResult<Command> {
    let tokens = tokenize(input);

    let command = match tokens.first().copied().unwrap_or_default() {
        "bye" => Command::Bye,
        "list" => Command::List,
        "mark" => Command::Mark {
            index: retrieve_index("mark", &tokens)?,
        },
        "unmark" => Command::Unmark {
            index: retrieve_index("unmark", &tokens)?,
        },
        "delete" => Command::Delete {
            index: retrieve_index("delete", &tokens)?,
        },
        "todo" => Command::Todo {
            name: todo_name("todo", input)?.to_string(),
        },
        "deadline" => {
            let (name, by) = extract_timed("deadline", "/by", "by", &tokens)?;
            Command::Deadline { name, by }
        }
        "event" => {
            let (name, at) = extract_timed("event", "/at", "at", &tokens)?;
            Command::Event { name, at }
        }
        _ => Command::Invalid,
    };

    Ok(command)
}

/// Splits on single spaces and drops trailing empty tokens, so `"mark "`
/// still counts as a one-token line.
pub(super) fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split(' ').collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

/// Retrieves and parses the index argument of `mark`/`unmark`/`delete`.
fn retrieve_index(command: &'static str, tokens: &[&str]) -> ParseResult<usize> {
    if tokens.len() < 2 {
        return Err(ParseError::MissingParameter {
            command,
            parameter: "index",
        });
    }

    tokens[1]
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidParameter {
            command,
            parameter: "index",
        })
}

/// Extracts the verbatim name of a `todo` from the full input line.
pub(super) fn todo_name<'a>(command: &'static str, input: &'a str) -> ParseResult<&'a str> {
    match input.split_once(' ') {
        Some((_, rest)) if !rest.is_empty() => Ok(rest),
        _ => Err(ParseError::MissingParameter {
            command,
            parameter: "name",
        }),
    }
}

/// Extracts `(name, when)` for `deadline`/`event`.
///
/// Scans left to right for the first literal `marker` token; tokens before
/// it (after the command) rejoin with single spaces into the name, tokens
/// after it into the time expression. Rejoining collapses interior
/// multi-space runs to single spaces. A marker with nothing following
/// rejoins to an empty `when` rather than failing; that behavior is load
/// bearing for stored lines and is pinned by tests.
pub(super) fn extract_timed(
    command: &'static str,
    marker: &'static str,
    parameter: &'static str,
    tokens: &[&str],
) -> ParseResult<(String, String)> {
    if tokens.len() < 2 {
        return Err(ParseError::MissingParameter {
            command,
            parameter: "name",
        });
    }

    let marker_at = match tokens[1..].iter().position(|token| *token == marker) {
        Some(offset) => offset + 1,
        None => {
            return Err(ParseError::MissingParameter { command, parameter });
        }
    };

    Ok((
        rejoin(&tokens[1..marker_at]),
        rejoin(&tokens[marker_at + 1..]),
    ))
}

/// Rejoins tokens with single spaces, dropping empty tokens left behind by
/// multi-space runs in the input.
fn rejoin(tokens: &[&str]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
