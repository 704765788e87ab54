//! Storage-line decoding.
//!
//! # Responsibility
//! - Reconstruct tasks from persisted lines via the same per-kind
//!   extraction used for live input.
//!
//! # Invariants
//! - The line header is decoded structurally (length-checked character
//!   extraction), never by bare index arithmetic; the byte format itself
//!   is unchanged: kind letter at index 1, done flag at index 4.
//! - Lines with an unknown kind letter are skipped, not fatal.
//! - The first flawed line fails the whole batch with one wrapped error.

use super::input::{extract_timed, todo_name, tokenize};
use super::{ParseError, ParseResult};
use crate::model::task::{Task, TaskKind};

/// Reconstructs tasks from persisted storage lines.
///
/// Callers treat the single wrapped error as "prior data unrecoverable"
/// and proceed with an empty list.
pub fn parse_storage_data(lines: &[String]) -> ParseResult<Vec<Task>> {
    let mut tasks = Vec::new();

    for line in lines {
        match decode_line(line) {
            Ok(Some(task)) => tasks.push(task),
            Ok(None) => {}
            Err(reason) => return Err(ParseError::StorageRecovery(reason)),
        }
    }

    Ok(tasks)
}

struct LineHeader {
    kind_letter: char,
    done_flag: char,
}

/// Decodes one line into a task, `None` when the kind letter is unknown.
fn decode_line(line: &str) -> Result<Option<Task>, String> {
    let header = decode_header(line)?;
    let Some(kind) = TaskKind::from_letter(header.kind_letter) else {
        return Ok(None);
    };

    let tokens = tokenize(line);
    let built = match kind {
        TaskKind::Todo => {
            let name = todo_name("todo", line).map_err(|err| err.to_string())?;
            Task::todo(name)
        }
        TaskKind::Deadline => {
            let (name, by) =
                extract_timed("deadline", "/by", "by", &tokens).map_err(|err| err.to_string())?;
            Task::deadline(name, by)
        }
        TaskKind::Event => {
            let (name, at) =
                extract_timed("event", "/at", "at", &tokens).map_err(|err| err.to_string())?;
            Task::event(name, at)
        }
    };

    let mut task = built.map_err(|err| err.to_string())?;
    if header.done_flag == '1' {
        task.complete();
    }

    Ok(Some(task))
}

fn decode_header(line: &str) -> Result<LineHeader, String> {
    let mut chars = line.chars();
    let kind_letter = chars.nth(1);
    // nth consumed up to index 1; two more steps lands on index 4.
    let done_flag = chars.nth(2);

    match (kind_letter, done_flag) {
        (Some(kind_letter), Some(done_flag)) => Ok(LineHeader {
            kind_letter,
            done_flag,
        }),
        _ => Err(format!("storage line too short: `{line}`")),
    }
}
