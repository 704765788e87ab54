//! LazyTask CLI entry point.
//!
//! # Responsibility
//! - Run the synchronous read-parse-execute-render loop over stdin.
//! - Keep all terminal formatting out of `lazytask_core`.

use lazytask_core::{
    default_log_level, init_logging, parse_input, FileLineStore, Outcome, Task, TaskList,
};
use std::io::{self, BufRead, Write};

const DEFAULT_DATA_FILE: &str = "lazytask.txt";

fn main() {
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    if let Ok(log_dir) = std::env::var("LAZYTASK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = FileLineStore::new(&data_path);
    let mut tasks = TaskList::load(store);

    println!(
        "lazytask {} — tracking {} task(s) in {data_path}",
        lazytask_core::core_version(),
        tasks.len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if write!(stdout, "> ").and_then(|()| stdout.flush()).is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\n', '\r']);

        // Parser and executor failures are local to one command; report
        // and keep the session running.
        match parse_input(line) {
            Ok(command) => match tasks.execute(&command) {
                Ok(Outcome::Exit) => {
                    println!("bye");
                    break;
                }
                Ok(outcome) => render(&outcome),
                Err(err) => println!("{err}"),
            },
            Err(err) => println!("{err}"),
        }
    }
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Added(task) => println!("added: {}", task.storage_line()),
        Outcome::Marked(task) => println!("marked as done: {}", task.storage_line()),
        Outcome::Unmarked(task) => println!("marked as not done: {}", task.storage_line()),
        Outcome::Deleted(task) => println!("deleted: {}", task.storage_line()),
        Outcome::Listing(tasks) => render_listing(tasks),
        Outcome::Unrecognized => println!("unrecognized command"),
        Outcome::Exit => {}
    }
}

fn render_listing(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("no tasks yet");
        return;
    }
    for (position, task) in tasks.iter().enumerate() {
        println!("{}. {}", position + 1, task.storage_line());
    }
}
