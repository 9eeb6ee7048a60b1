//! The `roster shell` command.
//!
//! Reads one command per line from stdin and applies it to a single session.
//! Each command finishes before the next line is read.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use roster_core::config::load_config_from;
use roster_core::notice::NoticeBoard;
use roster_core::session::Session;
use roster_core::view::Surface;
use roster_report::html::{write_html_page, Page};

use crate::terminal::{records_table, TerminalSurface};

const HELP: &str = "\
Commands:
  add <name> <grade>   Add a student (the last word is the grade, so
                       `add 50` reads 50 as the name and has no grade)
  remove <index>       Remove the student at a position shown by `list`
  clear                Remove all students (asks for confirmation)
  stats                Show class statistics
  range <min> <max>    List students scored within an inclusive range
  list                 Show all students
  seed                 Load the sample students after a clear
  render <path>        Write the roster as an HTML page
  help                 Show this help
  quit                 Leave the shell";

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Add { name: String, score: String },
    Remove(i64),
    Clear,
    Stats,
    Range { min: i64, max: i64 },
    List,
    Seed,
    Render(PathBuf),
    Help,
    Quit,
    Blank,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Ok(ShellCommand::Blank),
            "add" => {
                let (name, score) = match rest.rsplit_once(char::is_whitespace) {
                    Some((name, score)) => (name.trim(), score),
                    None => (rest, ""),
                };
                Ok(ShellCommand::Add {
                    name: name.to_string(),
                    score: score.to_string(),
                })
            }
            "remove" | "rm" => rest
                .parse()
                .map(ShellCommand::Remove)
                .map_err(|_| format!("usage: remove <index> (got '{rest}')")),
            "clear" => Ok(ShellCommand::Clear),
            "stats" => Ok(ShellCommand::Stats),
            "range" => {
                let bounds: Vec<&str> = rest.split_whitespace().collect();
                match bounds.as_slice() {
                    [min, max] => match (min.parse::<i64>(), max.parse::<i64>()) {
                        (Ok(min), Ok(max)) => Ok(ShellCommand::Range { min, max }),
                        _ => Err(format!("usage: range <min> <max> (got '{rest}')")),
                    },
                    _ => Err("usage: range <min> <max>".to_string()),
                }
            }
            "list" | "ls" => Ok(ShellCommand::List),
            "seed" => Ok(ShellCommand::Seed),
            "render" if !rest.is_empty() => Ok(ShellCommand::Render(PathBuf::from(rest))),
            "render" => Err("usage: render <path>".to_string()),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command: {other} (type `help`)")),
        }
    }
}

pub async fn execute(config_path: Option<PathBuf>, empty: bool) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if empty {
        config.seed_on_start = false;
    }

    let interactive = std::io::stdin().is_terminal();
    let board = NoticeBoard::new(config.notice_duration());
    let mut session = Session::new(&config, TerminalSurface::new(board));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            prompt(&session)?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(usage) => {
                println!("{usage}");
                continue;
            }
        };

        match command {
            ShellCommand::Add { name, score } => {
                let _ = session.add_student(&name, &score);
            }
            ShellCommand::Remove(index) => {
                session.remove_student(index);
            }
            ShellCommand::Clear => {
                let confirmed = match session.clear_prompt() {
                    Some(question) => confirm(&question, &mut lines).await?,
                    None => false,
                };
                if let Ok(false) = session.clear_all_students(confirmed) {
                    println!("Nothing cleared.");
                }
            }
            ShellCommand::Stats => {
                let _ = session.calculate_statistics();
            }
            ShellCommand::Range { min, max } => {
                let found = session.find_students_by_range(min, max);
                if found.is_empty() {
                    println!("No students scored between {min} and {max}.");
                } else {
                    println!("{}", records_table(&found));
                }
            }
            ShellCommand::List => {
                let view = session.view();
                session.surface_mut().render_list(&view);
            }
            ShellCommand::Seed => {
                if !session.seed() {
                    println!("Sample students are already loaded; clear first to reload them.");
                }
            }
            ShellCommand::Render(path) => {
                let view = session.view();
                let surface = session.surface();
                let notice = surface.current_notice();
                let mut page = Page::new(&view).with_notice(notice.as_ref());
                if let Some(stats) = surface.statistics() {
                    page = page.with_statistics(stats);
                }
                match write_html_page(&page, &path) {
                    Ok(()) => println!("Page written to: {}", path.display()),
                    Err(e) => println!("Error: {e:#}"),
                }
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Blank => {}
        }
    }

    Ok(())
}

fn prompt(session: &Session<TerminalSurface>) -> Result<()> {
    let status = match session.surface().current_notice() {
        Some(notice) => format!("[{notice}] "),
        None => String::new(),
    };
    let mut stdout = std::io::stdout();
    write!(stdout, "{status}roster> ")?;
    stdout.flush()?;
    Ok(())
}

async fn confirm(question: &str, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    println!("{question} [y/N]");
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
