use super::App;
use crate::controller::{Action, Level};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Search(&'a str),
    Clear,
    View(&'a str),
    Back,
    Download,
    Apply,
    Info,
    Upload(&'a str),
    Go(&'a str),
    Help,
    Unknown(String),
}

fn parse_command(input: &str) -> Option<Command<'_>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut words = trimmed.split_whitespace();
    let name = words.next()?;
    let command = name.to_ascii_lowercase();
    let args = trimmed[name.len()..].trim();

    Some(match command.as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "s" | "search" | "find" => Command::Search(args),
        "c" | "clear" => Command::Clear,
        "v" | "view" | "open" => Command::View(args),
        "b" | "back" => Command::Back,
        "d" | "download" => Command::Download,
        "a" | "apply" => Command::Apply,
        "i" | "info" => Command::Info,
        "u" | "upload" => Command::Upload(args),
        "go" | "g" => Command::Go(args),
        "h" | "help" => Command::Help,
        _ => Command::Unknown(command),
    })
}

impl App {
    /// Enter command mode.
    pub fn enter_command_mode(&mut self) {
        self.ui.command_mode = true;
        self.ui.command_buffer.clear();
    }

    /// Enter command mode with `prefix` already typed.
    pub fn enter_command_mode_with(&mut self, prefix: &str) {
        self.enter_command_mode();
        self.ui.command_buffer.push_str(prefix);
    }

    /// Exit command mode without executing.
    pub fn exit_command_mode(&mut self) {
        self.ui.command_mode = false;
        self.ui.command_buffer.clear();
    }

    pub fn command_input(&mut self, c: char) {
        self.ui.command_buffer.push(c);
    }

    pub fn command_backspace(&mut self) {
        self.ui.command_buffer.pop();
    }

    /// Execute the current command.
    pub fn execute_command(&mut self) {
        let cmd = self.ui.command_buffer.trim().to_string();
        self.ui.command_mode = false;
        self.ui.command_buffer.clear();

        let Some(command) = parse_command(&cmd) else {
            return;
        };

        match command {
            Command::Quit => self.ui.should_quit = true,
            Command::Search(query) => self.set_query(query),
            Command::Clear => self.clear_search(),
            Command::View("") => self.open_highlighted(),
            Command::View(name) => self.open_by_name(name),
            Command::Back => self.dispatch(Action::Back),
            Command::Download => self.dispatch(Action::Download),
            Command::Apply => self.dispatch(Action::Apply),
            Command::Info => self.dispatch(Action::Info),
            Command::Upload(path) => self.upload(path),
            Command::Go(args) => {
                let moved = args.parse::<usize>().is_ok_and(|n| self.go_to_entry(n));
                if !moved {
                    self.set_status(Level::Warning, format!("No entry {}", args));
                }
            }
            Command::Help => self.ui.show_help = true,
            Command::Unknown(command) => {
                self.set_status(Level::Warning, format!("Unknown command: {}", command));
            }
        }
    }
}
