//! Fire Notepad - interactive terminal front end
//!
//! Plays the part of the event loop: each input line becomes one event
//! dispatched to the session manager, and the debounced save fires when
//! input goes quiet for long enough.

mod cli;
mod command;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use fire_notepad::export::export_to_dir;
use fire_notepad::persistence::get_data_dir;
use fire_notepad::theme::{FontSize, Theme};
use fire_notepad::view::{BufferView, ConfirmPrompt, StatsListener, TabListRenderer};
use fire_notepad::{
    FileStore, KeyValueStore, MemoryStore, SessionManager, Stats, Tab, TabClick, TabId,
    TextBuffer, logging,
};

use cli::CliArgs;
use command::{Command, HELP};

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = CliArgs::parse();

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("failed to spawn stdin reader")?;

    if args.ephemeral {
        Repl::new(MemoryStore::new(), rx, &args).run()
    } else {
        let dir = args.data_dir.clone().unwrap_or_else(get_data_dir);
        Repl::new(FileStore::new(dir), rx, &args).run()
    }
}

/// Prints the tab bar and status line when the session reports changes.
#[derive(Default)]
struct TerminalView {
    tab_bar: String,
    status: String,
    tab_bar_dirty: bool,
}

impl TabListRenderer for TerminalView {
    fn render(&mut self, tabs: &[Tab], active: Option<TabId>) {
        self.tab_bar = tabs
            .iter()
            .map(|tab| {
                if Some(tab.id) == active {
                    format!("[*{} {}]", tab.id, tab.name)
                } else {
                    format!("[{} {}]", tab.id, tab.name)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.tab_bar_dirty = true;
    }
}

impl StatsListener for TerminalView {
    fn stats_changed(&mut self, stats: &Stats) {
        self.status = stats.to_string();
    }
}

/// Yes/no prompt answered on the next input line.
struct StdinPrompt<'a> {
    lines: &'a Receiver<String>,
}

impl ConfirmPrompt for StdinPrompt<'_> {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        match self.lines.recv() {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Repl<'a, S> {
    manager: SessionManager<S, TextBuffer, TerminalView>,
    lines: Receiver<String>,
    theme: Theme,
    font_size: FontSize,
    export_dir: &'a Path,
}

impl<'a, S: KeyValueStore> Repl<'a, S> {
    fn new(store: S, lines: Receiver<String>, args: &'a CliArgs) -> Self {
        Self {
            manager: SessionManager::open(store, TextBuffer::new(), TerminalView::default()),
            lines,
            theme: Theme::default(),
            font_size: FontSize::default(),
            export_dir: &args.export_dir,
        }
    }

    fn run(mut self) -> anyhow::Result<()> {
        println!("Fire Notepad. Type `help` for commands.");
        self.print_updates();

        loop {
            print!("> ");
            io::stdout().flush().context("failed to flush stdout")?;

            let received = match self.manager.debouncer().due_at() {
                Some(due) => self
                    .lines
                    .recv_timeout(due.saturating_duration_since(Instant::now())),
                None => self
                    .lines
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(line) => match Command::parse(&line) {
                    Ok(Some(command)) => {
                        if self.execute(command) == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(message) => println!("{message}"),
                },
                Err(RecvTimeoutError::Timeout) => println!(),
                Err(RecvTimeoutError::Disconnected) => {
                    println!();
                    break;
                }
            }

            if self.manager.tick(Instant::now()) {
                println!("{}", self.manager.save_indicator().status().label());
            }
            self.print_updates();
        }

        self.manager.flush_pending();
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Flow {
        let now = Instant::now();
        match command {
            Command::List => {
                for tab in self.manager.tabs() {
                    let marker = if self.manager.is_active(tab.id) { "*" } else { " " };
                    println!("{marker} {:>3}  {}", tab.id, tab.name);
                }
            }
            Command::NewTab => {
                self.manager.on_new_tab_clicked();
            }
            Command::Switch(id) => match self.manager.on_tab_clicked(id) {
                TabClick::Switched(_) => {}
                TabClick::StartRename(id) => println!("tab {id} is already active (use `rename`)"),
                TabClick::Ignored => println!("no tab {id}"),
            },
            Command::Close(id) => {
                if self.manager.tabs().len() <= 1 {
                    println!("cannot close the last tab");
                } else {
                    let mut prompt = StdinPrompt { lines: &self.lines };
                    self.manager.on_close_clicked(id, &mut prompt);
                }
            }
            Command::Rename(id, name) => {
                if !self.manager.on_name_edited(id, &name) {
                    println!("no tab {id}");
                }
            }
            Command::Type(text) => {
                self.manager.buffer_mut().insert_str(&text);
                self.manager.on_edit(now);
            }
            Command::Newline => {
                self.manager.buffer_mut().insert('\n');
                self.manager.on_edit(now);
            }
            Command::Backspace => {
                if self.manager.buffer_mut().backspace() {
                    self.manager.on_edit(now);
                }
            }
            Command::Delete => {
                if self.manager.buffer_mut().delete() {
                    self.manager.on_edit(now);
                }
            }
            Command::CursorLeft => self.move_cursor(TextBuffer::move_left),
            Command::CursorRight => self.move_cursor(TextBuffer::move_right),
            Command::CursorUp => self.move_cursor(TextBuffer::move_up),
            Command::CursorDown => self.move_cursor(TextBuffer::move_down),
            Command::LineStart => self.move_cursor(TextBuffer::move_to_line_start),
            Command::LineEnd => self.move_cursor(TextBuffer::move_to_line_end),
            Command::Show => self.show_buffer(),
            Command::Stats => self.show_status(),
            Command::Save => {
                self.manager.save_now();
                println!("{}", self.manager.save_indicator().status().label());
            }
            Command::Export(dir) => self.export(dir.as_deref()),
            Command::ToggleTheme => {
                self.theme = self.theme.toggle();
                println!("theme: {} (toggle: {})", self.theme.name(), self.theme.toggle_label());
            }
            Command::FontSize(px) => match FontSize::new(px) {
                Ok(size) => {
                    self.font_size = size;
                    println!("font size: {}", size.label());
                }
                Err(err) => println!("{err}"),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn move_cursor(&mut self, movement: fn(&mut TextBuffer)) {
        movement(self.manager.buffer_mut());
        self.manager.on_cursor_move();
    }

    fn show_buffer(&self) {
        let text = self.manager.buffer().text();
        let numbers = self.manager.stats().line_numbers();
        for (number, line) in numbers.zip(text.split('\n')) {
            println!("{number:>4} | {line}");
        }
    }

    fn show_status(&self) {
        let indicator = self.manager.save_indicator();
        println!("{}", self.manager.frontend().status);
        println!(
            "{} | {} | theme: {} | font: {}",
            indicator.status().label(),
            indicator.last_modified_label(),
            self.theme.name(),
            self.font_size.label()
        );
    }

    fn export(&self, dir: Option<&Path>) {
        let Some((name, content)) = self.manager.active_export() else {
            return;
        };
        let dir = dir.unwrap_or(self.export_dir);
        let today = chrono::Utc::now().date_naive();
        match export_to_dir(dir, &name, &content, today) {
            Ok(path) => println!("exported to {}", path.display()),
            Err(err) => println!("export failed: {err}"),
        }
    }

    fn print_updates(&mut self) {
        let view = self.manager.frontend_mut();
        if view.tab_bar_dirty {
            view.tab_bar_dirty = false;
            println!("{}", view.tab_bar);
        }
    }
}
