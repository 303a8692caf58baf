//! Commands understood by the interactive front end
//!
//! Adding a new command:
//! 1. Add a variant to `Command`
//! 2. Parse it in `Command::parse`
//! 3. Handle it in `Repl::execute`

use std::path::PathBuf;

use fire_notepad::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Tab operations
    // =========================================================================
    List,
    NewTab,
    Switch(TabId),
    Close(TabId),
    Rename(TabId, String),

    // =========================================================================
    // Editing
    // =========================================================================
    Type(String),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    LineStart,
    LineEnd,

    // =========================================================================
    // Views and files
    // =========================================================================
    Show,
    Stats,
    Save,
    Export(Option<PathBuf>),
    ToggleTheme,
    FontSize(u32),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. `Err` carries a message for the user.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line.trim(), ""),
        };

        let command = match word {
            "" => return Ok(None),
            "list" | "ls" => Command::List,
            "new" => Command::NewTab,
            "switch" | "sw" => Command::Switch(parse_id(rest)?),
            "close" => Command::Close(parse_id(rest)?),
            "rename" => {
                let (id, name) = rest.trim_start().split_once(' ').unwrap_or((rest.trim(), ""));
                Command::Rename(parse_id(id)?, name.to_string())
            }
            "type" => Command::Type(rest.to_string()),
            "newline" | "nl" => Command::Newline,
            "backspace" | "bs" => Command::Backspace,
            "delete" | "del" => Command::Delete,
            "left" => Command::CursorLeft,
            "right" => Command::CursorRight,
            "up" => Command::CursorUp,
            "down" => Command::CursorDown,
            "home" => Command::LineStart,
            "end" => Command::LineEnd,
            "show" | "cat" => Command::Show,
            "stats" => Command::Stats,
            "save" => Command::Save,
            "export" => {
                let dir = rest.trim();
                Command::Export((!dir.is_empty()).then(|| PathBuf::from(dir)))
            }
            "theme" => Command::ToggleTheme,
            "font" => Command::FontSize(
                rest.trim()
                    .parse()
                    .map_err(|_| format!("not a font size: {:?}", rest.trim()))?,
            ),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<TabId, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("not a tab id: {:?}", raw.trim()))
}

pub const HELP: &str = "\
Tabs:    list | new | switch <id> | close <id> | rename <id> <name>
Editing: type <text> | newline | backspace | delete | left | right | up | down | home | end
Views:   show | stats | save | export [dir] | theme | font <px>
Other:   help | quit";
