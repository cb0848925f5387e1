use clap::ValueEnum;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

impl OutputFormat {
    fn is_json(self) -> bool {
        !matches!(self, OutputFormat::Human)
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// Presentation sink for command results: human lines and tables, or one
/// JSON value per message when `--output json` is active.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.emit(Level::Success, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.emit(Level::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.emit(Level::Warning, msg.as_ref());
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        self.emit(Level::Error, msg.as_ref());
    }

    /// Pre-rendered text (tables, hints); tagged as info in JSON mode
    pub fn println(&self, msg: impl AsRef<str>) {
        self.emit(Level::Info, msg.as_ref());
    }

    fn emit(&self, level: Level, msg: &str) {
        // errors bypass quiet mode
        if self.quiet && !matches!(level, Level::Error) {
            return;
        }

        if self.format.is_json() {
            self.print_json(&json!({
                "level": level.label(),
                "message": msg,
            }));
            return;
        }

        match level {
            Level::Success => println!("{} {}", "✓".green(), msg),
            Level::Info => println!("{}", msg),
            Level::Warning => println!("{} {}", "⚠".yellow(), msg),
            Level::Error => eprintln!("{} {}", "✗".red(), msg),
        }
    }

    /// Structured payload (entry lists, stats); commands call this in JSON mode
    pub fn json(&self, data: &serde_json::Value) {
        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            _ => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
        }
    }

    /// Empty table in the house style (rounded UTF-8 borders, bold header);
    /// callers add rows and hand it back to [`Output::println`]
    pub fn new_table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
        if !header.is_empty() {
            table.set_header(
                header
                    .iter()
                    .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
            );
        }
        table
    }
}
