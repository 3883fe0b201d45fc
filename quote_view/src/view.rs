//! Top-level interactive view: title banner, quote table and footer.
//!
//! `QuoteView` is driven one event at a time by the terminal loop. It starts
//! uninitialized and becomes ready on the first resize event; from then on every
//! call to [`QuoteView::render`] composes a full frame.
use log::{debug, info};
use quote_common::Quote;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::table::QuoteTable;

/// Rendered before the first resize event.
pub const INITIALIZING: &str = "Initializing...";
/// Title shown in the banner.
pub const TITLE: &str = "Quote Viewer";
/// Footer while a snapshot is being fetched.
pub const LOADING: &str = "Loading stock data...";
/// Footer listing the key bindings.
pub const HELP: &str = "↑/↓: Navigate • h: Toggle Help • q: Quit";
/// Footer message after a non-empty snapshot was loaded.
pub const DATA_LOADED: &str = "Stock data loaded";
/// Footer message after an empty snapshot was loaded.
pub const NO_DATA_AVAILABLE: &str = "No stock data available";

/// Input delivered by the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Key press, named like `"q"`, `"up"` or `"ctrl+c"`.
    Key(String),
    /// New terminal size in cells.
    Resize { width: u16, height: u16 },
}

impl ViewEvent {
    pub fn key(name: &str) -> Self {
        ViewEvent::Key(name.to_string())
    }
}

/// What the render loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct QuoteView {
    table: QuoteTable,
    width: u16,
    height: u16,
    ready: bool,
    loading: bool,
    show_help: bool,
    footer_message: String,
}

impl Default for QuoteView {
    fn default() -> Self {
        Self::new(QuoteTable::new())
    }
}

impl QuoteView {
    pub fn new(table: QuoteTable) -> Self {
        Self {
            table,
            width: 0,
            height: 0,
            ready: false,
            loading: false,
            show_help: true,
            footer_message: "Loading...".to_string(),
        }
    }

    /// Hands a snapshot to the table and reports its size in the footer.
    pub fn load(&mut self, snapshot: Vec<Quote>) {
        info!("Loaded snapshot with {} quotes", snapshot.len());
        let message = if snapshot.is_empty() {
            NO_DATA_AVAILABLE
        } else {
            DATA_LOADED
        };
        self.footer_message = message.to_string();
        self.table.set_rows(snapshot);
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn handle(&mut self, event: ViewEvent) -> Control {
        match event {
            ViewEvent::Key(key) => match key.as_str() {
                "ctrl+c" | "q" => return Control::Quit,
                "up" | "k" => self.table.move_up(),
                "down" | "j" => self.table.move_down(),
                "h" => self.show_help = !self.show_help,
                other => debug!("Ignoring key {other}"),
            },
            ViewEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
                if !self.ready {
                    info!("View ready at {width}x{height}");
                    self.ready = true;
                }
                self.table.resize_columns(width.into());
            }
        }
        Control::Continue
    }

    /// Full frame: banner, table and footer, or [`INITIALIZING`] before the first resize.
    pub fn render(&self) -> Text<'static> {
        if !self.ready {
            return Text::raw(INITIALIZING);
        }

        let mut lines = vec![self.banner()];
        lines.extend(self.table.render().lines);
        lines.push(Line::raw(self.footer().to_string()));
        Text::from(lines)
    }

    pub fn footer(&self) -> &str {
        if self.loading {
            LOADING
        } else if !self.show_help {
            self.footer_message.as_str()
        } else {
            HELP
        }
    }

    /// Details of the selected quote, see [`QuoteTable::summary`].
    pub fn selected_summary(&self) -> String {
        self.table.summary()
    }

    pub fn table(&self) -> &QuoteTable {
        &self.table
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn banner(&self) -> Line<'static> {
        centered(TITLE, self.width.into(), self.table.theme().banner)
    }
}

fn centered(title: &str, width: usize, style: Style) -> Line<'static> {
    let spare = width.saturating_sub(title.width());
    let left = spare / 2;
    let text = format!("{}{}{}", " ".repeat(left), title, " ".repeat(spare - left));
    Line::from(Span::styled(text, style))
}
