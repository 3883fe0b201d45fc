//! Interactive terminal viewer for a snapshot of market quotes.
//!
//! - `table` — the quote table: column layout, cursor, row formatting.
//! - `view` — the top-level view composing banner, table and footer.
//! - `theme` — cell styles.
//! - `event` — crossterm event translation.
//! - `source` — quote sources feeding the view.
//! - `terminal` — raw-mode handling and the render loop.
//! - `args` — command-line arguments.
pub mod args;
pub mod event;
pub mod source;
pub mod table;
pub mod terminal;
pub mod theme;
pub mod view;

pub use table::{Column, ColumnSpec, QuoteTable, TableConfig};
pub use theme::TableTheme;
pub use view::{Control, QuoteView, ViewEvent};
