//! Quote table: column layout, selection cursor and row rendering.
//!
//! The table owns the current snapshot, the configured columns and the widths derived
//! from the last resize. Every render produces fresh `ratatui` lines; cells are padded
//! by one space on each side and always occupy exactly their column width in display
//! cells, so header, separator and rows line up.
use log::debug;
use quote_common::formatter::{
    format_currency, format_large_number, format_percentage, parse_decimal,
};
use quote_common::{Quote, QuoteError, Result};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::TableTheme;

/// Shown instead of the table when the snapshot is empty.
pub const NO_DATA: &str = "No stock data available. Please fetch data first.";
/// Shown by [`QuoteTable::summary`] when nothing is selected.
pub const NO_SELECTION: &str = "No stock selected";
/// Narrowest a column may become after a resize.
pub const MIN_COLUMN_WIDTH: usize = 5;

const ELLIPSIS: &str = "...";
/// Ends a cell whose value was cut to fit; one display cell wide.
const CLIP_MARKER: char = '…';
const SEPARATOR: &str = "─";

/// Columns a quote table can show. `Display` yields the header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Column {
    Symbol,
    Name,
    Price,
    Change,
    #[strum(serialize = "Change%")]
    ChangePercent,
    Open,
    High,
    Low,
    Volume,
    Market,
}

impl Column {
    /// Width of the column before any resize.
    pub fn default_width(self) -> usize {
        match self {
            Column::Name => 25,
            Column::Volume => 15,
            _ => 10,
        }
    }
}

/// One column of the layout: what it shows and how wide it is relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: Column,
    pub base_width: usize,
    /// The elastic column absorbs the rounding remainder of a resize.
    pub elastic: bool,
}

impl ColumnSpec {
    pub fn new(column: Column, base_width: usize) -> Self {
        Self {
            column,
            base_width,
            elastic: false,
        }
    }

    pub fn elastic(mut self) -> Self {
        self.elastic = true;
        self
    }
}

/// Layout and styles of a table, built once and owned by the [`QuoteTable`].
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: Vec<ColumnSpec>,
    pub theme: TableTheme,
    pub min_column_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        let columns = Column::iter()
            .map(|column| {
                let spec = ColumnSpec::new(column, column.default_width());
                if column == Column::Name {
                    spec.elastic()
                } else {
                    spec
                }
            })
            .collect();
        Self {
            columns,
            theme: TableTheme::default(),
            min_column_width: MIN_COLUMN_WIDTH,
        }
    }
}

impl TableConfig {
    /// Index of the single elastic column.
    fn elastic_index(&self) -> Result<usize> {
        if let Some(spec) = self.columns.iter().find(|spec| spec.base_width == 0) {
            return Err(QuoteError::Layout(format!(
                "column {} has a zero base width",
                spec.column
            )));
        }
        let mut elastic = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, spec)| spec.elastic)
            .map(|(index, _)| index);
        match (elastic.next(), elastic.next()) {
            (Some(index), None) => Ok(index),
            (None, _) => Err(QuoteError::Layout("no elastic column".to_string())),
            (Some(_), Some(_)) => Err(QuoteError::Layout(
                "more than one elastic column".to_string(),
            )),
        }
    }
}

/// Interactive table of quotes with a row cursor.
pub struct QuoteTable {
    rows: Vec<Quote>,
    config: TableConfig,
    elastic: usize,
    widths: Vec<usize>,
    cursor: usize,
    focused: bool,
}

impl Default for QuoteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteTable {
    /// Creates an empty, focused table with the default columns.
    pub fn new() -> Self {
        let config = TableConfig::default();
        let elastic = config
            .columns
            .iter()
            .position(|spec| spec.elastic)
            .unwrap_or(0);
        Self::build(config, elastic)
    }

    /// Creates an empty table from a custom layout.
    ///
    /// Fails unless exactly one column is elastic and every base width is non-zero.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        let elastic = config.elastic_index()?;
        Ok(Self::build(config, elastic))
    }

    fn build(config: TableConfig, elastic: usize) -> Self {
        let widths = config.columns.iter().map(|spec| spec.base_width).collect();
        Self {
            rows: Vec::new(),
            config,
            elastic,
            widths,
            cursor: 0,
            focused: true,
        }
    }

    /// Replaces the snapshot. The cursor survives only if it is still in range.
    pub fn set_rows(&mut self, rows: Vec<Quote>) {
        if rows.len() <= self.cursor {
            self.cursor = 0;
        }
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Quote] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn selected_quote(&self) -> Option<&Quote> {
        self.rows.get(self.cursor)
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn theme(&self) -> &TableTheme {
        &self.config.theme
    }

    pub fn total_width(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Scales every column to `available` cells, proportionally to its base width.
    ///
    /// Widths are always derived from the base widths, so repeated calls with the same
    /// width give the same layout. The elastic column takes the rounding remainder; the
    /// row then spans exactly `available` cells unless the minimum widths don't fit.
    pub fn resize_columns(&mut self, available: usize) {
        let min = self.config.min_column_width;
        let total: usize = self.config.columns.iter().map(|spec| spec.base_width).sum();
        if total == 0 {
            return;
        }

        let scale = available as f64 / total as f64;
        let mut widths: Vec<usize> = self
            .config
            .columns
            .iter()
            .map(|spec| ((spec.base_width as f64 * scale).round() as usize).max(min))
            .collect();

        let used: usize = widths.iter().sum();
        let leftover = available as i64 - used as i64;
        let elastic = widths[self.elastic] as i64 + leftover;
        widths[self.elastic] = elastic.max(min as i64) as usize;

        debug!("Resized columns to {available} cells: {widths:?}");
        self.widths = widths;
    }

    pub fn render_header(&self) -> Line<'static> {
        let theme = &self.config.theme;
        let cells: Vec<Span<'static>> = self
            .config
            .columns
            .iter()
            .zip(&self.widths)
            .map(|(spec, &width)| cell(&spec.column.to_string(), width, theme.header))
            .collect();
        Line::from(cells)
    }

    pub fn render_row(&self, index: usize, quote: &Quote) -> Line<'static> {
        let theme = &self.config.theme;
        let base = theme.row_style(self.focused && index == self.cursor);

        let cells: Vec<Span<'static>> = self
            .config
            .columns
            .iter()
            .zip(&self.widths)
            .map(|(spec, &width)| {
                let (text, sign) = match spec.column {
                    Column::Symbol => (quote.symbol.clone(), None),
                    Column::Name => (truncate_name(&quote.name, width), None),
                    Column::Price => (format_currency(&quote.close, &quote.currency), None),
                    Column::Change => signed(
                        &quote.change,
                        format_currency(&quote.change, &quote.currency),
                        theme,
                    ),
                    Column::ChangePercent => signed(
                        &quote.percent_change,
                        format_percentage(&quote.percent_change),
                        theme,
                    ),
                    Column::Open => (format_currency(&quote.open, &quote.currency), None),
                    Column::High => (format_currency(&quote.high, &quote.currency), None),
                    Column::Low => (format_currency(&quote.low, &quote.currency), None),
                    Column::Volume => (format_large_number(&quote.volume), None),
                    Column::Market => {
                        let status = if quote.is_market_open { "Open" } else { "Closed" };
                        (status.to_string(), None)
                    }
                };
                let style = sign.map_or(base, |sign| base.patch(sign));
                cell(&text, width, style)
            })
            .collect();
        Line::from(cells)
    }

    /// Header, separator and one line per quote, or [`NO_DATA`] for an empty snapshot.
    pub fn render(&self) -> Text<'static> {
        if self.rows.is_empty() {
            return Text::raw(NO_DATA);
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_header());
        lines.push(Line::raw(SEPARATOR.repeat(self.total_width())));
        lines.extend(
            self.rows
                .iter()
                .enumerate()
                .map(|(index, quote)| self.render_row(index, quote)),
        );
        Text::from(lines)
    }

    /// Detail block of the selected quote, including its 52-week range.
    pub fn summary(&self) -> String {
        let Some(quote) = self.selected_quote() else {
            return NO_SELECTION.to_string();
        };
        let range = &quote.fifty_two_week;
        format!(
            "{} ({})\nExchange: {} | Currency: {} | Last Updated: {}\n\n52-Week Range:\nLow: {} | High: {} | Range: {}\n",
            quote.name,
            quote.symbol,
            quote.exchange,
            quote.currency,
            quote.datetime,
            format_currency(&range.low, &quote.currency),
            format_currency(&range.high, &quote.currency),
            range.range,
        )
    }
}

/// Adds the sign prefix and the gain/loss style of a change value.
fn signed(raw: &str, formatted: String, theme: &TableTheme) -> (String, Option<Style>) {
    if raw.starts_with('-') {
        return (formatted, Some(theme.negative));
    }
    if raw.is_empty() {
        return (formatted, None);
    }
    match parse_decimal(raw) {
        Some(number) if number == 0.0 => (formatted, None),
        Some(number) if number > 0.0 && !formatted.starts_with(['+', '-']) => {
            (format!("+{formatted}"), Some(theme.positive))
        }
        _ => (formatted, Some(theme.positive)),
    }
}

/// Shortens a name that doesn't fit its padded cell, ending it with an ellipsis.
fn truncate_name(name: &str, width: usize) -> String {
    if name.width() <= width.saturating_sub(2) {
        return name.to_string();
    }
    let (mut truncated, _) = clip(name, width.saturating_sub(5));
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Longest prefix of `text` that fits in `max` display cells, with its width.
fn clip(text: &str, max: usize) -> (String, usize) {
    let mut used = 0;
    let mut clipped = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max {
            break;
        }
        used += ch_width;
        clipped.push(ch);
    }
    (clipped, used)
}

/// A cell exactly `width` display cells wide: one space of padding on each side.
/// Values wider than the cell are cut and end with [`CLIP_MARKER`].
fn cell(text: &str, width: usize, style: Style) -> Span<'static> {
    let (pad, inner) = if width >= 2 { (" ", width - 2) } else { ("", width) };
    let (clipped, used) = if text.width() > inner && inner > 0 {
        let (mut clipped, used) = clip(text, inner - 1);
        clipped.push(CLIP_MARKER);
        (clipped, used + 1)
    } else {
        clip(text, inner)
    };
    let fill = " ".repeat(inner - used);
    Span::styled(format!("{pad}{clipped}{fill}{pad}"), style)
}
