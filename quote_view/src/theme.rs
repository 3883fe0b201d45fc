//! Styles used by the quote table and the surrounding view.
//!
//! Styles are plain `ratatui` values: combining them always yields a new `Style`,
//! so a theme can be shared by every cell without being mutated.
use ratatui::style::{Color, Modifier, Style};

/// Brand blue of the header row and the title banner.
pub const HEADER_BLUE: Color = Color::Rgb(0x00, 0x47, 0xAB);

/// Returns `style` with its background replaced by `color`.
pub fn with_background(style: Style, color: Color) -> Style {
    style.bg(color)
}

/// Cell styles of a quote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTheme {
    /// Header cells.
    pub header: Style,
    /// Regular data cells.
    pub cell: Style,
    /// Merged into a cell holding a gain.
    pub positive: Style,
    /// Merged into a cell holding a loss.
    pub negative: Style,
    /// Background of the selected row while the table is focused.
    pub selected_background: Color,
    /// Title banner above the table.
    pub banner: Style,
}

impl Default for TableTheme {
    fn default() -> Self {
        let header = Style::new()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Rgb(0xFF, 0xFF, 0xFF))
            .bg(HEADER_BLUE);
        Self {
            header,
            cell: Style::new(),
            positive: Style::new().fg(Color::Rgb(0x00, 0xFF, 0x00)),
            negative: Style::new().fg(Color::Rgb(0xFF, 0x00, 0x00)),
            selected_background: Color::Rgb(0x33, 0x33, 0x33),
            banner: header,
        }
    }
}

impl TableTheme {
    /// Base style of a data row, highlighted when `selected`.
    pub fn row_style(&self, selected: bool) -> Style {
        if selected {
            with_background(self.cell, self.selected_background)
        } else {
            self.cell
        }
    }
}
