//! Terminal driver: raw mode, the render loop and frame drawing.
//!
//! The loop is strictly one event at a time: read a crossterm event, hand it to the
//! view, draw the resulting frame, repeat until the view asks to quit. The snapshot is
//! fetched once, synchronously, after the first frame has shown the loading footer.
use std::io::{self, Stdout};
use std::panic;

use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, info};
use quote_common::Result;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::widgets::Paragraph;

use crate::event::translate;
use crate::source::QuoteSource;
use crate::view::{Control, QuoteView, ViewEvent};

/// Puts the terminal in raw mode on the alternate screen; restores it on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!("Failed to leave raw mode: {}", e);
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
        error!("Failed to leave alternate screen: {}", e);
    }
}

pub fn stdout_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

/// Draws the view's current frame over the whole terminal.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, view: &QuoteView) -> Result<()> {
    terminal.draw(|frame| frame.render_widget(Paragraph::new(view.render()), frame.area()))?;
    Ok(())
}

/// Sizes the view to the terminal and loads the snapshot from `source`.
///
/// A failing source is logged and shows up as an empty snapshot.
pub fn start<B: Backend>(
    terminal: &mut Terminal<B>,
    view: &mut QuoteView,
    source: &mut dyn QuoteSource,
) -> Result<()> {
    let size = terminal.size()?;
    view.handle(ViewEvent::Resize {
        width: size.width,
        height: size.height,
    });

    view.set_loading(true);
    draw(terminal, view)?;

    let snapshot = match source.fetch() {
        Ok(quotes) => quotes,
        Err(e) => {
            error!("Failed to fetch quotes from {}: {}", source.describe(), e);
            Vec::new()
        }
    };
    view.load(snapshot);
    Ok(())
}

/// Runs the interactive loop until a quit key is pressed.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    view: &mut QuoteView,
    source: &mut dyn QuoteSource,
) -> Result<()> {
    start(terminal, view, source)?;

    loop {
        draw(terminal, view)?;
        if let Some(event) = translate(event::read()?) {
            if view.handle(event) == Control::Quit {
                info!("Quit requested");
                break;
            }
        }
    }
    Ok(())
}
