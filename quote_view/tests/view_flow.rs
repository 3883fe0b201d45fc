use quote_common::{Quote, QuoteError, Result};
use quote_view::source::QuoteSource;
use quote_view::table::NO_DATA;
use quote_view::terminal::{draw, start};
use quote_view::theme::TableTheme;
use quote_view::view::{Control, DATA_LOADED, HELP, NO_DATA_AVAILABLE, QuoteView, TITLE, ViewEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

struct FixedSource(Vec<Quote>);

impl QuoteSource for FixedSource {
    fn fetch(&mut self) -> Result<Vec<Quote>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed".to_string()
    }
}

struct FailingSource;

impl QuoteSource for FailingSource {
    fn fetch(&mut self) -> Result<Vec<Quote>> {
        Err(QuoteError::Source("rate limited".to_string()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

fn quote(symbol: &str, change: &str) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        name: format!("{symbol} Inc"),
        currency: "USD".to_string(),
        close: "100.00".to_string(),
        change: change.to_string(),
        percent_change: "0.5".to_string(),
        volume: "1200000".to_string(),
        ..Default::default()
    }
}

fn snapshot() -> Vec<Quote> {
    vec![
        quote("AAPL", "-1.23"),
        quote("MSFT", "1.23"),
        quote("GOOGL", "0"),
        quote("AMZN", "2"),
        quote("META", "-3"),
    ]
}

fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn startup_loads_snapshot_and_draws_frame() {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    let mut view = QuoteView::default();
    let mut source = FixedSource(snapshot());

    start(&mut terminal, &mut view, &mut source).unwrap();
    assert!(view.is_ready());
    assert!(!view.is_loading());
    assert_eq!(view.table().rows().len(), 5);
    assert_eq!(view.table().total_width(), 100);

    draw(&mut terminal, &view).unwrap();
    assert_eq!(row(&terminal, 0).trim(), TITLE);
    assert!(row(&terminal, 1).starts_with(" Symbol"));
    assert_eq!(row(&terminal, 2), "─".repeat(100));
    assert!(row(&terminal, 3).starts_with(" AAPL"));
    assert!(row(&terminal, 7).starts_with(" META"));
    assert_eq!(row(&terminal, 8).trim_end(), HELP);
}

#[test]
fn change_cells_are_colored_by_sign() {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    let mut view = QuoteView::default();
    start(&mut terminal, &mut view, &mut FixedSource(snapshot())).unwrap();
    draw(&mut terminal, &view).unwrap();

    let theme = TableTheme::default();
    let widths = view.table().column_widths();
    let change_x = (widths[0] + widths[1] + widths[2]) as u16;
    let change_width = widths[3];

    let cell_text = |y: u16| -> String {
        row(&terminal, y)
            .chars()
            .skip(change_x as usize)
            .take(change_width)
            .collect::<String>()
            .trim()
            .to_string()
    };
    let buffer = terminal.backend().buffer();

    assert_eq!(cell_text(3), "$-1.23");
    assert_eq!(Some(buffer[(change_x + 1, 3)].fg), theme.negative.fg);

    assert_eq!(cell_text(4), "+$1.23");
    assert_eq!(Some(buffer[(change_x + 1, 4)].fg), theme.positive.fg);

    assert_eq!(cell_text(5), "$0.00");
}

#[test]
fn failing_source_degrades_to_empty_table() {
    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    let mut view = QuoteView::default();

    start(&mut terminal, &mut view, &mut FailingSource).unwrap();
    assert!(view.table().rows().is_empty());

    view.handle(ViewEvent::key("h"));
    draw(&mut terminal, &view).unwrap();
    assert_eq!(row(&terminal, 1).trim_end(), NO_DATA);
    assert_eq!(row(&terminal, 2).trim_end(), NO_DATA_AVAILABLE);
}

#[test]
fn reload_with_fewer_quotes_resets_selection() {
    let mut view = QuoteView::default();
    view.handle(ViewEvent::Resize {
        width: 120,
        height: 30,
    });
    view.load(snapshot());
    for _ in 0..10 {
        view.handle(ViewEvent::key("down"));
    }
    assert_eq!(view.table().cursor(), 4);
    assert_eq!(view.table().selected_quote().unwrap().symbol, "META");

    view.load(snapshot().into_iter().take(2).collect());
    assert_eq!(view.table().cursor(), 0);
    assert!(view.selected_summary().contains("(AAPL)"));

    view.handle(ViewEvent::key("h"));
    assert_eq!(view.footer(), DATA_LOADED);
}

#[test]
fn unknown_events_are_ignored_and_quit_ends_the_loop() {
    let mut view = QuoteView::default();
    view.handle(ViewEvent::Resize {
        width: 90,
        height: 20,
    });
    view.load(snapshot());
    let before = view.render();

    assert_eq!(view.handle(ViewEvent::key("z")), Control::Continue);
    assert_eq!(view.handle(ViewEvent::key("enter")), Control::Continue);
    assert_eq!(view.render(), before);

    assert_eq!(view.handle(ViewEvent::key("q")), Control::Quit);
}
