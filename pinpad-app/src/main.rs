//! pinpad - segmented code entry for the terminal
//!
//! Demo binary wiring the code entry state machine to a ratatui frontend.

use std::fs::File;
use std::io::{self, stdout};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use tracing_subscriber::EnvFilter;

use pinpad_input::{CodeInput, InputConfig, KeyRouter};
use pinpad_tui::{App, CodeEntryWidget, MessageType};

/// Frame rate for UI updates
const FPS: u64 = 30;
/// Slots in the demo code entry
const SLOT_COUNT: usize = 4;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("pinpad starting with {} slots", SLOT_COUNT);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

/// File logging, filtered via RUST_LOG (terminal UI owns stderr)
fn init_logging() -> anyhow::Result<()> {
    let log_file = Arc::new(File::create("pinpad.log")?);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let input = CodeInput::new(InputConfig::new(SLOT_COUNT))?;
    let mut app = App::new(input);
    let router = KeyRouter::new();

    let frame_duration = Duration::from_millis(1000 / FPS);
    let mut last_frame = Instant::now();

    loop {
        if app.should_quit {
            break;
        }

        let now = Instant::now();
        app.state.process_events(now);
        app.state.frame_count = app.state.frame_count.wrapping_add(1);

        // Render
        terminal.draw(|frame| {
            render_ui(frame, &mut app, now);
        })?;

        // Handle input
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Quit shortcuts
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
                    {
                        app.quit();
                        continue;
                    }

                    let active = app.state.input.is_active();
                    if let Some(op) = router.map_key(key, active) {
                        app.state.input.apply(op);
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some(index) = app.state.hit.slot_at(mouse.column, mouse.row) {
                            app.state.input.tap(index);
                        } else if app.state.hit.contains(mouse.column, mouse.row) {
                            app.state.input.tap_anywhere();
                        }
                    }
                }
                Event::Paste(text) => {
                    app.state.input.paste(&text);
                }
                _ => {}
            }
        }

        // Maintain frame rate
        let elapsed = last_frame.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
        last_frame = Instant::now();
    }

    Ok(())
}

fn render_ui(frame: &mut ratatui::Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    let theme = &app.state.theme;

    // Clear with background
    let block = ratatui::widgets::Block::default().style(theme.normal());
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(3),    // Code entry
        Constraint::Length(1), // Message
        Constraint::Length(1), // Hints
    ])
    .split(area);

    let title = Paragraph::new(Line::from("PINPAD".bold()))
        .style(theme.title())
        .centered();
    frame.render_widget(title, chunks[0]);

    // Code entry, centered in the middle region
    let entry_area = centered_rect(chunks[1], (SLOT_COUNT as u16) * 6, 3);
    let entry = CodeEntryWidget::new(&app.state.input, theme)
        .caret_visible(app.state.blink.is_visible(now))
        .spacing(2);
    frame.render_stateful_widget(entry, entry_area, &mut app.state.hit);

    if let Some(ref message) = app.state.message {
        let style = match app.state.message_type {
            MessageType::Info => theme.normal(),
            MessageType::Success => theme.success(),
        };
        let line = Paragraph::new(message.as_str()).style(style).centered();
        frame.render_widget(line, chunks[2]);
    }

    let hints = Paragraph::new("type digits | backspace delete | ctrl+v paste | ctrl+q quit")
        .style(theme.dim())
        .centered();
    frame.render_widget(hints, chunks[3]);
}

/// Center a fixed-size rect inside `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
