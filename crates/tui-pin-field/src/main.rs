//! Terminal PIN field demo
//!
//! A row of single-character cells driven by `pin-field`, built with crossterm and ratatui.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tui-pin-field -- --length 6 --numeric
//! cargo run -p tui-pin-field -- --charset ABCDEF0123456789 --upper --rtl
//! ```
//!
//! Set `PIN_FIELD_LOG=<file>` to write the field's debug log to a file (the terminal is in
//! raw mode, so logging to stderr would corrupt the screen). `RUST_LOG` filters it as usual.
//!
//! # Keys
//!
//! - Characters: fill the focused cell
//! - Left/Right: move focus
//! - Backspace/Delete: clear the focused cell, or the previous one when empty
//! - Bracketed paste: spread the text across the cells
//! - Ctrl+D: toggle disabled
//! - Esc / Ctrl+C / Ctrl+Q: quit

mod keymap;
mod slots;

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use pin_field::{
    Direction as TextDirection, Formatter, PinEvent, PinField, PinFieldConfig,
    PinFieldError, SlotHost, Validator,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use slots::TerminalSlots;
use std::collections::VecDeque;
use std::env;
use std::fs::File;
use std::io::{self, stdout};
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EVENT_LOG_CAPACITY: usize = 12;
const CELL_WIDTH: u16 = 5;

/// Command line options.
#[derive(Debug, Default)]
struct Options {
    length: Option<usize>,
    charset: Option<String>,
    numeric: bool,
    rtl: bool,
    upper: bool,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self, String> {
        let mut opts = Options::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--length" => {
                    let value = args.next().ok_or("--length needs a value")?;
                    let length = value
                        .parse()
                        .map_err(|_| format!("invalid --length value: {value}"))?;
                    opts.length = Some(length);
                }
                "--charset" => {
                    opts.charset = Some(args.next().ok_or("--charset needs a value")?);
                }
                "--numeric" => opts.numeric = true,
                "--rtl" => opts.rtl = true,
                "--upper" => opts.upper = true,
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(opts)
    }

    fn config(&self) -> Result<PinFieldConfig, PinFieldError> {
        let mut config = match self.length {
            Some(length) => PinFieldConfig::new(length)?,
            None => PinFieldConfig::default(),
        };
        if let Some(charset) = &self.charset {
            config = config.with_validator(Validator::charset(charset.as_str()));
        } else if self.numeric {
            config = config.with_validator(Validator::numeric());
        }
        if self.upper {
            config = config.with_formatter(Formatter::uppercase());
        }
        Ok(config.with_autofocus(true))
    }

    fn direction(&self) -> TextDirection {
        if self.rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

/// Application state
struct App {
    /// The field and its terminal cells
    field: PinField<TerminalSlots>,
    /// Most recent field notifications, newest last
    events: Arc<Mutex<VecDeque<PinEvent>>>,
    /// Set when the user asks to quit
    should_quit: bool,
    /// Status message shown instead of the default status line
    status_message: String,
}

impl App {
    fn new(options: &Options, reports_release: bool) -> Result<Self, PinFieldError> {
        let config = options.config()?;
        let slots = TerminalSlots::new(config.length(), options.direction());
        info!(
            length = config.length(),
            direction = ?options.direction(),
            reports_release,
            "starting pin field"
        );
        let mut field = PinField::new(config, slots)?;

        let events = Arc::new(Mutex::new(VecDeque::with_capacity(EVENT_LOG_CAPACITY)));
        let sink = Arc::clone(&events);
        field.subscribe(move |event: &PinEvent| {
            let Ok(mut log) = sink.lock() else {
                return;
            };
            if log.len() == EVENT_LOG_CAPACITY {
                log.pop_front();
            }
            log.push_back(event.clone());
        });

        Ok(Self {
            field,
            events,
            should_quit: false,
            status_message: String::new(),
        })
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('d') if ctrl => {
                    let disabled = !self.field.is_disabled();
                    self.field.set_disabled(disabled);
                    self.status_message = if disabled {
                        "Field disabled (Ctrl+D to enable)".to_string()
                    } else {
                        String::new()
                    };
                    return;
                }
                _ => {}
            }
        }

        let idx = self.field.host().focused();
        let result = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.field.handle_key_down(idx, keymap::key_input(&key))
            }
            KeyEventKind::Release => self.field.handle_key_up(idx),
        };
        if let Err(err) = result {
            self.status_message = format!("Error: {err}");
        }
    }

    fn handle_paste(&mut self, text: String) {
        let idx = self.field.host().focused();
        if let Err(err) = self.field.handle_paste(idx, &text) {
            self.status_message = format!("Error: {err}");
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // cells
                Constraint::Min(3),    // event log
                Constraint::Length(1), // status line
                Constraint::Length(1), // shortcuts
            ])
            .split(size);

        self.render_cells(frame, chunks[0]);
        self.render_events(frame, chunks[1]);
        self.render_status_line(frame, chunks[2]);
        self.render_shortcuts(frame, chunks[3]);
    }

    fn render_cells(&self, frame: &mut Frame, area: Rect) {
        let slots = self.field.host();
        let order = slots.visual_order();
        let constraints: Vec<Constraint> = order
            .iter()
            .map(|_| Constraint::Length(CELL_WIDTH))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (area, &idx) in cell_areas.iter().zip(order.iter()) {
            let cell = &slots.cells()[idx];
            let border_color = if slots.is_disabled() {
                Color::DarkGray
            } else if cell.invalid {
                Color::Red
            } else if slots.is_completed() {
                Color::Green
            } else if idx == slots.focused() {
                Color::Yellow
            } else {
                Color::Gray
            };

            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color));
            if idx == slots.focused() && !slots.is_disabled() {
                block = block.border_style(
                    Style::default()
                        .fg(border_color)
                        .add_modifier(Modifier::BOLD),
                );
            }

            let text = Paragraph::new(cell.value.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .centered()
                .block(block);
            frame.render_widget(text, *area);
        }
    }

    fn render_events(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = match self.events.lock() {
            Ok(log) => log.iter().rev().map(event_line).map(ListItem::new).collect(),
            Err(_) => Vec::new(),
        };
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Events"));
        frame.render_widget(list, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let slots = self.field.host();
            let state = if self.field.is_disabled() {
                "disabled"
            } else if self.field.is_complete() {
                "complete"
            } else {
                "editing"
            };
            format!(
                "Code: {:<width$} | Cell: {}/{} | {} | {}",
                self.field.code(),
                slots.focused() + 1,
                self.field.length(),
                match slots.direction() {
                    TextDirection::Ltr => "ltr",
                    TextDirection::Rtl => "rtl",
                },
                state,
                width = self.field.length(),
            )
        };

        let status_line = Paragraph::new(status_text).style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(status_line, area);
    }

    fn render_shortcuts(&self, frame: &mut Frame, area: Rect) {
        let shortcuts = "Type:fill  Left/Right:move  Backspace/Delete:clear  Paste:spread  Ctrl-D:disable  Esc:quit";
        let shortcuts_line =
            Paragraph::new(shortcuts).style(Style::default().bg(Color::Blue).fg(Color::White));
        frame.render_widget(shortcuts_line, area);
    }
}

fn event_line(event: &PinEvent) -> Line<'static> {
    let (color, payload) = match event {
        PinEvent::Change { code } => (Color::Cyan, code.clone()),
        PinEvent::Complete { code } => (Color::Green, code.clone()),
        PinEvent::Resolve { key } => (Color::White, key.clone()),
        PinEvent::Reject { key } => (Color::Red, key.clone()),
    };
    Line::from(vec![
        Span::styled(
            format!("{:<9}", event.kind().name()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{payload:?}")),
    ])
}

fn init_logging() -> io::Result<()> {
    let Some(path) = env::var_os("PIN_FIELD_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: tui-pin-field [--length N] [--charset CHARS | --numeric] [--rtl] [--upper]"
            );
            process::exit(2);
        }
    };

    init_logging()?;

    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    let mut app = match App::new(&options, reports_release) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("error: {err}");
    }

    if app.field.is_complete() {
        println!("{}", app.field.code());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Paste(text) => app.handle_paste(text),
                // Resize and focus events just trigger a redraw.
                _ => {}
            }
        }
    }

    Ok(())
}
