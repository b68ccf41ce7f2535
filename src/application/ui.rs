use std::io;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::BusyMode;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::ServiceHealth;
use crate::domain::models::TextArea;
use crate::domain::models::UploadStatus;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

const ANIMATION_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(500);

fn header_line(app_state: &AppState) -> Line<'static> {
    let (health, color) = match app_state.service_health {
        ServiceHealth::Unknown => ("checking", Color::DarkGray),
        ServiceHealth::Reachable => ("connected", Color::Green),
        ServiceHealth::Unreachable => ("unreachable", Color::Red),
    };

    return Line::from(vec![
        Span::styled("DocChat", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {} ", app_state.api_base_url)),
        Span::styled(format!("({health})"), Style::default().fg(color)),
    ]);
}

fn footer_line(app_state: &AppState) -> Line<'static> {
    if let Some(notice) = &app_state.notice {
        return Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let file = match &app_state.selected_file {
        Some(file) => format!("File: {}", file.name),
        None => "No file selected. Use /file PATH".to_string(),
    };

    let status_color = match app_state.upload_status {
        UploadStatus::Succeeded => Color::Green,
        UploadStatus::Failed => Color::Red,
        _ => Color::Gray,
    };

    let mut spans = vec![Span::raw(file)];
    if app_state.upload_status != UploadStatus::Idle {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            app_state.upload_status.to_string(),
            Style::default().fg(status_color),
        ));
    }

    return Line::from(spans);
}

fn paste(app_state: &mut AppState, text: &str) {
    for char in text.chars() {
        match char {
            '\r' => continue,
            '\n' => app_state.prompt.insert_newline(),
            _ => app_state.prompt.insert_char(char),
        }
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let loading = Loading::default();
    let mut events = EventsService::new(rx);

    loop {
        app_state.prompt.set_block(TextArea::block(app_state.can_send()));

        terminal.draw(|frame| {
            let mut loading_height = 0;
            if app_state.is_busy() {
                loading_height = 1;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(loading_height),
                    Constraint::Max(4),
                    Constraint::Length(1),
                ])
                .split(frame.size());

            if layout[1].width != app_state.last_known_width
                || layout[1].height != app_state.last_known_height
            {
                app_state.set_rect(layout[1]);
            }

            frame.render_widget(Paragraph::new(header_line(app_state)), layout[0]);

            app_state
                .bubble_list
                .render(frame, layout[1], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[1].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.is_busy() {
                loading.render(frame, layout[2]);
            }

            frame.render_widget(app_state.prompt.widget(), layout[3]);
            frame.render_widget(Paragraph::new(footer_line(app_state)), layout[4]);
        })?;

        let mut tick = IDLE_TICK;
        if app_state.scroll.is_animating() {
            tick = ANIMATION_TICK;
        }

        match events.next(tick).await? {
            Event::AskResponse(res) => {
                app_state.handle_ask_response(res);
            }
            Event::UploadResponse(res) => {
                app_state.handle_upload_response(res);
            }
            Event::ServiceHealth(health) => {
                app_state.service_health = health;
            }
            Event::KeyboardCharInput(input) => {
                app_state.prompt.input(input);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                if app_state.submit_prompt(&tx)? {
                    break;
                }
            }
            Event::KeyboardPaste(text) => {
                paste(app_state, &text);
            }
            Event::UIResize() => {
                terminal.autoresize()?;
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                app_state.scroll.step();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let busy_mode = BusyMode::from_str(&Config::get(ConfigKey::BusyMode))?;
    let mut app_state = AppState::new(
        &Config::get(ConfigKey::ApiBaseUrl),
        &Config::get(ConfigKey::Username),
        busy_mode,
        &Config::get(ConfigKey::File),
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
