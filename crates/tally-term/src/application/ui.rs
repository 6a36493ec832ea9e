use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::prelude::Backend;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tally_core::ButtonGrid;
use tally_core::ButtonKey;
use tally_core::Calculator;

use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

const CALCULATOR_WIDTH: u16 = 36;
const BUTTON_WIDTH: usize = 5;
const HELP_TEXT: &str = "arrows move · enter press · q quit";

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tick_rate: Duration,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new(tick_rate);

    loop {
        terminal.draw(|frame| render(frame, &app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event) {
            tracing::debug!("quit requested");
            break;
        }
    }

    return Ok(());
}

pub fn render(frame: &mut Frame, app_state: &AppState) {
    let calculator = app_state.router.calculator();
    let grid = app_state.router.grid();

    let grid_height = (grid.rows().len() * 2).saturating_sub(1) as u16;
    let area = centered_rect(CALCULATOR_WIDTH, grid_height + 9, frame.area());
    let container = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Terminal Calculator ")
        .title_alignment(Alignment::Center);
    let inner = container.inner(area);
    frame.render_widget(container, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(grid_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(display_widget(calculator), chunks[0]);
    frame.render_widget(grid_widget(grid), chunks[2]);
    frame.render_widget(status_widget(app_state.status.as_deref()), chunks[4]);
}

fn display_widget(calculator: &Calculator) -> Paragraph<'static> {
    let pending = calculator.pending_indicator().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(pending, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            calculator.formatted_display(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    return Paragraph::new(lines).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Blue)),
    );
}

fn grid_widget(grid: &ButtonGrid) -> Paragraph<'static> {
    let (selected_row, selected_col) = grid.selected();
    let mut lines = vec![];

    for (row_idx, row) in grid.rows().iter().enumerate() {
        if row_idx > 0 {
            lines.push(Line::default());
        }

        let mut spans = vec![];
        for (col_idx, button) in row.iter().enumerate() {
            if col_idx > 0 {
                spans.push(Span::raw(" "));
            }
            let selected = row_idx == selected_row && col_idx == selected_col;
            spans.push(Span::styled(
                format!("{:^width$}", button.label, width = BUTTON_WIDTH),
                button_style(button.key, selected),
            ));
        }
        lines.push(Line::from(spans));
    }

    return Paragraph::new(lines).alignment(Alignment::Center);
}

fn status_widget(status: Option<&str>) -> Paragraph<'static> {
    let line = match status {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            HELP_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };

    return Paragraph::new(line).alignment(Alignment::Center);
}

fn button_style(key: ButtonKey, selected: bool) -> Style {
    let style = match key {
        ButtonKey::Digit(_) | ButtonKey::Decimal => Style::default().fg(Color::White).bg(Color::Blue),
        ButtonKey::Operator(_) | ButtonKey::Backspace => {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        }
        ButtonKey::Clear | ButtonKey::ClearEntry => Style::default().fg(Color::White).bg(Color::Red),
        ButtonKey::Equals => Style::default().fg(Color::White).bg(Color::Green),
    };

    if selected {
        return style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    return style;
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
}
