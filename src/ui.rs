use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use gridmenu::paste_onto;

const LOG_PANEL_HEIGHT: u16 = 6;

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                   // Menu console
            Constraint::Length(LOG_PANEL_HEIGHT), // Log panel
        ])
        .split(f.area());

    if let [menu_area, log_area] = &chunks[..] {
        render_menu_console(f, app, *menu_area);
        render_log_panel(f, app, *log_area);
    }
}

fn render_menu_console(f: &mut Frame, app: &App, area: Rect) {
    let Some(canvas) = app.canvas() else {
        return;
    };
    let origin = (
        area.x.saturating_add(app.window.menu_x),
        area.y.saturating_add(app.window.menu_y),
    );
    paste_onto(canvas, f.buffer_mut(), origin);
}

fn render_log_panel(f: &mut Frame, app: &App, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(1));
    let lines: Vec<Line> = app
        .logs
        .recent(visible)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray))))
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " ↑/↓ select  Enter activate  Esc quit ",
                    Style::default().fg(Color::DarkGray),
                )),
        ),
        area,
    );
}
