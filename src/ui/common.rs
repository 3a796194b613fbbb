//! Scene frame, status bar and overlay pieces used by the flight scene.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows reserved under the play area for the status bar.
const STATUS_ROWS: u16 = 2;
const BANNER_ROWS: u16 = 5;

/// Areas of the scene inside its outer border.
///
/// ```text
/// ┌─ Flapwing ──────────────────────┬─ Info ──────┐
/// │ play                            │ side        │
/// │                                 │             │
/// │ status (message + key hints)    │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub struct SceneAreas {
    pub play: Rect,
    pub status: Rect,
    pub side: Rect,
}

impl SceneAreas {
    /// Clear `area`, draw the titled border and split what is inside it.
    pub fn frame(frame: &mut Frame, area: Rect, title: &str, accent: Color, side_width: u16) -> Self {
        frame.render_widget(Clear, area);
        let border = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        let inner = border.inner(area);
        frame.render_widget(border, area);

        let [left, side] = split2(
            inner,
            Direction::Horizontal,
            [Constraint::Min(20), Constraint::Length(side_width)],
        );
        let [play, status] = split2(
            left,
            Direction::Vertical,
            [Constraint::Min(5), Constraint::Length(STATUS_ROWS)],
        );

        Self { play, status, side }
    }
}

fn split2(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

fn row(area: Rect, offset: u16) -> Rect {
    Rect {
        y: area.y + offset,
        height: 1,
        ..area
    }
}

/// Centered message line plus a line of `(key, action)` hints.
pub fn draw_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        row(area, 0),
    );

    if area.height < 2 || hints.is_empty() {
        return;
    }
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = (i > 0).then(|| Span::raw("  "));
            gap.into_iter().chain([
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row(area, 1),
    );
}

/// Boxed banner along the bottom of `area`. The rest of the area is left as
/// drawn, so the final frame of the run stays visible.
pub fn draw_bottom_banner(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    headline: &str,
    detail: &str,
    hint: &str,
) {
    if area.height < BANNER_ROWS {
        return;
    }
    let banner = Rect {
        y: area.y + area.height - BANNER_ROWS,
        height: BANNER_ROWS,
        ..area
    };
    frame.render_widget(Clear, banner);

    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = border.inner(banner);
    frame.render_widget(border, banner);

    let text = vec![
        Line::from(vec![
            Span::styled(headline, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(" - "),
            Span::styled(detail, Style::default().fg(Color::White)),
        ]),
        Line::default(),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Bordered side panel titled " Info "; returns the area inside the border.
pub fn draw_side_panel(frame: &mut Frame, area: Rect) -> Rect {
    let border = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = border.inner(area);
    frame.render_widget(border, area);
    inner
}
