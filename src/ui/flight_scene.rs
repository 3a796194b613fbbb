//! Rendering of the flight scene: play area, status bar, info panel.

use super::common::{draw_bottom_banner, draw_side_panel, draw_status, SceneAreas};
use flapwing::app::App;
use flapwing::sim::collision::gap_bounds;
use flapwing::sim::{Collision, RunPhase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;

const CONTROLS_MANUAL: &[(&str, &str)] = &[
    ("[Space]", "Jump"),
    ("[A]", "Auto-solve"),
    ("[R]", "Restart"),
    ("[Q]", "Quit"),
];

const CONTROLS_AUTO: &[(&str, &str)] = &[
    ("[A]", "Manual"),
    ("[P]", "Pilot"),
    ("[R]", "Restart"),
    ("[Q]", "Quit"),
];

/// Render the whole scene.
pub fn render_flight(frame: &mut Frame, area: Rect, app: &App) {
    let areas = SceneAreas::frame(frame, area, " Flapwing ", Color::Cyan, INFO_PANEL_WIDTH);

    render_play_area(frame, areas.play, app);
    render_status(frame, areas.status, app);
    render_info_panel(frame, areas.side, app);

    if app.phase() == RunPhase::Over {
        render_crash_banner(frame, areas.play, app);
    }
}

/// Draw obstacles and the bird, scaling world units to terminal cells.
///
/// Each cell is sampled at its centre point in world coordinates.
fn render_play_area(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = &app.config;
    let state = &app.state;
    let x_scale = config.world_width / width as f64;
    let y_scale = config.world_height / height as f64;

    let bird_col = (state.bird.x / x_scale).floor() as i64;
    let bird_row = (state.bird.y / y_scale).floor() as i64;
    let bird_char = if state.bird.velocity < -100.0 {
        "▲"
    } else if state.bird.velocity > 300.0 {
        "▼"
    } else {
        "►"
    };
    let bird_color = if state.alive {
        Color::Yellow
    } else {
        Color::Red
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let world_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if row as i64 == bird_row && col as i64 == bird_col {
                spans.push(Span::styled(
                    bird_char,
                    Style::default().fg(bird_color).add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let world_x = (col as f64 + 0.5) * x_scale;
            let barrier = state.obstacles.iter().find_map(|o| {
                if world_x < o.x || world_x > o.x + config.obstacle_width {
                    return None;
                }
                let (gap_top, gap_bottom) = gap_bounds(o, config);
                Some(world_y < gap_top || world_y > gap_bottom)
            });

            match barrier {
                Some(true) => spans.push(Span::styled("█", Style::default().fg(Color::Green))),
                Some(false) => spans.push(Span::styled("·", Style::default().fg(Color::DarkGray))),
                None => spans.push(Span::raw(" ")),
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let controls = if app.auto_solve {
        CONTROLS_AUTO
    } else {
        CONTROLS_MANUAL
    };

    if app.waiting_to_start {
        draw_status(frame, area, "Press Space to start!", Color::Yellow, controls);
    } else if app.auto_solve {
        draw_status(
            frame,
            area,
            &format!("Auto-solve ({}) - Score: {}", app.pilot.name(), app.state.score),
            Color::Magenta,
            controls,
        );
    } else {
        draw_status(
            frame,
            area,
            &format!("Score: {}", app.state.score),
            Color::Green,
            controls,
        );
    }
}

fn info_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let inner = draw_side_panel(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let difficulty = app.difficulty.map_or("Custom", |d| d.name());
    let mode = if app.auto_solve { "Auto-solve" } else { "Manual" };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", difficulty),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", app.state.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        info_line(" Best: ", format!("{}", app.best_score), Color::Yellow),
        Line::from(""),
        info_line(" Mode: ", mode.to_string(), Color::Magenta),
        info_line(" Pilot: ", app.pilot.name().to_string(), Color::Magenta),
        Line::from(""),
        info_line(
            " Time: ",
            format!("{:.1}s", app.state.elapsed_secs(&app.config)),
            Color::White,
        ),
        info_line(" Seed: ", format!("{}", app.seed), Color::DarkGray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_crash_banner(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.state.score;
    let message = match app.state.death {
        Some(Collision::Ceiling) => format!("Hit the ceiling after {} pipes.", score),
        Some(Collision::Floor) => format!("Hit the ground after {} pipes.", score),
        Some(Collision::Obstacle) | None => format!("Crashed into a pipe after {} pipes.", score),
    };

    draw_bottom_banner(
        frame,
        area,
        Color::Red,
        "CRASH!",
        &message,
        "[Space/R] Fly again  [Q] Quit",
    );
}
