//! Terminal rendering.

mod common;
pub mod flight_scene;

use flapwing::app::App;
use ratatui::Frame;

/// Draw the current frame of the session.
pub fn draw(frame: &mut Frame, app: &App) {
    flight_scene::render_flight(frame, frame.size(), app);
}
