pub mod panel;

use ratatui::Frame;
use ratatui::widgets::Paragraph;

/// Draws the rendered panel text at the top-left of the frame.
pub fn draw(frame: &mut Frame, view: &str) {
    frame.render_widget(Paragraph::new(view), frame.area());
}

#[cfg(test)]
mod tests;
