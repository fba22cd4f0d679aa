use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{FrameBuffer, GameState, GridPoint};

/// Terminal view of the panel framebuffer
///
/// Two panel rows share one terminal row via half-block glyphs, so the tall
/// rotated panel still fits a reasonable terminal.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, fb: &FrameBuffer, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Panel area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], fb, state);
        frame.render_widget(stats, chunks[0]);

        // Center the panel horizontally
        let panel_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let panel = self.render_panel(fb);
        frame.render_widget(panel, panel_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_panel(&self, fb: &FrameBuffer) -> Paragraph<'_> {
        let mut lines = Vec::new();

        let mut y = 0;
        while y < fb.height() {
            let mut row = String::with_capacity(fb.width() as usize);
            for x in 0..fb.width() {
                let top = fb.pixel(GridPoint::new(x, y));
                let bottom = fb.pixel(GridPoint::new(x, y + 1));
                row.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(Color::White),
            )));
            y += 2;
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, fb: &FrameBuffer, state: &GameState) -> Paragraph<'_> {
        // The panel's own text line: the score once ticking, the prompt before
        let hud = fb
            .overlay_at(GridPoint::new(0, 0))
            .unwrap_or("")
            .to_string();

        let mut spans = vec![
            Span::styled("Panel: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.body.len().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(format_run_time(state.last_tick_ms), Style::default().fg(Color::White)),
        ];

        if !state.alive {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "DEAD!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn format_run_time(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
