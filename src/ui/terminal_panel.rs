//! Terminal panel: transcript viewport plus the input line.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::VaultSession;

const FOOTER_HINT: &str =
    "💡 Type 'help' to see all commands | Main goal: set_voltage 5 | Many hidden features!";

/// Render the transcript and the prompt line into `area`.
///
/// The viewport sticks to the bottom of the transcript, mirroring a real
/// terminal; older lines scroll out of the top. While the session is busy
/// the input line is dimmed instead of showing a cursor.
pub fn render(frame: &mut Frame, area: Rect, session: &VaultSession, input: &str) {
    let block = Block::default()
        .title(" chip-repair-terminal ")
        .title_bottom(Line::from(FOOTER_HINT).centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // One row is reserved for the input line.
    let transcript_rows = inner.height.saturating_sub(1) as usize;
    let transcript = session.transcript();
    let skip = transcript.len().saturating_sub(transcript_rows);

    let mut lines: Vec<Line> = transcript
        .iter()
        .skip(skip)
        .map(|l| Line::styled(l.clone(), Style::default().fg(Color::Green)))
        .collect();

    let prompt = format!("{} ", session.prompt());
    if session.is_busy() {
        lines.push(Line::styled(
            format!("{prompt}[running...]"),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        lines.push(Line::from(vec![
            Span::styled(prompt.clone(), Style::default().fg(Color::Green)),
            Span::raw(input.to_string()),
        ]));
        let cursor_x = inner.x + (prompt.chars().count() + input.chars().count()) as u16;
        let cursor_y = inner.y + lines.len() as u16 - 1;
        if cursor_x < inner.x + inner.width {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
