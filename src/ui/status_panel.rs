//! Chip status monitor panel.
//!
//! A compact view over the two observable facts: the repair flag drives
//! the chip diagram's color and labels, the unlocked set drives the
//! per-project lock icons.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::VaultSession;
use crate::state::PROJECT_IDS;

pub fn render(frame: &mut Frame, area: Rect, session: &VaultSession) {
    let repaired = session.repaired();
    let accent = if repaired { Color::Green } else { Color::Red };

    let block = Block::default()
        .title(" 🔧 Chip Status Monitor ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let chip_label = if repaired { "[ CHIP ✓ ]" } else { "[ CHIP ✗ ]" };
    let mut lines = vec![
        Line::from(""),
        Line::styled("   ┌──────────────┐", Style::default().fg(accent)),
        Line::from(vec![
            Span::styled("   │  ", Style::default().fg(accent)),
            Span::styled(
                chip_label,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │", Style::default().fg(accent)),
        ]),
        Line::styled("   └──────────────┘", Style::default().fg(accent)),
        Line::from(""),
        Line::from(format!(
            "   Voltage:     {}",
            if repaired { "5.0V" } else { "0.0V" }
        )),
        Line::from(format!(
            "   Temperature: {}",
            if repaired { "45°C" } else { "85°C" }
        )),
        Line::from(format!(
            "   Vault:       {}",
            if repaired { "UNLOCKING" } else { "LOCKED" }
        )),
        Line::from(""),
        Line::styled("   Secret projects:", Style::default().fg(Color::Magenta)),
    ];

    for id in PROJECT_IDS {
        let (icon, color) = if session.unlocked().contains(id) {
            ("🔓", Color::Green)
        } else {
            ("🔒", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(format!("{icon} {id}"), Style::default().fg(color)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
