//! TUI host for the vault terminal.
//!
//! The host owns the crossterm event loop and picks one of three screen
//! variants from observed session state: the missing-chip error screen,
//! the repair terminal, or the unlocked-vault success screen. It also
//! turns queued notifications into popup overlays and disables the input
//! field while a voltage evaluation is in flight.

pub mod popup;
pub mod status_panel;
pub mod terminal_panel;

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    DefaultTerminal, Frame,
};

use crate::config::Config;
use crate::notify::SharedSink;
use crate::services::time_source::RealTimeSource;
use crate::session::VaultSession;
use crate::state::PROJECT_IDS;

/// Hint popup shown on the missing-chip screen.
pub const CHIP_MISSING_HINT: &str = "😢 I'm feeling so sad... I lost my precious chip somewhere \
    on this website. Without it, I can't function properly. Can you help me find it? Look for \
    something glowing and out of place...";

/// The secret projects revealed behind the vault, one card per id.
pub const SECRET_PROJECTS: [(&str, &str, &str); 6] = [
    ("Neural Network Visualizer", "Prototype", "Three.js, WebGL"),
    ("Quantum CSS Framework", "Experimental", "CSS3, Machine Learning"),
    ("AI Code Poet", "Fun Project", "OpenAI API, NLP"),
    ("Holographic UI Library", "Future Tech", "WebXR, Three.js"),
    ("Time-Travel Debugger", "Research", "Node.js, Time Magic"),
    ("Emotion-Responsive UI", "Prototype", "Computer Vision, ML"),
];

pub struct App {
    session: VaultSession,
    notifications: SharedSink,
    pending_popups: VecDeque<String>,
    popup: Option<String>,
    input: String,
    chip_found: bool,
    show_status_panel: bool,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, chip_found: bool) -> Self {
        let sink = SharedSink::new();
        let session = VaultSession::new(config, RealTimeSource::shared(), Box::new(sink.clone()));

        Self {
            session,
            notifications: sink,
            pending_popups: VecDeque::new(),
            popup: None,
            input: String::new(),
            chip_found,
            show_status_panel: config.ui.status_panel,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.session.tick();

            self.pending_popups.extend(self.notifications.drain());
            if self.popup.is_none() {
                self.popup = self.pending_popups.pop_front();
            }

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Quit works from every screen.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        // An open popup swallows input until dismissed.
        if self.popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.popup = None;
            }
            return;
        }

        if !self.chip_found {
            if key.code == KeyCode::Enter {
                self.popup = Some(CHIP_MISSING_HINT.to_string());
            }
            return;
        }

        if self.session.repaired() {
            return;
        }

        // The input field is disabled while a voltage evaluation runs.
        if self.session.is_busy() {
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.session.submit(&line);
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if !self.chip_found {
            self.draw_error_screen(frame);
        } else if self.session.repaired() {
            self.draw_success_screen(frame);
        } else {
            self.draw_terminal_screen(frame);
        }

        if let Some(message) = &self.popup {
            popup::render(frame, message);
        }
    }

    /// Variant 1: the chip has not been found yet.
    fn draw_error_screen(&self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::default()
            .title(" The Hacker's Vault ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let locks = "  🔒  ".repeat(PROJECT_IDS.len());

        let lines = vec![
            Line::from(""),
            Line::styled(
                "⚠️  SYSTEM ERROR ⚠️",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from("The vault's security system has detected a missing component..."),
            Line::from(""),
            Line::from(locks),
            Line::from(""),
            Line::from("ERROR: Missing critical component"),
            Line::from("SYSTEM: Chip not found"),
            Line::from("STATUS: Vault locked"),
            Line::from("HINT: Search the main page..."),
            Line::from(""),
            Line::styled(
                "💡 Press Enter to hear from the sad robot | Ctrl+Q to quit",
                Style::default().fg(Color::Yellow),
            ),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .centered()
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    /// Variant 2: chip found but corrupted; terminal plus status monitor.
    fn draw_terminal_screen(&self, frame: &mut Frame) {
        let area = frame.area();
        if self.show_status_panel && area.width >= 80 {
            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            terminal_panel::render(frame, panels[0], &self.session, &self.input);
            status_panel::render(frame, panels[1], &self.session);
        } else {
            terminal_panel::render(frame, area, &self.session, &self.input);
        }
    }

    /// Variant 3: fully repaired; success banner and the unlocked cards.
    fn draw_success_screen(&self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::default()
            .title(" 🎊 CHIP REPAIR SUCCESSFUL! 🎊 ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let mut lines = vec![
            Line::from(""),
            Line::from("Excellent work! You successfully repaired the robot's chip"),
            Line::from("and restored full functionality!"),
            Line::from(""),
            Line::from("🔧 CHIP REPAIR COMPLETED SUCCESSFULLY!"),
            Line::from("✅ Voltage: 5.0V (OPTIMAL)"),
            Line::from("✅ Temperature: 45°C (NORMAL)"),
            Line::from("✅ Status: FULLY OPERATIONAL"),
            Line::from("🔓 Secret vault now accessible"),
            Line::from("🤖 Robot happiness: MAXIMUM"),
            Line::from(""),
        ];

        for (id, (name, status, tech)) in PROJECT_IDS.iter().zip(SECRET_PROJECTS) {
            let icon = if self.session.unlocked().contains(*id) {
                Span::styled("🔓", Style::default().fg(Color::Green))
            } else {
                Span::styled("🔒", Style::default().fg(Color::Red))
            };
            lines.push(Line::from(vec![
                icon,
                Span::raw(" "),
                Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  [{status}]  {tech}")),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled(
            "\"Every chip needs the right voltage to work properly. Great job fixing me!\"",
            Style::default().fg(Color::Yellow),
        ));
        lines.push(Line::from("- The Fully Operational Robot 🤖"));

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .centered()
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}
