//! Terminal User Interface
//!
//! TUI for the detective adventure using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::MessageKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::LightRed,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a message kind
pub fn kind_color(kind: &MessageKind) -> Color {
    match kind {
        MessageKind::Info => Color::Gray,
        MessageKind::Discovery => Color::Yellow,
        MessageKind::Warning => Color::Red,
        MessageKind::Verdict => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔═══════════════════════════════════════════════════════╗
║                                                       ║
║   ██████╗ ███████╗████████╗███████╗ ██████╗████████╗  ║
║   ██╔══██╗██╔════╝╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝  ║
║   ██║  ██║█████╗     ██║   █████╗  ██║        ██║     ║
║   ██║  ██║██╔══╝     ██║   ██╔══╝  ██║        ██║     ║
║   ██████╔╝███████╗   ██║   ███████╗╚██████╗   ██║     ║
║   ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝ ╚═════╝   ╚═╝     ║
║                                                       ║
║    ██████╗ ██╗   ██╗███████╗███████╗████████╗         ║
║   ██╔═══██╗██║   ██║██╔════╝██╔════╝╚══██╔══╝         ║
║   ██║   ██║██║   ██║█████╗  ███████╗   ██║            ║
║   ██║▄▄ ██║██║   ██║██╔══╝  ╚════██║   ██║            ║
║   ╚██████╔╝╚██████╔╝███████╗███████║   ██║            ║
║    ╚══▀▀═╝  ╚═════╝ ╚══════╝╚══════╝   ╚═╝            ║
║                                                       ║
║           Chronicles of the Mansion                   ║
╚═══════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════╗
║                     CONTROLS                          ║
╠═══════════════════════════════════════════════════════╣
║  ↑/↓    Navigate menus                                ║
║  Enter  Select option / Confirm                       ║
║  ?      Toggle this help                              ║
║  q      Quit (main menu only)                         ║
╠═══════════════════════════════════════════════════════╣
║                   EXPLORATION                         ║
╠═══════════════════════════════════════════════════════╣
║  l / ←  Go through the left door                      ║
║  r / →  Go through the right door                     ║
║  x      Leave the mansion and accuse a suspect        ║
╠═══════════════════════════════════════════════════════╣
║                    ACCUSATION                         ║
╠═══════════════════════════════════════════════════════╣
║  Type the suspect's name and press Enter.             ║
║  An empty name closes the case unsolved.              ║
╚═══════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room panel + message area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),  // Room / notebook panel
            Constraint::Percentage(65),  // Narration
        ])
        .split(area)
        .to_vec()
}
