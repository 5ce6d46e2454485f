//! Main application state and rendering

use crate::data::Direction as DoorSide;
use crate::game::accusation::GUILT_THRESHOLD;
use crate::game::{CaseOutcome, Game, GamePhase};
use crate::tui::widgets::{TallyMeter, VerdictBox};
use crate::tui::{create_content_layout, create_main_layout, kind_color, styled_block};
use crate::tui::{Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub input_buffer: String,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Playing,
    Accusation,
    GameOver,
}

impl App {
    pub fn new() -> crate::Result<Self> {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Ok(Self {
            game: Game::new()?,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            input_buffer: String::new(),
        })
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                // Accusation screen is a text prompt; everything is input.
                if self.current_screen == Screen::Accusation {
                    match key.code {
                        KeyCode::Enter => {
                            let name = std::mem::take(&mut self.input_buffer);
                            self.game.submit_accusation(&name);
                            self.current_screen = Screen::GameOver;
                        }
                        KeyCode::Esc => {
                            // Walking away without naming anyone.
                            self.input_buffer.clear();
                            self.game.submit_accusation("");
                            self.current_screen = Screen::GameOver;
                        }
                        KeyCode::Backspace => {
                            self.input_buffer.pop();
                        }
                        KeyCode::Char(c) => {
                            self.input_buffer.push(c);
                        }
                        _ => {}
                    }
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('q') if self.current_screen == Screen::MainMenu => {
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Esc if self.show_help => {
                        self.show_help = false;
                    }
                    KeyCode::Up if self.current_screen == Screen::MainMenu => {
                        self.navigate_menu(-1);
                    }
                    KeyCode::Down if self.current_screen == Screen::MainMenu => {
                        self.navigate_menu(1);
                    }
                    KeyCode::Enter => self.handle_enter(),

                    // Exploration keys
                    KeyCode::Left if self.current_screen == Screen::Playing => {
                        self.handle_exploration_key('l');
                    }
                    KeyCode::Right if self.current_screen == Screen::Playing => {
                        self.handle_exploration_key('r');
                    }
                    KeyCode::Char(c) if self.current_screen == Screen::Playing => {
                        self.handle_exploration_key(c);
                    }

                    KeyCode::Char('q') if self.current_screen == Screen::GameOver => {
                        self.running = false;
                        return Ok(false);
                    }
                    _ => {}
                }
            }
        }
        Ok(true)
    }

    fn navigate_menu(&mut self, delta: i32) {
        const MENU_LEN: i32 = 3;
        let selected = self.menu_state.selected().unwrap_or(0) as i32;
        let next = (selected + delta).rem_euclid(MENU_LEN);
        self.menu_state.select(Some(next as usize));
    }

    fn handle_enter(&mut self) {
        match self.current_screen {
            Screen::MainMenu => match self.menu_state.selected() {
                Some(0) => self.current_screen = Screen::Playing,
                Some(1) => self.show_help = true,
                Some(2) => self.running = false,
                _ => {}
            },
            Screen::GameOver => {
                // Fresh case, back to the menu.
                if let Ok(game) = Game::new() {
                    self.game = game;
                }
                self.input_buffer.clear();
                self.current_screen = Screen::MainMenu;
            }
            _ => {}
        }
    }

    fn handle_exploration_key(&mut self, key: char) {
        self.game.handle_key(key);
        if self.game.phase == GamePhase::Accusing {
            self.current_screen = Screen::Accusation;
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame),
            Screen::Playing => self.render_game(frame),
            Screen::Accusation => self.render_accusation(frame),
            Screen::GameOver => self.render_game_over(frame),
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_main_menu(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            area,
        );

        let menu_height: u16 = 7;
        let logo_height = LOGO.lines().count() as u16;

        if area.height < logo_height + menu_height + 2 {
            // Compact mode for small terminals
            let title = Paragraph::new("═══ DETECTIVE QUEST ═══")
                .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(title, Rect::new(0, 1, area.width, 1));

            let subtitle = Paragraph::new("Chronicles of the Mansion")
                .style(Style::default().fg(self.theme.header))
                .alignment(Alignment::Center);
            frame.render_widget(subtitle, Rect::new(0, 2, area.width, 1));
        } else {
            let logo = Paragraph::new(LOGO)
                .style(Style::default().fg(self.theme.accent))
                .alignment(Alignment::Center);
            frame.render_widget(
                logo,
                Rect::new(area.x, 1, area.width, logo_height.min(area.height)),
            );
        }

        let menu_y = (area.height.saturating_sub(menu_height + 1)).max(4);
        let menu_area = Rect::new(
            area.width / 4,
            menu_y.min(area.height.saturating_sub(menu_height)),
            area.width / 2,
            menu_height.min(area.height),
        );

        let menu_items = vec![
            ListItem::new("  ▶ New Case"),
            ListItem::new("  ▶ Help"),
            ListItem::new("  ▶ Quit"),
        ];

        let menu = List::new(menu_items)
            .block(styled_block("Main Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("→ ");

        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);
    }

    fn render_game(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.area());
        self.render_header(frame, chunks[0]);

        let content = create_content_layout(chunks[1]);
        self.render_room_panel(frame, content[0]);
        self.render_messages(frame, content[1]);

        self.render_status_bar(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD),
            ),
            Span::raw("│ "),
            Span::styled(&self.game.title, Style::default().fg(self.theme.accent)),
            Span::raw(" │ "),
            Span::styled(
                format!(
                    "Rooms: {} │ Clues: {}",
                    self.game.stats.rooms_visited, self.game.stats.clues_collected
                ),
                Style::default().fg(self.theme.fg),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(header, area);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect) {
        let room = self.game.graph.room(self.game.exploration.current_room());

        let door = |side: DoorSide, key: &str| -> Line {
            match room.child(side) {
                Some(next) => Line::from(vec![
                    Span::styled(format!("  ({key}) "), Style::default().fg(self.theme.accent)),
                    Span::raw(self.game.graph.room(next).name().to_string()),
                ]),
                None => Line::from(vec![
                    Span::styled(format!("  ({key}) "), Style::default().fg(self.theme.border)),
                    Span::styled("no door", Style::default().fg(self.theme.border)),
                ]),
            }
        };

        let mut lines = vec![
            Line::from(Span::styled(
                room.name().to_string(),
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            door(DoorSide::Left, "l"),
            door(DoorSide::Right, "r"),
            Line::from(vec![
                Span::styled("  (x) ", Style::default().fg(self.theme.accent)),
                Span::raw("leave and accuse"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Notebook ({} clues)", self.game.clues.len()),
                Style::default().fg(self.theme.header),
            )),
        ];
        for clue in self.game.collected_clues() {
            lines.push(Line::from(Span::styled(
                format!("  - {clue}"),
                Style::default().fg(self.theme.fg),
            )));
        }

        let panel = Paragraph::new(lines)
            .block(styled_block("Mansion", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let log = &self.game.message_log;
        let skip = log.len().saturating_sub(visible);

        let lines: Vec<Line> = log
            .iter()
            .skip(skip)
            .map(|msg| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", msg.timestamp.format("%H:%M:%S")),
                        Style::default().fg(self.theme.border),
                    ),
                    Span::styled(
                        format!("{} ", msg.kind.symbol()),
                        Style::default().fg(kind_color(&msg.kind)),
                    ),
                    Span::styled(msg.text.clone(), Style::default().fg(self.theme.fg)),
                ])
            })
            .collect();

        let messages = Paragraph::new(lines)
            .block(styled_block("Narration", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(messages, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new("l/← left │ r/→ right │ x leave & accuse │ ? help")
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        frame.render_widget(status, area);
    }

    fn render_accusation(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let title = Paragraph::new(Span::styled(
            "WHO DID IT?",
            Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(title, chunks[0]);

        let mut lines = vec![Line::from(Span::styled(
            "Clues in your notebook:",
            Style::default().fg(self.theme.header),
        ))];
        if self.game.clues.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none collected)",
                Style::default().fg(self.theme.border),
            )));
        }
        for clue in self.game.collected_clues() {
            lines.push(Line::from(format!("  - {clue}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Known suspects: {}", self.game.suspects.join(", ")),
            Style::default().fg(self.theme.border),
        )));

        let notebook = Paragraph::new(lines)
            .block(styled_block("Case Notebook", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(notebook, chunks[1]);

        let prompt = Paragraph::new(Line::from(vec![
            Span::raw(self.input_buffer.as_str()),
            Span::styled("█", Style::default().fg(self.theme.accent)),
        ]))
        .block(styled_block("Accuse (Enter to confirm, Esc to walk away)", &self.theme));
        frame.render_widget(prompt, chunks[2]);

        let footer = Paragraph::new("Names are case-sensitive.")
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn render_game_over(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let outcome = match &self.game.phase {
            GamePhase::CaseClosed(outcome) => *outcome,
            // Not reachable from the screen flow; render as abandoned.
            _ => CaseOutcome::Abandoned,
        };

        let (title, color) = match outcome {
            CaseOutcome::Guilty => ("CASE CLOSED: GUILTY", Color::Green),
            CaseOutcome::InsufficientEvidence => ("INSUFFICIENT EVIDENCE", Color::Yellow),
            CaseOutcome::Abandoned => ("CASE ABANDONED", Color::Red),
        };

        let mut content = Vec::new();
        match &self.game.result {
            Some(result) => {
                content.push(format!("Accused: {}", result.accused));
                content.push(String::new());
                for (clue, suspect) in &result.evidence {
                    match suspect {
                        Some(name) => content.push(format!("{clue} → {name}")),
                        None => content.push(format!("{clue} → (points at nobody)")),
                    }
                }
            }
            None => {
                content.push("You left without naming a suspect.".to_string());
                content.push("No verdict was issued.".to_string());
            }
        }
        content.push(String::new());
        content.push("Press Enter for a new case, q to quit.".to_string());

        let box_height = (content.len() as u16 + 4).min(area.height);
        let box_width = (area.width * 3 / 4).max(30).min(area.width);
        let box_area = Rect::new(
            (area.width - box_width) / 2,
            area.height.saturating_sub(box_height) / 2,
            box_width,
            box_height,
        );

        frame.render_widget(
            VerdictBox::new(title)
                .content(content)
                .border_color(color),
            box_area,
        );

        if let Some(result) = &self.game.result {
            let meter_y = box_area.y + box_area.height;
            if meter_y + 2 <= area.height {
                let meter_area = Rect::new(box_area.x + 2, meter_y, box_area.width - 4, 2);
                frame.render_widget(
                    TallyMeter::new("Matching clues", result.tally, GUILT_THRESHOLD),
                    meter_area,
                );
            }
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let help_height = (HELP_TEXT.lines().count() as u16).min(area.height);
        let help_width = 59.min(area.width);
        let help_area = Rect::new(
            (area.width.saturating_sub(help_width)) / 2,
            (area.height.saturating_sub(help_height)) / 2,
            help_width,
            help_height,
        );

        frame.render_widget(Clear, help_area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, help_area);
    }
}
