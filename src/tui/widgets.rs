//! Custom widgets for the game UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A bar showing how many clues point at the accused versus the guilt
/// threshold
pub struct TallyMeter {
    tally: u32,
    threshold: u32,
    label: String,
}

impl TallyMeter {
    pub fn new(label: &str, tally: u32, threshold: u32) -> Self {
        Self {
            tally,
            threshold,
            label: label.to_string(),
        }
    }
}

impl Widget for TallyMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.tally >= self.threshold {
            Color::Green
        } else {
            Color::Red
        };

        let label = format!("{}: {}/{}", self.label, self.tally, self.threshold);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let bar_y = area.y + 1;
            let slots = area.width.saturating_sub(2);
            let filled = (self.tally.min(self.threshold) as u16 * slots)
                / self.threshold.max(1) as u16;

            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());
            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..slots {
                buf.set_string(
                    area.x + 1 + x,
                    bar_y,
                    "░",
                    Style::default().fg(Color::DarkGray),
                );
            }
        }
    }
}

/// Double-line bordered box for the verdict announcement
pub struct VerdictBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl VerdictBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for VerdictBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.border_color);

        // Top border with centered title
        buf.set_string(area.x, area.y, "╔", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y, "═", style);
        }
        buf.set_string(area.x + area.width - 1, area.y, "╗", style);

        if self.title.len() + 2 < area.width as usize {
            let title_start = (area.width as usize - self.title.len() - 2) / 2;
            buf.set_string(
                area.x + title_start as u16,
                area.y,
                format!(" {} ", self.title),
                style,
            );
        }

        // Sides
        for y in 1..area.height - 1 {
            buf.set_string(area.x, area.y + y, "║", style);
            buf.set_string(area.x + area.width - 1, area.y + y, "║", style);
        }

        // Bottom border
        buf.set_string(area.x, area.y + area.height - 1, "╚", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y + area.height - 1, "═", style);
        }
        buf.set_string(area.x + area.width - 1, area.y + area.height - 1, "╝", style);

        // Content
        for (i, line) in self.content.iter().enumerate() {
            if i as u16 + 1 < area.height - 1 {
                buf.set_string(
                    area.x + 2,
                    area.y + 1 + i as u16,
                    line,
                    Style::default().fg(Color::White),
                );
            }
        }
    }
}
