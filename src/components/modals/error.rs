use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Reports a failed catalog reload; the previous catalog stays active.
pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 40, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let (title, style) = match self.error.severity {
            ErrorSeverity::Info => (" INFO ", self.theme.status_info),
            ErrorSeverity::Warning => (" WARNING ", self.theme.status_warn),
            ErrorSeverity::Error => (" ERROR ", self.theme.status_error),
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(style);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.error.message.as_str(),
                self.theme.footer_segment_val,
            )),
            Line::from(Span::styled(
                format!("at {}", self.error.timestamp.format("%H:%M:%S")),
                self.theme.dimmed,
            )),
            Line::from(""),
        ];

        if !self.error.suggestions.is_empty() {
            lines.push(Line::from(Span::styled("Suggestions:", self.theme.header_item)));
            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::styled("  - ", self.theme.header_item),
                    Span::styled(suggestion.as_str(), self.theme.list_item),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::raw(" Press "),
            Span::styled(" Esc ", self.theme.footer_segment_key),
            Span::raw(" to dismiss "),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
