mod groups;
mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {}  ", err.message), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![
            status_span,
            Span::raw(" "),
            Span::styled(format!(" {} ", state.catalog_source.label()), theme.header_item),
            Span::raw("  "),
        ];

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width: usize = spans.iter().map(Span::width).sum();

        for group in groups::get_groups(state) {
            let Some(first) = group.items.first() else {
                continue;
            };
            let first_width = first.key.len() + first.desc.len() + 4;
            if current_width + first_width > available_width {
                break;
            }

            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.footer_group_name);
                if current_width + label.width() + first_width < available_width {
                    current_width += label.width();
                    spans.push(label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);
                let item_width = Span::raw(key_str.as_str()).width() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (theme.header_active, theme.header_active.add_modifier(Modifier::DIM))
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
