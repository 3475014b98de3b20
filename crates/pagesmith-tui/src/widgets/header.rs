//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing the app title, active model, and mode badge
pub struct Header<'a> {
    model_name: &'a str,
    demo_mode: bool,
    icons: IconSet,
}

impl<'a> Header<'a> {
    pub fn new(model_name: &'a str, demo_mode: bool, icons: IconSet) -> Self {
        Self {
            model_name,
            demo_mode,
            icons,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(format!(" {} ", self.icons.sparkle()), styles::accent_bold()),
            Span::styled("Page Smith", styles::accent_bold()),
            Span::styled("  AI Website Builder", styles::text_muted()),
        ];
        if self.demo_mode {
            spans.push(Span::styled("  [UI Demo]", Style::default().fg(palette::STATUS_YELLOW)));
        }
        Line::from(spans).render(inner, buf);

        // Model indicator, right aligned
        let model = format!("{} ", self.model_name);
        let width = model.chars().count() as u16;
        if inner.width > width {
            let right = Rect {
                x: inner.x + inner.width - width,
                y: inner.y,
                width,
                height: 1,
            };
            Line::from(Span::styled(model, styles::text_secondary())).render(right, buf);
        }
    }
}
