//! Static preview mock of the generated page.
//!
//! The preview does not interpret the code buffer; it draws a fixed
//! landing-page wireframe the way a thumbnail would.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::{palette, styles};

pub fn render(frame: &mut Frame, area: Rect) {
    if area.height < 3 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("(preview)", styles::text_muted()))),
            area,
        );
        return;
    }

    let [nav, hero] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    // Mock navigation bar
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" \u{25cf} AstraMind", styles::accent_bold()),
            Span::styled(
                "    Features   Pricing   Solutions   Contact",
                styles::text_muted(),
            ),
        ])),
        nav,
    );

    // Mock hero section
    let hero_lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "\u{2726} AI automation for product teams",
            styles::accent(),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Custom AI workflows",
            Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("built for ", Style::default().fg(palette::TEXT_BRIGHT)),
            Span::styled("ambitious teams", styles::accent_bold()),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Automate your product development lifecycle with intelligent",
            styles::text_secondary(),
        )),
        Line::from(Span::styled(
            "agents that understand your codebase and business logic.",
            styles::text_secondary(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" Start Building Free ", styles::focused_selected()),
            Span::raw("  "),
            Span::styled(" Book a Demo ", styles::text_secondary()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(hero_lines).alignment(Alignment::Center),
        hero,
    );
}
