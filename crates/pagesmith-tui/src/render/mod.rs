//! Main render/view function (View in TEA pattern)

use pagesmith_app::state::AppState;
use pagesmith_core::types::GeminiModel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::hit::{HitMap, Region};
use crate::layout;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering except for widget state that tracks rendering info
/// (the transcript scroll clamp); the hit map is rebuilt every frame as
/// a rendering by-product.
pub fn view(frame: &mut Frame, state: &mut AppState, demo_mode: bool, hits: &mut HitMap) {
    hits.clear();
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let artifact_layout = state.active_artifact_view().map(|v| v.layout.clone());
    let areas = layout::create(area, artifact_layout.as_ref());

    let icons = IconSet::new(state.settings.ui.icons);

    if areas.header.height > 0 {
        frame.render_widget(
            widgets::Header::new(state.selected_model.display_name(), demo_mode, icons),
            areas.header,
        );
    }

    if areas.chat.height > 0 {
        widgets::chat::render(frame, areas.chat, state, icons, hits);
    }

    if let Some(view) = state.active_artifact_view() {
        if areas.artifact.height > 0 {
            widgets::artifact::render(
                frame,
                areas.artifact,
                areas.resize_handle,
                state,
                view,
                icons,
                hits,
            );
        }
    }

    if areas.input.height > 0 {
        widgets::input_bar::render(frame, areas.input, state, icons, hits);

        // The model dropdown floats above the input bar, painted last so
        // its hit regions shadow everything under it.
        if state.input.model_open {
            render_model_picker(frame, areas.input, state, hits);
        }
    }
}

fn render_model_picker(frame: &mut Frame, input_area: Rect, state: &AppState, hits: &mut HitMap) {
    let models = GeminiModel::all();
    let height = models.len() as u16 + 2;
    let width = 44u16.min(input_area.width);
    if input_area.y < height || width < 10 {
        return;
    }

    let area = Rect {
        x: input_area.right().saturating_sub(width),
        y: input_area.y - height,
        width,
        height,
    };

    frame.render_widget(Clear, area);
    let block = styles::popup_block(" Model ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, model) in models.iter().enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        hits.register(row_area, Region::ModelEntry(*model));

        let marker = if *model == state.selected_model { "\u{2713} " } else { "  " };
        let style = if i == state.input.model_cursor {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{marker}{}  {}", model.display_name(), model.description()),
                style,
            ))),
            row_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_app::config::Settings;
    use pagesmith_app::message::Message;
    use pagesmith_app::{update, AppState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &mut AppState) -> (Terminal<TestBackend>, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|frame| view(frame, state, true, &mut hits))
            .unwrap();
        (terminal, hits)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_view_renders_seed_conversation() {
        let mut state = AppState::new(Settings::default());
        let (terminal, hits) = draw(&mut state);
        let text = buffer_text(&terminal);

        assert!(text.contains("Page Smith"));
        assert!(text.contains("AstraMind Landing Page"));
        assert!(text.contains("Preview"));
        // Clickable regions were recorded during the frame.
        assert!(hits.hit(50, 5).is_some());
    }

    #[test]
    fn test_view_full_screen_hides_chat() {
        let mut state = AppState::new(Settings::default());
        update(&mut state, Message::ArtifactToggleFullScreen);

        let (terminal, _) = draw(&mut state);
        let text = buffer_text(&terminal);

        // Code view fills the screen; the prompt bar is gone.
        assert!(text.contains("import React"));
        assert!(!text.contains(" Prompt "));
    }

    #[test]
    fn test_model_picker_overlay_registers_hits() {
        let mut state = AppState::new(Settings::default());
        update(&mut state, Message::ToggleModelPicker);

        let (terminal, hits) = draw(&mut state);
        let text = buffer_text(&terminal);
        assert!(text.contains("Gemini Flash"));

        // Some cell inside the popup resolves to a model entry.
        let mut found = false;
        for y in 0..50 {
            for x in 0..100 {
                if matches!(hits.hit(x, y), Some(Region::ModelEntry(_))) {
                    found = true;
                }
            }
        }
        assert!(found);
    }
}
