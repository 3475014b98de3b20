//! Widget implementations for the TUI

pub mod artifact;
pub mod chat;
pub mod header;
pub mod input_bar;

pub use header::Header;

/// Wrap `text` to `width` columns, breaking on spaces where possible.
///
/// Plain character-count wrapping; wide glyphs are counted by display
/// width so CJK content does not overflow the cell budget.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    use unicode_width::UnicodeWidthChar;

    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0;
        for word in raw.split(' ') {
            let word_width: usize = word.chars().filter_map(UnicodeWidthChar::width).sum();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            // A single word longer than the line gets hard-broken.
            if word_width > width {
                let mut piece = String::new();
                let mut piece_width = 0;
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if piece_width + w > width {
                        lines.push(std::mem::take(&mut piece));
                        piece_width = 0;
                    }
                    piece.push(c);
                    piece_width += w;
                }
                current = piece;
                current_width = piece_width;
            } else {
                current = word.to_string();
                current_width = word_width;
            }
        }
        lines.push(current);
    }
    lines
}
