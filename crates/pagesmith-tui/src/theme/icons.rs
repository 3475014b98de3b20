//! Icon set for the TUI.
//!
//! Resolves toolbar and header glyphs at runtime; when unicode icons are
//! disabled in settings the ASCII fallbacks keep every terminal usable.

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    unicode: bool,
}

impl IconSet {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn sparkle(&self) -> &'static str {
        if self.unicode {
            "\u{2726}" // ✦
        } else {
            "*"
        }
    }

    pub fn user(&self) -> &'static str {
        if self.unicode {
            "\u{25cf}" // ●
        } else {
            ">"
        }
    }

    pub fn copy(&self) -> &'static str {
        if self.unicode {
            "\u{29c9}" // ⧉
        } else {
            "[c]"
        }
    }

    pub fn check(&self) -> &'static str {
        if self.unicode {
            "\u{2713}" // ✓
        } else {
            "ok"
        }
    }

    pub fn save(&self) -> &'static str {
        if self.unicode {
            "\u{2193}" // ↓
        } else {
            "[s]"
        }
    }

    pub fn run(&self) -> &'static str {
        if self.unicode {
            "\u{25b6}" // ▶
        } else {
            ">"
        }
    }

    pub fn history(&self) -> &'static str {
        if self.unicode {
            "\u{21ba}" // ↺
        } else {
            "[v]"
        }
    }

    pub fn expand(&self) -> &'static str {
        if self.unicode {
            "\u{26f6}" // ⛶
        } else {
            "[f]"
        }
    }

    pub fn collapse(&self) -> &'static str {
        if self.unicode {
            "\u{2500}" // ─
        } else {
            "[-]"
        }
    }

    pub fn spinner_frame(&self, frame: usize) -> &'static str {
        const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
        const DOTS: [&str; 4] = ["\u{280b}", "\u{2819}", "\u{2838}", "\u{2834}"];
        if self.unicode {
            DOTS[frame % DOTS.len()]
        } else {
            FRAMES[frame % FRAMES.len()]
        }
    }
}
