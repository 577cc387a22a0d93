use super::models::{Color, Segment, Style};
use super::palette::palette_color;

/// The formatting-code introducer, U+00A7.
const INTRODUCER: char = '§';

/// Scans one raw MOTD line into styled segments.
///
/// Total over arbitrary input: unknown and truncated codes are consumed
/// without effect, a trailing lone introducer is dropped. A segment closes
/// only when the active (color, style) pair actually changes, so literal
/// text under one style coalesces even across redundant codes.
pub fn parse_line(raw: &str) -> Vec<Segment> {
    let chars: Vec<char> = raw.chars().collect();
    let mut state = Scan {
        segments: Vec::new(),
        text: String::new(),
        color: None,
        style: Style::default(),
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != INTRODUCER {
            state.text.push(c);
            i += 1;
            continue;
        }

        // Introducer as the last character: no code follows
        let Some(&code) = chars.get(i + 1) else {
            break;
        };

        match code {
            'r' | 'R' => {
                state.transition(None, Style::default());
                i += 2;
            }
            '#' => match hex_color(&chars[i + 2..]) {
                Some(hex) => {
                    // Hex colors, like palette colors, clear active styles
                    state.transition(Some(hex), Style::default());
                    i += 8;
                }
                // Truncated or malformed hex: treated as an unknown code
                None => i += 2,
            },
            'l' | 'L' | 'o' | 'O' | 'n' | 'N' | 'm' | 'M' | 'k' | 'K' => {
                let mut toggled = state.style;
                match code.to_ascii_lowercase() {
                    'l' => toggled.bold = true,
                    'o' => toggled.italic = true,
                    'n' => toggled.underline = true,
                    'm' => toggled.strikethrough = true,
                    _ => toggled.obfuscated = true,
                }
                state.transition(state.color, toggled);
                i += 2;
            }
            code => {
                if let Some(palette) = palette_color(code) {
                    state.transition(Some(palette), Style::default());
                }
                i += 2;
            }
        }
    }

    state.finish()
}

/// Strips every formatting code from a line, leaving the literal text.
pub fn strip_codes(raw: &str) -> String {
    let mut clean = String::new();
    for segment in parse_line(raw) {
        clean.push_str(&segment.text);
    }
    clean.trim().to_string()
}

struct Scan {
    segments: Vec<Segment>,
    text: String,
    color: Option<Color>,
    style: Style,
}

impl Scan {
    /// Closes the open segment if the active (color, style) pair changes.
    fn transition(&mut self, color: Option<Color>, style: Style) {
        if (self.color, self.style) == (color, style) {
            return;
        }
        self.flush();
        self.color = color;
        self.style = style;
    }

    fn flush(&mut self) {
        if self.text.is_empty() {
            return;
        }
        self.segments.push(Segment {
            text: std::mem::take(&mut self.text),
            color: self.color,
            style: self.style,
        });
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush();
        self.segments
    }
}

/// Reads exactly six hex digits following `§#`.
fn hex_color(chars: &[char]) -> Option<Color> {
    if chars.len() < 6 {
        return None;
    }
    let mut value: u32 = 0;
    for &c in &chars[..6] {
        value = (value << 4) | c.to_digit(16)?;
    }
    Some(Color::rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}
