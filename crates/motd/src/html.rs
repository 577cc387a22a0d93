use super::models::Segment;
use super::parser::parse_line;

/// Renders one raw MOTD line as flat `<span>` markup with inline styles.
///
/// Literal text is escaped before embedding; the raw MOTD is
/// operator-controlled content arriving from a third party.
pub fn render_line_html(raw: &str) -> String {
    parse_line(raw)
        .iter()
        .map(segment_html)
        .collect::<Vec<_>>()
        .join("")
}

fn segment_html(segment: &Segment) -> String {
    let text = escape(&segment.text);
    if segment.color.is_none() && segment.style.is_plain() {
        return text;
    }

    let mut css = String::new();
    if let Some(color) = segment.color {
        css.push_str("color:");
        css.push_str(&color.hex_code());
        css.push(';');
    }
    if segment.style.bold {
        css.push_str("font-weight:bold;");
    }
    if segment.style.italic {
        css.push_str("font-style:italic;");
    }
    let mut decorations = Vec::new();
    if segment.style.underline {
        decorations.push("underline");
    }
    if segment.style.strikethrough {
        decorations.push("line-through");
    }
    if !decorations.is_empty() {
        css.push_str("text-decoration:");
        css.push_str(&decorations.join(" "));
        css.push(';');
    }

    // Obfuscated text has no CSS equivalent; tag it for the presentation layer
    let class = if segment.style.obfuscated {
        " class=\"obfuscated\""
    } else {
        ""
    };

    format!("<span{} style=\"{}\">{}</span>", class, css, text)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
