use super::models::Color;

/// Standard 16-color palette keyed by the code nibble `0`-`9`, `a`-`f`.
pub(crate) fn palette_color(code: char) -> Option<Color> {
    let color = match code.to_ascii_lowercase() {
        '0' => Color::rgb(0x00, 0x00, 0x00),
        '1' => Color::rgb(0x00, 0x00, 0xAA),
        '2' => Color::rgb(0x00, 0xAA, 0x00),
        '3' => Color::rgb(0x00, 0xAA, 0xAA),
        '4' => Color::rgb(0xAA, 0x00, 0x00),
        '5' => Color::rgb(0xAA, 0x00, 0xAA),
        '6' => Color::rgb(0xFF, 0xAA, 0x00),
        '7' => Color::rgb(0xAA, 0xAA, 0xAA),
        '8' => Color::rgb(0x55, 0x55, 0x55),
        '9' => Color::rgb(0x55, 0x55, 0xFF),
        'a' => Color::rgb(0x55, 0xFF, 0x55),
        'b' => Color::rgb(0x55, 0xFF, 0xFF),
        'c' => Color::rgb(0xFF, 0x55, 0x55),
        'd' => Color::rgb(0xFF, 0x55, 0xFF),
        'e' => Color::rgb(0xFF, 0xFF, 0x55),
        'f' => Color::rgb(0xFF, 0xFF, 0xFF),
        _ => return None,
    };
    Some(color)
}
