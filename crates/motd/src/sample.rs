use super::models::Color;

/// Encodes `text` as per-character `§#RRGGBB` codes linearly interpolated
/// between `start` and `end`. Whitespace is emitted literally and keeps the
/// preceding character's color.
pub fn gradient(text: &str, start: Color, end: Color) -> String {
    let chars: Vec<char> = text.chars().collect();
    let steps = chars.len().saturating_sub(1).max(1) as i32;

    let mut encoded = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            encoded.push(c);
            continue;
        }
        let lerp = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * i as i32 / steps) as u8;
        let color = Color::rgb(
            lerp(start.r, end.r),
            lerp(start.g, end.g),
            lerp(start.b, end.b),
        );
        encoded.push_str("§#");
        encoded.push_str(&color.hex_code()[1..]);
        encoded.push(c);
    }
    encoded
}

/// Placeholder MOTD shown while no live one is available: a colored server
/// name line plus a gradient-colored tagline.
pub fn sample_motd() -> Vec<String> {
    let tagline = gradient(
        "Parkour is open!",
        Color::rgb(0xFF, 0x5E, 0x55),
        Color::rgb(0xFF, 0xED, 0x55),
    );
    vec![
        "§e§lCraftPulse Network§r§c [1.18.2 - 1.21.5]".to_string(),
        format!("§c🎮 §r{}§r §e🎮", tagline),
    ]
}
