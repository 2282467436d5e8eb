use ratatui::style::Color;

/// Amber-on-charcoal palette used across the app
pub struct AmberNight;

impl AmberNight {
    // Backgrounds
    pub const BG0: Color = Color::Rgb(0x18, 0x1c, 0x14);
    pub const BG1: Color = Color::Rgb(0x26, 0x26, 0x26);
    pub const BG2: Color = Color::Rgb(0x2e, 0x2c, 0x28);
    /// Card interior
    pub const CARD: Color = Color::Rgb(0x44, 0x32, 0x0c);

    // Foregrounds
    pub const FG0: Color = Color::Rgb(0xe2, 0xdf, 0xe0);
    pub const FG1: Color = Color::Rgb(0xda, 0xd8, 0xde);
    pub const GREY0: Color = Color::Rgb(0x7a, 0x77, 0x72);
    pub const GREY1: Color = Color::Rgb(0xaa, 0xaa, 0xaa);

    // Accents
    pub const ACCENT: Color = Color::Rgb(0xe0, 0xbe, 0x21);
    pub const PILL: Color = Color::Rgb(0xe0, 0xbe, 0x21);
    pub const PILL_TEXT: Color = Color::Rgb(0x18, 0x1c, 0x14);

    // Semantic
    pub const CORRECT: Color = Color::Rgb(0x4c, 0xaf, 0x50);
    pub const WRONG: Color = Color::Rgb(0xe5, 0x39, 0x35);
    pub const ERROR: Color = Color::Rgb(0xe5, 0x39, 0x35);
    pub const SELECTION: Color = Color::Rgb(0x50, 0x49, 0x45);
}
