use ratatui::style::Color;

/// Gruvbox Material (dark) colors used across the widgets
pub struct Palette;

impl Palette {
    pub const BG0: Color = Color::Rgb(0x28, 0x28, 0x28);
    pub const BG2: Color = Color::Rgb(0x45, 0x40, 0x3d);
    pub const FG0: Color = Color::Rgb(0xd4, 0xbe, 0x98);
    pub const GREY0: Color = Color::Rgb(0x7c, 0x6f, 0x64);
    pub const YELLOW: Color = Color::Rgb(0xd8, 0xa6, 0x57);
    pub const GREEN: Color = Color::Rgb(0xa9, 0xb6, 0x65);
    pub const AQUA: Color = Color::Rgb(0x89, 0xb4, 0x82);
    pub const ORANGE: Color = Color::Rgb(0xe7, 0x8a, 0x4e);

    pub const SELECTION: Color = Self::BG2;
    pub const ACCENT: Color = Self::AQUA;
    pub const DONE: Color = Self::GREY0;
    pub const DRAGGING: Color = Self::ORANGE;
}
