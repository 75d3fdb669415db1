use super::palette::Palette;
use ratatui::style::Color;

pub const GRUVBOX: Palette = Palette {
    base: Color::Rgb(40, 40, 40),
    mantle: Color::Rgb(50, 48, 47),
    crust: Color::Rgb(29, 32, 33),
    text: Color::Rgb(235, 219, 178),
    subtext: Color::Rgb(213, 196, 161),
    muted: Color::Rgb(146, 131, 116),
    surface: Color::Rgb(60, 56, 54),
    border: Color::Rgb(102, 92, 84),

    accent: Color::Rgb(131, 165, 152),
    keyword: Color::Rgb(142, 192, 124),
    ok: Color::Rgb(184, 187, 38),
    warn: Color::Rgb(250, 189, 47),
    error: Color::Rgb(251, 73, 52),

    home: Color::Rgb(131, 165, 152),
    about: Color::Rgb(184, 187, 38),
    work: Color::Rgb(211, 134, 155),
    contact: Color::Rgb(254, 128, 25),
};
