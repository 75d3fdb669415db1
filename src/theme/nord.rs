use super::palette::Palette;
use ratatui::style::Color;

// Polar night backgrounds, snow storm text, frost and aurora accents.
pub const NORD: Palette = Palette {
    base: Color::Rgb(46, 52, 64),
    mantle: Color::Rgb(59, 66, 82),
    crust: Color::Rgb(36, 41, 51),
    text: Color::Rgb(236, 239, 244),
    subtext: Color::Rgb(216, 222, 233),
    muted: Color::Rgb(97, 110, 136),
    surface: Color::Rgb(67, 76, 94),
    border: Color::Rgb(76, 86, 106),

    accent: Color::Rgb(136, 192, 208),
    keyword: Color::Rgb(143, 188, 187),
    ok: Color::Rgb(163, 190, 140),
    warn: Color::Rgb(235, 203, 139),
    error: Color::Rgb(191, 97, 106),

    home: Color::Rgb(129, 161, 193),
    about: Color::Rgb(163, 190, 140),
    work: Color::Rgb(180, 142, 173),
    contact: Color::Rgb(208, 135, 112),
};
