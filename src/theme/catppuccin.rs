use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    mantle: Color::Rgb(24, 24, 37),
    crust: Color::Rgb(17, 17, 27),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(186, 194, 222),
    muted: Color::Rgb(108, 112, 134),
    surface: Color::Rgb(49, 50, 68),
    border: Color::Rgb(88, 91, 112),

    accent: Color::Rgb(137, 180, 250),
    keyword: Color::Rgb(148, 226, 213),
    ok: Color::Rgb(166, 227, 161),
    warn: Color::Rgb(249, 226, 175),
    error: Color::Rgb(243, 139, 168),

    home: Color::Rgb(137, 180, 250),
    about: Color::Rgb(166, 227, 161),
    work: Color::Rgb(203, 166, 247),
    contact: Color::Rgb(250, 179, 135),
};
