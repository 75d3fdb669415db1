use ratatui::style::Color;

/// Colors a theme is derived from.
///
/// Section accents double as badge colors in the palette results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub mantle: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,
    pub surface: Color,
    pub border: Color,

    pub accent: Color,
    pub keyword: Color,
    pub ok: Color,
    pub warn: Color,
    pub error: Color,

    pub home: Color,
    pub about: Color,
    pub work: Color,
    pub contact: Color,
}

/// Scales an `Rgb` color toward black; other variants pass through.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    let scale = |v: u8| (f32::from(v) * factor.clamp(0.0, 1.0)) as u8;
    match c {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r), scale(g), scale(b)),
        other => other,
    }
}
