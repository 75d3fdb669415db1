use crate::domain::models::Section;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub section_home: Style,
    pub section_about: Style,
    pub section_work: Style,
    pub section_contact: Style,

    pub page: Style,
    pub page_title: Style,
    pub page_text: Style,
    pub keyword: Style,
    pub placeholder: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let accent = |c: Color| {
            Style::default()
                .fg(c)
                .bg(dim_color(c, 0.2))
                .add_modifier(Modifier::BOLD)
        };
        let badge = |c: Color| Style::default().bg(c).fg(p.crust).add_modifier(Modifier::BOLD);

        Self {
            border: Style::default().fg(p.border),
            border_focus: Style::default().fg(p.accent),

            section_home: accent(p.home),
            section_about: accent(p.about),
            section_work: accent(p.work),
            section_contact: accent(p.contact),

            page: Style::default().bg(p.base).fg(p.text),
            page_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            page_text: Style::default().fg(p.subtext),
            keyword: Style::default().fg(p.keyword).add_modifier(Modifier::ITALIC),
            placeholder: Style::default().fg(p.muted).add_modifier(Modifier::DIM),

            status_ready: badge(p.ok),
            status_info: badge(p.accent),
            status_warn: badge(p.warn),
            status_error: badge(p.error),

            header_logo: badge(p.accent),
            header_active: badge(p.ok),
            header_item: Style::default().bg(p.surface).fg(p.text),
            header: Style::default().bg(p.mantle).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext),

            list_selected: badge(p.accent),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
        }
    }

    #[must_use]
    pub fn section(&self, section: Section) -> Style {
        match section {
            Section::Home => self.section_home,
            Section::About => self.section_about,
            Section::Work => self.section_work,
            Section::Contact => self.section_contact,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
