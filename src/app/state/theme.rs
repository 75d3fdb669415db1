use crate::theme::{PaletteType, Theme};

/// The active palette and the styles derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(palette_type: PaletteType) -> Self {
        Self {
            palette_type,
            theme: Theme::from_palette_type(palette_type),
        }
    }

    pub fn switch(&mut self, palette_type: PaletteType) {
        self.palette_type = palette_type;
        self.theme = Theme::from_palette_type(palette_type);
        tracing::debug!(theme = palette_type.label(), "theme switched");
    }

    /// Moves to the next palette in `PaletteType::all()` order, wrapping.
    pub fn cycle(&mut self) {
        let all = PaletteType::all();
        let current = all
            .iter()
            .position(|p| *p == self.palette_type)
            .unwrap_or(0);
        self.switch(all[(current + 1) % all.len()]);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_through_all_palettes() {
        let mut state = ThemeState::default();
        let mut seen = vec![state.palette_type];
        for _ in 0..PaletteType::all().len() {
            state.cycle();
            seen.push(state.palette_type);
        }
        assert_eq!(seen.first(), seen.last());
        assert_eq!(&seen[..PaletteType::all().len()], PaletteType::all());
    }
}
