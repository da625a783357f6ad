use std::collections::VecDeque;

use crate::Color;

/// Round-robin color source for new waves.
///
/// The rotation is kept across calls as long as the caller keeps passing the
/// same palette; any change (by value, order-sensitive) restarts it from the
/// first color of the new palette.
#[derive(Debug, Default, Clone)]
pub struct ColorCycler {
    active_palette: Vec<Color>,
    rotation: VecDeque<Color>,
}

impl ColorCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next color of `palette`, or `None` for an empty palette.
    pub fn next(&mut self, palette: &[Color]) -> Option<Color> {
        if palette.is_empty() {
            return None;
        }

        if self.active_palette != palette {
            tracing::trace!(colors = palette.len(), "palette changed, restarting rotation");
            self.active_palette = palette.to_vec();
            self.rotation = palette.iter().copied().collect();
        }

        let color = self.rotation.pop_front()?;
        self.rotation.push_back(color);
        Some(color)
    }

    /// Palette the rotation currently follows.
    pub fn active_palette(&self) -> &[Color] {
        &self.active_palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

    #[test]
    fn cycles_palette_in_order() {
        let mut cycler = ColorCycler::new();
        let drawn: Vec<_> = (0..4).map(|_| cycler.next(&PALETTE).unwrap()).collect();

        assert_eq!(drawn, vec![Color::RED, Color::GREEN, Color::BLUE, Color::RED]);
    }

    #[test]
    fn palette_change_restarts_rotation() {
        let mut cycler = ColorCycler::new();
        cycler.next(&PALETTE);
        cycler.next(&PALETTE);

        let other = [Color::WHITE, Color::BLACK];
        assert_eq!(cycler.next(&other), Some(Color::WHITE));
        assert_eq!(cycler.next(&other), Some(Color::BLACK));
        assert_eq!(cycler.active_palette(), &other);

        // Reordering counts as a different palette.
        let reordered = [Color::BLUE, Color::GREEN, Color::RED];
        assert_eq!(cycler.next(&PALETTE), Some(Color::RED));
        assert_eq!(cycler.next(&reordered), Some(Color::BLUE));
    }

    #[test]
    fn empty_palette_yields_nothing_and_keeps_rotation() {
        let mut cycler = ColorCycler::new();
        assert_eq!(cycler.next(&PALETTE), Some(Color::RED));
        assert_eq!(cycler.next(&[]), None);
        assert_eq!(cycler.next(&PALETTE), Some(Color::GREEN));
    }
}
