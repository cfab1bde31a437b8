use rand::seq::SliceRandom;
use rand::Rng;

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const LIGHT_GRAY: u32 = 0xFFCC_CCCC;

pub const LAYOUT_BACKGROUNDS: [u32; 10] = [
    WHITE, 0xFFFFE4E1, 0xFFE1F5FE, 0xFFF3E5F5, 0xFFE8F5E8, 0xFFFFF3E0, 0xFFE0F2F1, 0xFFFCE4EC,
    0xFFEDE7F6, 0xFFE3F2FD,
];

pub const IMAGE_BACKGROUNDS: [u32; 10] = [
    LIGHT_GRAY, 0xFFFFCDD2, 0xFFBBDEFB, 0xFFE1BEE7, 0xFFC8E6C9, 0xFFFFE0B2, 0xFFB2DFDB, 0xFFF8BBD9,
    0xFFD1C4E9, 0xFFFFAB91,
];

pub fn hex(color: u32) -> String {
    format!("#{:08X}", color)
}

/// Background colors of the color demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDemo {
    pub layout_background: u32,
    pub image_background: u32,
}

impl Default for ColorDemo {
    fn default() -> Self {
        Self {
            layout_background: WHITE,
            image_background: LIGHT_GRAY,
        }
    }
}

impl ColorDemo {
    pub fn change_layout_background<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        if let Some(color) = LAYOUT_BACKGROUNDS.choose(rng) {
            self.layout_background = *color;
        }
        self.layout_background
    }

    pub fn change_image_background<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        if let Some(color) = IMAGE_BACKGROUNDS.choose(rng) {
            self.image_background = *color;
        }
        self.image_background
    }

    pub fn render(&self) -> String {
        format!(
            "Layout background: {}\nImage background: {}",
            hex(self.layout_background),
            hex(self.image_background)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_colors() {
        let demo = ColorDemo::default();
        assert_eq!(
            demo.render(),
            "Layout background: #FFFFFFFF\nImage background: #FFCCCCCC"
        );
    }

    #[test]
    fn test_changes_stay_within_palettes() {
        let mut demo = ColorDemo::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let layout = demo.change_layout_background(&mut rng);
            let image = demo.change_image_background(&mut rng);
            assert!(LAYOUT_BACKGROUNDS.contains(&layout));
            assert!(IMAGE_BACKGROUNDS.contains(&image));
        }
    }
}
