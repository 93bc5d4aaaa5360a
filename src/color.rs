use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serializer;

// ---------------------------------------------------------------------------
// Colour strategy
// ---------------------------------------------------------------------------

/// Supplies one line colour per dataset, in dataset order.
pub trait ColorSource {
    fn next_color(&mut self) -> Color32;
}

/// Random dark-ish colours: each channel drawn uniformly from `0..200`.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color32 {
        Color32::from_rgb(
            self.rng.gen_range(0..200),
            self.rng.gen_range(0..200),
            self.rng.gen_range(0..200),
        )
    }
}

/// Evenly spaced hues, cycling after `size` colours.
pub struct PaletteColors {
    palette: Vec<Color32>,
    cursor: usize,
}

impl PaletteColors {
    pub fn new(size: usize) -> Self {
        Self {
            palette: generate_palette(size.max(1)),
            cursor: 0,
        }
    }
}

impl ColorSource for PaletteColors {
    fn next_color(&mut self) -> Color32 {
        let color = self.palette[self.cursor % self.palette.len()];
        self.cursor += 1;
        color
    }
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSS formatting
// ---------------------------------------------------------------------------

/// Format as a CSS colour: `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` when
/// translucent. Every fully transparent colour is written as `rgba(0,0,0,0)`.
pub fn css_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("rgb({r}, {g}, {b})")
    } else if a == 0 {
        "rgba(0,0,0,0)".to_string()
    } else {
        format!("rgba({r}, {g}, {b}, {:.3})", a as f32 / 255.0)
    }
}

/// `serialize_with` adapter writing a [`Color32`] as its CSS string.
pub fn serialize_css<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&css_color(*color))
}

/// Deterministic colours for tests.
#[cfg(test)]
pub struct FixedColors {
    colors: Vec<Color32>,
    next: usize,
}

#[cfg(test)]
impl FixedColors {
    pub fn new(colors: Vec<Color32>) -> Self {
        Self { colors, next: 0 }
    }
}

#[cfg(test)]
impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Color32 {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}
