//! Color model - maps a fade position inside a trail to a shade
//!
//! Every hue owns two fixed scales ordered from brightest (index 0, the head
//! of a trail) to darkest:
//!
//! - a 26-entry true-color scale of RGB triples
//! - an 8-entry xterm-256 palette scale for terminals without 24-bit color
//!
//! A trail of `n` glyphs is spread over the whole scale: the glyph at
//! position `p` gets `scale[round(p * factor)]` with
//! `factor = (scale_len - 1) / (n - 1)`.

use crate::types::{ColorMode, Hue, Rgb, Shade};

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r, g, b)
}

pub static GREEN_TRUE: [Rgb; 26] = [
    rgb(255, 255, 255),
    rgb(80, 210, 80),
    rgb(80, 200, 80),
    rgb(70, 195, 70),
    rgb(60, 190, 60),
    rgb(50, 185, 50),
    rgb(40, 180, 40),
    rgb(30, 175, 30),
    rgb(30, 170, 30),
    rgb(20, 160, 20),
    rgb(10, 150, 10),
    rgb(10, 140, 10),
    rgb(10, 130, 10),
    rgb(0, 120, 0),
    rgb(0, 100, 0),
    rgb(0, 90, 0),
    rgb(0, 80, 0),
    rgb(0, 70, 0),
    rgb(0, 60, 0),
    rgb(0, 50, 0),
    rgb(0, 40, 0),
    rgb(0, 30, 0),
    rgb(0, 20, 0),
    rgb(0, 10, 0),
    rgb(0, 0, 0),
    rgb(0, 0, 0),
];

pub static RED_TRUE: [Rgb; 26] = [
    rgb(255, 255, 255),
    rgb(210, 80, 80),
    rgb(200, 70, 70),
    rgb(195, 60, 60),
    rgb(190, 50, 50),
    rgb(185, 40, 40),
    rgb(180, 30, 30),
    rgb(175, 20, 20),
    rgb(170, 10, 10),
    rgb(160, 0, 0),
    rgb(150, 0, 0),
    rgb(140, 0, 0),
    rgb(130, 0, 0),
    rgb(120, 0, 0),
    rgb(100, 0, 0),
    rgb(90, 0, 0),
    rgb(80, 0, 0),
    rgb(70, 0, 0),
    rgb(60, 0, 0),
    rgb(50, 0, 0),
    rgb(40, 0, 0),
    rgb(30, 0, 0),
    rgb(20, 0, 0),
    rgb(10, 0, 0),
    rgb(0, 0, 0),
    rgb(0, 0, 0),
];

pub static BLUE_TRUE: [Rgb; 26] = [
    rgb(255, 255, 255),
    rgb(80, 80, 210),
    rgb(70, 70, 200),
    rgb(60, 60, 195),
    rgb(50, 50, 190),
    rgb(40, 40, 185),
    rgb(30, 30, 180),
    rgb(20, 20, 175),
    rgb(10, 10, 170),
    rgb(0, 0, 160),
    rgb(0, 0, 150),
    rgb(0, 0, 140),
    rgb(0, 0, 130),
    rgb(0, 0, 120),
    rgb(0, 0, 100),
    rgb(0, 0, 90),
    rgb(0, 0, 80),
    rgb(0, 0, 70),
    rgb(0, 0, 60),
    rgb(0, 0, 50),
    rgb(0, 0, 40),
    rgb(0, 0, 30),
    rgb(0, 0, 20),
    rgb(0, 0, 10),
    rgb(0, 0, 0),
    rgb(0, 0, 0),
];

pub static YELLOW_TRUE: [Rgb; 26] = [
    rgb(255, 255, 255),
    rgb(210, 210, 80),
    rgb(200, 200, 70),
    rgb(195, 195, 60),
    rgb(190, 190, 50),
    rgb(185, 185, 40),
    rgb(180, 180, 30),
    rgb(175, 175, 20),
    rgb(170, 170, 10),
    rgb(160, 160, 0),
    rgb(150, 150, 0),
    rgb(140, 140, 0),
    rgb(130, 130, 0),
    rgb(120, 120, 0),
    rgb(100, 100, 0),
    rgb(90, 90, 0),
    rgb(80, 80, 0),
    rgb(70, 70, 0),
    rgb(60, 60, 0),
    rgb(50, 50, 0),
    rgb(40, 40, 0),
    rgb(30, 30, 0),
    rgb(20, 20, 0),
    rgb(10, 10, 0),
    rgb(0, 0, 0),
    rgb(0, 0, 0),
];

pub static GREEN_PALETTE: [u8; 8] = [255, 156, 118, 82, 40, 34, 28, 22];
pub static RED_PALETTE: [u8; 8] = [255, 196, 160, 124, 88, 52, 16, 0];
pub static BLUE_PALETTE: [u8; 8] = [255, 117, 81, 45, 39, 33, 27, 21];
pub static YELLOW_PALETTE: [u8; 8] = [255, 228, 222, 216, 210, 204, 198, 192];

/// One hue's brightest-to-darkest sequence in one color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    TrueColor(&'static [Rgb]),
    Palette(&'static [u8]),
}

impl ColorScale {
    pub fn for_hue(hue: Hue, mode: ColorMode) -> Self {
        match mode {
            ColorMode::TrueColor => ColorScale::TrueColor(match hue {
                Hue::Green => &GREEN_TRUE,
                Hue::Red => &RED_TRUE,
                Hue::Blue => &BLUE_TRUE,
                Hue::Yellow => &YELLOW_TRUE,
            }),
            ColorMode::Palette => ColorScale::Palette(match hue {
                Hue::Green => &GREEN_PALETTE,
                Hue::Red => &RED_PALETTE,
                Hue::Blue => &BLUE_PALETTE,
                Hue::Yellow => &YELLOW_PALETTE,
            }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColorScale::TrueColor(s) => s.len(),
            ColorScale::Palette(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shade at `index`, clamped to the last entry.
    pub fn get(&self, index: usize) -> Shade {
        let i = index.min(self.len().saturating_sub(1));
        match self {
            ColorScale::TrueColor(s) => Shade::Rgb(s[i]),
            ColorScale::Palette(s) => Shade::Palette(s[i]),
        }
    }
}

/// Scale step per trail position.
///
/// A single-glyph trail has no fade, so its factor is 0 and position 0 maps
/// to the brightest entry.
pub fn color_factor(scale_len: usize, trail_length: usize) -> f64 {
    if trail_length <= 1 || scale_len <= 1 {
        return 0.0;
    }
    (scale_len - 1) as f64 / (trail_length - 1) as f64
}

/// Index into a scale of `scale_len` entries for a trail position.
pub fn scale_index(scale_len: usize, position: usize, factor: f64) -> usize {
    let raw = (position as f64 * factor).round();
    let last = scale_len.saturating_sub(1);
    if raw.is_finite() && raw > 0.0 {
        (raw as usize).min(last)
    } else {
        0
    }
}

/// Color lookups for one hue in one mode, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorModel {
    hue: Hue,
    mode: ColorMode,
    scale: ColorScale,
}

impl ColorModel {
    pub fn new(hue: Hue, mode: ColorMode) -> Self {
        Self {
            hue,
            mode,
            scale: ColorScale::for_hue(hue, mode),
        }
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn scale(&self) -> ColorScale {
        self.scale
    }

    pub fn color_factor(&self, trail_length: usize) -> f64 {
        color_factor(self.scale.len(), trail_length)
    }

    pub fn color_at(&self, position: usize, factor: f64) -> Shade {
        self.scale.get(scale_index(self.scale.len(), position, factor))
    }
}
