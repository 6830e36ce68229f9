//! Glyph source - random symbols for the falling streams
//!
//! Glyphs are drawn uniformly from a fixed table of double-width characters
//! (hiragana, katakana, full-width digits and a few CJK ideographs). Each
//! column task owns its own [`GlyphSource`], so draws never contend and no
//! shared sequence is needed.
//!
//! Sources can be seeded for deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Symbol table. All entries render two terminal columns wide.
pub const GLYPHS: &[char] = &[
    // Hiragana
    '\u{3050}', '\u{3051}', '\u{3052}', '\u{3053}', '\u{3054}', '\u{3055}', '\u{3056}',
    '\u{3057}', '\u{3058}', '\u{3059}', '\u{3060}', '\u{3061}', '\u{3062}', '\u{3063}',
    '\u{3064}', '\u{3065}', '\u{3066}', '\u{3067}', '\u{3068}', '\u{3069}', '\u{3070}',
    '\u{3071}',
    // Katakana
    '\u{30a1}', '\u{30a2}', '\u{30a3}', '\u{30a4}', '\u{30a5}', '\u{30a6}', '\u{30a7}',
    '\u{30a8}', '\u{30a9}', '\u{30aa}', '\u{30ab}', '\u{30ac}', '\u{30ad}', '\u{30ae}',
    '\u{30af}', '\u{30b0}', '\u{30b1}', '\u{30b2}', '\u{30b3}', '\u{30b4}', '\u{30b5}',
    '\u{30b6}', '\u{30b7}', '\u{30b8}', '\u{30b9}', '\u{30ba}', '\u{30bb}', '\u{30bc}',
    '\u{30bd}', '\u{30be}', '\u{30bf}', '\u{30c0}', '\u{30c1}', '\u{30c2}', '\u{30c3}',
    '\u{30c4}', '\u{30c5}', '\u{30c6}', '\u{30c7}', '\u{30c8}', '\u{30c9}', '\u{30d0}',
    '\u{30d1}', '\u{30d2}', '\u{30d3}', '\u{30d4}', '\u{30d5}', '\u{30d6}', '\u{30d7}',
    '\u{30d8}', '\u{30d9}', '\u{30e0}', '\u{30e1}', '\u{30e2}', '\u{30e3}', '\u{30e4}',
    '\u{30e5}', '\u{30e6}', '\u{30e7}', '\u{30e8}', '\u{30e9}', '\u{30f0}', '\u{30f1}',
    '\u{30f2}', '\u{30f3}', '\u{30f4}',
    // Full-width digits
    '\u{ff10}', '\u{ff11}', '\u{ff12}', '\u{ff13}', '\u{ff14}', '\u{ff15}', '\u{ff16}',
    '\u{ff17}', '\u{ff18}', '\u{ff19}',
    // CJK ideographs
    '\u{4e01}', '\u{4e02}', '\u{4e03}', '\u{4e04}', '\u{4e05}', '\u{4e06}', '\u{4e07}',
    '\u{4e08}', '\u{4e09}', '\u{4ea0}', '\u{4ea1}',
];

/// Independent random glyph stream.
#[derive(Debug, Clone)]
pub struct GlyphSource {
    rng: StdRng,
}

impl GlyphSource {
    /// Create a source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the OS entropy pool
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw the next glyph
    pub fn next_glyph(&mut self) -> char {
        GLYPHS[self.rng.gen_range(0..GLYPHS.len())]
    }
}

impl Default for GlyphSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
