//! Fixed wave and palette look-up tables shared by the pattern generators.

use crate::color::{Rgb, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Number of entries in each color palette.
pub const PALETTE_LEN: usize = 20;

/// A fixed gradient palette, index to color triple.
pub type Palette = [Rgb; PALETTE_LEN];

/// Sine wave look-up table. 120 steps + 60 blanks (makes pretty rainbows)
pub const SINE: [u8; 180] = [
    0, 0, 1, 2, 3, 4, 6, 9, //
    11, 14, 17, 21, 25, 29, 33, 37, //
    42, 47, 53, 58, 64, 70, 76, 82, //
    88, 95, 101, 108, 115, 121, 128, 134, //
    140, 147, 154, 160, 167, 173, 179, 185, //
    191, 197, 202, 208, 213, 218, 222, 226, //
    231, 234, 238, 241, 244, 246, 249, 251, //
    252, 253, 254, 255, 255, 255, 254, 253, //
    252, 251, 249, 246, 244, 241, 238, 234, //
    231, 226, 222, 218, 213, 208, 202, 197, //
    191, 185, 179, 173, 167, 160, 154, 147, //
    140, 134, 127, 121, 115, 108, 101, 95, //
    88, 82, 76, 70, 64, 58, 53, 47, //
    42, 37, 33, 29, 25, 21, 17, 14, //
    11, 9, 6, 4, 3, 2, 1, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0,
];

// Blues-to-reds Brewer palette
#[allow(clippy::unreadable_literal)]
pub const BREWER: Palette = hex_palette![
    0x000000, 0x08306b, 0x08519c, 0x2171b5, 0x4292c6, 0x6baed6, 0x9ecae1,
    0xc6dbef, 0xdeebf7, 0xf7fbff, 0xffffff, 0xfff5f0, 0xfee0d2, 0xfcbba1,
    0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d
];

// Blues-to-reds alternate palette with a deeper cold end
#[allow(clippy::unreadable_literal)]
pub const COOLER: Palette = hex_palette![
    0x012a4a, 0x013a63, 0x01497c, 0x014f86, 0x2a6f97, 0x2c7da0, 0x468faf,
    0x61a5c2, 0x89c2d9, 0xa9d6e5, 0xffffff, 0xfc9ca2, 0xfb747d, 0xfa4c58,
    0xf92432, 0xe30613, 0xc70512, 0x9f040e, 0x77030b, 0x500207
];

/// Climate warming stripes: yearly temperature levels mapped to palette
/// entries, coldest years first.
pub const STRIPES: [u8; 64] = [
    17, 16, 19, 18, 16, 17, 19, 17, //
    15, 13, 13, 12, 14, 13, 11, 13, //
    13, 14, 11, 13, 12, 11, 9, 9, //
    13, 11, 8, 10, 8, 7, 6, 9, //
    10, 7, 9, 8, 6, 5, 6, 8, //
    6, 8, 7, 6, 4, 6, 2, 3, //
    2, 6, 3, 2, 3, 4, 2, 3, //
    2, 1, 1, 4, 3, 4, 3, 4, //
];

const fn max_entry(table: &[u8]) -> u8 {
    let mut max = 0;
    let mut i = 0;
    while i < table.len() {
        if table[i] > max {
            max = table[i];
        }
        i += 1;
    }
    max
}

// A stripes entry outside the palette range is a build error, never a
// per-tick check.
const _: () = assert!((max_entry(&STRIPES) as usize) < PALETTE_LEN);
