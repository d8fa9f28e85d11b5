//! Deterministic particle colors
//!
//! Particles created without an explicit color get one derived from their
//! mass and charge, so every particle of a species shares a color across
//! runs. The top bit of each channel is forced on to keep colors light on
//! a black background.

use super::states::Rgb;

/// Color for a particle with mass `m` and charge `q`
pub fn hash_color(m: f64, q: f64) -> Rgb {
    let seed = mix64(m.to_bits() ^ mix64(q.to_bits()).rotate_left(17));
    let [r, g, b, ..] = seed.to_le_bytes();
    Rgb(r | 0x80, g | 0x80, b | 0x80)
}

// splitmix64 finalizer
fn mix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}
