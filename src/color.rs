use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

use crate::data::model::Medal;

// ---------------------------------------------------------------------------
// Fixed medal hues
// ---------------------------------------------------------------------------

pub const GOLD: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
pub const SILVER: Color32 = Color32::from_rgb(0xC0, 0xC0, 0xC0);
pub const BRONZE: Color32 = Color32::from_rgb(0xCD, 0x7F, 0x32);

pub fn medal_color(medal: Medal) -> Color32 {
    match medal {
        Medal::Gold => GOLD,
        Medal::Silver => SILVER,
        Medal::Bronze => BRONZE,
    }
}

// ---------------------------------------------------------------------------
// Categorical palette (one colour per bar)
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.6, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diverging scale for correlations
// ---------------------------------------------------------------------------

const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

/// Blue → grey → red colour for a value in `[-1, 1]`, grey at zero.
/// Values outside the range are clamped.
pub fn diverging(value: f64) -> Color32 {
    let v = value.clamp(-1.0, 1.0) as f32;
    let (from, to, t) = if v < 0.0 {
        (COOL, NEUTRAL, v + 1.0)
    } else {
        (NEUTRAL, WARM, v)
    };
    let mixed = linear(from).mix(linear(to), t);
    to_color32(Srgb::from_linear(mixed))
}

fn linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
