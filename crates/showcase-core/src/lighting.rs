use crate::constants::*;
use glam::Vec3;

#[inline]
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a `0xRRGGBB` sRGB colour to linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(
        srgb_channel_to_linear(r),
        srgb_channel_to_linear(g),
        srgb_channel_to_linear(b),
    )
}

/// One directional key light plus ambient fill, and the background colour.
#[derive(Clone, Debug)]
pub struct Lighting {
    /// Unit vector pointing from the scene toward the light.
    pub key_direction: Vec3,
    /// Linear colour premultiplied by intensity.
    pub key_radiance: Vec3,
    pub ambient: Vec3,
    pub clear_color: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            key_direction: KEY_LIGHT_POSITION.normalize(),
            key_radiance: hex_to_linear(KEY_LIGHT_HEX) * KEY_LIGHT_INTENSITY,
            ambient: hex_to_linear(AMBIENT_LIGHT_HEX) * AMBIENT_LIGHT_INTENSITY,
            clear_color: hex_to_linear(CLEAR_COLOR_HEX),
        }
    }
}
