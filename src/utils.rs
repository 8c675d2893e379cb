use crate::constants::{ALIVE_COLOR, DEAD_COLOR};

// --- Helper Types ---

/// 8-bit RGB color as drawn onto the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA bytes, the layout used by the pixel canvas.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

// --- Helper Functions ---

// Per-channel blend, truncated like an integer cast. `t` is clamped to [0, 1].
pub fn lerp_color(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        let value = a as f32 * (1.0 - t) + b as f32 * t;
        value.clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

/// Color of an organism with the given remaining life.
pub fn life_color(life: f32) -> Rgb {
    lerp_color(DEAD_COLOR, ALIVE_COLOR, life)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_life_is_alive_color() {
        assert_eq!(life_color(1.0), ALIVE_COLOR);
    }

    #[test]
    fn zero_life_is_dead_color() {
        assert_eq!(life_color(0.0), DEAD_COLOR);
    }

    #[test]
    fn half_life_truncates_each_channel() {
        // 41*0.5 + 100*0.5 = 70.5, 150*0.5 = 75, 86*0.5 + 255*0.5 = 170.5
        assert_eq!(life_color(0.5), Rgb::new(70, 75, 170));
    }

    #[test]
    fn out_of_range_blend_is_clamped() {
        assert_eq!(life_color(2.0), ALIVE_COLOR);
        assert_eq!(life_color(-1.0), DEAD_COLOR);
    }
}
