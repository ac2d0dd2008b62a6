use rand::Rng;

/// Linear-in-[0,1] sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);

    /// Parse a `#rrggbb` string. Returns `None` for anything else.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let packed = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::from_u24(packed))
    }

    pub fn from_u24(packed: u32) -> Self {
        Rgb([
            ((packed >> 16) & 0xff) as f32 / 255.0,
            ((packed >> 8) & 0xff) as f32 / 255.0,
            (packed & 0xff) as f32 / 255.0,
        ])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        self.0
    }
}

/// Uniform draw over the 24-bit color cube.
pub fn random_rgb(rng: &mut impl Rng) -> Rgb {
    Rgb::from_u24(rng.gen_range(0..0x0100_0000))
}
