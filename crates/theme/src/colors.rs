/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const DARK:   Self = Self::rgb(0x1e, 0x1e, 0x2e);
    pub const WHITE:  Self = Self::rgb(0xcd, 0xd6, 0xf4);
    pub const PURPLE: Self = Self::rgb(0xcb, 0xa6, 0xf7);
    pub const YELLOW: Self = Self::rgb(0xf9, 0xe2, 0xaf);
    pub const CYAN:   Self = Self::rgb(0x89, 0xdc, 0xeb);
    /// Default CPU/RAM plot line.
    pub const LINE:   Self = Self::rgb(0xf5, 0xf5, 0xf5);

    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r: r as f32 / 255.0, g: g as f32 / 255.0, b: b as f32 / 255.0, a: 1.0 }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;

        let (rgb, alpha) = match digits.len() {
            6 => (packed, 0xff),
            8 => (packed >> 8, packed & 0xff),
            _ => return None,
        };
        let [_, r, g, b] = rgb.to_be_bytes();

        Some(Self { a: alpha as f32 / 255.0, ..Self::rgb(r, g, b) })
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));

        let c = Color::from_hex("00000000").unwrap();
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("#ééé").is_none());
        assert!(Color::from_hex("+12345").is_none());
    }

    #[test]
    fn constants_match_their_hex() {
        assert_eq!(Color::from_hex("#f5f5f5"), Some(Color::LINE));
        assert_eq!(Color::from_hex("#1e1e2e"), Some(Color::DARK));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::WHITE.with_alpha(3.0).a, 1.0);
    }
}
