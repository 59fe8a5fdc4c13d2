//! Colors parsed from CSS strings.
//!
//! Style settings keep colors as the strings a user wrote in the config
//! file. They become a [`Color`] only when the exporter is built, so a bad
//! value is reported once, with the offending key.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// A parsed CSS color, backed by the `color` crate.
///
/// Displays as lowercase `#rrggbb`. Opacity is not part of that string; the
/// renderer writes it to a separate `*-opacity` attribute.
///
/// ```
/// use arbor_core::color::Color;
///
/// let slate: Color = "#90A4AE".parse().unwrap();
/// assert_eq!(slate.alpha(), 1.0);
/// assert_eq!(slate.to_string(), "#90a4ae");
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(DynamicColor);

impl Color {
    /// Parses any CSS color syntax: named colors, hex, `rgb()`, `hsl()` and so on.
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(Self)
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Opacity between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.0.components[3]
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.0.to_alpha_color::<Srgb>().to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_syntaxes() {
        for css in ["#90A4AE", "#fff", "rgb(255, 0, 0)", "white"] {
            assert!(Color::new(css).is_ok(), "{css} should parse");
        }
    }

    #[test]
    fn test_invalid_color_names_the_input() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color.to_string(), "#000000");
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_display_is_hex_for_any_syntax() {
        assert_eq!(Color::new("#102030").unwrap().to_string(), "#102030");
        assert_eq!(Color::new("rgb(16, 32, 48)").unwrap().to_string(), "#102030");
        assert_eq!(Color::new("#FFF").unwrap().to_string(), "#ffffff");
        assert_eq!(Color::new("red").unwrap().to_string(), "#ff0000");
    }

    #[test]
    fn test_display_drops_alpha() {
        let color: Color = "rgba(16, 32, 48, 0.5)".parse().unwrap();
        assert_eq!(color.to_string(), "#102030");
    }

    #[test]
    fn test_alpha_from_css() {
        let color: Color = "rgba(0, 0, 0, 0.25)".parse().unwrap();
        assert!((color.alpha() - 0.25).abs() < 0.001);
    }
}
