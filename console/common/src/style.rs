//! Overlay styling: the CSS the runtimes apply to the display node.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Pinned to the viewport; stays put while the page scrolls.
    #[default]
    Fixed,
    Absolute,
}

impl Position {
    pub fn as_css(self) -> &'static str {
        match self {
            Position::Fixed => "fixed",
            Position::Absolute => "absolute",
        }
    }
}

/// A CSS colour: `#rgb`, `#rrggbb` or a keyword such as `white`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum CssColor {
    Hex { r: u8, g: u8, b: u8 },
    Named(String),
}

impl CssColor {
    pub fn parse(input: &str) -> Result<Self, ConsoleError> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex)
                .ok_or_else(|| ConsoleError::invalid_style("color", format!("`{input}` is not a hex colour")));
        }
        if input.is_empty() || input.len() > 32 || !input.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ConsoleError::invalid_style(
                "color",
                format!("`{input}` is neither a hex colour nor a colour keyword"),
            ));
        }
        Ok(CssColor::Named(input.to_ascii_lowercase()))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        CssColor::Hex { r, g, b }
    }
}

fn parse_hex(hex: &str) -> Option<CssColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            // #abc is shorthand for #aabbcc
            let mut digits = hex.chars().map(|c| {
                let d = c.to_digit(16).unwrap_or(0) as u8;
                d * 16 + d
            });
            Some(CssColor::Hex {
                r: digits.next()?,
                g: digits.next()?,
                b: digits.next()?,
            })
        }
        6 => Some(CssColor::Hex {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

impl TryFrom<String> for CssColor {
    type Error = ConsoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CssColor::parse(&value)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssColor::Hex { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            CssColor::Named(name) => f.write_str(name),
        }
    }
}

/// A CSS length limited to the units an overlay offset needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CssLength(String);

const LENGTH_UNITS: [&str; 4] = ["rem", "em", "px", "%"];

impl CssLength {
    /// Parses the value of the style field named `field`.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, ConsoleError> {
        let input = input.trim();
        if input == "0" {
            return Ok(CssLength(input.to_string()));
        }
        let number = LENGTH_UNITS
            .iter()
            .find_map(|unit| input.strip_suffix(unit))
            .ok_or_else(|| {
                ConsoleError::invalid_style(field, format!("`{input}` has no px, em, rem or % unit"))
            })?;
        if !is_css_number(number) {
            return Err(ConsoleError::invalid_style(
                field,
                format!("`{input}` is not a number followed by a unit"),
            ));
        }
        Ok(CssLength(input.to_string()))
    }

    pub fn px(value: u32) -> Self {
        CssLength(format!("{value}px"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `-?digits`, `-?digits.digits` or `-?.digits`; a trailing `.` is not CSS.
fn is_css_number(number: &str) -> bool {
    let unsigned = number.strip_prefix('-').unwrap_or(number);
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && !frac.is_empty() && all_digits(frac),
        None => !unsigned.is_empty() && all_digits(unsigned),
    }
}

fn length_field<'de, D: Deserializer<'de>>(
    field: &'static str,
    deserializer: D,
) -> Result<CssLength, D::Error> {
    let raw = String::deserialize(deserializer)?;
    CssLength::parse(field, &raw).map_err(de::Error::custom)
}

fn deserialize_top<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CssLength, D::Error> {
    length_field("top", deserializer)
}

fn deserialize_margin_left<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CssLength, D::Error> {
    length_field("margin_left", deserializer)
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Style applied to the overlay node when it is mounted.
///
/// Every field is optional in JSON; missing fields take the defaults below,
/// which put light grey text in the top-left corner of the viewport.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayStyle {
    pub position: Position,
    pub color: CssColor,
    #[serde(deserialize_with = "deserialize_top")]
    pub top: CssLength,
    #[serde(deserialize_with = "deserialize_margin_left")]
    pub margin_left: CssLength,
    pub z_index: i32,
    pub font_family: Option<String>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OverlayStyle {
            position: Position::Fixed,
            color: CssColor::rgb(0xee, 0xee, 0xee),
            top: CssLength::px(5),
            margin_left: CssLength::px(5),
            z_index: 1000,
            font_family: None,
        }
    }
}

impl OverlayStyle {
    pub fn from_json(json: &str) -> Result<Self, ConsoleError> {
        let style: OverlayStyle = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), ConsoleError> {
        if let Some(family) = &self.font_family {
            if family.trim().is_empty() {
                return Err(ConsoleError::invalid_style("font_family", "must not be blank"));
            }
            if family.contains([';', '{', '}']) {
                return Err(ConsoleError::invalid_style(
                    "font_family",
                    format!("`{family}` contains a CSS delimiter"),
                ));
            }
        }
        Ok(())
    }

    /// `(property, value)` pairs in the order they are applied.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![
            ("position", self.position.as_css().to_string()),
            ("top", self.top.to_string()),
            ("left", "0".to_string()),
            ("margin-left", self.margin_left.to_string()),
            ("color", self.color.to_string()),
            ("z-index", self.z_index.to_string()),
            ("pointer-events", "none".to_string()),
        ];
        if let Some(family) = &self.font_family {
            decls.push(("font-family", family.clone()));
        }
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_shorthand_expands() {
        assert_eq!(CssColor::parse("#eee").unwrap(), CssColor::rgb(0xee, 0xee, 0xee));
        assert_eq!(CssColor::parse("#222").unwrap().to_string(), "#222222");
    }

    #[test]
    fn test_long_hex_and_keyword() {
        assert_eq!(CssColor::parse("#1A2b3C").unwrap(), CssColor::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(CssColor::parse(" White ").unwrap(), CssColor::Named("white".into()));
    }

    #[test]
    fn test_bad_colors_rejected() {
        for bad in ["", "#12", "#12345g", "red;x", "rgb(1,2,3)"] {
            let err = CssColor::parse(bad).unwrap_err();
            assert!(matches!(err, ConsoleError::InvalidStyle { field: "color", .. }), "{bad}");
        }
    }

    #[test]
    fn test_lengths() {
        for ok in ["0", "5px", "1.5em", "2rem", "-3px", "10%", ".5em", "-0.25rem"] {
            assert_eq!(CssLength::parse("top", ok).unwrap().as_str(), ok);
        }
        for bad in ["5", "px", "5 px", "inf px", "1e3px", "5pt", "5.px", "-.px", "1.2.3px", "-px"] {
            assert!(CssLength::parse("top", bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_length_errors_name_the_field() {
        let err = CssLength::parse("margin_left", "5").unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidStyle { field: "margin_left", .. }));

        let err = OverlayStyle::from_json(r#"{"top": "five"}"#).unwrap_err();
        assert!(err.to_string().contains("`top`"), "{err}");
        let err = OverlayStyle::from_json(r#"{"margin_left": "5.px"}"#).unwrap_err();
        assert!(err.to_string().contains("`margin_left`"), "{err}");
    }

    #[test]
    fn test_default_style_is_fixed_top_left() {
        let decls = OverlayStyle::default().css_declarations();
        assert_eq!(decls[0], ("position", "fixed".to_string()));
        assert!(decls.contains(&("top", "5px".to_string())));
        assert!(decls.contains(&("left", "0".to_string())));
        assert!(decls.contains(&("color", "#eeeeee".to_string())));
    }

    #[test]
    fn test_from_json_partial() {
        let style = OverlayStyle::from_json(r##"{"color": "#222", "position": "absolute"}"##).unwrap();
        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.color, CssColor::rgb(0x22, 0x22, 0x22));
        assert_eq!(style.top, CssLength::px(5));
    }

    #[test]
    fn test_from_json_rejects_unknown_and_invalid() {
        assert!(matches!(
            OverlayStyle::from_json(r#"{"colour": "red"}"#),
            Err(ConsoleError::InvalidConfig(_))
        ));
        assert!(matches!(
            OverlayStyle::from_json(r#"{"top": "five"}"#),
            Err(ConsoleError::InvalidConfig(_))
        ));
        assert!(matches!(
            OverlayStyle::from_json(r#"{"font_family": "a; color: red"}"#),
            Err(ConsoleError::InvalidStyle { field: "font_family", .. })
        ));
    }
}
