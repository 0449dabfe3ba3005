use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read a CSS-style color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unsupported color format `{0}` (expected `rgb(r,g,b)` or `#rrggbb`)")]
    UnsupportedFormat(String),

    #[error("invalid color channel `{channel}` in `{input}`")]
    InvalidChannel { input: String, channel: String },

    #[error("expected 3 or 4 color channels in `{input}`, found {found}")]
    WrongChannelCount { input: String, found: usize },
}

/// Three-channel color with components on the 0..=255 scale.
///
/// Components are `f64` because interpolated colors are fractional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Parses `rgb(r,g,b)`, `rgba(r,g,b,a)` (alpha dropped) or `#rrggbb`.
    pub fn parse_css(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(input, hex);
        }

        let body = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::UnsupportedFormat(input.to_owned()))?;

        let channels: Vec<&str> = body.split(',').map(str::trim).collect();
        if !(3..=4).contains(&channels.len()) {
            return Err(ColorParseError::WrongChannelCount {
                input: input.to_owned(),
                found: channels.len(),
            });
        }

        let mut parsed = [0.0; 3];
        for (slot, channel) in parsed.iter_mut().zip(&channels) {
            let value: f64 = channel
                .parse()
                .ok()
                .filter(|value: &f64| value.is_finite())
                .ok_or_else(|| ColorParseError::InvalidChannel {
                    input: input.to_owned(),
                    channel: (*channel).to_owned(),
                })?;
            *slot = value;
        }
        Ok(Self::new(parsed[0], parsed[1], parsed[2]).clamped())
    }

    /// Components clamped into 0..=255.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            self.red.clamp(0.0, 255.0),
            self.green.clamp(0.0, 255.0),
            self.blue.clamp(0.0, 255.0),
        )
    }

    /// Linear interpolation per channel; `t = 0` yields `self`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.red * (1.0 - t) + other.red * t,
            self.green * (1.0 - t) + other.green * t,
            self.blue * (1.0 - t) + other.blue * t,
        )
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_css(input)
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgb, ColorParseError> {
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ColorParseError::UnsupportedFormat(input.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range.clone()], 16).map_err(|_| {
            ColorParseError::InvalidChannel {
                input: input.to_owned(),
                channel: hex[range].to_owned(),
            }
        })
    };
    Ok(Rgb::new(
        f64::from(channel(0..2)?),
        f64::from(channel(2..4)?),
        f64::from(channel(4..6)?),
    ))
}
