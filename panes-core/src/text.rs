//! Inline colored text.
//!
//! Labels accept a small markup where `%` starts a control sequence:
//!
//! - `%bNN` switches to a packed basic color (2 hex digits, `RRGGBBAA` with 2 bits each)
//! - `%xRRGGBBAA` switches to a full hex color
//! - `%r` resets to the label's own color
//! - `%%` is a literal `%`

use glam::Vec4;

/// The color of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanColor {
    Basic(u8),
    Hex(Vec4),
    Inherit,
}

impl SpanColor {
    /// Resolves the span color against the color of the widget drawing it.
    pub fn resolve(self, inherited: Vec4) -> Vec4 {
        match self {
            SpanColor::Basic(code) => {
                let r = (code & 0xC0) >> 6;
                let g = (code & 0x30) >> 4;
                let b = (code & 0x0C) >> 2;
                let a = code & 0x03;
                Vec4::new(
                    r as f32 / 3.0,
                    g as f32 / 3.0,
                    b as f32 / 3.0,
                    (a as f32 + 1.0) / 4.0,
                )
            }
            SpanColor::Hex(rgba) => rgba,
            SpanColor::Inherit => inherited,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: SpanColor,
}

/// Text split into differently colored spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    pub spans: Vec<Span>,
}

impl RichText {
    /// Wraps plain text without interpreting any markup.
    pub fn plain(text: &str) -> Self {
        Self {
            spans: vec![Span {
                text: text.to_string(),
                color: SpanColor::Inherit,
            }],
        }
    }

    /// The text with all markup removed.
    pub fn stripped(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

fn take_hex(chars: &mut std::str::Chars, count: usize) -> Result<String, String> {
    let mut digits = String::with_capacity(count);
    for _ in 0..count {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => digits.push(c),
            Some(c) => return Err(format!("Expected a hex digit, found '{}'", c)),
            None => return Err("Unexpected end of string in color code".to_string()),
        }
    }
    Ok(digits)
}

fn channel(digits: &str) -> Result<f32, String> {
    u8::from_str_radix(digits, 16)
        .map(|v| v as f32 / 255.0)
        .map_err(|e| e.to_string())
}

impl std::str::FromStr for RichText {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut spans = Vec::new();
        let mut chars = s.chars();
        let mut text = String::new();
        let mut color = SpanColor::Inherit;

        while let Some(c) = chars.next() {
            if c != '%' {
                text.push(c);
                continue;
            }

            let next = chars.next();
            if next == Some('%') {
                text.push('%');
                continue;
            }

            if !text.is_empty() {
                spans.push(Span {
                    text: std::mem::take(&mut text),
                    color,
                });
            }

            color = match next {
                Some('b') => {
                    let digits = take_hex(&mut chars, 2)?;
                    SpanColor::Basic(u8::from_str_radix(&digits, 16).map_err(|e| e.to_string())?)
                }
                Some('x') => {
                    let digits = take_hex(&mut chars, 8)?;
                    SpanColor::Hex(Vec4::new(
                        channel(&digits[0..2])?,
                        channel(&digits[2..4])?,
                        channel(&digits[4..6])?,
                        channel(&digits[6..8])?,
                    ))
                }
                Some('r') => SpanColor::Inherit,
                Some(other) => return Err(format!("Invalid format code '%{}'", other)),
                None => return Err("Unexpected end of string after '%'".to_string()),
            };
        }

        if !text.is_empty() {
            spans.push(Span { text, color });
        }

        Ok(Self { spans })
    }
}
