//! printf-style templates for rendering a single integer field.
//!
//! A template is literal text around exactly one integer conversion:
//!
//! ```text
//! %[flags][width][.precision]verb
//! ```
//!
//! | Verb          | Output                 |
//! |---------------|------------------------|
//! | `d`, `i`, `u` | decimal                |
//! | `x`, `X`      | hexadecimal            |
//! | `o`           | octal                  |
//! | `b`           | binary                 |
//!
//! Flags are `-` (left-justify), `0` (pad with zeros), `#` (prefix `0x`, `0X`, `0`
//! or `0b`), `+` and space (sign of decimals). A precision sets the minimum number
//! of digits and disables zero padding. `%%` is a literal percent sign.

use std::{fmt, str::FromStr};

use crate::errors::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
}

impl Verb {
    fn from_char(c: char) -> Result<Self, TemplateError> {
        match c {
            'd' | 'i' | 'u' => Ok(Verb::Decimal),
            'x' => Ok(Verb::LowerHex),
            'X' => Ok(Verb::UpperHex),
            'o' => Ok(Verb::Octal),
            'b' => Ok(Verb::Binary),
            other => Err(TemplateError::UnsupportedVerb(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Conversion {
    left: bool,
    zero: bool,
    alternate: bool,
    plus: bool,
    space: bool,
    width: usize,
    precision: Option<usize>,
    verb: Verb,
}

impl Conversion {
    fn render(&self, value: u64, out: &mut String) {
        let mut digits = match self.verb {
            Verb::Decimal => value.to_string(),
            Verb::LowerHex => format!("{value:x}"),
            Verb::UpperHex => format!("{value:X}"),
            Verb::Octal => format!("{value:o}"),
            Verb::Binary => format!("{value:b}"),
        };

        if let Some(precision) = self.precision {
            if precision == 0 && value == 0 {
                digits.clear();
            } else if digits.len() < precision {
                digits.insert_str(0, &"0".repeat(precision - digits.len()));
            }
        }

        let sign = match self.verb {
            Verb::Decimal if self.plus => "+",
            Verb::Decimal if self.space => " ",
            Verb::LowerHex if self.alternate => "0x",
            Verb::UpperHex if self.alternate => "0X",
            Verb::Binary if self.alternate => "0b",
            Verb::Octal if self.alternate && !digits.starts_with('0') => "0",
            _ => "",
        };

        let len = sign.len() + digits.len();
        let pad = self.width.saturating_sub(len);

        if self.left {
            out.push_str(sign);
            out.push_str(&digits);
            out.extend(std::iter::repeat_n(' ', pad));
        } else if self.zero && self.precision.is_none() {
            out.push_str(sign);
            out.extend(std::iter::repeat_n('0', pad));
            out.push_str(&digits);
        } else {
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(sign);
            out.push_str(&digits);
        }
    }
}

/// A parsed integer format template. Use [Template::parse], then [Template::render].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    prefix: String,
    conversion: Conversion,
    suffix: String,
}

impl Template {
    /// Parses `source`, which must contain exactly one integer conversion.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion: Option<Conversion> = None;

        let mut chars = source.chars().peekable();
        while let Some(c) = chars.next() {
            let literal = if conversion.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };

            if c != '%' {
                literal.push(c);
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }

            let mut spec = Conversion {
                left: false,
                zero: false,
                alternate: false,
                plus: false,
                space: false,
                width: 0,
                precision: None,
                verb: Verb::Decimal,
            };

            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => spec.left = true,
                    '0' => spec.zero = true,
                    '#' => spec.alternate = true,
                    '+' => spec.plus = true,
                    ' ' => spec.space = true,
                    _ => break,
                }
                chars.next();
            }

            spec.width = parse_number(&mut chars)?;

            if chars.peek() == Some(&'.') {
                chars.next();
                spec.precision = Some(parse_number(&mut chars)?);
            }

            let verb = chars.next().ok_or(TemplateError::Incomplete)?;
            spec.verb = Verb::from_char(verb)?;

            if conversion.is_some() {
                return Err(TemplateError::MultipleConversions);
            }
            conversion = Some(spec);
        }

        let conversion = conversion.ok_or(TemplateError::MissingConversion)?;

        Ok(Template {
            source: source.to_string(),
            prefix,
            conversion,
            suffix,
        })
    }

    /// Renders `value` into the template.
    pub fn render(&self, value: u64) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 16);
        out.push_str(&self.prefix);
        self.conversion.render(value, &mut out);
        out.push_str(&self.suffix);
        out
    }

    /// The template text as it was parsed.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

fn parse_number(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<usize, TemplateError> {
    let mut n: usize = 0;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(d as usize))
            .ok_or(TemplateError::InvalidWidth)?;
        chars.next();
    }

    Ok(n)
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl TryFrom<&str> for Template {
    type Error = TemplateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Template::parse(value)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, value: u64) -> String {
        Template::parse(template).unwrap().render(value)
    }

    #[test]
    fn test_decimal() {
        assert_eq!(render("%d", 42), "42");
        assert_eq!(render("%5d", 42), "   42");
        assert_eq!(render("%-5d|", 42), "42   |");
        assert_eq!(render("%05d", 42), "00042");
        assert_eq!(render("%+d", 42), "+42");
        assert_eq!(render("% d", 42), " 42");
    }

    #[test]
    fn test_hex() {
        assert_eq!(render("%x", 0xbeef), "beef");
        assert_eq!(render("%X", 0xbeef), "BEEF");
        assert_eq!(render("%#x", 0xbeef), "0xbeef");
        assert_eq!(render("%#06x", 0xf), "0x000f");
        assert_eq!(render("0x%04X", 0xa), "0x000A");
    }

    #[test]
    fn test_octal_and_binary() {
        assert_eq!(render("%o", 8), "10");
        assert_eq!(render("%#o", 8), "010");
        assert_eq!(render("%#o", 0), "0");
        assert_eq!(render("%b", 5), "101");
        assert_eq!(render("%#b", 5), "0b101");
        assert_eq!(render("%08b", 5), "00000101");
    }

    #[test]
    fn test_precision() {
        assert_eq!(render("%.3d", 7), "007");
        assert_eq!(render("%6.3d", 7), "   007");
        assert_eq!(render("%06.3d", 7), "   007");
        assert_eq!(render("%.0d", 0), "");
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(render("%d mV", 3300), "3300 mV");
        assert_eq!(render("%d%%", 50), "50%");
        assert_eq!(render("%%%d", 50), "%50");
    }

    #[test]
    fn test_missing_conversion() {
        assert_eq!(
            Template::parse("no value").unwrap_err(),
            TemplateError::MissingConversion
        );
        assert_eq!(
            Template::parse("100%%").unwrap_err(),
            TemplateError::MissingConversion
        );
    }

    #[test]
    fn test_multiple_conversions() {
        assert_eq!(
            Template::parse("%d/%d").unwrap_err(),
            TemplateError::MultipleConversions
        );
    }

    #[test]
    fn test_unsupported_verb() {
        assert_eq!(
            Template::parse("%s").unwrap_err(),
            TemplateError::UnsupportedVerb('s')
        );
        assert_eq!(
            Template::parse("%.2f").unwrap_err(),
            TemplateError::UnsupportedVerb('f')
        );
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(Template::parse("%").unwrap_err(), TemplateError::Incomplete);
        assert_eq!(Template::parse("%08").unwrap_err(), TemplateError::Incomplete);
    }

    #[test]
    fn test_display_round_trips_source() {
        let template: Template = "%#06x".parse().unwrap();
        assert_eq!(template.to_string(), "%#06x");
        assert_eq!(template.as_str(), "%#06x");
    }
}
