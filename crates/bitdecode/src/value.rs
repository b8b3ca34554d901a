//! Enumerated bit-range decoder.

use crate::{bits::BitRange, signal::RESERVED};

/// Maps the field in a [BitRange] to one of a list of names.
///
/// Field values past the end of `names` fall back to the default. An empty result is
/// not emitted at all, so an empty entry in `names` marks a value that is not worth
/// reporting even when a default is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    range: BitRange,
    label: String,
    names: Vec<String>,
    default: String,
}

impl Enumeration {
    pub fn new<I, S>(
        range: BitRange,
        label: impl Into<String>,
        names: I,
        default: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Enumeration {
            range,
            label: label.into(),
            names: names.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }

    pub fn range(&self) -> BitRange {
        self.range
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name the field value `b` resolves to, before any label is applied.
    pub fn resolve(&self, b: u64) -> &str {
        usize::try_from(b)
            .ok()
            .and_then(|i| self.names.get(i))
            .unwrap_or(&self.default)
    }

    pub(crate) fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        let b = self.range.extract(value);
        let name = self.resolve(b);

        let prefix = if self.label.is_empty() {
            String::new()
        } else {
            format!("{}: ", self.label)
        };

        match name {
            "" => {}
            RESERVED => out.push(format!("{prefix}{b}: {RESERVED}")),
            name => out.push(format!("{prefix}{name}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode() -> Enumeration {
        Enumeration::new(
            BitRange::new(2, 3),
            "MODE",
            ["IDLE", "RUN", "", RESERVED],
            "",
        )
    }

    fn decode(e: &Enumeration, value: u64) -> Vec<String> {
        let mut out = Vec::new();
        e.decode_into(&mut out, value);
        out
    }

    #[test]
    fn test_named_value() {
        assert_eq!(decode(&mode(), 0b0000), vec!["MODE: IDLE"]);
        assert_eq!(decode(&mode(), 0b0100), vec!["MODE: RUN"]);
    }

    #[test]
    fn test_empty_name_emits_nothing() {
        assert!(decode(&mode(), 0b1000).is_empty());
    }

    #[test]
    fn test_reserved_shows_field_value() {
        assert_eq!(decode(&mode(), 0b1100), vec!["MODE: 3: <reserved>"]);
    }

    #[test]
    fn test_out_of_range_uses_default() {
        let e = Enumeration::new(BitRange::new(0, 3), "CLK", ["SLOW", "FAST"], "OTHER");
        assert_eq!(decode(&e, 1), vec!["CLK: FAST"]);
        assert_eq!(decode(&e, 9), vec!["CLK: OTHER"]);
    }

    #[test]
    fn test_empty_name_ignores_default() {
        let e = Enumeration::new(BitRange::new(0, 1), "ST", ["OK", ""], "OTHER");
        assert!(decode(&e, 1).is_empty());
        assert_eq!(decode(&e, 2), vec!["ST: OTHER"]);
    }

    #[test]
    fn test_out_of_range_without_default() {
        let e = Enumeration::new(BitRange::new(0, 3), "CLK", ["SLOW", "FAST"], "");
        assert!(decode(&e, 9).is_empty());
    }

    #[test]
    fn test_default_reserved() {
        let e = Enumeration::new(BitRange::new(0, 3), "CLK", ["SLOW"], RESERVED);
        assert_eq!(decode(&e, 12), vec!["CLK: 12: <reserved>"]);
    }

    #[test]
    fn test_no_label() {
        let e = Enumeration::new(BitRange::new(4, 5), "", ["LOW", "HIGH"], "");
        assert_eq!(decode(&e, 0x10), vec!["HIGH"]);
        assert_eq!(decode(&e, 0x00), vec!["LOW"]);
    }

    #[test]
    fn test_reserved_without_label() {
        let e = Enumeration::new(BitRange::new(0, 1), "", ["A", RESERVED], "");
        assert_eq!(decode(&e, 1), vec!["1: <reserved>"]);
    }
}
