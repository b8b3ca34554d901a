//! Single-bit decoders: [Signal] and [Flag].

use crate::bits::bit_mask;

/// Name marking an undocumented bit. Rendered together with the bit position.
pub const RESERVED: &str = "<reserved>";

/// Emits its name while the bit is set, nothing while it is clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pos: u32,
    mask: u64,
    name: String,
}

impl Signal {
    pub fn new(pos: u32, name: impl Into<String>) -> Self {
        debug_assert!(pos < u64::BITS, "bit position {pos} exceeds 64 bits");

        Signal {
            pos,
            mask: bit_mask(pos),
            name: name.into(),
        }
    }

    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        if value & self.mask == 0 {
            return;
        }

        if self.name == RESERVED {
            out.push(format!("bit {}: {}", self.pos, RESERVED));
        } else {
            out.push(self.name.clone());
        }
    }
}

/// Always emits one token: the name while the bit is set, `!name` while it is clear.
///
/// A name given with a leading `!` inverts the polarity. The `!` is not part of the
/// displayed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pos: u32,
    mask: u64,
    name: String,
    negate: bool,
}

impl Flag {
    pub fn new(pos: u32, name: impl Into<String>) -> Self {
        debug_assert!(pos < u64::BITS, "bit position {pos} exceeds 64 bits");

        let name = name.into();
        let (name, negate) = match name.strip_prefix('!') {
            Some(base) => (base.to_string(), true),
            None => (name, false),
        };

        Flag {
            pos,
            mask: bit_mask(pos),
            name,
            negate,
        }
    }

    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Displayed name, without any polarity prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    pub(crate) fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        let set = value & self.mask != 0;

        if set != self.negate {
            out.push(self.name.clone());
        } else {
            out.push(format!("!{}", self.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_signal(signal: &Signal, value: u64) -> Vec<String> {
        let mut out = Vec::new();
        signal.decode_into(&mut out, value);
        out
    }

    fn decode_flag(flag: &Flag, value: u64) -> Vec<String> {
        let mut out = Vec::new();
        flag.decode_into(&mut out, value);
        out
    }

    #[test]
    fn test_signal_set() {
        let signal = Signal::new(3, "READY");
        assert_eq!(decode_signal(&signal, 0b1000), vec!["READY"]);
    }

    #[test]
    fn test_signal_clear() {
        let signal = Signal::new(3, "READY");
        assert!(decode_signal(&signal, 0b0111).is_empty());
    }

    #[test]
    fn test_signal_reserved() {
        let signal = Signal::new(5, RESERVED);
        assert_eq!(decode_signal(&signal, 0x20), vec!["bit 5: <reserved>"]);
        assert!(decode_signal(&signal, 0).is_empty());
    }

    #[test]
    fn test_signal_top_bit() {
        let signal = Signal::new(63, "SIGN");
        assert_eq!(decode_signal(&signal, 1 << 63), vec!["SIGN"]);
    }

    #[test]
    fn test_flag() {
        let flag = Flag::new(0, "ENABLED");
        assert!(!flag.is_negated());
        assert_eq!(decode_flag(&flag, 1), vec!["ENABLED"]);
        assert_eq!(decode_flag(&flag, 0), vec!["!ENABLED"]);
    }

    #[test]
    fn test_flag_negated() {
        let flag = Flag::new(0, "!ENABLED");
        assert!(flag.is_negated());
        assert_eq!(flag.name(), "ENABLED");
        assert_eq!(decode_flag(&flag, 1), vec!["!ENABLED"]);
        assert_eq!(decode_flag(&flag, 0), vec!["ENABLED"]);
    }

    #[test]
    fn test_flag_strips_only_one_bang() {
        let flag = Flag::new(2, "!!BUSY");
        assert_eq!(flag.name(), "!BUSY");
        assert_eq!(decode_flag(&flag, 0), vec!["!BUSY"]);
    }
}
