//! The [Decoder] tree: primitives, lists, shifts and groups.

use log::trace;

use crate::{
    bits::{BitRange, shift_right},
    integer::{ComputedInteger, FormattedInteger},
    signal::{Flag, Signal},
    template::Template,
    value::Enumeration,
};

/// Moves a decoder to a different bit position.
///
/// The wrapped decoder sees the value shifted right by `offset`, so a table written
/// for bit 0 can be reused anywhere inside a wider value.
#[derive(Debug, Clone)]
pub struct Shift {
    offset: u32,
    inner: Box<Decoder>,
}

impl Shift {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn inner(&self) -> &Decoder {
        &self.inner
    }
}

/// Attaches a name to a sub-decoder and indents its output by one tab.
///
/// A group whose sub-decoder produces nothing is omitted entirely, name included.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    inner: Box<Decoder>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &Decoder {
        &self.inner
    }

    fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        let mut sub = Vec::new();
        self.inner.decode_into(&mut sub, value);

        trace!("group {} produced {} lines", self.name, sub.len());

        if sub.is_empty() {
            return;
        }

        out.reserve(sub.len() + 1);
        out.push(self.name.clone());
        out.extend(sub.into_iter().map(|line| format!("\t{line}")));
    }
}

/// A node in a decoder tree.
///
/// Every node decodes the same input value independently and appends its lines, in
/// declaration order, to an accumulator. Decoding never fails and keeps no state, so
/// one tree can be shared between threads and decoded any number of times.
#[derive(Debug, Clone)]
pub enum Decoder {
    Signal(Signal),
    Flag(Flag),
    Value(Enumeration),
    Int(FormattedInteger),
    Func(ComputedInteger),
    List(Vec<Decoder>),
    Shift(Shift),
    Group(Group),
}

impl Decoder {
    /// Emits `name` while bit `pos` is set.
    pub fn signal(pos: u32, name: impl Into<String>) -> Self {
        Decoder::Signal(Signal::new(pos, name))
    }

    /// Emits `name` or `!name` depending on bit `pos`. A leading `!` in `name`
    /// inverts the polarity.
    pub fn flag(pos: u32, name: impl Into<String>) -> Self {
        Decoder::Flag(Flag::new(pos, name))
    }

    /// Maps bits `start..=end` to an entry of `names`, using `default` past its end.
    pub fn value<I, S>(
        start: u32,
        end: u32,
        label: impl Into<String>,
        names: I,
        default: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Decoder::Value(Enumeration::new(
            BitRange::new(start, end),
            label,
            names,
            default,
        ))
    }

    /// Renders bits `start..=end` with `template`.
    pub fn int(start: u32, end: u32, label: impl Into<String>, template: Template) -> Self {
        Decoder::Int(FormattedInteger::new(
            BitRange::new(start, end),
            label,
            template,
        ))
    }

    /// Renders bits `start..=end` with `convert`.
    pub fn func<F>(start: u32, end: u32, label: impl Into<String>, convert: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        Decoder::Func(ComputedInteger::new(
            BitRange::new(start, end),
            label,
            convert,
        ))
    }

    pub fn list(decoders: impl IntoIterator<Item = Decoder>) -> Self {
        Decoder::List(decoders.into_iter().collect())
    }

    /// Flattens several decoder sequences into one list, keeping their order.
    pub fn concat<I, L>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = Decoder>,
    {
        Decoder::List(lists.into_iter().flatten().collect())
    }

    pub fn shift(offset: u32, inner: Decoder) -> Self {
        Decoder::Shift(Shift {
            offset,
            inner: Box::new(inner),
        })
    }

    pub fn group(name: impl Into<String>, inner: Decoder) -> Self {
        Decoder::Group(Group {
            name: name.into(),
            inner: Box::new(inner),
        })
    }

    /// Appends the lines describing `value` to `acc` and returns it.
    pub fn decode(&self, mut acc: Vec<String>, value: u64) -> Vec<String> {
        self.decode_into(&mut acc, value);
        acc
    }

    /// Lines describing `value`, starting from an empty accumulator.
    pub fn lines(&self, value: u64) -> Vec<String> {
        self.decode(Vec::new(), value)
    }

    pub fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        match self {
            Decoder::Signal(signal) => signal.decode_into(out, value),
            Decoder::Flag(flag) => flag.decode_into(out, value),
            Decoder::Value(enumeration) => enumeration.decode_into(out, value),
            Decoder::Int(int) => int.decode_into(out, value),
            Decoder::Func(func) => func.decode_into(out, value),
            Decoder::List(decoders) => {
                for decoder in decoders {
                    decoder.decode_into(out, value);
                }
            }
            Decoder::Shift(shift) => shift
                .inner
                .decode_into(out, shift_right(value, shift.offset)),
            Decoder::Group(group) => group.decode_into(out, value),
        }
    }
}

impl From<Vec<Decoder>> for Decoder {
    fn from(decoders: Vec<Decoder>) -> Self {
        Decoder::List(decoders)
    }
}

impl FromIterator<Decoder> for Decoder {
    fn from_iter<T: IntoIterator<Item = Decoder>>(iter: T) -> Self {
        Decoder::list(iter)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::DecoderDef> for Decoder {
    type Error = crate::errors::CompileError;

    fn try_from(value: crate::serde::DecoderDef) -> Result<Self, Self::Error> {
        use crate::{bits::check_bit, errors::CompileError, serde::DecoderDef};

        let decoder = match value {
            DecoderDef::Signal { bit, name } => Decoder::signal(check_bit(bit)?, name),
            DecoderDef::Flag { bit, name } => Decoder::flag(check_bit(bit)?, name),
            DecoderDef::Value {
                start_bit,
                end_bit,
                label,
                names,
                default,
            } => Decoder::Value(Enumeration::new(
                BitRange::try_new(start_bit, end_bit)?,
                label,
                names,
                default,
            )),
            DecoderDef::Int {
                start_bit,
                end_bit,
                label,
                format,
            } => Decoder::Int(FormattedInteger::new(
                BitRange::try_new(start_bit, end_bit)?,
                label,
                Template::parse(&format)?,
            )),
            DecoderDef::List { decoders } => Decoder::List(
                decoders
                    .into_iter()
                    .map(Decoder::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            DecoderDef::Shift { offset, decoder } => {
                if offset > crate::bits::MAX_BIT {
                    return Err(CompileError::InvalidShift(offset));
                }
                Decoder::shift(offset, Decoder::try_from(*decoder)?)
            }
            DecoderDef::Group { name, decoder } => {
                log::debug!("compiling group {name}");
                Decoder::group(name, Decoder::try_from(*decoder)?)
            }
        };

        Ok(decoder)
    }
}
