//! Numeric bit-range decoders: [FormattedInteger] renders through a [Template],
//! [ComputedInteger] through a caller-supplied conversion.
//!
//! Both emit `label: text`. A field with an empty label emits nothing, which lets a
//! table keep a field in place while switching its output off.

use std::{fmt, sync::Arc};

use crate::{bits::BitRange, template::Template};

/// Conversion from a right-aligned field value to display text.
pub type Convert = Arc<dyn Fn(u64) -> String + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedInteger {
    range: BitRange,
    label: String,
    template: Template,
}

impl FormattedInteger {
    pub fn new(range: BitRange, label: impl Into<String>, template: Template) -> Self {
        FormattedInteger {
            range,
            label: label.into(),
            template,
        }
    }

    pub fn range(&self) -> BitRange {
        self.range
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub(crate) fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        if self.label.is_empty() {
            return;
        }

        let b = self.range.extract(value);
        out.push(format!("{}: {}", self.label, self.template.render(b)));
    }
}

/// The conversion must be pure: it may run any number of times, from any thread.
#[derive(Clone)]
pub struct ComputedInteger {
    range: BitRange,
    label: String,
    convert: Convert,
}

impl ComputedInteger {
    pub fn new<F>(range: BitRange, label: impl Into<String>, convert: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        ComputedInteger {
            range,
            label: label.into(),
            convert: Arc::new(convert),
        }
    }

    pub fn range(&self) -> BitRange {
        self.range
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn decode_into(&self, out: &mut Vec<String>, value: u64) {
        if self.label.is_empty() {
            return;
        }

        let b = self.range.extract(value);
        out.push(format!("{}: {}", self.label, (self.convert)(b)));
    }
}

impl fmt::Debug for ComputedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedInteger")
            .field("range", &self.range)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
