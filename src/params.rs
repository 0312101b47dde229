//! Host parameter marshalling.
//!
//! The host hands every input over as a list, even parameters that only make
//! sense as a single value. These helpers turn those lists into the typed
//! values the operations need, or reject them with a [`ValidationError`].

use std::fmt;
use std::str::FromStr;

use crate::error::{LabelKind, Result, ValidationError};

/// Direction in which cells or images are laid out next to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackMode {
    #[default]
    Horizontal,
    Vertical,
}

impl StackMode {
    pub const CHOICES: [&'static str; 2] = ["horizontal", "vertical"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StackMode::Horizontal => "horizontal",
            StackMode::Vertical => "vertical",
        }
    }
}

impl FromStr for StackMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(StackMode::Horizontal),
            "vertical" => Ok(StackMode::Vertical),
            other => Err(ValidationError::UnknownStackMode(other.to_string())),
        }
    }
}

impl fmt::Display for StackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single annotation value drawn into a label box.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Float(f64),
    Int(i64),
    Str(String),
}

impl Label {
    pub fn kind(&self) -> LabelKind {
        match self {
            Label::Float(_) => LabelKind::Float,
            Label::Int(_) => LabelKind::Int,
            Label::Str(_) => LabelKind::Str,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Float(v) => f.write_str(&float_repr(*v)),
            Label::Int(v) => write!(f, "{}", v),
            Label::Str(v) => f.write_str(v),
        }
    }
}

/// Render a float the way Python's `repr` does: shortest round-trip digits,
/// a trailing ".0" on whole numbers, signed exponents of at least two digits
/// (`1e+16`, `1e-05`) and lowercase `nan`/`inf`.
pub fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug switches to exponent form at the same thresholds as Python
    let debug = format!("{:?}", v);
    match debug.split_once('e') {
        None => debug,
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
    }
}

impl From<f64> for Label {
    fn from(v: f64) -> Self {
        Label::Float(v)
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Str(v)
    }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Str(v.to_string())
    }
}

/// Extract the only value of a list parameter.
pub fn require_single<T: Clone>(param: &'static str, values: &[T]) -> Result<T> {
    match values {
        [value] => Ok(value.clone()),
        [] => Err(ValidationError::MissingValue(param)),
        _ => Err(ValidationError::MultipleValues {
            param,
            count: values.len(),
        }),
    }
}

/// Like [`require_single`], but an absent parameter falls back to `default`.
pub fn optional_single<T: Clone>(param: &'static str, values: Option<&[T]>, default: T) -> Result<T> {
    match values {
        None => Ok(default),
        Some(values) => require_single(param, values),
    }
}

/// Parse a list-valued stack mode parameter that must hold exactly one choice.
pub fn single_stack_mode<S: AsRef<str>>(param: &'static str, values: &[S]) -> Result<StackMode> {
    match values {
        [value] => value.as_ref().parse(),
        [] => Err(ValidationError::MissingValue(param)),
        _ => Err(ValidationError::MultipleValues {
            param,
            count: values.len(),
        }),
    }
}

/// Check a label list against the batch count and expand it to one label per batch.
///
/// A list of exactly one entry is broadcast to every batch; any other length
/// must match `batch_count`.
pub fn broadcast_labels<T>(kind: LabelKind, labels: &[T], batch_count: usize) -> Result<Vec<Label>>
where
    T: Clone + Into<Label>,
{
    check_label_count(kind, labels.len(), batch_count)?;

    if labels.len() == 1 && batch_count != 1 {
        let label: Label = labels[0].clone().into();
        return Ok(vec![label; batch_count]);
    }
    Ok(labels.iter().cloned().map(Into::into).collect())
}

pub(crate) fn check_label_count(kind: LabelKind, labels: usize, batches: usize) -> Result<()> {
    if labels != batches && labels != 1 {
        return Err(ValidationError::LabelCountMismatch {
            kind,
            batches,
            labels,
        });
    }
    Ok(())
}

/// Reject zero where the host contract declares `min: 1`.
pub(crate) fn check_positive(param: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(ValidationError::ZeroValue { param });
    }
    Ok(value)
}
