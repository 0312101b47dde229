use std::fmt;

use thiserror::Error;

/// Which optional label list a [`ValidationError::LabelCountMismatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Float,
    Int,
    Str,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LabelKind::Float => "float",
            LabelKind::Int => "int",
            LabelKind::Str => "str",
        };
        f.write_str(name)
    }
}

/// Every way an invocation can be rejected. Raised before any output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Non-matching input sizes got {batches} Image Batches, {labels} Labels for label type {kind}"
    )]
    LabelCountMismatch {
        kind: LabelKind,
        batches: usize,
        labels: usize,
    },

    #[error("Only single {param} supported, got {count} values")]
    MultipleValues { param: &'static str, count: usize },

    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Sum of splits must equal number of images: splits sum to {actual}, expected {expected}")]
    SplitSumMismatch { expected: usize, actual: usize },

    #[error("{param} must be at least 1")]
    ZeroValue { param: &'static str },

    #[error("Must provide either num_images or splits")]
    MissingImageCountAndSplits,

    #[error("No image batches provided")]
    EmptyCollection,

    #[error("Image batch {0} contains no images")]
    EmptyBatch(usize),

    #[error("Image batch {batch} has {channels} channels, only RGB (3 channels) is supported")]
    UnsupportedChannels { batch: usize, channels: usize },

    #[error(
        "Image batch {batch} has images of {found_w}x{found_h}, expected {expected_w}x{expected_h}"
    )]
    DimensionMismatch {
        batch: usize,
        expected_w: usize,
        expected_h: usize,
        found_w: usize,
        found_h: usize,
    },

    #[error("Image batch {batch} holds {found} images, expected {expected}")]
    BatchSizeMismatch {
        batch: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown stack mode '{0}', expected 'horizontal' or 'vertical'")]
    UnknownStackMode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
