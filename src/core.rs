// Re-export all core functionality
pub use crate::config::*;
pub use crate::convert::*;
pub use crate::error::{LabelKind, ValidationError};
pub use crate::node::*;
pub use crate::overlay::*;
pub use crate::params::*;
pub use crate::placeholder::*;
pub use crate::stack::*;

use ndarray::{Array3, Array4};

use crate::error::Result;

/// A single `(H, W, 3)` float image.
pub type Image = Array3<f32>;

/// An ordered group of same-sized images, shaped `(B, H, W, 3)`.
pub type ImageBatch = Array4<f32>;

/// Shared geometry of every image in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionDims {
    pub image_h: usize,
    pub image_w: usize,
}

/// Check the collection invariants shared by every operation: at least one
/// batch, no empty batches, RGB images, and one image size throughout.
pub fn validate_collection(batches: &[ImageBatch]) -> Result<CollectionDims> {
    let first = batches.first().ok_or(ValidationError::EmptyCollection)?;
    let (_, image_h, image_w, _) = first.dim();

    for (batch_idx, batch) in batches.iter().enumerate() {
        let (count, h, w, channels) = batch.dim();

        if count == 0 {
            return Err(ValidationError::EmptyBatch(batch_idx));
        }
        if channels != 3 {
            return Err(ValidationError::UnsupportedChannels {
                batch: batch_idx,
                channels,
            });
        }
        if h != image_h || w != image_w {
            return Err(ValidationError::DimensionMismatch {
                batch: batch_idx,
                expected_w: image_w,
                expected_h: image_h,
                found_w: w,
                found_h: h,
            });
        }
    }

    Ok(CollectionDims { image_h, image_w })
}

/// Like [`validate_collection`], additionally requiring every batch to hold
/// the same number of images as the first. Returns that count too.
pub fn validate_uniform_batches(batches: &[ImageBatch]) -> Result<(CollectionDims, usize)> {
    let dims = validate_collection(batches)?;
    let batch_size = batches[0].dim().0;

    for (batch_idx, batch) in batches.iter().enumerate() {
        let found = batch.dim().0;
        if found != batch_size {
            return Err(ValidationError::BatchSizeMismatch {
                batch: batch_idx,
                expected: batch_size,
                found,
            });
        }
    }

    Ok((dims, batch_size))
}
