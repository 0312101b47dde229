use anyhow::Result;
use ndarray::Array4;
use rayon::prelude::*;

use crate::config::PlaceholderConfig;
use crate::core::ImageBatch;
use crate::error::ValidationError;
use crate::params::{check_positive, optional_single, require_single};

/// Generated placeholder batches together with the split list they follow.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholders {
    pub splits: Vec<usize>,
    pub batches: Vec<ImageBatch>,
}

impl Placeholders {
    pub fn image_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.dim().0).sum()
    }
}

/// Work out the split list from an optional total and optional splits.
///
/// An empty split list counts as absent.
pub fn resolve_placeholder_splits(
    num_images: Option<usize>,
    splits: Option<&[usize]>,
) -> Result<Vec<usize>, ValidationError> {
    let splits = splits.filter(|splits| !splits.is_empty());

    if let Some(total) = num_images {
        check_positive("num_images", total)?;
    }
    for &split in splits.unwrap_or_default() {
        check_positive("splits", split)?;
    }

    match (num_images, splits) {
        (None, None) => Err(ValidationError::MissingImageCountAndSplits),
        (Some(total), None) => Ok(vec![total]),
        (None, Some(splits)) => Ok(splits.to_vec()),
        (Some(total), Some([single])) => {
            let mut resolved = vec![*single; total / single];
            let remainder = total % single;
            if remainder != 0 {
                resolved.push(remainder);
            }
            Ok(resolved)
        }
        (Some(total), Some(splits)) => {
            let actual: usize = splits.iter().sum();
            if actual != total {
                return Err(ValidationError::SplitSumMismatch {
                    expected: total,
                    actual,
                });
            }
            Ok(splits.to_vec())
        }
    }
}

/// Base `(r, g, b)` of every placeholder belonging to a split of size `split`.
///
/// Not clamped: large splits produce channel values above 255. Saturates at
/// `u64::MAX` instead of overflowing.
pub fn split_color(split: usize) -> [u64; 3] {
    let s = split as u64;
    [s.saturating_mul(10), s.saturating_mul(20), s.saturating_mul(30)]
}

/// Color of image `image_idx` within a batch of split `split`.
pub fn image_color(split: usize, image_idx: usize, config: &PlaceholderConfig) -> [u64; 3] {
    let [r, g, b] = split_color(split);
    let red_offset = (config.red_step as u64).saturating_mul(image_idx as u64);
    let color = [r.saturating_add(red_offset), g, b];

    if config.clamp_channels {
        color.map(|channel| channel.min(255))
    } else {
        color
    }
}

fn solid_batch(split: usize, batch_size: usize, config: &PlaceholderConfig) -> ImageBatch {
    let colors: Vec<[f32; 3]> = (0..batch_size)
        .map(|image_idx| image_color(split, image_idx, config).map(|c| c as f32 / 255.0))
        .collect();

    Array4::from_shape_fn(
        (batch_size, config.height, config.width, 3),
        |(image_idx, _, _, channel)| colors[image_idx][channel],
    )
}

/// Produce `split` batches of `batch_size` solid images for every split.
pub fn generate_placeholders(
    num_images: Option<usize>,
    splits: Option<&[usize]>,
    batch_size: usize,
    config: &PlaceholderConfig,
) -> Result<Placeholders> {
    let config = config.clone().build()?;
    let batch_size = check_positive("batch_size", batch_size)?;
    let splits = resolve_placeholder_splits(num_images, splits)?;
    log::trace!(
        "placeholder splits {:?}, batch size {}, {}x{}",
        splits,
        batch_size,
        config.width,
        config.height
    );

    let batches = splits
        .par_iter()
        .map(|&split| {
            log::debug!("split {} color {:?}", split, split_color(split));
            let batch = solid_batch(split, batch_size, &config);
            vec![batch; split]
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    Ok(Placeholders { splits, batches })
}

/// Host-facing entry point: every parameter arrives as an optional list that
/// may hold at most one value.
pub fn generate_empty_images(
    num_images: Option<&[usize]>,
    splits: Option<&[usize]>,
    batch_size: Option<&[usize]>,
    config: &PlaceholderConfig,
) -> Result<Placeholders> {
    let batch_size = optional_single("batch_size", batch_size, 1)?;

    if num_images.is_none() && splits.is_none() {
        return Err(ValidationError::MissingImageCountAndSplits.into());
    }

    let num_images = num_images
        .map(|values| require_single("num_images", values))
        .transpose()?;

    generate_placeholders(num_images, splits, batch_size, config)
}
