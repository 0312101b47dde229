use anyhow::Result;
use ndarray::ArrayView3;
use rayon::prelude::*;

use crate::config::OverlayStyle;
use crate::convert::{image_to_rgb, images_to_batch, rgb_to_image};
use crate::core::{validate_collection, ImageBatch};
use crate::error::{LabelKind, ValidationError};
use crate::font::{fill_rect, BitmapFont};
use crate::params::{broadcast_labels, Label};

/// Optional label lists as the host delivers them: each either absent, a
/// single value for every batch, or one value per batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelInputs {
    pub float_labels: Option<Vec<f64>>,
    pub int_labels: Option<Vec<i64>>,
    pub str_labels: Option<Vec<String>>,
}

impl LabelInputs {
    pub fn with_float_labels(mut self, labels: Vec<f64>) -> Self {
        self.float_labels = Some(labels);
        self
    }

    pub fn with_int_labels(mut self, labels: Vec<i64>) -> Self {
        self.int_labels = Some(labels);
        self
    }

    pub fn with_str_labels<S: Into<String>>(mut self, labels: Vec<S>) -> Self {
        self.str_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Validate every present list against `batch_count` and return, per
    /// batch, its labels in drawing order (float, int, str).
    pub fn per_batch(&self, batch_count: usize) -> Result<Vec<Vec<Label>>, ValidationError> {
        let mut columns = Vec::with_capacity(3);

        if let Some(labels) = &self.float_labels {
            columns.push(broadcast_labels(LabelKind::Float, labels, batch_count)?);
        }
        if let Some(labels) = &self.int_labels {
            columns.push(broadcast_labels(LabelKind::Int, labels, batch_count)?);
        }
        if let Some(labels) = &self.str_labels {
            columns.push(broadcast_labels(LabelKind::Str, labels, batch_count)?);
        }

        Ok((0..batch_count)
            .map(|batch_idx| {
                columns
                    .iter()
                    .map(|column| column[batch_idx].clone())
                    .collect()
            })
            .collect())
    }
}

/// Caption identifying an image by batch and in-batch index.
pub fn caption_text(batch_idx: usize, image_idx: usize) -> String {
    format!("B: {} | I: {}", batch_idx, image_idx)
}

/// Draw the index caption and the stacked label boxes onto every image.
///
/// The output has exactly the shape of `batches`. Label lists are validated
/// before anything is drawn.
pub fn put_overlay(
    batches: &[ImageBatch],
    labels: &LabelInputs,
    style: &OverlayStyle,
) -> Result<Vec<ImageBatch>> {
    let style = style.clone().build()?;
    let per_batch = labels.per_batch(batches.len())?;
    let dims = validate_collection(batches)?;

    let font = BitmapFont::with_pixel_size(style.font_px);
    log::trace!(
        "overlay on {} batches of {}x{} images, font scale {}",
        batches.len(),
        dims.image_w,
        dims.image_h,
        font.scale()
    );

    batches
        .par_iter()
        .zip(per_batch.par_iter())
        .enumerate()
        .map(|(batch_idx, (batch, batch_labels))| -> Result<ImageBatch> {
            let images = batch
                .outer_iter()
                .enumerate()
                .map(|(image_idx, image)| {
                    log::debug!("Batch: {} | img: {}", batch_idx, image_idx);
                    annotate_image(&image, batch_idx, image_idx, batch_labels, &font, &style)
                })
                .collect::<Result<Vec<_>>>()?;
            images_to_batch(&images)
        })
        .collect()
}

fn annotate_image(
    image: &ArrayView3<f32>,
    batch_idx: usize,
    image_idx: usize,
    labels: &[Label],
    font: &BitmapFont,
    style: &OverlayStyle,
) -> Result<ndarray::Array3<f32>> {
    let mut raster = image_to_rgb(image)?;
    let row = style.row_height as i64;

    let caption_y = raster.height() as i64 - row;
    font.draw_text(
        &mut raster,
        0,
        caption_y,
        &caption_text(batch_idx, image_idx),
        style.text_color,
    );

    let mut y_offset = 0i64;
    for label in labels {
        fill_rect(
            &mut raster,
            0,
            y_offset,
            style.box_width as i64,
            y_offset + row,
            style.box_color,
        );
        font.draw_text(&mut raster, 0, y_offset, &label.to_string(), style.text_color);
        y_offset += row;
    }

    rgb_to_image(&raster)
}
