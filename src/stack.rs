//! Grid compositing of image batches.
//!
//! Batches are partitioned into consecutive groups by a split list. Groups are
//! laid out along the `stack_mode` axis, the members of one group along the
//! other axis, and the images inside one batch along the `batch_stack_mode`
//! axis. Everything not covered by a cell stays black.

use anyhow::Result;
use image::{imageops, RgbImage};
use rayon::prelude::*;

use crate::convert::{image_to_rgb, rgb_to_image};
use crate::core::{validate_uniform_batches, Image, ImageBatch};
use crate::error::ValidationError;
use crate::params::{check_positive, single_stack_mode, StackMode};

/// Where one batch's cell lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPlacement {
    pub batch_index: usize,
    pub group: usize,
    pub position: usize,
    pub x: usize,
    pub y: usize,
}

/// Pure layout arithmetic of the grid, independent of pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub image_w: usize,
    pub image_h: usize,
    pub batch_size: usize,
    pub splits: Vec<usize>,
    pub stack_mode: StackMode,
    pub batch_stack_mode: StackMode,
}

impl GridLayout {
    pub fn new(
        image_w: usize,
        image_h: usize,
        batch_size: usize,
        splits: Vec<usize>,
        stack_mode: StackMode,
        batch_stack_mode: StackMode,
    ) -> Self {
        Self {
            image_w,
            image_h,
            batch_size,
            splits,
            stack_mode,
            batch_stack_mode,
        }
    }

    /// `(width, height)` of the raster holding one whole batch.
    pub fn cell_size(&self) -> (usize, usize) {
        match self.batch_stack_mode {
            StackMode::Horizontal => (self.image_w * self.batch_size, self.image_h),
            StackMode::Vertical => (self.image_w, self.image_h * self.batch_size),
        }
    }

    /// `(width, height)` of the full composite.
    pub fn canvas_size(&self) -> (usize, usize) {
        let (cell_w, cell_h) = self.cell_size();
        let groups = self.splits.len();
        let longest = self.splits.iter().copied().max().unwrap_or(0);

        match self.stack_mode {
            StackMode::Horizontal => (cell_w * groups, cell_h * longest),
            StackMode::Vertical => (cell_w * longest, cell_h * groups),
        }
    }

    /// Offset of image `image_idx` inside its batch cell.
    pub fn image_offset(&self, image_idx: usize) -> (usize, usize) {
        match self.batch_stack_mode {
            StackMode::Horizontal => (self.image_w * image_idx, 0),
            StackMode::Vertical => (0, self.image_h * image_idx),
        }
    }

    /// Every cell in flat batch order.
    pub fn placements(&self) -> Vec<CellPlacement> {
        let (cell_w, cell_h) = self.cell_size();
        let mut placements = Vec::with_capacity(self.splits.iter().sum());
        let mut batch_index = 0;

        for (group, &split) in self.splits.iter().enumerate() {
            for position in 0..split {
                let (x, y) = match self.stack_mode {
                    StackMode::Horizontal => (cell_w * group, cell_h * position),
                    StackMode::Vertical => (cell_w * position, cell_h * group),
                };
                placements.push(CellPlacement {
                    batch_index: batch_index + position,
                    group,
                    position,
                    x,
                    y,
                });
            }
            batch_index += split;
        }

        placements
    }
}

/// Expand and check the split list against the number of batches.
///
/// A single split is repeated once per batch; the result must still sum to
/// `batch_count`, so in practice only `[1]` is valid as a single value.
pub fn resolve_stack_splits(
    splits: &[usize],
    batch_count: usize,
) -> Result<Vec<usize>, ValidationError> {
    for &split in splits {
        check_positive("splits", split)?;
    }

    let resolved = match splits {
        [single] => vec![*single; batch_count],
        _ => splits.to_vec(),
    };

    let actual: usize = resolved.iter().sum();
    if actual != batch_count {
        return Err(ValidationError::SplitSumMismatch {
            expected: batch_count,
            actual,
        });
    }
    Ok(resolved)
}

/// Composite `batches` into a single `(H, W, 3)` image.
pub fn stack_batches(
    batches: &[ImageBatch],
    splits: &[usize],
    stack_mode: StackMode,
    batch_stack_mode: StackMode,
) -> Result<Image> {
    let (dims, batch_size) = validate_uniform_batches(batches)?;
    let splits = resolve_stack_splits(splits, batches.len())?;

    let layout = GridLayout::new(
        dims.image_w,
        dims.image_h,
        batch_size,
        splits,
        stack_mode,
        batch_stack_mode,
    );
    let (canvas_w, canvas_h) = layout.canvas_size();
    log::trace!(
        "stacking {} batches into {}x{} canvas, splits {:?}",
        batches.len(),
        canvas_w,
        canvas_h,
        layout.splits
    );

    let cells: Vec<(CellPlacement, RgbImage)> = layout
        .placements()
        .into_par_iter()
        .map(|placement| -> Result<(CellPlacement, RgbImage)> {
            let cell = render_cell(&batches[placement.batch_index], &layout)?;
            Ok((placement, cell))
        })
        .collect::<Result<_>>()?;

    let mut canvas = RgbImage::new(canvas_w as u32, canvas_h as u32);
    for (placement, cell) in &cells {
        log::debug!(
            "batch {} -> group {} position {} at ({}, {})",
            placement.batch_index,
            placement.group,
            placement.position,
            placement.x,
            placement.y
        );
        imageops::replace(&mut canvas, cell, placement.x as i64, placement.y as i64);
    }

    rgb_to_image(&canvas)
}

/// Host-facing entry point: the stack modes arrive as lists that must each
/// hold exactly one choice.
pub fn stack_images<S: AsRef<str>>(
    batches: &[ImageBatch],
    splits: &[usize],
    stack_mode: &[S],
    batch_stack_mode: &[S],
) -> Result<Image> {
    let stack_mode = single_stack_mode("stack_mode", stack_mode)?;
    let batch_stack_mode = single_stack_mode("batch_stack_mode", batch_stack_mode)?;
    stack_batches(batches, splits, stack_mode, batch_stack_mode)
}

fn render_cell(batch: &ImageBatch, layout: &GridLayout) -> Result<RgbImage> {
    let (cell_w, cell_h) = layout.cell_size();
    let mut cell = RgbImage::new(cell_w as u32, cell_h as u32);

    for (image_idx, image) in batch.outer_iter().enumerate() {
        let raster = image_to_rgb(&image)?;
        let (x, y) = layout.image_offset(image_idx);
        imageops::replace(&mut cell, &raster, x as i64, y as i64);
    }

    Ok(cell)
}
