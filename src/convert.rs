use anyhow::Result;
use image::{ImageBuffer, Rgb, RgbImage};
use ndarray::{Array3, Array4, ArrayView3, Axis};

/// Quantize a float `(H, W, 3)` image into an 8-bit RGB raster.
///
/// Channel values are scaled by 255, rounded and clipped to `[0, 255]`, so a
/// raster survives the trip through [`rgb_to_image`] unchanged.
pub fn image_to_rgb(image: &ArrayView3<f32>) -> Result<RgbImage> {
    let (height, width, channels) = image.dim();

    if channels != 3 {
        return Err(anyhow::anyhow!(
            "Only RGB images (3 channels) are supported"
        ));
    }

    let mut raw = Vec::with_capacity(width * height * 3);

    // Row-major, matching the raster's own layout
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                raw.push((image[[y, x, c]] * 255.0).round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    ImageBuffer::<Rgb<u8>, Vec<u8>>::from_vec(width as u32, height as u32, raw)
        .ok_or_else(|| anyhow::anyhow!("Failed to create image buffer"))
}

/// Expand an 8-bit RGB raster back into a float `(H, W, 3)` image in `[0, 1]`.
pub fn rgb_to_image(raster: &RgbImage) -> Result<Array3<f32>> {
    let (width, height) = raster.dimensions();
    let data = raster.as_raw().iter().map(|&v| v as f32 / 255.0).collect();

    Array3::from_shape_vec((height as usize, width as usize, 3), data)
        .map_err(|e| anyhow::anyhow!("Failed to reshape raster into image array: {}", e))
}

/// Concatenate same-sized images along a new leading batch axis.
pub fn images_to_batch(images: &[Array3<f32>]) -> Result<Array4<f32>> {
    if images.is_empty() {
        return Err(anyhow::anyhow!("Cannot build a batch from zero images"));
    }

    let views: Vec<_> = images.iter().map(|img| img.view()).collect();
    ndarray::stack(Axis(0), &views)
        .map_err(|e| anyhow::anyhow!("Failed to stack images into batch: {}", e))
}
