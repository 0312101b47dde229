use image::Rgb;

use crate::error::ValidationError;

/// How [`crate::overlay::put_overlay`] draws captions and label boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Requested glyph cell height in pixels.
    pub font_px: u32,
    /// Height of each label row and of the bottom caption band.
    pub row_height: u32,
    /// Right edge of the label boxes (inclusive), clipped to the image.
    pub box_width: u32,
    pub text_color: Rgb<u8>,
    pub box_color: Rgb<u8>,
}

impl OverlayStyle {
    pub fn build(self) -> Result<Self, ValidationError> {
        if self.font_px == 0 {
            return Err(ValidationError::InvalidConfig(
                "font_px must be greater than zero".to_string(),
            ));
        }
        if self.row_height == 0 {
            return Err(ValidationError::InvalidConfig(
                "row_height must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_px: 60,
            row_height: 60,
            box_width: 512,
            text_color: Rgb([255, 0, 0]),
            box_color: Rgb([0xff, 0xff, 0x33]),
        }
    }
}

/// Output geometry and color policy of [`crate::placeholder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderConfig {
    pub width: usize,
    pub height: usize,
    /// Red channel increment between consecutive images of one batch.
    pub red_step: u32,
    /// Clamp channel values to 255 instead of writing them out as computed.
    pub clamp_channels: bool,
}

impl PlaceholderConfig {
    pub fn build(self) -> Result<Self, ValidationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ValidationError::InvalidConfig(format!(
                "placeholder size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(self)
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            red_step: 75,
            clamp_channels: false,
        }
    }
}
