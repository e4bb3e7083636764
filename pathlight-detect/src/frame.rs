use anyhow::{ensure, Result};
use std::sync::Arc;

const CHANNELS: usize = 3; // Packed RGB, 8 bits per channel

/// A single decoded camera frame. The buffer is shared so a frame can be
/// handed to a detector worker thread without copying pixels.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Arc<[u8]>,
}

impl Frame {
    /// Wraps a packed RGB buffer, rejecting malformed input outright.
    ///
    /// Args:
    ///     width (u32): Frame width in pixels, must be non-zero.
    ///     height (u32): Frame height in pixels, must be non-zero.
    ///     data (Vec<u8>): Packed RGB bytes, length must be width * height * 3.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        ensure!(width > 0 && height > 0, "frame dimensions must be non-zero");
        ensure!(!data.is_empty(), "frame buffer is empty");
        let expected = width as usize * height as usize * CHANNELS;
        ensure!(
            data.len() == expected,
            "frame buffer length {} does not match {}x{} RGB ({expected})",
            data.len(),
            width,
            height
        );
        Ok(Frame {
            width,
            height,
            data: data.into(),
        })
    }

    /// A black frame, used by the replay entry point and tests where only
    /// the dimensions matter.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let len = width as usize * height as usize * CHANNELS;
        Frame::new(width, height, vec![0; len])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a desaturated copy of the frame, luma replicated across all
    /// three channels. Callers that expose a grayscale toggle apply this
    /// before the frame reaches any detector; the guidance logic itself
    /// never looks at pixel values.
    pub fn to_grayscale(&self) -> Frame {
        let gray: Vec<u8> = self
            .data
            .chunks_exact(CHANNELS)
            .flat_map(|px| {
                let luma = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
                let luma = luma.round().min(255.0) as u8;
                [luma, luma, luma]
            })
            .collect();
        Frame {
            width: self.width,
            height: self.height,
            data: gray.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Frame::new(0, 10, vec![0; 30]).is_err());
        assert!(Frame::new(10, 0, vec![0; 30]).is_err());
    }

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(Frame::new(2, 2, vec![0; 11]).is_err());
        assert!(Frame::new(2, 2, vec![]).is_err());
    }

    #[test]
    fn grayscale_replicates_luma() -> Result<()> {
        let frame = Frame::new(1, 1, vec![255, 0, 0])?;
        let gray = frame.to_grayscale();
        // 0.299 * 255 ~ 76, same value in every channel
        assert_eq!(gray.data(), &[76, 76, 76]);
        Ok(())
    }
}
