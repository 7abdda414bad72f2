//! RGB pixel buffers and pixel-format normalization.

/// A captured frame: height x width x 3 bytes, row-major, top-to-bottom,
/// channel order (red, green, blue).
///
/// The capture primitives produce this canonical layout regardless of what
/// the OS hands back (GDI yields BGRA); consumers encode it externally,
/// typically as PNG via [`PixelBuffer::into_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A 0x0 buffer, the result of capturing an empty rect.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Builds a buffer from BGRA samples, reordering to RGB and dropping
    /// alpha. `bgra` must hold exactly `width * height * 4` bytes.
    pub(crate) fn from_bgra(width: u32, height: u32, bgra: &[u8]) -> Self {
        debug_assert_eq!(bgra.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            data: bgra_to_rgb(bgra),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, `width * height * 3` of them.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Converts into an [`image::RgbImage`] for encoding.
    pub fn into_image(self) -> image::RgbImage {
        // data is width * height * 3 by construction, so from_raw cannot fail.
        image::RgbImage::from_raw(self.width, self.height, self.data).unwrap_or_default()
    }
}

/// Reorders packed BGRA samples to packed RGB, discarding alpha.
pub(crate) fn bgra_to_rgb(bgra: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bgra.len() / 4 * 3);
    for px in bgra.chunks_exact(4) {
        rgb.push(px[2]);
        rgb.push(px[1]);
        rgb.push(px[0]);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgra_to_rgb_reorders_channels() {
        // One blue-only pixel followed by one red-only pixel.
        let bgra = [255, 0, 0, 255, 0, 0, 255, 255];
        let rgb = bgra_to_rgb(&bgra);
        assert_eq!(rgb, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn test_blue_only_input_has_zero_red_green() {
        // 2x2 all-blue frame: red and green must come out zero, blue in the
        // third channel position.
        let bgra: Vec<u8> = std::iter::repeat([200u8, 0, 0, 255])
            .take(4)
            .flatten()
            .collect();
        let buffer = PixelBuffer::from_bgra(2, 2, &bgra);
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        for px in buffer.data().chunks_exact(3) {
            assert_eq!(px, [0, 0, 200]);
        }
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::empty();
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.height(), 0);
        assert!(buffer.data().is_empty());
    }

    #[test]
    fn test_into_image_preserves_dimensions() {
        let bgra = vec![0u8; 3 * 2 * 4];
        let image = PixelBuffer::from_bgra(3, 2, &bgra).into_image();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
    }
}
