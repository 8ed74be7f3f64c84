//! Rendering buffer

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), row `0` first
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and set to 0
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Returns true if the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Number of bytes in a single row
    pub fn stride(&self) -> usize {
        self.width * self.bpp
    }
    /// Return slice of row `i`
    pub fn row(&self, i: usize) -> &[u8] {
        assert!(i < self.height, "request {} >= {} height :: row", i, self.height);
        let n = self.stride();
        &self.data[i * n .. (i+1) * n]
    }
    /// Return mutable slice of row `i`
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        assert!(i < self.height, "request {} >= {} height :: row_mut", i, self.height);
        let n = self.stride();
        &mut self.data[i * n .. (i+1) * n]
    }
    /// Set every pixel to the components in `pixel`
    pub fn fill(&mut self, pixel: &[u8]) {
        assert_eq!(pixel.len(), self.bpp);
        self.data.chunks_exact_mut(self.bpp)
            .for_each(|p| p.copy_from_slice(pixel));
    }
    /// Clear an image, all components are set to 0
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
    /// Swap rows top to bottom
    pub fn flip_vertically(&mut self) {
        let n = self.stride();
        let h = self.height;
        for i in 0 .. h/2 {
            let (top, bottom) = self.data.split_at_mut((h-1-i) * n);
            top[i*n .. (i+1)*n].swap_with_slice(&mut bottom[..n]);
        }
    }
    /// Swap columns left to right
    pub fn flip_horizontally(&mut self) {
        let (w, bpp) = (self.width, self.bpp);
        if w == 0 || bpp == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(w * bpp) {
            for i in 0 .. w/2 {
                let j = w - 1 - i;
                let (left, right) = row.split_at_mut(j * bpp);
                left[i*bpp .. (i+1)*bpp].swap_with_slice(&mut right[..bpp]);
            }
        }
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &mut self.data[i .. i + self.bpp]
    }
}
