//! Square 8-bit pixel canvases.

/// A square image of `C`-channel 8-bit pixels, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<const C: usize> {
    size: u32,
    data: Vec<[u8; C]>,
}

/// Three-channel canvas (the topography map).
pub type RgbCanvas = Canvas<3>;

/// Four-channel canvas (the speckle overlays).
pub type RgbaCanvas = Canvas<4>;

impl<const C: usize> Canvas<C> {
    /// Create a `size x size` canvas with every channel zero.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            data: vec![[0; C]; len],
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; C] {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: [u8; C]) {
        let idx = self.index(x, y);
        self.data[idx] = pixel;
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[[u8; C]] {
        &self.data
    }

    /// Interleaved channel bytes, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }

    /// One channel of every pixel, row-major.
    pub fn channel(&self, c: usize) -> Vec<u8> {
        self.data.iter().map(|p| p[c]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let canvas = RgbaCanvas::new(3);
        assert_eq!(canvas.size(), 3);
        assert_eq!(canvas.pixels().len(), 9);
        assert!(canvas.pixels().iter().all(|p| *p == [0, 0, 0, 0]));
    }

    #[test]
    fn test_set_get_row_major() {
        let mut canvas = RgbCanvas::new(2);
        canvas.set(1, 0, [1, 2, 3]);
        canvas.set(0, 1, [4, 5, 6]);
        assert_eq!(canvas.get(1, 0), [1, 2, 3]);
        assert_eq!(canvas.to_bytes(), vec![0, 0, 0, 1, 2, 3, 4, 5, 6, 0, 0, 0]);
        assert_eq!(canvas.channel(2), vec![0, 3, 6, 0]);
    }
}
