/// Owned grayscale pixel grid
///
/// A `Raster` is produced once per invocation by the normalizer and is
/// immutable afterward; the crop transform returns a new owned raster
/// rather than aliasing the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap raw grayscale bytes (row-major, one byte per pixel).
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height, "raster size mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Pixel value at (x, y); out-of-bounds reads return white.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return u8::MAX;
        }
        self.data[y * self.width + x]
    }

    /// New raster holding rows `[start, end)`, clamped to the image.
    pub fn crop_rows(&self, start: usize, end: usize) -> Raster {
        let start = start.min(self.height);
        let end = end.clamp(start, self.height);
        Raster {
            width: self.width,
            height: end - start,
            data: self.data[start * self.width..end * self.width].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_rows() {
        let data: Vec<u8> = (0..12).collect();
        let raster = Raster::from_raw(data, 4, 3);
        let middle = raster.crop_rows(1, 2);
        assert_eq!(middle.width(), 4);
        assert_eq!(middle.height(), 1);
        assert_eq!(middle.as_slice(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_crop_rows_clamps() {
        let raster = Raster::from_raw(vec![0u8; 8], 4, 2);
        let over = raster.crop_rows(1, 10);
        assert_eq!(over.height(), 1);
        let empty = raster.crop_rows(5, 10);
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn test_out_of_bounds_reads_white() {
        let raster = Raster::from_raw(vec![0u8; 4], 2, 2);
        assert_eq!(raster.get(0, 0), 0);
        assert_eq!(raster.get(5, 5), 255);
    }
}
