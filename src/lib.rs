//! Inspect an image as the matrix it really is: decode a file to a
//! single-channel u8 raster, print the raw sample grid and its metadata,
//! and show it in a window until Escape is pressed.

pub mod display;
pub mod error;
pub mod raster;
pub mod utils;

pub use display::{wait_for_exit, DisplaySession, KeySource, EXIT_KEY_CODE};
pub use error::InspectError;
pub use raster::{ImageInfo, RasterImage};

#[cfg(test)]
mod test {

    use image::{GrayImage, Luma};
    use tempfile::tempdir;

    use super::RasterImage;

    #[test]
    fn black_square_end_to_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("black.png");
        GrayImage::from_pixel(10, 10, Luma([0])).save(&path).unwrap();

        let img = RasterImage::open_grayscale(&path).unwrap();
        let info = img.describe();
        assert_eq!(info.shape, (10, 10));
        assert_eq!(info.sample_type, "u8");

        let matrix = img.to_string();
        assert_eq!(matrix.lines().count(), 10);
        for line in matrix.lines() {
            assert_eq!(line.matches('0').count(), 10);
        }
    }
}
