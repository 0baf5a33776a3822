use image::GrayImage;
use log::debug;

use std::any::type_name;
use std::fmt;
use std::path::Path;

use crate::error::InspectError;

/// A decoded grayscale raster: a (height, width) grid of u8 intensity
/// samples with no channel axis.
#[derive(Debug)]
pub struct RasterImage {
    pixels: GrayImage,
}

/// Metadata reported by [`RasterImage::describe`].
pub struct ImageInfo {
    pub sample_type: &'static str,
    pub object_type: &'static str,
    pub shape: (u32, u32),
}

impl RasterImage {

    /// Read the file at `path`, forcing single-channel decoding. Color
    /// inputs are collapsed to one intensity value per pixel.
    ///
    /// A missing path or an undecodable file is an error naming the path,
    /// never a silently empty image.
    pub fn open_grayscale(path: impl AsRef<Path>) -> Result<Self, InspectError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| InspectError::decode(path, e))?;
        let pixels = decoded.to_luma();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(InspectError::empty(path));
        }
        debug!(
            "decoded {} as {}x{} grayscale",
            path.display(),
            pixels.height(),
            pixels.width()
        );
        Ok(Self { pixels })
    }

    pub fn from_pixels(pixels: GrayImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Shape as (height, width), row-major like the printed matrix.
    pub fn shape(&self) -> (u32, u32) {
        (self.pixels.height(), self.pixels.width())
    }

    pub fn describe(&self) -> ImageInfo {
        ImageInfo {
            sample_type: "u8",
            object_type: type_name::<Self>(),
            shape: self.shape(),
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Each intensity sample replicated into an R,G,B triple, the layout
    /// the display backends want.
    pub(crate) fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.as_raw().len() * 3);
        for v in self.as_raw() {
            bytes.extend_from_slice(&[*v, *v, *v]);
        }
        bytes
    }
}

impl fmt::Display for RasterImage {

    /// Prints the raw sample grid, one bracketed row per line, values
    /// right-aligned to the widest sample in the image.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.as_raw().iter().copied().max().unwrap_or(0);
        let cell = if max >= 100 {
            3
        } else if max >= 10 {
            2
        } else {
            1
        };
        let (height, width) = self.shape();
        for y in 0..height {
            f.write_str(if y == 0 { "[[" } else { " [" })?;
            for x in 0..width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>cell$}", self.pixels.get_pixel(x, y).0[0], cell = cell)?;
            }
            f.write_str(if y + 1 == height { "]]" } else { "]\n" })?;
        }
        Ok(())
    }
}

impl fmt::Display for ImageInfo {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data type = {}", self.sample_type)?;
        writeln!(f, "Object type = {}", self.object_type)?;
        write!(f, "Image Dimensions = ({}, {})", self.shape.0, self.shape.1)
    }
}

#[cfg(test)]
mod test {

    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::tempdir;

    use super::RasterImage;

    fn gray(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn shape_has_no_channel_axis() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("black.png");
        gray(10, 10, 0).save(&path).unwrap();

        let img = RasterImage::open_grayscale(&path).unwrap();
        assert_eq!(img.shape(), (10, 10));
    }

    #[test]
    fn color_input_collapses_to_one_channel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("color.png");
        RgbImage::from_pixel(7, 4, Rgb([10, 200, 30])).save(&path).unwrap();

        let img = RasterImage::open_grayscale(&path).unwrap();
        // height first, and no third dimension to report
        assert_eq!(img.shape(), (4, 7));
        assert_eq!(img.as_raw().len(), 4 * 7);
    }

    #[test]
    fn describe_reports_u8_samples() {
        let img = RasterImage::from_pixels(gray(3, 2, 128));
        let info = img.describe();
        assert_eq!(info.sample_type, "u8");
        assert_eq!(info.shape, (2, 3));
        assert!(info.object_type.contains("RasterImage"));
    }

    #[test]
    fn info_prints_the_three_metadata_lines() {
        let info = RasterImage::from_pixels(gray(10, 10, 0)).describe();
        let text = info.to_string();
        assert!(text.contains("Data type = u8"));
        assert!(text.contains("Object type = "));
        assert!(text.contains("Image Dimensions = (10, 10)"));
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = RasterImage::open_grayscale("/no/such/place/img.jpg").unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("/no/such/place/img.jpg"));
    }

    #[test]
    fn matrix_print_aligns_to_widest_sample() {
        let mut pixels = gray(2, 2, 0);
        pixels.put_pixel(1, 0, Luma([9]));
        pixels.put_pixel(0, 1, Luma([10]));
        pixels.put_pixel(1, 1, Luma([255]));
        let img = RasterImage::from_pixels(pixels);
        assert_eq!(img.to_string(), "[[  0   9]\n [ 10 255]]");
    }

    #[test]
    fn all_black_grid_prints_as_zeros() {
        let img = RasterImage::from_pixels(gray(10, 10, 0));
        let text = img.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("[["));
        assert!(lines[9].ends_with("]]"));
        for line in &lines {
            assert_eq!(line.matches('0').count(), 10);
        }
    }
}
