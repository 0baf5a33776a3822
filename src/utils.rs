#[cfg(feature = "gtk-display")]
use gtk::prelude::*;
#[cfg(feature = "gtk-display")]
use gtk::Image;
#[cfg(feature = "gtk-display")]
use gdk_pixbuf::{ Pixbuf, Colorspace };
#[cfg(feature = "gtk-display")]
use gio::prelude::*;

use std::env;
use std::path::{Path, PathBuf};

#[cfg(feature = "gtk-display")]
use crate::raster::RasterImage;

/// Turns a CLI image argument into a path to open.
///
/// A bare file name resolves against the base data directory (the explicit
/// `data_dir` argument, else the `DATA_PATH` environment variable, else the
/// current directory) joined with `images/`, mirroring the layout the sample
/// data ships in. Anything that already names a location - an absolute path,
/// a multi-component relative path, or an existing file - is used as given.
pub fn resolve_image_path(data_dir: Option<&str>, name: &str) -> PathBuf {
    let given = Path::new(name);
    if given.is_absolute() || given.components().count() > 1 || given.exists() {
        return given.to_path_buf();
    }
    let base = data_dir
        .map(PathBuf::from)
        .or_else(|| env::var_os("DATA_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("images").join(name)
}

/// Alternative display backend: shows the raster in a GTK window. Runs its
/// own event loop and returns when the window is closed.
#[cfg(feature = "gtk-display")]
pub fn display_gray_gtk(image: &RasterImage, title: &str) {

    const BITS_PER_SAMPLE: i32 = 8;
    let uiapp = gtk::Application::new(Some("org.matview.display"),
                                      gio::ApplicationFlags::FLAGS_NONE)
                                 .expect("Application::new failed");
    let (height, width) = image.shape();
    let (height, width) = (height as i32, width as i32);
    // pixbufs have no grayscale colorspace, so expand each sample to r,g,b
    let data = image.to_rgb_bytes();
    let rowstride = width * 3;
    let title = title.to_string();
    uiapp.connect_activate(move |app| {
        let win = gtk::ApplicationWindow::new(app);

        win.set_default_size(width, height);
        win.set_title(&title);

        let pix_buf = Pixbuf::new_from_mut_slice(data.clone(), Colorspace::Rgb, false,
            BITS_PER_SAMPLE, width, height, rowstride);
        let img = Image::new_from_pixbuf(Some(&pix_buf));
        win.add(&img);
        win.show_all();
    });
    uiapp.run(&env::args().collect::<Vec<_>>());

}

#[cfg(test)]
mod test {

    use super::resolve_image_path;
    use std::path::Path;

    #[test]
    fn bare_name_joins_data_dir_and_images() {
        let path = resolve_image_path(Some("/data"), "number_zero.jpg");
        assert_eq!(path, Path::new("/data/images/number_zero.jpg"));
    }

    #[test]
    fn explicit_path_is_used_as_given() {
        let path = resolve_image_path(Some("/data"), "shots/plate.jpg");
        assert_eq!(path, Path::new("shots/plate.jpg"));

        let path = resolve_image_path(None, "/tmp/x.png");
        assert_eq!(path, Path::new("/tmp/x.png"));
    }
}
