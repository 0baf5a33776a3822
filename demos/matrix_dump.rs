use std::env::args;
use std::error::Error;
use std::process;

use matview::RasterImage;

/// Headless variant: dump the sample matrix and metadata for an image path
/// without opening a window.
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = args();
    args.next();
    let path = args.next();
    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("didn't get an image from args");
            process::exit(1);
        }
    };

    let img = RasterImage::open_grayscale(&path)?;
    println!("{}", img);
    println!("{}", img.describe());
    Ok(())
}
