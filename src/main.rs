use clap::{Arg, App};

use std::error::Error;
use std::process;
use std::time::Duration;

use matview::{utils, DisplaySession, RasterImage};


fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let app = App::new("matview")
                    .version("0.1.0")
                    .about("Print an image as its raw grayscale sample matrix and show it in a window")
                    .arg(Arg::with_name("INPUT")
                        .help("image file to inspect; a bare name resolves under <data-dir>/images/")
                        .index(1))
                    .arg(Arg::with_name("data-dir")
                        .long("data-dir")
                        .takes_value(true)
                        .help("base data directory, overrides the DATA_PATH environment variable"))
                    .arg(Arg::with_name("title")
                        .long("title")
                        .takes_value(true)
                        .default_value("Image as a Matrix")
                        .help("window title"))
                    .arg(Arg::with_name("poll-interval")
                        .long("poll-interval")
                        .takes_value(true)
                        .default_value("20")
                        .help("key poll interval in milliseconds"))
                    .arg(Arg::with_name("no-window")
                        .long("no-window")
                        .help("print the matrix and metadata only, skip the display window"));
    #[cfg(feature = "gtk-display")]
    let app = app.arg(Arg::with_name("gtk")
                        .long("gtk")
                        .help("use the gtk display backend instead of sdl"));
    let matches = app.get_matches();

    let name = matches.value_of("INPUT").unwrap_or("number_zero.jpg");
    let path = utils::resolve_image_path(matches.value_of("data-dir"), name);
    let poll_ms: u64 = matches.value_of("poll-interval").unwrap_or("20").parse()?;
    let title = matches.value_of("title").unwrap_or("Image as a Matrix");

    let img = RasterImage::open_grayscale(&path)?;
    println!("{}", img);
    println!("{}", img.describe());

    if matches.is_present("no-window") {
        return Ok(());
    }

    #[cfg(feature = "gtk-display")]
    {
        if matches.is_present("gtk") {
            utils::display_gray_gtk(&img, title);
            return Ok(());
        }
    }

    let mut session = DisplaySession::open(&img, title)?;
    session.wait_for_exit(Duration::from_millis(poll_ms));
    session.teardown();

    Ok(())
}
