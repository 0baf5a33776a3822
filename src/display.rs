use log::debug;
use sdl2::event::{Event, WindowEvent};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use std::thread;
use std::time::Duration;

use crate::error::InspectError;
use crate::raster::RasterImage;

/// Key code that ends the wait loop (Escape).
pub const EXIT_KEY_CODE: i32 = 27;

/// Source of pending key-press events. `DisplaySession` is the production
/// implementation; the wait loop only sees this trait so it can be driven
/// without a window.
pub trait KeySource {
    /// Next pending key code, draining the underlying event queue as far as
    /// the next key press. `None` when nothing is pending.
    fn poll_key(&mut self) -> Option<i32>;
}

/// Blocks until a key event with [`EXIT_KEY_CODE`] is observed, checking for
/// pending events once per `poll_interval`. Any other key is swallowed; the
/// window close button does not end the wait either, only Escape does.
pub fn wait_for_exit<K: KeySource>(keys: &mut K, poll_interval: Duration) {
    loop {
        thread::sleep(poll_interval);
        while let Some(code) = keys.poll_key() {
            if code == EXIT_KEY_CODE {
                debug!("exit key observed");
                return;
            }
        }
    }
}

/// An open, titled window showing one raster. Owns the window exclusively
/// for its lifetime; `teardown` (or drop) closes it.
pub struct DisplaySession {
    win: Option<OpenWindow>,
}

struct OpenWindow {
    canvas: Canvas<Window>,
    pump: EventPump,
    pixels: Vec<u8>,
    size: (u32, u32),
    _sdl: Sdl,
}

impl DisplaySession {

    /// Renders `image` into a new titled window sized to the raster.
    pub fn open(image: &RasterImage, title: &str) -> Result<Self, InspectError> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        let (height, width) = image.shape();
        debug!("opening {}x{} window \"{}\"", width, height, title);
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()?;
        let canvas = window.into_canvas().software().build()?;
        let pump = sdl.event_pump()?;
        let mut win = OpenWindow {
            canvas,
            pump,
            pixels: image.to_rgb_bytes(),
            size: (width, height),
            _sdl: sdl,
        };
        win.redraw()?;
        Ok(Self { win: Some(win) })
    }

    pub fn is_open(&self) -> bool {
        self.win.is_some()
    }

    /// Blocks until Escape is pressed, servicing the window's event queue
    /// once per `poll_interval`. Returns immediately if the session was
    /// already torn down.
    pub fn wait_for_exit(&mut self, poll_interval: Duration) {
        if self.is_open() {
            wait_for_exit(self, poll_interval);
        }
    }

    /// Closes the window if one is open. Idempotent.
    pub fn teardown(&mut self) {
        if self.win.take().is_some() {
            debug!("display window closed");
        }
    }

    #[cfg(test)]
    fn detached() -> Self {
        Self { win: None }
    }
}

impl KeySource for DisplaySession {
    fn poll_key(&mut self) -> Option<i32> {
        let win = self.win.as_mut()?;
        while let Some(event) = win.pump.poll_event() {
            match event {
                Event::KeyDown {
                    keycode: Some(key), ..
                } => return Some(key as i32),
                Event::Window {
                    win_event: WindowEvent::Exposed,
                    ..
                } => {
                    if let Err(e) = win.redraw() {
                        debug!("redraw failed: {}", e);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

impl OpenWindow {
    fn redraw(&mut self) -> Result<(), InspectError> {
        let (width, height) = self.size;
        let creator = self.canvas.texture_creator();
        let mut texture = creator.create_texture_streaming(PixelFormatEnum::RGB24, width, height)?;
        texture.update(None, &self.pixels, (width * 3) as usize)?;
        self.canvas.clear();
        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
