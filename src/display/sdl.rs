use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseUtil;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::{FullscreenType, WindowContext};
use sdl2::EventPump;

use super::{Frame, ScreenConfig, Surface, SurfaceError};
use crate::raster::Canvas;

/// Input the screen does not consume itself
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(Keycode),
    KeyUp(Keycode),
}

/// An SDL window with an accelerated renderer, before its texture exists
///
/// Split from [`SdlScreen`] because the streaming texture borrows the
/// texture creator, which has to outlive the screen.
pub struct SdlWindow {
    renderer: WindowCanvas,
    event_pump: EventPump,
    mouse: MouseUtil,
}

impl SdlWindow {
    /// Initialise SDL and open the window described by `config`
    pub fn open(
        config: &ScreenConfig,
    ) -> Result<(Self, TextureCreator<WindowContext>), SurfaceError> {
        config.validate()?;
        let sdl_context = sdl2::init().map_err(SurfaceError::Init)?;
        let video_subsystem = sdl_context.video().map_err(SurfaceError::Init)?;

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(|e| SurfaceError::Window(e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let renderer = canvas_builder
            .build()
            .map_err(|e| SurfaceError::Renderer(e.to_string()))?;

        let texture_creator = renderer.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(SurfaceError::Init)?;
        let mouse = sdl_context.mouse();

        log::info!(
            "opened {}x{} window \"{}\" (vsync {})",
            config.width,
            config.height,
            config.title,
            if config.vsync { "on" } else { "off" }
        );

        Ok((
            Self {
                renderer,
                event_pump,
                mouse,
            },
            texture_creator,
        ))
    }
}

/// SDL2 window presenting a software-rendered canvas
///
/// The canvas is uploaded to an `ARGB8888` streaming texture, whose bytes
/// are B, G, R, A on little-endian machines, the same order the pixel buffer
/// stores.
pub struct SdlScreen<'a> {
    window: SdlWindow,
    texture: Texture<'a>,
    canvas: Canvas,
    fullscreen: bool,
    running: bool,
    frames_released: u64,
    /// Drawable size over logical size, updated when fullscreen changes
    pub x_scale: f64,
    pub y_scale: f64,
}

impl<'a> SdlScreen<'a> {
    pub fn new(
        window: SdlWindow,
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &ScreenConfig,
    ) -> Result<Self, SurfaceError> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, config.width, config.height)
            .map_err(|e| SurfaceError::Texture(e.to_string()))?;

        let mut screen = Self {
            window,
            texture,
            canvas: Canvas::new(config.width, config.height),
            fullscreen: config.fullscreen,
            running: true,
            frames_released: 0,
            x_scale: 1.0,
            y_scale: 1.0,
        };
        screen.set_fullscreen(config.fullscreen)?;
        if config.hide_cursor {
            screen.window.mouse.show_cursor(false);
        }
        Ok(screen)
    }

    /// Window centre in buffer coordinates
    pub fn center(&self) -> (u32, u32) {
        (self.canvas.width() / 2, self.canvas.height() / 2)
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Switch between windowed and desktop fullscreen and refresh the scale factors
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), SurfaceError> {
        self.fullscreen = fullscreen;
        let mode = if fullscreen {
            FullscreenType::Desktop
        } else {
            FullscreenType::Off
        };
        self.window
            .renderer
            .window_mut()
            .set_fullscreen(mode)
            .map_err(SurfaceError::Window)?;

        let (screen_w, screen_h) = self.window.renderer.window().drawable_size();
        self.x_scale = screen_w as f64 / self.canvas.width() as f64;
        self.y_scale = screen_h as f64 / self.canvas.height() as f64;
        log::debug!(
            "fullscreen {}: scale {:.2}x{:.2}",
            fullscreen,
            self.x_scale,
            self.y_scale
        );
        Ok(())
    }

    /// Drain pending SDL events
    ///
    /// Closing the window or pressing Q stops the screen, F toggles
    /// fullscreen. Every other key event is returned to the caller.
    pub fn handle_events(&mut self) -> Result<Vec<InputEvent>, SurfaceError> {
        let mut events = Vec::new();
        let mut toggle_fullscreen = false;

        for event in self.window.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.running = false,
                Event::KeyDown {
                    keycode: Some(Keycode::Q),
                    ..
                } => self.running = false,
                Event::KeyDown {
                    keycode: Some(Keycode::F),
                    ..
                } => toggle_fullscreen = !toggle_fullscreen,
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyUp(k)),
                _ => {},
            }
        }

        if toggle_fullscreen {
            self.set_fullscreen(!self.fullscreen)?;
        }
        Ok(events)
    }

    /// Upload the buffer and copy it to the renderer, optionally presenting
    pub fn draw(&mut self, present: bool) -> Result<(), SurfaceError> {
        let buffer = self.canvas.buffer();
        self.texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| SurfaceError::Texture(e.to_string()))?;
        self.window
            .renderer
            .copy(&self.texture, None, None)
            .map_err(SurfaceError::Present)?;
        if present {
            self.window.renderer.present();
        }
        Ok(())
    }

    /// Log the renderer name and the texture formats it supports
    pub fn show_render_info(&self) {
        let info = self.window.renderer.info();
        log::info!("Renderer name: {}", info.name);
        log::info!("Texture formats: {:?}", info.texture_formats);
    }
}

impl Surface for SdlScreen<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn acquire(&mut self) -> Frame<'_> {
        Frame::new(&mut self.canvas, &mut self.frames_released)
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.draw(true)
    }
}
