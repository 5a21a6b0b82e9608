//! SDL2 window that displays the CPU color buffer.
//!
//! SDL is used only to put pixels on screen; all drawing happens in
//! [`crate::render::Renderer`]. The window reports two things back to the
//! loop: that the host wants to close it, or that it was resized.

use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{RenderError, RenderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> RenderResult<Self> {
        let sdl_context = sdl2::init().map_err(RenderError::window)?;
        let video_subsystem = sdl_context.video().map_err(RenderError::window)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| RenderError::window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| RenderError::window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(RenderError::window)?;

        let texture = Self::create_texture(&texture_creator, width, height)?;

        tracing::debug!(width, height, "window opened");

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> RenderResult<sdl2::render::Texture<'static>> {
        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // `texture` is declared before `texture_creator`, so it is dropped
        // first.
        let texture_creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| RenderError::window(e.to_string()))
    }

    /// Drain pending events. Quit wins over a resize in the same batch.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32),
                _ => {}
            }
        }
        result
    }

    /// Upload an ARGB8888 buffer of the current window size and show it.
    pub fn present(&mut self, buffer: &[u8]) -> RenderResult<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| RenderError::window(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(RenderError::window)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        tracing::debug!(width, height, "window resized");
        Ok(())
    }
}
