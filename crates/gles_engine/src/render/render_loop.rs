//! Clear-screen render loop
//!
//! Two states: running and closing. The loop leaves running once the window's
//! close flag is set, either by the window system or because Escape was
//! sampled as pressed. There is no frame pacing.

use crate::render::gl::GlDevice;
use crate::render::window::{WindowBackend, WindowEvent};

/// Owns the window and the GL device for the lifetime of the loop
///
/// Field order is drop order: the GL device goes before the window that
/// owns its context.
pub struct RenderLoop<W: WindowBackend, G: GlDevice> {
    gl: G,
    window: W,
    clear_color: [f32; 4],
    frames: u64,
}

impl<W: WindowBackend, G: GlDevice> RenderLoop<W, G> {
    /// Create a loop clearing to `clear_color` with a viewport of `width` x `height`
    pub fn new(window: W, gl: G, clear_color: [f32; 4], width: i32, height: i32) -> Self {
        let render_loop = Self {
            gl,
            window,
            clear_color,
            frames: 0,
        };
        render_loop.resize(width, height);
        render_loop
    }

    /// Span the viewport over a `width` x `height` framebuffer
    pub fn resize(&self, width: i32, height: i32) {
        log::debug!("Viewport set to {width}x{height}");
        self.gl.viewport(0, 0, width, height);
    }

    /// Render until the window is asked to close
    ///
    /// Returns the number of frames presented.
    pub fn run(&mut self) -> u64 {
        log::info!("Entering render loop");

        while !self.window.should_close() {
            if self.window.escape_pressed() {
                self.window.set_should_close(true);
            }

            self.gl.clear_color(self.clear_color);
            self.gl.clear_color_buffer();

            self.window.swap_buffers();
            for event in self.window.poll_events() {
                match event {
                    WindowEvent::FramebufferResized { width, height } => self.resize(width, height),
                }
            }

            self.frames += 1;
        }

        log::info!("Render loop finished after {} frames", self.frames);
        self.frames
    }

    /// Frames presented so far
    #[cfg(test)]
    pub(crate) const fn frames(&self) -> u64 {
        self.frames
    }

    /// GL device driven by the loop
    pub const fn gl(&self) -> &G {
        &self.gl
    }

    /// Window driven by the loop
    #[cfg(test)]
    pub(crate) const fn window(&self) -> &W {
        &self.window
    }
}
