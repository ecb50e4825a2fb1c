//! Window management using GLFW
//!
//! Creates the window together with an OpenGL ES context and keeps the
//! library handle alive for as long as the window exists.

use std::ffi::c_void;

use glfw::{Action, ClientApiHint, Context, Key, WindowHint, WindowMode};

use crate::config::WindowConfig;
use crate::error::{BootstrapError, BootstrapResult};
use crate::render::window::backend::{WindowBackend, WindowEvent};

/// GLFW window wrapper with proper resource management
///
/// Dropping it destroys the window and then releases the library.
pub struct GlfwWindow {
    // Field order is drop order: window before the library handle.
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

fn log_glfw_error(error: glfw::Error, description: String) {
    log::debug!("GLFW error {error:?}: {description}");
}

impl GlfwWindow {
    /// Initialize GLFW, create the window and make its GL ES context current
    pub fn new(config: &WindowConfig) -> BootstrapResult<Self> {
        let mut glfw = glfw::init(log_glfw_error).map_err(|_| BootstrapError::Init)?;

        let (major, minor) = config.context_version;
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        glfw.window_hint(WindowHint::ClientApi(ClientApiHint::OpenGlEs));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, WindowMode::Windowed)
            .ok_or(BootstrapError::WindowCreation)?;

        window.make_current();
        window.set_framebuffer_size_polling(true);

        log::info!(
            "Created {}x{} window \"{}\" with GL ES {}.{} context",
            config.width,
            config.height,
            config.title,
            major,
            minor
        );

        Ok(Self {
            window,
            events,
            glfw,
        })
    }

    /// Resolve a GL entry point through the current context
    ///
    /// Returns a null pointer when the name is unknown to the driver.
    pub fn proc_address(&mut self, name: &str) -> *const c_void {
        self.window.get_proc_address(name) as *const c_void
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn escape_pressed(&self) -> bool {
        self.window.get_key(Key::Escape) == Action::Press
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    Some(WindowEvent::FramebufferResized { width, height })
                }
                _ => None,
            })
            .collect()
    }

    fn extension_supported(&self, name: &str) -> bool {
        self.glfw.extension_supported(name)
    }
}
