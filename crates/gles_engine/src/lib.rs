//! # GLES Engine
//!
//! Minimal OpenGL ES bootstrap used by the demo binaries.
//!
//! ## Features
//!
//! - **Context Bootstrap**: GLFW window with an OpenGL ES 3.2 context
//! - **Function Loading**: GL entry points resolved through `glow`
//! - **Capability Query**: driver extension listing and a single extension probe
//! - **Shader Build**: compile and link a vertex/fragment pair with reported diagnostics
//! - **Render Loop**: clear-screen loop that stops on window close or Escape
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gles_engine::prelude::*;
//!
//! fn main() -> Result<(), BootstrapError> {
//!     let config = DemoConfig::default();
//!     run_demo(&config, DemoVariant::Extensions)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod render;

mod demo;
mod error;

pub use demo::{run_demo, DemoVariant};
pub use error::{BootstrapError, BootstrapResult};

/// Common imports for demo binaries
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, DemoConfig},
        demo::{run_demo, DemoVariant},
        error::{BootstrapError, BootstrapResult},
        foundation::logging,
        render::{
            gl::{GlDevice, GlowDevice},
            render_loop::RenderLoop,
            shader::{BuildReport, ShaderError, ShaderStage},
            window::{GlfwWindow, WindowBackend},
        },
    };
}
