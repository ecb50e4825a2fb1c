//! Configuration system
//!
//! The demos ship their configuration as a TOML document compiled into the
//! binary, so the values stay fixed at runtime. Missing keys fall back to
//! [`DemoConfig::default`].

pub use serde::Deserialize;

/// Configuration trait
pub trait Config: for<'de> Deserialize<'de> + Default {
    /// Parse configuration from a TOML document
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.message().to_string()))
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values that parse but cannot be used
    #[error("{0}")]
    Invalid(String),
}

/// Window and context settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in screen coordinates
    pub width: u32,
    /// Initial height in screen coordinates
    pub height: u32,
    /// Requested GL ES context version (major, minor)
    pub context_version: (u32, u32),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Window".to_string(),
            width: 800,
            height: 600,
            context_version: (3, 2),
        }
    }
}

/// Settings shared by both demo binaries
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Background clear color [R, G, B, A] (0.0-1.0 range)
    pub clear_color: [f32; 4],
    /// Extension name checked with the windowing library's predicate
    pub probe_extension: String,
    /// Window and context settings
    pub window: WindowConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3, 1.0],
            probe_extension: "GL_EXT_clip_cull_distance".to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Config for DemoConfig {}

impl DemoConfig {
    /// Parse and validate an embedded configuration document
    pub fn from_embedded(contents: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the bootstrap cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if let Some(component) = self
            .clear_color
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return Err(ConfigError::Invalid(format!(
                "clear color component {component} is outside [0, 1]"
            )));
        }
        if self.probe_extension.trim().is_empty() {
            return Err(ConfigError::Invalid("probe extension name is empty".to_string()));
        }
        Ok(())
    }
}
