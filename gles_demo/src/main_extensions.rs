//! Extension listing demo
//!
//! Opens an OpenGL ES 3.2 window, prints the driver's extensions, probes one
//! extension name and clears the screen until the window is closed or Escape
//! is pressed.

use gles_engine::prelude::*;

const EMBEDDED_CONFIG: &str = include_str!("../demo.toml");

fn main() {
    logging::init();
    log::info!("Starting extensions demo");

    let result = DemoConfig::from_embedded(EMBEDDED_CONFIG)
        .map_err(BootstrapError::from)
        .and_then(|config| run_demo(&config, DemoVariant::Extensions));

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_the_fixed_default() {
        let config = DemoConfig::from_embedded(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, DemoConfig::default());
    }
}
