//! Shader build demo
//!
//! Same as the extensions demo, but compiles and links a vertex/fragment
//! program before entering the render loop. The program is never bound, so
//! the window still only shows the clear color.

use gles_engine::prelude::*;

const EMBEDDED_CONFIG: &str = include_str!("../demo.toml");

fn main() {
    logging::init();
    log::info!("Starting shader demo");

    let config = match DemoConfig::from_embedded(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", BootstrapError::from(e));
            std::process::exit(-1);
        }
    };

    match run_demo(&config, DemoVariant::Shader) {
        Ok(()) => log::info!("Shader demo closed"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(-1);
        }
    }
}
