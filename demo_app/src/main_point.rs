//! Single point demo with inline shaders

mod demo;

use gl_bootstrap::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BootstrapConfig::default();
    config.shaders.source = ShaderSourceConfig::Inline;
    config.demo.variant = DemoVariant::Point;

    demo::run(config)
}
