//! Single point demo with shaders read from disk

mod demo;

use gl_bootstrap::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BootstrapConfig::default();
    config.shaders.source = ShaderSourceConfig::Files {
        vertex: "resources/shaders/pointVertShader.glsl".into(),
        fragment: "resources/shaders/pointFragShader.glsl".into(),
    };
    config.demo.variant = DemoVariant::Point;

    demo::run(config)
}
