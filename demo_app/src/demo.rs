//! Shared startup for the demo binaries

use gl_bootstrap::foundation::logging;
use gl_bootstrap::prelude::*;

/// Bring up the bootstrap and run until quit
///
/// The first command-line argument, when present, names a TOML or RON config
/// file that replaces `defaults` entirely.
pub fn run(defaults: BootstrapConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BootstrapConfig::load_from_file(&path).map_err(|e| {
            log::error!("Failed to load config {path}: {e}");
            BootstrapError::from(e)
        })?,
        None => defaults,
    };

    log::info!("Starting {:?} demo", config.demo.variant);

    let mut bootstrap = RenderBootstrap::init(&config.window, &config.context).map_err(|e| {
        log::error!("{e}");
        e
    })?;

    let sources = ShaderSources::resolve(&config.shaders, config.demo.variant)?;
    bootstrap.create_shader_program(&sources, config.shaders.policy)?;
    bootstrap.prepare_pipeline()?;

    let stats = bootstrap.run(&config.demo)?;
    log::info!("Presented {} frames", stats.frames);

    Ok(())
}
