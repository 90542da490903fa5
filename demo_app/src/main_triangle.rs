//! Animated triangle demo
//!
//! A triangle bouncing left and right, driven by the `offset` uniform.
//! Shaders are read from `resources/shaders/`, so run from `demo_app/`.

mod demo;

use gl_bootstrap::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::run(BootstrapConfig::default())
}
