//! Main application entry point.
//!
//! Usage: `shapetoy [scene.json]`, where the optional file holds a JSON
//! array of shape records to start from.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Shape Toy");

    let config = match std::env::args().nth(1) {
        Some(path) => shapetoy_app::AppConfig::default().with_scene(path),
        None => shapetoy_app::AppConfig::default(),
    };
    pollster::block_on(shapetoy_app::App::run_with_config(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
