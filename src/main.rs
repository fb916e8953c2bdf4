//! `flycam` viewer: opens a window and flies a camera from live input.
//!
//! Usage: `flycam [options.toml]`. Set `RUST_LOG=flycam=debug` to see the
//! camera state.

use std::path::Path;

use flycam::{Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
