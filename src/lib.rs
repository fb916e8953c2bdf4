// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-fly camera controller for real-time 3D scenes.
//!
//! Turns keyboard, mouse-motion, and scroll input into a continuously
//! updated viewpoint and derives the view and projection matrices a
//! renderer needs each frame. The crate knows nothing about what is drawn.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position, yaw/pitch, derived basis, field of view
//! - [`input::InputProcessor`] - collects window events and applies them to
//!   a camera once per frame
//! - [`options::Options`] - TOML configuration (placement, tuning, key
//!   bindings)
//! - [`util::frame_clock::FrameClock`] - per-frame elapsed time
//!
//! # Frame loop
//!
//! The loop owns one [`camera::Camera`] by value. Window events are handed
//! to the input processor as they arrive; once per frame the processor
//! applies the accumulated movement, look, and zoom to the camera, and only
//! then is the view matrix queried:
//!
//! ```
//! use flycam::{Camera, InputEvent, InputProcessor, Projection};
//!
//! let mut camera = Camera::at(glam::Vec3::new(0.0, 0.0, 3.0));
//! let mut input = InputProcessor::new();
//! let projection = Projection::new(800, 800);
//!
//! input.handle_event(&InputEvent::Key {
//!     key: "KeyW".into(),
//!     pressed: true,
//! });
//! input.apply_frame(&mut camera, 1.0);
//!
//! let view_proj = camera.view_projection(&projection);
//! assert!((camera.position().z + 7.0).abs() < 1e-5);
//! # let _ = view_proj;
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{
    Camera, CameraCommand, CameraMovement, CameraUniform, Projection,
};
pub use error::FlycamError;
pub use input::{InputEvent, InputProcessor, KeyBindings};
pub use options::{CameraOptions, Options};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
