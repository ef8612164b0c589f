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
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Transform-driven camera with a cached view-projection matrix.
//!
//! A [`camera::Camera`] owns a projection, a [`transform::Transform`] and the
//! last combined view-projection matrix. The matrix is rebuilt only when the
//! transform reports a change, so a camera that sits still costs one branch
//! per frame.
//!
//! # Key entry points
//!
//! - [`camera::Camera3D`] - perspective camera with first-person fly controls
//! - [`input::InputState`] - accumulates mouse/keyboard events between frames
//! - [`options::Options`] - camera and keybinding presets (TOML)
//!
//! # Frame loop
//!
//! ```
//! use vantage::camera::Camera3D;
//! use vantage::input::{InputEvent, InputState};
//! use vantage::options::Options;
//!
//! let options = Options::default();
//! let mut camera = Camera3D::from_options(&options.camera, 16.0 / 9.0)?;
//! let mut input = InputState::with_bindings(options.keybindings.clone());
//!
//! input.handle_event(&InputEvent::Key { key: "KeyW".into(), pressed: true });
//! camera.fly(1.0 / 60.0, &input, &options.camera);
//! input.end_frame();
//!
//! let view_proj = camera.view_projection();
//! assert!(camera.transform().pos().z > 0.0);
//! # let _ = view_proj;
//! # Ok::<(), vantage::CameraError>(())
//! ```

pub mod camera;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod transform;
pub mod util;

pub use error::CameraError;
