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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera and input controllers for 3D scene viewers.
//!
//! The crate sits between a host engine and its camera entity: input
//! adapters translate touch gestures and key presses into orbit targets,
//! and the orbit camera eases toward those targets each frame and writes
//! back a position and orientation.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - pivot-relative orbit with inertia and
//!   framing
//! - [`input::TouchInput`] - one-finger orbit, two-finger pinch zoom and pan
//! - [`input::KeyboardInput`] - reset to the starting view
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Hosts expose their scene, camera and viewport through the traits in
//! [`scene`]. Input handlers only write the camera's *target* state; the
//! *current* state advances solely inside
//! [`OrbitCamera::update`](camera::OrbitCamera::update), once per frame on
//! the host's thread.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use error::ViewerError;
