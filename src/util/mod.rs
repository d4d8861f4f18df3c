//! Shared utilities for viewer hosts.

/// Frame pacing and delta time for host loops.
pub mod frame_timing;
