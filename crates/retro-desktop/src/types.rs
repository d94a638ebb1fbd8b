//! Core type definitions for the window manager
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Window IDs are supplied by the caller when a window is opened and are
/// unique within a session. Tiling orders windows lexicographically by ID,
/// so the same set of windows always produces the same layout.
pub type WindowId = String;

/// Handle returned by [`crate::WindowStore::subscribe`]
pub type SubscriptionId = u64;
