//! Integration tests for the showroom using the `TestShowroom` harness.
//!
//! These spin up a headless Bevy App with `ShowroomPlugin` on a manually
//! stepped clock and drive it through the same events the front-end sends.

mod harness;
mod navigation_tests;
