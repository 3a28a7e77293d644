pub mod capabilities;
pub mod catalog;
pub mod config;
pub mod debug;
pub mod easing;
pub mod end_section;
pub mod engine;
pub mod error;
pub mod events;
pub mod intro;
pub mod loading;
pub mod navigator;
pub mod plugin;
pub mod scroll;
pub mod section;
pub mod segmenter;
pub mod settings;
pub mod sound;
pub mod timeline;

#[cfg(test)]
mod integration_tests;

pub use plugin::{Showroom, ShowroomPlugin, ShowroomSet};
