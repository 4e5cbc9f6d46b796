//! NEO Orrery - near-Earth objects around a toy solar system
//!
//! A library crate providing the scene, placement, animation and picking
//! components for the orrery application and its tests.

pub mod camera;
pub mod config;
pub mod input;
pub mod lifecycle;
pub mod neo;
pub mod orbit;
pub mod picking;
pub mod placement;
pub mod render;
pub mod scene;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
