//! NEO Orrery
//!
//! A desktop orrery showing this week's near-Earth objects from NASA's
//! NeoWs feed circling a toy solar system.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use neo_orrery::camera::CameraPlugin;
use neo_orrery::config::OrreryConfig;
use neo_orrery::input::InputPlugin;
use neo_orrery::lifecycle::LifecyclePlugin;
use neo_orrery::neo::FeedPlugin;
use neo_orrery::render::{MotionPlugin, RenderPlugin};
use neo_orrery::time::TimePlugin;
use neo_orrery::ui::UiPlugin;

fn main() {
    // Logging is not up yet, so configuration problems go to stderr
    let config = match OrreryConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("neo-orrery: {err}");
            std::process::exit(2);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NEO Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert config before plugins that read it at build time
        .insert_resource(config)
        .add_plugins((
            TimePlugin,
            MotionPlugin,
            LifecyclePlugin,
            FeedPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
