use std::path::Path;

use bevy::audio::Volume;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use showroom::catalog::SectionCatalog;
use showroom::settings::ShowroomSettings;
use showroom::sound::PlaySfxEvent;

/// Workspace-level asset directory holding the JSON config and sound clips.
const ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");
const SETTINGS_FILE: &str = "showroom.json";
const CATALOG_FILE: &str = "catalog.json";

/// Config problems found before logging is up, reported on startup.
#[derive(Resource, Default)]
struct ConfigWarnings(Vec<String>);

fn main() {
    let mut warnings = ConfigWarnings::default();
    let assets = Path::new(ASSET_DIR);
    let settings = load_settings(&assets.join(SETTINGS_FILE), &mut warnings);
    let catalog = load_catalog(&assets.join(CATALOG_FILE), &mut warnings);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Carlot".to_string(),
                        resolution: (1280.0, settings.layout.viewport_height).into(),
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: ASSET_DIR.to_string(),
                    ..default()
                }),
        )
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .insert_resource(settings)
        .insert_resource(catalog)
        .insert_resource(warnings)
        .add_plugins((showroom::ShowroomPlugin, ui::UiPlugin))
        .add_systems(Startup, (spawn_camera, report_config_warnings))
        .add_systems(Update, play_sounds.after(showroom::ShowroomSet::Output))
        .run();
}

fn load_settings(path: &Path, warnings: &mut ConfigWarnings) -> ShowroomSettings {
    match ShowroomSettings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            warnings
                .0
                .push(format!("Using default settings, could not read {}: {e}", path.display()));
            ShowroomSettings::default()
        }
    }
}

fn load_catalog(path: &Path, warnings: &mut ConfigWarnings) -> SectionCatalog {
    match SectionCatalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warnings
                .0
                .push(format!("Using built-in catalog, could not read {}: {e}", path.display()));
            SectionCatalog::default()
        }
    }
}

fn report_config_warnings(mut warnings: ResMut<ConfigWarnings>) {
    for message in warnings.0.drain(..) {
        warn!("{message}");
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn play_sounds(
    mut commands: Commands,
    mut events: EventReader<PlaySfxEvent>,
    asset_server: Res<AssetServer>,
) {
    for PlaySfxEvent(sfx) in events.read() {
        commands.spawn((
            AudioPlayer::new(asset_server.load(sfx.path.clone())),
            PlaybackSettings::DESPAWN.with_volume(Volume::new(sfx.volume)),
        ));
    }
}
