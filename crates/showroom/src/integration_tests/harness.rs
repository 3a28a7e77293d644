//! # TestShowroom: headless harness around `ShowroomPlugin`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::debug::{DebugInfo, DebugLog};
use crate::end_section::{EndSectionLayout, PageProgress};
use crate::intro::Intro;
use crate::loading::LoadingSequence;
use crate::plugin::{Showroom, ShowroomPlugin, ShowroomSet};
use crate::settings::ShowroomSettings;
use crate::sound::{PlaySfx, PlaySfxEvent};

/// Virtual time per frame.
pub const FRAME: Duration = Duration::from_millis(20);

/// Every `PlaySfxEvent` seen so far, in order.
#[derive(Resource, Default)]
pub struct SfxLog(pub Vec<PlaySfx>);

fn collect_sfx(mut events: EventReader<PlaySfxEvent>, mut log: ResMut<SfxLog>) {
    log.0.extend(events.read().map(|event| event.0.clone()));
}

pub struct TestShowroom {
    app: App,
}

impl TestShowroom {
    pub fn new() -> Self {
        Self::with_settings(ShowroomSettings::default())
    }

    pub fn with_settings(settings: ShowroomSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(settings);
        app.add_plugins(ShowroomPlugin);
        app.init_resource::<SfxLog>();
        app.add_systems(Update, collect_sfx.after(ShowroomSet::Output));

        // First update runs Startup systems.
        app.update();
        Self { app }
    }

    /// A showroom whose loading overlay is already gone.
    pub fn loaded() -> Self {
        let mut showroom = Self::new();
        showroom.run_until(|s| s.loading().is_hidden(), 8.0);
        showroom
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn frame(&mut self) {
        self.app.update();
    }

    pub fn run_for(&mut self, seconds: f32) {
        let frames = (seconds / FRAME.as_secs_f32()).ceil() as u32;
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Step frames until `done` holds. Panics after `limit` seconds.
    pub fn run_until(&mut self, done: impl Fn(&Self) -> bool, limit: f32) {
        let max_frames = (limit / FRAME.as_secs_f32()).ceil() as u32;
        for _ in 0..max_frames {
            if done(self) {
                return;
            }
            self.app.update();
        }
        assert!(done(self), "condition not reached within {limit}s");
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn showroom(&self) -> &Showroom {
        self.app.world().resource::<Showroom>()
    }

    pub fn current_section(&self) -> usize {
        self.showroom().navigator().current_section()
    }

    pub fn loading(&self) -> &LoadingSequence {
        self.app.world().resource::<LoadingSequence>()
    }

    pub fn intro(&self) -> &Intro {
        self.app.world().resource::<Intro>()
    }

    pub fn debug_info(&self) -> &DebugInfo {
        self.app.world().resource::<DebugInfo>()
    }

    pub fn debug_log(&self) -> &DebugLog {
        self.app.world().resource::<DebugLog>()
    }

    pub fn end_layout(&self) -> EndSectionLayout {
        *self.app.world().resource::<EndSectionLayout>()
    }

    pub fn page_progress(&self) -> f32 {
        self.app.world().resource::<PageProgress>().0
    }

    pub fn sfx_names(&self) -> Vec<String> {
        self.app
            .world()
            .resource::<SfxLog>()
            .0
            .iter()
            .map(|sfx| sfx.name.clone())
            .collect()
    }
}
