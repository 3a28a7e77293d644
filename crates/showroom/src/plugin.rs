//! Bevy wiring: the [`Showroom`] resource and the per-frame systems.
//!
//! Frame order inside `Update`:
//!
//! 1. `Input`: keyboard toggles and front-end events.
//! 2. `Advance`: scroll provider, loading overlay, transition engine.
//! 3. `Output`: due sounds as [`PlaySfxEvent`]s, debug status line.

use bevy::prelude::*;

use crate::capabilities::Backends;
use crate::catalog::SectionCatalog;
use crate::debug::{debug_log, DebugInfo, DebugLog};
use crate::end_section::{EndSectionLayout, PageProgress};
use crate::engine::{Property, PropertyKey, Target, TransitionEngine};
use crate::events::{NavHovered, NavigateRequest, ScrollInput, UserGesture};
use crate::intro::Intro;
use crate::loading::LoadingSequence;
use crate::navigator::{Collaborators, SectionNavigator};
use crate::scroll::ScrollProvider;
use crate::section::PageLayout;
use crate::settings::ShowroomSettings;
use crate::sound::{PlaySfx, PlaySfxEvent, SoundBank, SoundPlayer, SOUND_HOVER};

// =============================================================================
// Showroom resource
// =============================================================================

/// The page: navigator plus the capability backends it drives.
#[derive(Resource)]
pub struct Showroom {
    layout: PageLayout,
    navigator: SectionNavigator,
    engine: Box<dyn TransitionEngine>,
    scroll: Box<dyn ScrollProvider>,
    sound: SoundBank,
}

impl Showroom {
    pub fn new(settings: &ShowroomSettings, catalog: &SectionCatalog) -> Self {
        let backends = Backends::select(settings.capabilities, &settings.layout);
        let navigator = SectionNavigator::from_headings(
            &settings.layout,
            catalog.headings(),
            backends.segmenter.as_ref(),
        );
        let mut engine = backends.engine;
        navigator.prepare(engine.as_mut());
        Self {
            layout: settings.layout,
            navigator,
            engine,
            scroll: backends.scroll,
            sound: SoundBank::new(settings.sounds.clone()),
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn value(&self, target: Target, property: Property) -> f32 {
        self.engine.value(PropertyKey::new(target, property))
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn engine_mut(&mut self) -> &mut dyn TransitionEngine {
        self.engine.as_mut()
    }

    pub fn sound(&self) -> &SoundBank {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut SoundBank {
        &mut self.sound
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll.scroll_by(delta);
    }

    pub fn navigate_to(&mut self, index: usize) -> bool {
        let mut cx = Collaborators {
            scroll: self.scroll.as_mut(),
            engine: self.engine.as_mut(),
            sound: &mut self.sound,
        };
        self.navigator.navigate_to(index, &mut cx)
    }

    /// Advance the scroll provider, feed pinned-region progress to the
    /// navigator and route scroll completions. Returns the new offset if it
    /// moved.
    pub fn advance_scroll(&mut self, dt: f32) -> Option<f32> {
        let tick = self.scroll.advance(dt);
        let offset = self.scroll.offset();
        if tick.offset_changed {
            let progress = self.layout.pinned_region().progress(offset);
            let mut cx = Collaborators {
                scroll: self.scroll.as_mut(),
                engine: self.engine.as_mut(),
                sound: &mut self.sound,
            };
            self.navigator.on_scroll_progress(progress, &mut cx);
        }
        for completion in tick.completions {
            self.navigator
                .handle_completion(completion, self.engine.as_mut());
        }
        tick.offset_changed.then_some(offset)
    }

    /// Advance the transition engine and route its completions.
    pub fn advance_transitions(&mut self, dt: f32) {
        for completion in self.engine.advance(dt) {
            self.navigator
                .handle_completion(completion, self.engine.as_mut());
        }
    }

    pub fn advance_sounds(&mut self, dt: f32) -> Vec<PlaySfx> {
        self.sound.advance(dt)
    }
}

// =============================================================================
// Plugin
// =============================================================================

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShowroomSet {
    Input,
    Advance,
    Output,
}

/// Registers the showroom resources, events and systems.
///
/// Insert [`ShowroomSettings`] and [`SectionCatalog`] before adding the
/// plugin to override the defaults.
pub struct ShowroomPlugin;

impl Plugin for ShowroomPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShowroomSettings>()
            .init_resource::<SectionCatalog>()
            .init_resource::<DebugLog>()
            .init_resource::<DebugInfo>()
            .init_resource::<PageProgress>()
            .init_resource::<EndSectionLayout>()
            .add_event::<NavigateRequest>()
            .add_event::<UserGesture>()
            .add_event::<NavHovered>()
            .add_event::<ScrollInput>()
            .add_event::<PlaySfxEvent>()
            .configure_sets(
                Update,
                (ShowroomSet::Input, ShowroomSet::Advance, ShowroomSet::Output).chain(),
            )
            .add_systems(Startup, setup_showroom)
            .add_systems(
                Update,
                (toggle_debug_info, handle_input).in_set(ShowroomSet::Input),
            )
            .add_systems(
                Update,
                (advance_scroll, advance_loading, advance_transitions)
                    .chain()
                    .in_set(ShowroomSet::Advance),
            )
            .add_systems(
                Update,
                (emit_sounds, update_debug_info).in_set(ShowroomSet::Output),
            );
    }
}

// =============================================================================
// Systems
// =============================================================================

fn setup_showroom(
    mut commands: Commands,
    settings: Res<ShowroomSettings>,
    catalog: Res<SectionCatalog>,
    mut info: ResMut<DebugInfo>,
    mut log: ResMut<DebugLog>,
    time: Res<Time>,
) {
    let mut showroom = Showroom::new(&settings, &catalog);
    let loading = LoadingSequence::new(settings.loading_seed);
    let intro = Intro::default();
    loading.prepare(showroom.engine_mut());
    intro.prepare(showroom.engine_mut());

    info.visible = settings.show_debug;
    info.status = showroom.navigator().debug_line().to_string();
    debug_log(&mut log, time.elapsed_secs(), "Showroom initialized");

    commands.insert_resource(showroom);
    commands.insert_resource(loading);
    commands.insert_resource(intro);
}

/// `H` shows or hides the debug overlay. No-op without `InputPlugin`.
fn toggle_debug_info(keys: Option<Res<ButtonInput<KeyCode>>>, mut info: ResMut<DebugInfo>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::KeyH) {
        info.toggle();
    }
}

fn handle_input(
    mut showroom: ResMut<Showroom>,
    mut gestures: EventReader<UserGesture>,
    mut hovers: EventReader<NavHovered>,
    mut scrolls: EventReader<ScrollInput>,
    mut requests: EventReader<NavigateRequest>,
) {
    if !gestures.is_empty() {
        gestures.clear();
        showroom.sound_mut().enable();
    }
    for _ in hovers.read() {
        let sound = showroom.sound_mut();
        sound.enable();
        sound.play(SOUND_HOVER, 0);
    }
    for input in scrolls.read() {
        showroom.scroll_by(input.delta);
    }
    for request in requests.read() {
        showroom.navigate_to(request.index);
    }
}

fn advance_scroll(
    time: Res<Time>,
    mut showroom: ResMut<Showroom>,
    mut page_progress: ResMut<PageProgress>,
    mut end_layout: ResMut<EndSectionLayout>,
) {
    let Some(offset) = showroom.advance_scroll(time.delta_secs()) else {
        return;
    };
    let layout = *showroom.layout();
    page_progress.0 = layout.page_region().progress(offset);

    let end_progress = layout.end_region().progress(offset);
    if end_progress != end_layout.progress {
        *end_layout = EndSectionLayout::from_progress(end_progress);
        end_layout.apply(showroom.engine_mut());
    }
}

fn advance_loading(
    time: Res<Time>,
    mut showroom: ResMut<Showroom>,
    mut loading: ResMut<LoadingSequence>,
    mut intro: ResMut<Intro>,
    mut log: ResMut<DebugLog>,
) {
    if loading.is_hidden() {
        return;
    }
    let tick = loading.advance(time.delta_secs(), showroom.engine_mut(), &mut log);
    if tick.start_intro && intro.start(showroom.engine_mut()) {
        debug_log(&mut log, time.elapsed_secs(), "Intro started");
    }
}

fn advance_transitions(time: Res<Time>, mut showroom: ResMut<Showroom>) {
    showroom.advance_transitions(time.delta_secs());
}

fn emit_sounds(
    time: Res<Time>,
    mut showroom: ResMut<Showroom>,
    mut events: EventWriter<PlaySfxEvent>,
) {
    for sfx in showroom.advance_sounds(time.delta_secs()) {
        events.send(PlaySfxEvent(sfx));
    }
}

fn update_debug_info(
    showroom: Res<Showroom>,
    end_layout: Res<EndSectionLayout>,
    mut info: ResMut<DebugInfo>,
) {
    let status = if end_layout.blur {
        end_layout.status_line()
    } else {
        showroom.navigator().debug_line().to_string()
    };
    if info.status != status {
        info.status = status;
    }
}
