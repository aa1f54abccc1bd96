//! Ambient theme playback hook.
//!
//! The crate ships no audio assets, so consuming a `StartThemeEvent` only
//! logs today. The event seam stays so a theme track can be dropped in
//! without touching startup wiring.

use bevy::prelude::*;

/// Request that the looping ambient theme starts playing.
#[derive(Event)]
pub struct StartThemeEvent;

fn request_theme(mut events: EventWriter<StartThemeEvent>) {
    events.send(StartThemeEvent);
}

fn consume_theme_events(mut events: EventReader<StartThemeEvent>) {
    for _ in events.read() {
        debug!("ambient theme requested; no track bundled, staying silent");
    }
}

pub struct AmbientAudioPlugin;

impl Plugin for AmbientAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StartThemeEvent>()
            .add_systems(Startup, request_theme)
            .add_systems(PostUpdate, consume_theme_events);
    }
}
