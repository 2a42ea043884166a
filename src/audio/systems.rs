//! Audio domain: translating gameplay events into sound cues.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::path::Path;

use crate::audio::{PlaySfxEvent, SFX_CUES, SfxLibrary};
use crate::collection::ItemCollectedEvent;
use crate::core::GameplaySettings;
use crate::movement::{JumpEvent, LandEvent};
use crate::vehicles::{DismountEvent, MountEvent, SpecialAbilityEvent};

pub fn jump_sound(event: &JumpEvent) -> &'static str {
    if event.double_jump {
        "DoubleJump"
    } else {
        "Jump"
    }
}

pub(crate) fn route_sound_cues(
    settings: Res<GameplaySettings>,
    mut jumps: MessageReader<JumpEvent>,
    mut lands: MessageReader<LandEvent>,
    mut mounts: MessageReader<MountEvent>,
    mut dismounts: MessageReader<DismountEvent>,
    mut abilities: MessageReader<SpecialAbilityEvent>,
    mut collected: MessageReader<ItemCollectedEvent>,
    mut sfx: MessageWriter<PlaySfxEvent>,
) {
    let mut cues: Vec<&'static str> = Vec::new();
    cues.extend(jumps.read().map(jump_sound));
    cues.extend(lands.read().map(|_| "Land"));
    cues.extend(mounts.read().map(|_| "MountVehicle"));
    cues.extend(dismounts.read().map(|_| "DismountVehicle"));
    cues.extend(abilities.read().map(|e| e.ability.sound_name()));
    cues.extend(collected.read().map(|e| e.kind.sound_name()));

    // Baby-safe mode mutes everything
    if settings.baby_safe_mode {
        return;
    }

    for name in cues {
        sfx.write(PlaySfxEvent { name });
    }
}

pub(crate) fn play_sfx(
    mut commands: Commands,
    library: Res<SfxLibrary>,
    mut cues: MessageReader<PlaySfxEvent>,
) {
    for cue in cues.read() {
        match library.get(cue.name) {
            Some(clip) => {
                commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
            }
            None => debug!("SFX cue without clip: {}", cue.name),
        }
    }
}

/// Load a clip for every cue that has a file under `assets/audio/`.
pub(crate) fn load_sfx_library(asset_server: Res<AssetServer>, mut library: ResMut<SfxLibrary>) {
    for name in SFX_CUES {
        let relative = format!("audio/{name}.ogg");
        if !Path::new("assets").join(&relative).exists() {
            continue;
        }
        library.register(name, asset_server.load(relative));
    }

    info!("Loaded {}/{} sound cues", library.len(), SFX_CUES.len());
}
