//! Movement domain: tap sampling for the one-button control scheme.

use bevy::prelude::*;

use crate::movement::TapInput;

/// Any new touch, left click or Space press counts as a tap, wherever it
/// lands on screen.
pub(crate) fn read_tap_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut tap: ResMut<TapInput>,
) {
    let tapped = touches.any_just_pressed()
        || mouse.just_pressed(MouseButton::Left)
        || keyboard.just_pressed(KeyCode::Space);

    if tapped {
        tap.register_tap();
        debug!("Tap detected");
    }
}
