//! Player marker

use bevy::prelude::*;

use crate::vignette::VignettePulse;

/// VR игрок (держит baton, получает урон от босса)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(VignettePulse)]
pub struct Player;
