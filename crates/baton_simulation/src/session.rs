//! Game session flag (boss fight начался или нет)

use bevy::prelude::*;

/// "Game active" флаг внешнего game manager'а
///
/// До старта разрешены practice shots (см. ShotResetPolicy::AfterGameStart).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct GameSession {
    pub active: bool,
}

/// Event: game manager запустил бой
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GameStarted;

/// System: GameStarted → GameSession.active
pub fn start_game_session(mut events: EventReader<GameStarted>, mut session: ResMut<GameSession>) {
    if events.read().last().is_none() {
        return;
    }

    if !session.active {
        session.active = true;
        crate::logger::log_info("Boss fight started: shots now discharge the baton");
    }
}
