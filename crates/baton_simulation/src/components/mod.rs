//! ECS компоненты сущностей boss-fight сцены
//!
//! - baton: Baton marker, PointerOrigin
//! - boss: ShotTarget tag, BossHealth
//! - player: Player marker (получатель vignette pulse)

pub mod baton;
pub mod boss;
pub mod player;

pub use baton::*;
pub use boss::*;
pub use player::*;
