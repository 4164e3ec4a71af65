//! Headless boss-fight сессия baton
//!
//! Скриптованный прогон: practice shot → старт боя → выстрел → перезаряд →
//! выстрел → удар по игроку. Без рендера, фиксированный шаг 90Hz (VR).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use baton_simulation::*;

const FRAME: Duration = Duration::from_micros(11_111);

fn main() {
    init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => match BatonConfig::from_toml_file(&path) {
            Ok(config) => config,
            Err(error) => {
                log_error(&format!("Invalid config {}: {}", path, error));
                std::process::exit(1);
            }
        },
        None => BatonConfig::default(),
    };

    log_info(&format!("Starting baton headless session (seed: {})", config.rng_seed));

    let mut app = create_headless_app(config.clone());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins(BatonPlugin);

    let pointer = spawn_pointer(
        app.world_mut(),
        Transform::from_xyz(0.0, 1.5, 0.0).looking_at(Vec3::new(0.0, 1.5, -20.0), Vec3::Y),
    );
    let boss = spawn_boss(app.world_mut(), Vec3::new(0.0, 1.5, -20.0), 2.0, 200.0);
    let player = spawn_player(app.world_mut());
    let baton = match spawn_baton(app.world_mut(), pointer) {
        Ok(baton) => baton,
        Err(error) => {
            log_error(&format!("Scene setup failed: {}", error));
            std::process::exit(1);
        }
    };

    for frame in 0..600u32 {
        let world = app.world_mut();
        match frame {
            10 => {
                world.send_event(FireInput { baton, source: FireSource::Keyboard });
            }
            60 => {
                world.send_event(GameStarted);
            }
            70 => {
                world.send_event(FireInput { baton, source: FireSource::VrTrigger });
            }
            100..=199 => {
                world.send_event(ChargeGained { baton, amount: 1.0 });
            }
            220 => {
                world.send_event(FireInput { baton, source: FireSource::VrTrigger });
            }
            300 => {
                world.send_event(PlayerHit { player });
            }
            _ => {}
        }

        app.update();

        if frame % 100 == 0 {
            let world = app.world();
            let charge = world.get::<BatonCharge>(baton).map(|c| c.current()).unwrap_or_default();
            let health = world.get::<BossHealth>(boss).map(|h| h.current).unwrap_or_default();
            let vignette = world.resource::<VignetteSettings>().intensity;
            log_info(&format!(
                "Frame {}: charge {:.1}, boss HP {:.1}, vignette {:.2}",
                frame, charge, health, vignette
            ));
        }
    }

    log_info("Session complete!");
}
