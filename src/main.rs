use anyhow::Result;
use log::{debug, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::{GameLoop, TimestepMode};
use engine::input::{
    parse_overrides, Action, InputConfig, InputConfigManager, InputManager, PLAYER_COUNT,
};
use game::characters::{FighterView, Player, RigStyle};
use game::{Match, MatchEvent};

/// Environment variable selecting `variable`, `fixed` or `fixed:<hz>` stepping
const TIMESTEP_ENV: &str = "BRAWL_TIMESTEP";

/// Environment variable with key overrides, e.g. `p1.punch=F,p2.block=Semicolon`
const BINDINGS_ENV: &str = "BRAWL_BINDINGS";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Street Brawl...");

    let mode = match std::env::var(TIMESTEP_ENV) {
        Ok(value) => value.parse::<TimestepMode>()?,
        Err(_) => TimestepMode::default(),
    };

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Street Brawl")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::with_config(load_bindings());
    let mut game_loop = GameLoop::new(mode);
    info!("Timestep mode: {:?}", game_loop.mode());
    let mut brawl = Match::new();
    let mut views = [
        FighterView::with_style(RigStyle::Cartoon),
        FighterView::with_style(RigStyle::Realistic),
    ];
    for player in Player::BOTH {
        info!(
            "Player {} uses the {} rig",
            player.number(),
            views[player.index()].rig_name()
        );
    }
    let mut last_message: Option<String> = None;

    log_controls(&input);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.global_just_pressed(Action::Quit) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.global_just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                    for view in &mut views {
                        view.set_paused(game_loop.is_paused());
                    }
                }
                if input.global_just_pressed(Action::ToggleControls) {
                    log_controls(&input);
                }
                if input.global_just_pressed(Action::Restart) && !brawl.request_restart() {
                    debug!("Restart is only available once a player has won");
                }

                let steps = game_loop.begin_frame();
                let dt = game_loop.step_dt();
                let intents = input.intents();
                for _ in 0..steps {
                    brawl.tick(dt, intents);
                }

                for event in brawl.drain_events() {
                    report_event(&event);
                }

                for player in Player::BOTH {
                    let snapshot = brawl.fighter(player).snapshot();
                    views[player.index()].sync(&snapshot, game_loop.render_delta_time());
                }

                let message = brawl.hud().message;
                if message != last_message {
                    if let Some(text) = &message {
                        for line in text.lines() {
                            info!("{}", line);
                        }
                    }
                    last_message = message;
                }

                if game_loop.frame_count() % 600 == 0 {
                    let hud = brawl.hud();
                    debug!(
                        "FPS {:.0} | {} updates, match tick {} | P1 {:.0}% hp {:.0}% st ({} at {:?}) | P2 {:.0}% hp {:.0}% st ({} at {:?})",
                        game_loop.fps(),
                        game_loop.update_count(),
                        brawl.tick_count(),
                        hud.health_percent[0],
                        hud.stamina_percent[0],
                        views[0].pose().animation_name(),
                        views[0].render_position(),
                        hud.health_percent[1],
                        hud.stamina_percent[1],
                        views[1].pose().animation_name(),
                        views[1].render_position(),
                    );
                }

                input.update();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Build the key tables, applying any overrides from `BRAWL_BINDINGS`
fn load_bindings() -> InputConfigManager {
    let mut bindings = InputConfigManager::new(PLAYER_COUNT);
    if let Ok(text) = std::env::var(BINDINGS_ENV) {
        match parse_overrides(&text).and_then(|overrides| bindings.apply_overrides(&overrides)) {
            Ok(()) => info!("Applied key overrides from {}", BINDINGS_ENV),
            Err(e) => warn!("Ignoring {}, using default keys: {}", BINDINGS_ENV, e),
        }
    }
    bindings
}

/// Log the key bindings for both players and the global keys
fn log_controls(input: &InputManager) {
    info!("Controls:");
    for player_id in 0..PLAYER_COUNT {
        if let Some(config) = input.config().get_config(player_id) {
            log_fighter_keys(player_id, config);
        }
    }
    for (source, action) in input.config().global_config().get_all_bindings() {
        info!("  Global: {:?} -> {:?}", source, action);
    }
}

fn log_fighter_keys(player_id: usize, config: &InputConfig) {
    for action in Action::FIGHTER_ACTIONS {
        if config.has_binding(action) {
            info!(
                "  Player {}: {:?} <- {:?}",
                player_id + 1,
                action,
                config.get_sources(action)
            );
        } else {
            warn!("  Player {}: {:?} is unbound", player_id + 1, action);
        }
    }
}

fn report_event(event: &MatchEvent) {
    match event {
        MatchEvent::AttackStarted { player, origin, .. } => {
            debug!("Punch effect for player {} at {:?}", player.number(), origin);
        }
        MatchEvent::Hit {
            position, blocked, ..
        } => {
            let effect = if *blocked { "block" } else { "hit" };
            debug!("Spawning {} effect at {:?}", effect, position);
        }
        MatchEvent::GuardBreak { player } => {
            warn!("Player {} guard broken!", player.number());
        }
        MatchEvent::GameOver { .. } | MatchEvent::Restarted => {}
    }
}
