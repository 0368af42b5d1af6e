use anyhow::Result;
use log::{debug, info};
use std::time::{SystemTime, UNIX_EPOCH};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::InputManager;
use game::player::{PlayerParameters, PARAMS_PATH};
use game::session::GameSession;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Knight Controller...");

    // Player parameters: an explicit path must exist, the default one may be missing
    let params = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading player parameters from {}", path);
            PlayerParameters::load(&path)?
        }
        None => PlayerParameters::load_or_default(PARAMS_PATH)?,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    let mut session = GameSession::new(params, seed)?;
    session.spawn_dummy("Dummy North", 0.0, 2.0, 50.0);
    session.spawn_dummy("Dummy East", 2.0, 0.0, 50.0);
    session.spawn_dummy("Dummy West", -2.0, 0.0, 50.0);
    session.spawn_wall(0.0, -4.0, 12.0, 0.5);

    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Knight Controller")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");
    input.enable();

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                if focused {
                    input.enable();
                    game_loop.resume();
                } else {
                    // Releases everything held so the player does not keep walking
                    input.disable();
                    game_loop.pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_button(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let step = game_loop.begin_frame();

                for action in input.drain_events() {
                    session.handle_input(&action);
                }

                let events = session.frame(step);
                if let Some(hits) = events.attack {
                    for hit in hits {
                        debug!("Hit {:?} for {} ({} hp left)", hit.collider, hit.amount, hit.health);
                    }
                }

                if game_loop.frame_count() % 300 == 0 {
                    debug!(
                        "FPS: {:.1}, health: {:.0}",
                        game_loop.fps(),
                        session.health_bar().value()
                    );
                }

                window.request_redraw();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
