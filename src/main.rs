use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use sdl2::image::InitFlag;

use racey::config::{Args, Settings};
use racey::input::{print_controls, InputAction, InputHandler, KeyBindings};
use racey::rendering::{FrameInfo, Renderer};
use racey::timing::FrameClock;
use racey::{Game, TickOutcome};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_args(&args);
    settings.validate()?;

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let _image_context = sdl2::image::init(InitFlag::PNG).map_err(anyhow::Error::msg)?;
    let ttf_context = sdl2::ttf::init().context("failed to initialise SDL2_ttf")?;

    let window = video_subsystem
        .window(&settings.window.title, settings.window.width, settings.window.height)
        .position_centered()
        .resizable()
        .build()
        .context("failed to create window")?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .context("failed to create canvas")?;
    let texture_creator = canvas.texture_creator();

    let bindings = KeyBindings::from_settings(&settings.controls)?;
    let labels = bindings.labels();
    let renderer = Renderer::new(
        &texture_creator,
        &ttf_context,
        &settings.car_image_path(),
        &settings.font_path(),
        settings.theme(),
        labels.restart_hint(),
    )
    .map_err(anyhow::Error::msg)?;

    let (car_width, car_height) = renderer.car_size();
    let mut game = Game::new(&settings, car_width, car_height);
    let mut input = InputHandler::new();
    let mut clock = FrameClock::new(settings.window.max_fps);
    let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;

    let death_screen = Duration::try_from_secs_f32(settings.game.death_screen_secs)
        .context("invalid death_screen_secs")?;
    let mut crashed_at: Option<Instant> = None;
    let mut paused = false;
    let mut running = true;

    print_controls(&labels);
    log::info!(
        "Starting {}x{} at {} fps",
        settings.window.width,
        settings.window.height,
        settings.window.max_fps
    );

    while running {
        for event in event_pump.poll_iter() {
            match input.process_event(&event, &bindings) {
                InputAction::Exit => running = false,
                InputAction::TogglePause => {
                    paused = !paused;
                    log::info!("{}", if paused { "Paused" } else { "Resumed" });
                }
                InputAction::Resize(width, height) => game.resize(width, height),
                InputAction::Restart | InputAction::None => {}
            }
        }

        if !paused {
            match game.tick(&input.take_tick_input()) {
                TickOutcome::Crashed(_) => crashed_at = Some(Instant::now()),
                TickOutcome::Restarted => crashed_at = None,
                TickOutcome::Running | TickOutcome::Over => {}
            }
        }

        if settings.game.auto_restart {
            if let Some(at) = crashed_at {
                if at.elapsed() >= death_screen {
                    game.restart();
                    crashed_at = None;
                }
            }
        }

        let frame = FrameInfo {
            paused,
            fps: settings.game.show_fps.then(|| clock.fps()),
        };
        renderer
            .render(&mut canvas, &game, &frame)
            .map_err(anyhow::Error::msg)?;

        clock.tick();
    }

    game.statistics().display();
    Ok(())
}
