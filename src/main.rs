use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use life_engine::{
    AppError, Config, GridState, StepScheduler,
    input, rendering, telemetry,
};

fn window_conf(config: &Config) -> Conf {
    let side = config.window_size().round() as i32;
    Conf {
        window_title: "Game of Life - space: step, enter: play/pause, click: toggle".to_owned(),
        window_width: side,
        window_height: side,
        window_resizable: false,
        ..Default::default()
    }
}

/// Per frame: input phase, then advance phase, then render.
/// The two phases never overlap, which is all the synchronization the
/// grid buffers need.
async fn run(config: Config, scheduler: StepScheduler, mut state: GridState) {
    loop {
        for command in input::poll_commands(&config) {
            if let Err(err) = state.apply(command, &scheduler) {
                error!(%err, ?command, "command failed");
            }
        }

        if let Err(err) = state.tick(&scheduler, get_frame_time()) {
            error!(%err, "continuous play stopped");
        }

        clear_background(BLACK);
        rendering::draw_grid(&state, &config);
        rendering::draw_status(&state);

        next_frame().await;
    }
}

fn main() -> Result<(), AppError> {
    let config = Config::parse();
    telemetry::init(&config.log)?;

    let scheduler = StepScheduler::new(config.threads())?;
    let state = GridState::from_config(&config);
    info!(
        grid_size = config.grid_size(),
        cell_size = config.cell_size,
        threads = scheduler.threads(),
        live = state.live_count(),
        "starting"
    );

    macroquad::Window::from_config(window_conf(&config), run(config, scheduler, state));
    Ok(())
}
