use anyhow::{bail, Result};
use clap::Parser;
use raylib::prelude::*;

use onboarding::config::Config;
use onboarding::data::SLIDES;
use onboarding::screen::{InputState, Screen};

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();

    if !config.assets.is_dir() {
        bail!("assets directory {:?} does not exist", config.assets);
    }
    log::info!("Assets: {:?}", config.assets);

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Onboarding")
        .vsync()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Mount Screen ---
    let mut screen = Screen::mount(&mut rl, &thread, &config.assets, &SLIDES);
    let mut input = InputState::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for command in input.poll(&rl) {
            screen.apply(command, dt);
        }
        screen.update(dt);

        let mut d = rl.begin_drawing(&thread);
        screen.draw(&mut d);
    }

    Ok(())
}
