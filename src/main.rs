mod game;
use crate::game::Game;

const SCREEN_WIDTH: u32 = 1000;
const SCREEN_HEIGHT: u32 = 600;

fn main() {
    env_logger::init();

    let sdl = sdl3::init().expect("Failed to init sdl");
    let video_subsystem = sdl.video().expect("Failed to init video subsystem");
    let window = video_subsystem
        .window("Brawler", SCREEN_WIDTH, SCREEN_HEIGHT)
        .build()
        .expect("Failed to make window");
    let canvas = window.into_canvas();
    let texture_creator = canvas.texture_creator();
    let events = sdl.event_pump().expect("Failed to make event pump");

    let game = match Game::init(&texture_creator, canvas, events, "./resources/game.json") {
        Ok(game) => game,
        Err(err) => {
            log::error!("Setup failed: {err}");
            std::process::exit(1);
        }
    };
    log::info!("Game initialized");

    game.run();
}
