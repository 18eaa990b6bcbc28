//! Shared fixtures for the scene and fighter tests. Everything here stays
//! texture-free so tests never need a window.

use sdl3::render::FPoint;

use crate::game::{
    GameContext, GameState, HealthBarStyle,
    audio::{Mixer, SoundBank, SoundId},
    fighter::{Fighter, PlayerSlot, Profile},
    input::InputSnapshot,
    render::animation::{Animation, SpriteSheet},
    stage::{Backdrop, Stage},
};

pub struct CountingMixer {
    pub plays: usize,
}

impl CountingMixer {
    pub fn new() -> Self {
        Self { plays: 0 }
    }
}

impl Mixer for CountingMixer {
    fn play(&mut self, _sound: SoundId) {
        self.plays += 1;
    }
}

fn test_profile(name: &str, spawn_x: f32, start_flip: bool, bank: &mut SoundBank) -> Profile {
    let sheet = SpriteSheet::new(0, 162.0, [10, 8, 1, 7, 7, 3, 7], name)
        .expect("fixture sheet is valid");
    Profile {
        name: name.into(),
        sheet,
        size: 162.0,
        scale: 4.0,
        offset: FPoint::new(72.0, 120.0),
        spawn: FPoint::new(spawn_x, 310.0),
        start_flip,
        sound: bank.register(name),
    }
}

pub fn test_context(intro_count: u32, spawn1_x: f32, spawn2_x: f32) -> GameContext {
    let mut bank = SoundBank::new();
    GameContext {
        main_menu_texture: 0,
        countdown_animation: Animation::new(0, 4, 128.0, 128.0, "countdown")
            .expect("fixture strip is valid"),
        victory_animation: Animation::new(0, 1, 280.0, 100.0, "victory")
            .expect("fixture strip is valid"),
        intro_count,
        health_bar: HealthBarStyle { w: 150.0, h: 20.0 },
        stage: Stage::new([0, 0, 0]),
        player1: test_profile("warrior", spawn1_x, false, &mut bank),
        player2: test_profile("wizard", spawn2_x, true, &mut bank),
    }
}

pub fn test_state(context: &GameContext) -> GameState {
    GameState {
        snapshot: InputSnapshot::default(),
        backdrop: Backdrop::default(),
        player1: Fighter::new(PlayerSlot::One, &context.player1, 0),
        player2: Fighter::new(PlayerSlot::Two, &context.player2, 0),
    }
}
