mod audio;
mod config;
mod fighter;
mod input;
mod physics;
mod render;
mod scene;
mod stage;
#[cfg(test)]
pub(crate) mod test_support;

use std::time::{Duration, Instant};

use sdl3::{
    EventPump,
    event::Event,
    pixels::Color,
    render::{Canvas, Texture, TextureCreator},
    video::{Window, WindowContext},
};

use crate::game::{
    audio::{Mixer, NullMixer},
    config::SetupError,
    fighter::{Fighter, PlayerSlot, Profile},
    input::{InputSnapshot, KeyState, MENU_KEYMAP, PLAYER1_KEYMAP, PLAYER2_KEYMAP},
    render::animation::Animation,
    scene::{Scene, Scenes},
    stage::{Backdrop, Stage},
};

pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

const FRAME_RATE: usize = 60;
const FRAME_DURATION: f32 = 1.0 / FRAME_RATE as f32;

/// Health bar dimensions; the config picks between the wide and narrow
/// variants rather than there being two builds of the game.
pub struct HealthBarStyle {
    pub w: f32,
    pub h: f32,
}

/// Immutable per-session data: everything loaded once at startup.
pub struct GameContext {
    pub main_menu_texture: usize,
    pub countdown_animation: Animation,
    pub victory_animation: Animation,
    pub intro_count: u32,
    pub health_bar: HealthBarStyle,
    pub stage: Stage,
    pub player1: Profile,
    pub player2: Profile,
}

/// Mutable per-frame data, owned and stepped by the single game-loop thread.
pub struct GameState {
    pub snapshot: InputSnapshot,
    pub backdrop: Backdrop,
    pub player1: Fighter,
    pub player2: Fighter,
}

impl GameState {
    /// Discards both fighters and rebuilds them at their spawn points.
    /// Scores are not held here, so they survive the reset.
    pub fn reset(&mut self, context: &GameContext, now: u64) {
        self.player1 = Fighter::new(PlayerSlot::One, &context.player1, now);
        self.player2 = Fighter::new(PlayerSlot::Two, &context.player2, now);
    }
}

pub struct Game<'a> {
    context: GameContext,
    state: GameState,
    scene: Scenes,
    mixer: Box<dyn Mixer>,

    // Per-player key tracking, frozen into `state.snapshot` once per frame
    player1_keys: KeyState,
    player2_keys: KeyState,
    menu_keys: KeyState,

    // Window management / render
    global_textures: Vec<Texture<'a>>,
    canvas: Canvas<Window>,
    events: EventPump,
    _texture_creator: &'a TextureCreator<WindowContext>,
    should_quit: bool,
}

impl<'a> Game<'a> {
    pub fn init(
        texture_creator: &'a TextureCreator<WindowContext>,
        canvas: Canvas<Window>,
        events: EventPump,
        config_path: &str,
    ) -> Result<Self, SetupError> {
        let mut global_textures = Vec::new();
        let (context, state, sounds) =
            config::load(texture_creator, &mut global_textures, config_path)?;

        Ok(Self {
            context,
            state,
            scene: Scenes::new(),
            mixer: Box::new(NullMixer::new(sounds)),

            player1_keys: KeyState::new(PLAYER1_KEYMAP),
            player2_keys: KeyState::new(PLAYER2_KEYMAP),
            menu_keys: KeyState::new(MENU_KEYMAP),

            global_textures,
            canvas,
            events,
            _texture_creator: texture_creator,
            should_quit: false,
        })
    }

    pub fn run(mut self) {
        let start = Instant::now();
        while !self.should_quit {
            let frame_start = Instant::now();
            let now = start.elapsed().as_millis() as u64;

            self.input();
            self.update(now);
            self.render();

            spin_sleep::sleep(
                Duration::from_secs_f32(FRAME_DURATION).saturating_sub(frame_start.elapsed()),
            );
        }
    }

    fn input(&mut self) {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. } => self.should_quit = true,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    self.player1_keys.handle_keypress(keycode);
                    self.player2_keys.handle_keypress(keycode);
                    self.menu_keys.handle_keypress(keycode);
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    self.player1_keys.handle_keyrelease(keycode);
                    self.player2_keys.handle_keyrelease(keycode);
                    self.menu_keys.handle_keyrelease(keycode);
                }
                _ => {}
            }
        }

        // One immutable snapshot per frame, shared by both players
        self.state.snapshot = InputSnapshot {
            player1: self.player1_keys.held(),
            player2: self.player2_keys.held(),
            menu: self.menu_keys.held(),
        };
    }

    fn update(&mut self, now: u64) {
        if let Some(mut new_scene) =
            self.scene
                .update(&self.context, &mut self.state, self.mixer.as_mut(), now)
        {
            self.scene.exit(&self.context, &mut self.state);
            new_scene.enter(&self.context, &mut self.state, now);
            self.scene = new_scene;
        }
    }

    fn render(&mut self) {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        self.scene
            .render(
                &mut self.canvas,
                &self.global_textures,
                &self.context,
                &self.state,
            )
            .expect("Failed to render scene");

        self.canvas.present();
    }
}
