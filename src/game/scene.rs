use sdl3::{
    render::{Canvas, Texture},
    video::Window,
};

use crate::game::{
    GameContext, GameState,
    audio::Mixer,
    scene::{gameplay::Gameplay, main_menu::MainMenu},
};

pub mod gameplay;
mod main_menu;

pub trait Scene {
    fn enter(&mut self, context: &GameContext, state: &mut GameState, now: u64);
    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<Scenes>;
    fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        context: &GameContext,
        state: &GameState,
    ) -> Result<(), sdl3::Error>;
    fn exit(&mut self, context: &GameContext, state: &mut GameState);
}

pub enum Scenes {
    MainMenu(MainMenu),
    Gameplay(Gameplay),
}

impl Scenes {
    pub fn new() -> Self {
        Self::MainMenu(MainMenu::new())
    }
}

impl Scene for Scenes {
    fn enter(&mut self, context: &GameContext, state: &mut GameState, now: u64) {
        match self {
            Self::MainMenu(main_menu) => main_menu.enter(context, state, now),
            Self::Gameplay(gameplay) => gameplay.enter(context, state, now),
        }
    }

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<Scenes> {
        match self {
            Self::MainMenu(main_menu) => main_menu.update(context, state, mixer, now),
            Self::Gameplay(gameplay) => gameplay.update(context, state, mixer, now),
        }
    }

    fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        context: &GameContext,
        state: &GameState,
    ) -> Result<(), sdl3::Error> {
        match self {
            Self::MainMenu(main_menu) => main_menu.render(canvas, global_textures, context, state),
            Self::Gameplay(gameplay) => gameplay.render(canvas, global_textures, context, state),
        }
    }

    fn exit(&mut self, context: &GameContext, state: &mut GameState) {
        match self {
            Self::MainMenu(main_menu) => main_menu.exit(context, state),
            Self::Gameplay(gameplay) => gameplay.exit(context, state),
        }
    }
}
