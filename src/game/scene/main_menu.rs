use crate::game::{
    GameContext, GameState,
    audio::Mixer,
    input::ButtonFlag,
    scene::{Scene, Scenes, gameplay::Gameplay},
    stage::Backdrop,
};

/// Backdrop select plus start. Selection keys preview the backdrop live;
/// the start key fires on release so holding it does not skip a frame of
/// the first countdown.
pub struct MainMenu {
    start_pressed: bool,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            start_pressed: false,
        }
    }
}

impl Scene for MainMenu {
    fn enter(&mut self, _context: &GameContext, _state: &mut GameState, _now: u64) {}

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        _mixer: &mut dyn Mixer,
        _now: u64,
    ) -> Option<Scenes> {
        let menu = state.snapshot.menu;

        if menu.contains(ButtonFlag::NORMAL_BG) {
            state.backdrop = Backdrop::Normal;
        }
        if menu.contains(ButtonFlag::FOREST_BG) {
            state.backdrop = Backdrop::Forest;
        }
        if menu.contains(ButtonFlag::ICE_BG) {
            state.backdrop = Backdrop::Ice;
        }

        if self.start_pressed && !menu.contains(ButtonFlag::START) {
            log::info!("Starting match on {:?} backdrop", state.backdrop);
            return Some(Scenes::Gameplay(Gameplay::new(context.intro_count)));
        }
        self.start_pressed = menu.contains(ButtonFlag::START);

        None
    }

    fn render(
        &self,
        canvas: &mut sdl3::render::Canvas<sdl3::video::Window>,
        global_textures: &[sdl3::render::Texture],
        context: &GameContext,
        state: &GameState,
    ) -> Result<(), sdl3::Error> {
        context.stage.render(canvas, global_textures, state.backdrop)?;
        canvas.copy(&global_textures[context.main_menu_texture], None, None)
    }

    fn exit(&mut self, _context: &GameContext, _state: &mut GameState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{CountingMixer, test_context, test_state};

    #[test]
    fn start_fires_on_release() {
        let context = test_context(3, 200.0, 700.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();
        let mut menu = MainMenu::new();

        state.snapshot.menu = ButtonFlag::START;
        assert!(menu.update(&context, &mut state, &mut mixer, 0).is_none());

        state.snapshot.menu = ButtonFlag::NONE;
        let next = menu.update(&context, &mut state, &mut mixer, 16);
        assert!(matches!(next, Some(Scenes::Gameplay(_))));
    }

    #[test]
    fn backdrop_keys_preview_selection() {
        let context = test_context(3, 200.0, 700.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();
        let mut menu = MainMenu::new();

        state.snapshot.menu = ButtonFlag::FOREST_BG;
        menu.update(&context, &mut state, &mut mixer, 0);
        assert_eq!(state.backdrop, Backdrop::Forest);

        state.snapshot.menu = ButtonFlag::ICE_BG;
        menu.update(&context, &mut state, &mut mixer, 16);
        assert_eq!(state.backdrop, Backdrop::Ice);
    }
}
