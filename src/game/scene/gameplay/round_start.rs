use sdl3::{
    render::{Canvas, FRect, Texture},
    video::Window,
};

use crate::game::{
    GameContext, GameState, SCREEN_HEIGHT, SCREEN_WIDTH,
    audio::Mixer,
    scene::gameplay::{GameplayScene, GameplayScenes, during_round::DuringRound, render_gameplay},
};

const COUNTDOWN_TICK_MS: u64 = 1000;

/// Pre-round countdown. Fighters are frozen at their spawn points while the
/// count runs down; a zero count skips straight into the round.
pub struct RoundStart {
    pub(super) score: (u32, u32),
    pub(super) count: u32,
    last_tick: Option<u64>,
}

impl RoundStart {
    pub fn new(score: (u32, u32), count: u32) -> Self {
        Self {
            score,
            count,
            last_tick: None,
        }
    }
}

impl GameplayScene for RoundStart {
    fn enter(&mut self, context: &GameContext, state: &mut GameState, now: u64) {
        log::info!("New round at {}-{}", self.score.0, self.score.1);
        state.reset(context, now);
    }

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        _mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<GameplayScenes> {
        if self.count == 0 {
            return Some(GameplayScenes::DuringRound(DuringRound::new(self.score)));
        }

        let tick = *self.last_tick.get_or_insert(now);
        if now.saturating_sub(tick) >= COUNTDOWN_TICK_MS {
            self.count -= 1;
            self.last_tick = Some(now);
        }

        // Idle animations keep playing under the countdown
        state.player1.update(&context.player1, now);
        state.player2.update(&context.player2, now);

        None
    }

    fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        context: &GameContext,
        state: &GameState,
    ) -> Result<(), sdl3::Error> {
        render_gameplay(canvas, global_textures, context, state, self.score)?;

        let digits = &context.countdown_animation;
        let (texture, src) = digits.get_frame(self.count as usize, global_textures);
        let dst = FRect::new(
            SCREEN_WIDTH / 2.0 - digits.width() / 2.0,
            SCREEN_HEIGHT / 3.0,
            digits.width(),
            digits.height(),
        );
        canvas.copy(texture, src, dst)
    }

    fn exit(&mut self, _context: &GameContext, _state: &mut GameState) {}
}
