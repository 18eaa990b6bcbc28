use sdl3::{
    render::{Canvas, FRect, Texture},
    video::Window,
};

use crate::game::{
    GameContext, GameState, SCREEN_WIDTH,
    audio::Mixer,
    fighter::PlayerSlot,
    scene::gameplay::{GameplayScene, GameplayScenes, render_gameplay, round_start::RoundStart},
};

const ROUND_OVER_COOLDOWN_MS: u64 = 2000;
const VICTORY_CARD_Y: f32 = 150.0;

/// Post-knockout cooldown. Movement and input stay off so the death pose
/// holds; after the cooldown the next round's countdown takes over.
pub struct RoundOver {
    score: (u32, u32),
    winner: Option<PlayerSlot>,
    since: u64,
}

impl RoundOver {
    pub fn new(score: (u32, u32), winner: Option<PlayerSlot>, now: u64) -> Self {
        Self {
            score,
            winner,
            since: now,
        }
    }

    pub fn score(&self) -> (u32, u32) {
        self.score
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        self.winner
    }
}

impl GameplayScene for RoundOver {
    fn enter(&mut self, _context: &GameContext, _state: &mut GameState, _now: u64) {}

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        _mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<GameplayScenes> {
        // No movement step here, so the loser finishes the death animation
        // and the survivor settles into idle
        state.player1.update(&context.player1, now);
        state.player2.update(&context.player2, now);

        if now.saturating_sub(self.since) >= ROUND_OVER_COOLDOWN_MS {
            return Some(GameplayScenes::RoundStart(RoundStart::new(
                self.score,
                context.intro_count,
            )));
        }
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

        let card = &context.victory_animation;
        let center_x = match self.winner {
            Some(PlayerSlot::One) => SCREEN_WIDTH / 4.0,
            Some(PlayerSlot::Two) => 3.0 * SCREEN_WIDTH / 4.0,
            None => SCREEN_WIDTH / 2.0,
        };
        let (texture, src) = card.get_frame(0, global_textures);
        let dst = FRect::new(
            center_x - card.width() / 2.0,
            VICTORY_CARD_Y,
            card.width(),
            card.height(),
        );
        canvas.copy(texture, src, dst)
    }

    fn exit(&mut self, _context: &GameContext, _state: &mut GameState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{CountingMixer, test_context, test_state};

    #[test]
    fn cooldown_holds_then_hands_back_to_the_countdown() {
        let context = test_context(3, 200.0, 700.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();
        let mut round_over = RoundOver::new((1, 0), Some(PlayerSlot::One), 5000);

        assert!(
            round_over
                .update(&context, &mut state, &mut mixer, 6999)
                .is_none()
        );

        let next = round_over.update(&context, &mut state, &mut mixer, 7000);
        match next {
            Some(GameplayScenes::RoundStart(round_start)) => {
                assert_eq!(round_start.score, (1, 0));
                assert_eq!(round_start.count, 3);
            }
            _ => panic!("expected the next countdown"),
        }
    }

    #[test]
    fn fighters_keep_animating_without_stepping() {
        let context = test_context(3, 200.0, 700.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();

        state.player2.take_damage(100);
        let mut round_over = RoundOver::new((1, 0), Some(PlayerSlot::One), 0);

        let y_before = state.player2.rect().y;
        round_over.update(&context, &mut state, &mut mixer, 51);
        assert_eq!(state.player2.rect().y, y_before);
        assert!(!state.player2.alive());
    }
}
