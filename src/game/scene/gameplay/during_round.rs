use sdl3::{
    render::{Canvas, Texture},
    video::Window,
};

use crate::game::{
    GameContext, GameState, SCREEN_HEIGHT, SCREEN_WIDTH,
    audio::Mixer,
    fighter::{self, PlayerSlot},
    scene::gameplay::{GameplayScene, GameplayScenes, render_gameplay, round_over::RoundOver},
};

/// The live round. Ends the frame a fighter dies, handing the survivor (or
/// nobody, on a trade) to the round-over cooldown.
pub struct DuringRound {
    pub(super) score: (u32, u32),
}

impl DuringRound {
    pub fn new(score: (u32, u32)) -> Self {
        Self { score }
    }
}

impl GameplayScene for DuringRound {
    fn enter(&mut self, _context: &GameContext, _state: &mut GameState, _now: u64) {}

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<GameplayScenes> {
        let snapshot = state.snapshot;
        let GameState {
            player1, player2, ..
        } = state;

        let intent1 = player1.step_movement(snapshot.player1, SCREEN_WIDTH, SCREEN_HEIGHT, player2);
        let intent2 = player2.step_movement(snapshot.player2, SCREEN_WIDTH, SCREEN_HEIGHT, player1);

        if let Some(kind) = intent1 {
            fighter::resolve_attack(player1, player2, kind, context.player1.sound, mixer);
        }
        if let Some(kind) = intent2 {
            fighter::resolve_attack(player2, player1, kind, context.player2.sound, mixer);
        }

        player1.update(&context.player1, now);
        player2.update(&context.player2, now);

        if player1.alive() && player2.alive() {
            return None;
        }

        // A trade kills both and scores neither
        let winner = match (player1.alive(), player2.alive()) {
            (true, false) => Some(player1.slot()),
            (false, true) => Some(player2.slot()),
            _ => None,
        };
        match winner {
            Some(PlayerSlot::One) => {
                self.score.0 += 1;
                log::info!("{} wins the round", context.player1.name);
            }
            Some(PlayerSlot::Two) => {
                self.score.1 += 1;
                log::info!("{} wins the round", context.player2.name);
            }
            None => log::info!("Double knockout, no score"),
        }

        Some(GameplayScenes::RoundOver(RoundOver::new(
            self.score, winner, now,
        )))
    }

    fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        context: &GameContext,
        state: &GameState,
    ) -> Result<(), sdl3::Error> {
        render_gameplay(canvas, global_textures, context, state, self.score)
    }

    fn exit(&mut self, _context: &GameContext, _state: &mut GameState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::input::ButtonFlag;
    use crate::game::test_support::{CountingMixer, test_context, test_state};

    #[test]
    fn attack_in_reach_lands_damage_and_plays_a_sound() {
        let context = test_context(0, 200.0, 300.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();
        let mut round = DuringRound::new((0, 0));

        state.snapshot.player1 = ButtonFlag::LIGHT;
        let next = round.update(&context, &mut state, &mut mixer, 0);
        assert!(next.is_none());
        assert_eq!(state.player2.health(), 90);
        assert_eq!(mixer.plays, 1);
    }

    #[test]
    fn knockout_ends_the_round_with_the_survivor_scored() {
        let context = test_context(0, 200.0, 300.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();
        let mut round = DuringRound::new((2, 0));

        state.player2.take_damage(95);
        state.snapshot.player1 = ButtonFlag::HEAVY;
        let next = round.update(&context, &mut state, &mut mixer, 0);

        match next {
            Some(GameplayScenes::RoundOver(round_over)) => {
                assert_eq!(round_over.score(), (3, 0));
                assert_eq!(round_over.winner(), Some(PlayerSlot::One));
            }
            _ => panic!("expected the round to end"),
        }
        assert!(!state.player2.alive());
    }

    #[test]
    fn out_of_reach_attack_whiffs() {
        let context = test_context(0, 100.0, 800.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();
        let mut round = DuringRound::new((0, 0));

        state.snapshot.player1 = ButtonFlag::LIGHT;
        round.update(&context, &mut state, &mut mixer, 0);
        assert_eq!(state.player2.health(), 100);
        // The swing still makes noise
        assert_eq!(mixer.plays, 1);
    }
}
