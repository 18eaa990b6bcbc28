mod during_round;
mod round_over;
mod round_start;

use sdl3::{
    pixels::Color,
    render::{Canvas, FRect, Texture},
    video::Window,
};

use crate::game::{
    GameContext, GameState,
    audio::Mixer,
    fighter::MAX_HEALTH,
    scene::{
        Scene, Scenes,
        gameplay::round_start::RoundStart,
    },
};

pub trait GameplayScene {
    fn enter(&mut self, context: &GameContext, state: &mut GameState, now: u64);
    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<GameplayScenes>;
    fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        context: &GameContext,
        state: &GameState,
    ) -> Result<(), sdl3::Error>;
    fn exit(&mut self, context: &GameContext, state: &mut GameState);
}

pub enum GameplayScenes {
    RoundStart(round_start::RoundStart),
    DuringRound(during_round::DuringRound),
    RoundOver(round_over::RoundOver),
}

impl GameplayScene for GameplayScenes {
    fn enter(&mut self, context: &GameContext, state: &mut GameState, now: u64) {
        match self {
            Self::RoundStart(round_start) => round_start.enter(context, state, now),
            Self::DuringRound(during_round) => during_round.enter(context, state, now),
            Self::RoundOver(round_over) => round_over.enter(context, state, now),
        }
    }

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<GameplayScenes> {
        match self {
            Self::RoundStart(round_start) => round_start.update(context, state, mixer, now),
            Self::DuringRound(during_round) => during_round.update(context, state, mixer, now),
            Self::RoundOver(round_over) => round_over.update(context, state, mixer, now),
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
            Self::RoundStart(round_start) => {
                round_start.render(canvas, global_textures, context, state)
            }
            Self::DuringRound(during_round) => {
                during_round.render(canvas, global_textures, context, state)
            }
            Self::RoundOver(round_over) => {
                round_over.render(canvas, global_textures, context, state)
            }
        }
    }

    fn exit(&mut self, context: &GameContext, state: &mut GameState) {
        match self {
            Self::RoundStart(round_start) => round_start.exit(context, state),
            Self::DuringRound(during_round) => during_round.exit(context, state),
            Self::RoundOver(round_over) => round_over.exit(context, state),
        }
    }
}

/// The round controller: drives countdown, active play, and the round-over
/// cooldown, carrying the session scores through every transition.
pub struct Gameplay {
    scene: GameplayScenes,
}

impl Gameplay {
    pub fn new(intro_count: u32) -> Self {
        Self {
            scene: GameplayScenes::RoundStart(RoundStart::new((0, 0), intro_count)),
        }
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> &GameplayScenes {
        &self.scene
    }
}

impl Scene for Gameplay {
    fn enter(&mut self, context: &GameContext, state: &mut GameState, now: u64) {
        self.scene.enter(context, state, now);
    }

    fn update(
        &mut self,
        context: &GameContext,
        state: &mut GameState,
        mixer: &mut dyn Mixer,
        now: u64,
    ) -> Option<Scenes> {
        if let Some(mut new_scene) = self.scene.update(context, state, mixer, now) {
            self.scene.exit(context, state);
            new_scene.enter(context, state, now);
            self.scene = new_scene;
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
        self.scene.render(canvas, global_textures, context, state)
    }

    fn exit(&mut self, context: &GameContext, state: &mut GameState) {
        self.scene.exit(context, state);
    }
}

fn render_gameplay(
    canvas: &mut Canvas<Window>,
    global_textures: &[Texture],
    context: &GameContext,
    state: &GameState,
    score: (u32, u32),
) -> Result<(), sdl3::Error> {
    context.stage.render(canvas, global_textures, state.backdrop)?;
    state
        .player1
        .render(canvas, global_textures, &context.player1)?;
    state
        .player2
        .render(canvas, global_textures, &context.player2)?;

    render_health_bar(canvas, context, state.player1.health(), 20.0, 20.0)?;
    render_health_bar(canvas, context, state.player2.health(), 580.0, 20.0)?;
    render_score_pips(canvas, score.0, 20.0)?;
    render_score_pips(canvas, score.1, 580.0)?;

    Ok(())
}

fn render_health_bar(
    canvas: &mut Canvas<Window>,
    context: &GameContext,
    health: i32,
    x: f32,
    y: f32,
) -> Result<(), sdl3::Error> {
    let bar = &context.health_bar;
    let ratio = health as f32 / MAX_HEALTH as f32;

    canvas.set_draw_color(Color::WHITE);
    canvas.fill_rect(FRect::new(x - 2.0, y - 2.0, bar.w + 4.0, bar.h + 4.0))?;
    canvas.set_draw_color(Color::RED);
    canvas.fill_rect(FRect::new(x, y, bar.w, bar.h))?;
    canvas.set_draw_color(Color::RGB(255, 255, 0));
    canvas.fill_rect(FRect::new(x, y, bar.w * ratio, bar.h))?;

    Ok(())
}

fn render_score_pips(canvas: &mut Canvas<Window>, score: u32, x: f32) -> Result<(), sdl3::Error> {
    const MAX_PIPS: u32 = 10;
    const PIP: f32 = 12.0;
    const GAP: f32 = 6.0;

    canvas.set_draw_color(Color::WHITE);
    for i in 0..score.min(MAX_PIPS) {
        canvas.fill_rect(FRect::new(x + i as f32 * (PIP + GAP), 50.0, PIP, PIP))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fighter::PlayerSlot;
    use crate::game::input::ButtonFlag;
    use crate::game::test_support::{CountingMixer, test_context, test_state};

    /// Full round flow: KO, scoring, victory cooldown, reset.
    #[test]
    fn round_flow_scores_the_survivor_and_resets() {
        // No countdown so the round is live immediately
        let context = test_context(0, 200.0, 300.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();

        let mut gameplay = Gameplay::new(0);
        gameplay.enter(&context, &mut state, 0);

        // Player 2 holds an attack button until player 1 drops
        state.snapshot.player2 = ButtonFlag::LIGHT;
        let mut now = 0;
        let mut frames = 0;
        while state.player1.alive() && frames < 2000 {
            gameplay.update(&context, &mut state, &mut mixer, now);
            now += 51;
            frames += 1;
        }
        assert!(!state.player1.alive(), "player 1 never dropped");
        assert_eq!(state.player1.health(), 0);

        // One more tick moves the controller into the cooldown phase
        state.snapshot.player2 = ButtonFlag::NONE;
        gameplay.update(&context, &mut state, &mut mixer, now);
        let round_over_at = now;
        match gameplay.current() {
            GameplayScenes::RoundOver(round_over) => {
                assert_eq!(round_over.score(), (0, 1));
                assert_eq!(round_over.winner(), Some(PlayerSlot::Two));
            }
            _ => panic!("expected the round-over cooldown"),
        }

        // Cooldown elapses: fighters are rebuilt at their spawn points
        now = round_over_at + 2001;
        gameplay.update(&context, &mut state, &mut mixer, now);
        assert!(state.player1.alive());
        assert_eq!(state.player1.health(), 100);
        assert_eq!(state.player1.rect().x, 200.0);
        assert!(state.player2.alive());
        assert_eq!(state.player2.rect().x, 300.0);
    }

    #[test]
    fn double_ko_scores_neither_player() {
        let context = test_context(0, 200.0, 300.0);
        let mut state = test_state(&context);
        let mut mixer = CountingMixer::new();

        let mut gameplay = Gameplay::new(0);
        gameplay.enter(&context, &mut state, 0);

        // Soften both fighters, then let them trade the final blow
        state.player1.take_damage(95);
        state.player2.take_damage(95);
        state.snapshot.player1 = ButtonFlag::LIGHT;
        state.snapshot.player2 = ButtonFlag::LIGHT;
        gameplay.update(&context, &mut state, &mut mixer, 0);
        gameplay.update(&context, &mut state, &mut mixer, 51);

        match gameplay.current() {
            GameplayScenes::RoundOver(round_over) => {
                assert_eq!(round_over.score(), (0, 0));
                assert_eq!(round_over.winner(), None);
            }
            _ => panic!("expected the round-over cooldown"),
        }
    }
}
