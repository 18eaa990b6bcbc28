use sdl3::render::{FPoint, Texture, TextureCreator};
use sdl3::video::WindowContext;
use serde::Deserialize;
use thiserror::Error;

use crate::game::{
    GameContext, GameState, HealthBarStyle,
    audio::SoundBank,
    fighter::{Action, Fighter, PlayerSlot, Profile},
    input::InputSnapshot,
    render::{
        animation::{Animation, SpriteSheet},
        load_texture,
    },
    stage::{Backdrop, Stage},
};

/// Anything that can go wrong between launch and the first frame.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode image '{path}'")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("sdl error: {0}")]
    Sdl(String),
    #[error("fighter '{name}' has no frames for action '{action}'")]
    EmptyAnimation { name: String, action: &'static str },
    #[error("strip '{name}' has no frames")]
    EmptyStrip { name: String },
    #[error("fighter '{name}' lists {got} animation rows, expected {expected}")]
    WrongAnimationCount {
        name: String,
        got: usize,
        expected: usize,
    },
}

#[derive(Deserialize)]
struct GameJson {
    intro_count: u32,
    health_bar: HealthBarJson,
    main_menu: String,
    countdown: StripJson,
    victory: StripJson,
    backgrounds: BackgroundsJson,
    player1: FighterJson,
    player2: FighterJson,
}

#[derive(Deserialize)]
struct HealthBarJson {
    w: f32,
    h: f32,
}

/// A vertical strip of equally sized frames in one image.
#[derive(Deserialize)]
struct StripJson {
    path: String,
    frames: usize,
    frame_w: f32,
    frame_h: f32,
}

impl StripJson {
    fn make_animation<'a>(
        &self,
        texture_creator: &'a TextureCreator<WindowContext>,
        global_textures: &mut Vec<Texture<'a>>,
    ) -> Result<Animation, SetupError> {
        let texture_index = load_texture(texture_creator, global_textures, &self.path)?;
        Animation::new(
            texture_index,
            self.frames,
            self.frame_w,
            self.frame_h,
            &self.path,
        )
    }
}

#[derive(Deserialize)]
struct BackgroundsJson {
    normal: String,
    forest: String,
    ice: String,
}

#[derive(Deserialize)]
struct FPointJson {
    x: f32,
    y: f32,
}

impl FPointJson {
    fn to_point(&self) -> FPoint {
        FPoint::new(self.x, self.y)
    }
}

#[derive(Deserialize)]
struct FighterJson {
    name: String,
    sheet: String,
    cell: f32,
    size: f32,
    scale: f32,
    offset: FPointJson,
    spawn: FPointJson,
    flipped: bool,
    animation_steps: Vec<usize>,
    sound: String,
}

impl FighterJson {
    fn animation_steps(&self) -> Result<[usize; Action::COUNT], SetupError> {
        let steps: [usize; Action::COUNT] =
            self.animation_steps
                .as_slice()
                .try_into()
                .map_err(|_| SetupError::WrongAnimationCount {
                    name: self.name.clone(),
                    got: self.animation_steps.len(),
                    expected: Action::COUNT,
                })?;
        Ok(steps)
    }

    fn make_profile<'a>(
        &self,
        texture_creator: &'a TextureCreator<WindowContext>,
        global_textures: &mut Vec<Texture<'a>>,
        sounds: &mut SoundBank,
    ) -> Result<Profile, SetupError> {
        let texture_index = load_texture(texture_creator, global_textures, &self.sheet)?;
        let sheet = SpriteSheet::new(texture_index, self.cell, self.animation_steps()?, &self.name)?;
        Ok(Profile {
            name: self.name.clone(),
            sheet,
            size: self.size,
            scale: self.scale,
            offset: self.offset.to_point(),
            spawn: self.spawn.to_point(),
            start_flip: self.flipped,
            sound: sounds.register(&self.sound),
        })
    }
}

/// Loads the session config, decoding every referenced texture into the
/// global table along the way.
pub fn load<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    global_textures: &mut Vec<Texture<'a>>,
    path: &str,
) -> Result<(GameContext, GameState, SoundBank), SetupError> {
    let raw = std::fs::read_to_string(path).map_err(|err| SetupError::Io {
        path: path.to_string(),
        source: err,
    })?;
    let json: GameJson = serde_json::from_str(&raw).map_err(|err| SetupError::Parse {
        path: path.to_string(),
        source: err,
    })?;

    let main_menu_texture = load_texture(texture_creator, global_textures, &json.main_menu)?;
    let countdown_animation = json
        .countdown
        .make_animation(texture_creator, global_textures)?;
    let victory_animation = json
        .victory
        .make_animation(texture_creator, global_textures)?;

    let stage = Stage::init(
        texture_creator,
        global_textures,
        [
            json.backgrounds.normal.as_str(),
            json.backgrounds.forest.as_str(),
            json.backgrounds.ice.as_str(),
        ],
    )?;

    let mut sounds = SoundBank::new();
    let player1 = json
        .player1
        .make_profile(texture_creator, global_textures, &mut sounds)?;
    let player2 = json
        .player2
        .make_profile(texture_creator, global_textures, &mut sounds)?;

    log::info!(
        "Loaded config '{}': {} vs {}",
        path,
        player1.name,
        player2.name
    );

    let context = GameContext {
        main_menu_texture,
        countdown_animation,
        victory_animation,
        intro_count: json.intro_count,
        health_bar: HealthBarStyle {
            w: json.health_bar.w,
            h: json.health_bar.h,
        },
        stage,
        player1,
        player2,
    };
    let state = GameState {
        snapshot: InputSnapshot::default(),
        backdrop: Backdrop::default(),
        player1: Fighter::new(PlayerSlot::One, &context.player1, 0),
        player2: Fighter::new(PlayerSlot::Two, &context.player2, 0),
    };

    Ok((context, state, sounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIGHTER_JSON: &str = r#"{
        "name": "warrior",
        "sheet": "./resources/textures/warrior.png",
        "cell": 162.0,
        "size": 162.0,
        "scale": 4.0,
        "offset": { "x": 72.0, "y": 120.0 },
        "spawn": { "x": 200.0, "y": 310.0 },
        "flipped": false,
        "animation_steps": [10, 8, 1, 7, 7, 3, 7],
        "sound": "sword"
    }"#;

    #[test]
    fn fighter_json_parses_and_converts() {
        let fighter: FighterJson = serde_json::from_str(FIGHTER_JSON).unwrap();
        assert_eq!(fighter.name, "warrior");
        assert_eq!(fighter.animation_steps().unwrap(), [10, 8, 1, 7, 7, 3, 7]);
        assert_eq!(fighter.spawn.to_point().x, 200.0);
        assert!(!fighter.flipped);
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let mut fighter: FighterJson = serde_json::from_str(FIGHTER_JSON).unwrap();
        fighter.animation_steps.pop();
        assert!(matches!(
            fighter.animation_steps(),
            Err(SetupError::WrongAnimationCount { got: 6, .. })
        ));
    }

    #[test]
    fn missing_field_fails_the_parse() {
        let err = serde_json::from_str::<FighterJson>(r#"{ "name": "warrior" }"#);
        assert!(err.is_err());
    }

    #[test]
    fn shipped_config_is_well_formed() {
        let json: GameJson =
            serde_json::from_str(include_str!("../../resources/game.json")).unwrap();

        // Hitbox side equals the sprite cell for both fighters
        for fighter in [&json.player1, &json.player2] {
            assert_eq!(fighter.size, fighter.cell, "fighter '{}'", fighter.name);
            fighter.animation_steps().unwrap();
        }
        assert!(json.countdown.frames > 0);
        assert!(json.victory.frames > 0);
        assert!(json.intro_count > 0);
    }
}
