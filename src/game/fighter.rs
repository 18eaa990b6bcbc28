use sdl3::{
    render::{Canvas, FPoint, FRect, Texture},
    video::Window,
};

use crate::game::{
    audio::{Mixer, SoundId},
    input::ButtonFlag,
    physics,
    render::animation::SpriteSheet,
};

pub const MAX_HEALTH: i32 = 100;

const SPEED: f32 = 10.0;
const GRAVITY: f32 = 2.0;
const JUMP_VELOCITY: f32 = -30.0;
const GROUND_MARGIN: f32 = 110.0;
const ATTACK_DAMAGE: i32 = 10;
const ATTACK_REACH_BOXES: f32 = 2.0;
const ANIMATION_COOLDOWN_MS: u64 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

/// Animation/behavior state. Each variant maps to one row of the sprite
/// sheet; `Hurt` exists in the sheets but is never selected by the state
/// machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Idle,
    Run,
    Jump,
    Attack1,
    Attack2,
    Hurt,
    Death,
}

impl Action {
    pub const COUNT: usize = 7;

    const ALL: [Action; Self::COUNT] = [
        Action::Idle,
        Action::Run,
        Action::Jump,
        Action::Attack1,
        Action::Attack2,
        Action::Hurt,
        Action::Death,
    ];

    pub fn row(self) -> usize {
        match self {
            Action::Idle => 0,
            Action::Run => 1,
            Action::Jump => 2,
            Action::Attack1 => 3,
            Action::Attack2 => 4,
            Action::Hurt => 5,
            Action::Death => 6,
        }
    }

    pub fn from_row(row: usize) -> Action {
        Self::ALL[row]
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Run => "run",
            Action::Jump => "jump",
            Action::Attack1 => "attack1",
            Action::Attack2 => "attack2",
            Action::Hurt => "hurt",
            Action::Death => "death",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    Light,
    Heavy,
}

impl AttackKind {
    fn action(self) -> Action {
        match self {
            Self::Light => Action::Attack1,
            Self::Heavy => Action::Attack2,
        }
    }
}

/// Per-kind fighter data, built once from config and shared by every
/// incarnation of that fighter across rounds.
pub struct Profile {
    pub name: String,
    pub sheet: SpriteSheet,
    pub size: f32,
    pub scale: f32,
    pub offset: FPoint,
    pub spawn: FPoint,
    pub start_flip: bool,
    pub sound: SoundId,
}

/// The state machine and physics body for one combatant. Rebuilt from its
/// profile at every round start; nothing here survives a round.
pub struct Fighter {
    slot: PlayerSlot,
    rect: FRect,
    vel_y: f32,
    flip: bool,
    running: bool,
    airborne: bool,
    attacking: bool,
    attack_kind: AttackKind,
    health: i32,
    alive: bool,
    action: Action,
    frame: usize,
    frame_time: u64,
}

impl Fighter {
    /// `now` seeds the animation clock so a fighter built mid-session
    /// waits a full tick before its first frame advance.
    pub fn new(slot: PlayerSlot, profile: &Profile, now: u64) -> Self {
        Self {
            slot,
            rect: FRect::new(
                profile.spawn.x,
                profile.spawn.y,
                profile.size,
                profile.size,
            ),
            vel_y: 0.0,
            flip: profile.start_flip,
            running: false,
            airborne: false,
            attacking: false,
            attack_kind: AttackKind::Light,
            health: MAX_HEALTH,
            alive: true,
            action: Action::Idle,
            frame: 0,
            frame_time: now,
        }
    }

    /// One physics and intent step. The round controller skips this call
    /// entirely once the round is over, which also pauses gravity.
    ///
    /// Horizontal movement is positional (±SPEED per frame); only the
    /// vertical axis is velocity-integrated. Returns the attack intent so
    /// the caller can resolve it against the opponent.
    pub fn step_movement(
        &mut self,
        buttons: ButtonFlag,
        screen_w: f32,
        screen_h: f32,
        target: &Fighter,
    ) -> Option<AttackKind> {
        let mut dx = 0.0;
        let mut dy = 0.0;
        self.running = false;
        let mut attack = None;

        if self.alive {
            if buttons.contains(ButtonFlag::LEFT) {
                dx = -SPEED;
                self.running = true;
            }
            if buttons.contains(ButtonFlag::RIGHT) {
                dx = SPEED;
                self.running = true;
            }
            if buttons.contains(ButtonFlag::JUMP) && !self.airborne {
                self.vel_y = JUMP_VELOCITY;
                self.airborne = true;
            }
            if !self.attacking {
                if buttons.contains(ButtonFlag::LIGHT) {
                    attack = Some(AttackKind::Light);
                } else if buttons.contains(ButtonFlag::HEAVY) {
                    attack = Some(AttackKind::Heavy);
                }
            }
        }

        self.vel_y += GRAVITY;
        dy += self.vel_y;

        dx = physics::clamp_horizontal(&self.rect, dx, screen_w);
        if let Some(clamped) = physics::floor_contact(&self.rect, dy, screen_h - GROUND_MARGIN) {
            dy = clamped;
            self.vel_y = 0.0;
            self.airborne = false;
        }

        self.rect.x += dx;
        self.rect.y += dy;

        // Always turn toward the opponent, overriding any prior facing
        self.flip = target.center_x() < self.center_x();

        attack
    }

    /// Selects the action by precedence (death, attack, jump, run, idle)
    /// and advances the animation on the wall clock, decoupled from the
    /// frame rate.
    pub fn update(&mut self, profile: &Profile, now: u64) {
        if self.health <= 0 {
            self.alive = false;
            self.set_action(Action::Death, now);
        } else if self.attacking {
            self.set_action(self.attack_kind.action(), now);
        } else if self.airborne {
            self.set_action(Action::Jump, now);
        } else if self.running {
            self.set_action(Action::Run, now);
        } else {
            self.set_action(Action::Idle, now);
        }

        if now.saturating_sub(self.frame_time) > ANIMATION_COOLDOWN_MS {
            self.frame_time = now;
            self.frame += 1;
        }
        let frames = profile.sheet.frame_count(self.action);
        if self.frame >= frames {
            if !self.alive {
                // Freeze on the death pose
                self.frame = frames - 1;
            } else {
                // Finishing the attack animation re-arms the attack trigger
                self.attacking = false;
                self.frame = 0;
            }
        }
    }

    fn set_action(&mut self, new_action: Action, now: u64) {
        if new_action != self.action {
            self.action = new_action;
            self.frame = 0;
            self.frame_time = now;
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        profile: &Profile,
    ) -> Result<(), sdl3::Error> {
        let (texture, src) = profile.sheet.frame(self.action, self.frame, global_textures);
        let dst = FRect::new(
            self.rect.x - profile.offset.x,
            self.rect.y - profile.offset.y,
            profile.size * profile.scale,
            profile.size * profile.scale,
        );
        canvas.copy_ex(texture, src, dst, 0.0, None, self.flip, false)
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn rect(&self) -> FRect {
        self.rect
    }

    pub fn center_x(&self) -> f32 {
        self.rect.x + self.rect.w / 2.0
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn attacking(&self) -> bool {
        self.attacking
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn flip(&self) -> bool {
        self.flip
    }
}

/// Combat resolution for one attack intent. Edge-triggered: a fighter
/// already mid-attack cannot trigger again until `update` finishes the
/// attack animation. The hitbox extends two box-widths from the attacker's
/// center in the facing direction, spanning the full fighter height.
pub fn resolve_attack(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    kind: AttackKind,
    sound: SoundId,
    mixer: &mut dyn Mixer,
) {
    if attacker.attacking {
        return;
    }
    attacker.attacking = true;
    attacker.attack_kind = kind;
    mixer.play(sound);

    let reach = ATTACK_REACH_BOXES * attacker.rect.w;
    let hit_box = FRect::new(
        attacker.center_x() - if attacker.flip { reach } else { 0.0 },
        attacker.rect.y,
        reach,
        attacker.rect.h,
    );
    if physics::aabb_overlap(&hit_box, &defender.rect) {
        defender.take_damage(ATTACK_DAMAGE);
    }
}
