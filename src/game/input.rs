use bitflags::bitflags;
use sdl3::keyboard::Keycode;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    pub struct ButtonFlag: u32 {
        const NONE = 0;
        const LEFT = 0b0000_0001;
        const RIGHT = 0b0000_0010;
        const JUMP = 0b0000_0100;
        const LIGHT = 0b0000_1000;
        const HEAVY = 0b0001_0000;

        // Menu-only buttons
        const START = 0b0010_0000;
        const NORMAL_BG = 0b0100_0000;
        const FOREST_BG = 0b1000_0000;
        const ICE_BG = 0b1_0000_0000;
    }
}

pub type Keymap = &'static [(Keycode, ButtonFlag)];

pub const PLAYER1_KEYMAP: Keymap = &[
    (Keycode::A, ButtonFlag::LEFT),
    (Keycode::D, ButtonFlag::RIGHT),
    (Keycode::W, ButtonFlag::JUMP),
    (Keycode::R, ButtonFlag::LIGHT),
    (Keycode::T, ButtonFlag::HEAVY),
];

pub const PLAYER2_KEYMAP: Keymap = &[
    (Keycode::Left, ButtonFlag::LEFT),
    (Keycode::Right, ButtonFlag::RIGHT),
    (Keycode::Up, ButtonFlag::JUMP),
    (Keycode::K, ButtonFlag::LIGHT),
    (Keycode::L, ButtonFlag::HEAVY),
];

pub const MENU_KEYMAP: Keymap = &[
    (Keycode::N, ButtonFlag::NORMAL_BG),
    (Keycode::F, ButtonFlag::FOREST_BG),
    (Keycode::I, ButtonFlag::ICE_BG),
    (Keycode::Return, ButtonFlag::START),
];

/// Digital button state for one keymap, fed by key events.
pub struct KeyState {
    keymap: Keymap,
    pressed: ButtonFlag,
}

impl KeyState {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            pressed: ButtonFlag::NONE,
        }
    }

    pub fn held(&self) -> ButtonFlag {
        self.pressed
    }

    pub fn handle_keypress(&mut self, keycode: Keycode) {
        if let Some(flag) = self.lookup(keycode) {
            self.pressed |= flag;
        }
    }

    pub fn handle_keyrelease(&mut self, keycode: Keycode) {
        if let Some(flag) = self.lookup(keycode) {
            self.pressed.remove(flag);
        }
    }

    fn lookup(&self, keycode: Keycode) -> Option<ButtonFlag> {
        self.keymap
            .iter()
            .find_map(|pair| if pair.0 == keycode { Some(pair.1) } else { None })
    }
}

/// The per-frame input snapshot. Captured once after event handling and
/// handed unchanged to every consumer in that frame.
#[derive(Clone, Copy, Default)]
pub struct InputSnapshot {
    pub player1: ButtonFlag,
    pub player2: ButtonFlag,
    pub menu: ButtonFlag,
}
