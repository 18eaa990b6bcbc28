use sdl3::render::{FRect, Texture};

use crate::game::{config::SetupError, fighter::Action};

/// UI strip whose frames are stacked vertically in one texture
/// (countdown digits, victory card).
pub struct Animation {
    texture_index: usize,
    frames: usize,
    frame_w: f32,
    frame_h: f32,
}

impl Animation {
    /// A strip must hold at least one frame, or frame clamping in
    /// `get_frame` has nothing to clamp to.
    pub fn new(
        texture_index: usize,
        frames: usize,
        frame_w: f32,
        frame_h: f32,
        name: &str,
    ) -> Result<Animation, SetupError> {
        if frames == 0 {
            return Err(SetupError::EmptyStrip {
                name: name.to_string(),
            });
        }
        Ok(Self {
            texture_index,
            frames,
            frame_w,
            frame_h,
        })
    }

    pub fn width(&self) -> f32 {
        self.frame_w
    }

    pub fn height(&self) -> f32 {
        self.frame_h
    }

    pub fn get_frame<'r>(&self, frame: usize, textures: &'r [Texture]) -> (&'r Texture<'r>, FRect) {
        let frame = frame.min(self.frames - 1);
        let src_rect = FRect::new(0.0, frame as f32 * self.frame_h, self.frame_w, self.frame_h);
        (&textures[self.texture_index], src_rect)
    }
}

/// Fighter sprite sheet: one row of square cells per action, columns are
/// the frames of that action's sequence.
pub struct SpriteSheet {
    texture_index: usize,
    cell: f32,
    frames: [usize; Action::COUNT],
}

impl SpriteSheet {
    /// Every action row must hold at least one frame; a sheet that
    /// violates that is rejected here, never discovered mid-update.
    pub fn new(
        texture_index: usize,
        cell: f32,
        frames: [usize; Action::COUNT],
        name: &str,
    ) -> Result<Self, SetupError> {
        for (row, &count) in frames.iter().enumerate() {
            if count == 0 {
                return Err(SetupError::EmptyAnimation {
                    name: name.to_string(),
                    action: Action::from_row(row).name(),
                });
            }
        }

        Ok(Self {
            texture_index,
            cell,
            frames,
        })
    }

    pub fn frame_count(&self, action: Action) -> usize {
        self.frames[action.row()]
    }

    pub fn frame<'r>(
        &self,
        action: Action,
        frame: usize,
        textures: &'r [Texture],
    ) -> (&'r Texture<'r>, FRect) {
        (&textures[self.texture_index], self.frame_src(action, frame))
    }

    pub fn frame_src(&self, action: Action, frame: usize) -> FRect {
        FRect::new(
            frame as f32 * self.cell,
            action.row() as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_rejects_zero_frames() {
        assert!(Animation::new(0, 0, 128.0, 128.0, "countdown").is_err());
        let strip = Animation::new(0, 4, 128.0, 128.0, "countdown").unwrap();
        assert_eq!(strip.width(), 128.0);
    }

    #[test]
    fn sheet_rejects_empty_action_row() {
        let mut frames = [10, 8, 1, 7, 7, 3, 7];
        frames[Action::Death.row()] = 0;
        assert!(SpriteSheet::new(0, 162.0, frames, "warrior").is_err());
    }

    #[test]
    fn sheet_addresses_row_by_action_and_column_by_frame() {
        let sheet = SpriteSheet::new(0, 162.0, [10, 8, 1, 7, 7, 3, 7], "warrior").unwrap();
        let src = sheet.frame_src(Action::Run, 3);
        assert_eq!(src.x, 3.0 * 162.0);
        assert_eq!(src.y, 1.0 * 162.0);
        assert_eq!(src.w, 162.0);
        assert_eq!(src.h, 162.0);
        assert_eq!(sheet.frame_count(Action::Idle), 10);
    }
}
