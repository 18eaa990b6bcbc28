use sdl3::{
    render::{Canvas, Texture, TextureCreator},
    video::{Window, WindowContext},
};

use crate::game::{config::SetupError, render::load_texture};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    Normal,
    Forest,
    Ice,
}

impl Backdrop {
    fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Forest => 1,
            Self::Ice => 2,
        }
    }
}

/// The fixed arena. Only the backdrop art varies; the floor line and
/// bounds are shared by all three.
pub struct Stage {
    backgrounds: [usize; 3],
}

impl Stage {
    pub fn new(backgrounds: [usize; 3]) -> Self {
        Self { backgrounds }
    }

    pub fn init<'a>(
        texture_creator: &'a TextureCreator<WindowContext>,
        global_textures: &mut Vec<Texture<'a>>,
        paths: [&str; 3],
    ) -> Result<Stage, SetupError> {
        let mut backgrounds = [0; 3];
        for (slot, path) in backgrounds.iter_mut().zip(paths) {
            *slot = load_texture(texture_creator, global_textures, path)?;
        }
        Ok(Stage::new(backgrounds))
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        global_textures: &[Texture],
        backdrop: Backdrop,
    ) -> Result<(), sdl3::Error> {
        canvas.copy(&global_textures[self.backgrounds[backdrop.index()]], None, None)
    }
}
