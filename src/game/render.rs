use image::DynamicImage;
use sdl3::{
    pixels::PixelFormat,
    render::{Texture, TextureCreator},
    sys::pixels::SDL_PIXELFORMAT_ABGR8888,
    video::WindowContext,
};

use crate::game::config::SetupError;

pub mod animation;

fn open_img(file_path: &str) -> Result<DynamicImage, SetupError> {
    let file = std::fs::File::open(file_path).map_err(|err| SetupError::Io {
        path: file_path.to_string(),
        source: err,
    })?;
    let reader = std::io::BufReader::new(file);
    let img = image::ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|err| SetupError::Io {
            path: file_path.to_string(),
            source: err,
        })?
        .decode()
        .map_err(|err| SetupError::Image {
            path: file_path.to_string(),
            source: err,
        })?;

    log::debug!("Loaded image: {file_path}");

    Ok(img)
}

/// Decodes an image file into a streaming texture and hands back its index
/// in the global texture table.
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    global_textures: &mut Vec<Texture<'a>>,
    file_path: &str,
) -> Result<usize, SetupError> {
    let img = open_img(file_path)?;

    let mut texture = texture_creator
        .create_texture_streaming(
            unsafe { PixelFormat::from_ll(SDL_PIXELFORMAT_ABGR8888) },
            img.width(),
            img.height(),
        )
        .map_err(|err| SetupError::Sdl(format!("texture for '{file_path}': {err}")))?;

    texture
        .update(None, &img.to_rgba8(), 4 * img.width() as usize)
        .map_err(|err| SetupError::Sdl(format!("texture for '{file_path}': {err}")))?;

    global_textures.push(texture);

    Ok(global_textures.len() - 1)
}
