use std::fmt;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use glium::Display;
use glium::glutin::surface::WindowSurface;
use glium::texture::{MipmapsOption, RawImage2d, Texture2d};
use glium::uniforms::{
    MagnifySamplerFilter, MinifySamplerFilter, Sampler, SamplerWrapFunction,
};
use image::{ImageReader, RgbaImage};
use log::info;

#[derive(Debug, Clone)]
pub enum ImageLoadError {
    ImageNotFound(PathBuf),
    UnsupportedImage(PathBuf),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageNotFound(path) => write!(f, "The image {:?} could not be found", path),
            Self::UnsupportedImage(path) => {
                write!(f, "The format of the image {:?} is not supported", path)
            }
        }
    }
}

impl std::error::Error for ImageLoadError {}

#[derive(Copy, Clone, Debug, Default)]
pub struct TextureOptions {
    /// Put the last row of the file first, so image files with a top-left origin
    /// show upright with texture coordinates that start at the bottom-left.
    pub flip_vertically: bool,
}

pub fn load_image(path: &Path, options: TextureOptions) -> Result<RgbaImage, ImageLoadError> {
    info!("Loading image {:?}", path);

    let reader =
        ImageReader::open(path).map_err(|_| ImageLoadError::ImageNotFound(path.to_path_buf()))?;

    let reader = reader
        .with_guessed_format()
        .map_err(|_| ImageLoadError::UnsupportedImage(path.to_path_buf()))?;

    let mut decoded = reader
        .decode()
        .map_err(|_| ImageLoadError::UnsupportedImage(path.to_path_buf()))?;

    if options.flip_vertically {
        decoded = decoded.flipv();
    }

    Ok(decoded.into_rgba8())
}

pub struct Texture2D {
    pub inner_texture: Texture2d,
}

impl Texture2D {
    pub fn load(
        path: &Path,
        options: TextureOptions,
        display: &Display<WindowSurface>,
    ) -> Result<Self> {
        let rgba8 = load_image(path, options)?;
        let dimensions = rgba8.dimensions();
        let raw_image = RawImage2d::from_raw_rgba(rgba8.into_raw(), dimensions);

        let inner_texture =
            Texture2d::with_mipmaps(display, raw_image, MipmapsOption::AutoGeneratedMipmaps)?;

        info!(
            "Uploaded {:?} as a {}x{} texture",
            path, dimensions.0, dimensions.1
        );

        Ok(Self { inner_texture })
    }

    /// Repeats outside [0, 1] and filters linearly in both directions.
    pub fn sampled(&self) -> Sampler<'_, Texture2d> {
        self.inner_texture
            .sampled()
            .wrap_function(SamplerWrapFunction::Repeat)
            .minify_filter(MinifySamplerFilter::Linear)
            .magnify_filter(MagnifySamplerFilter::Linear)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::Rgba;

    use super::*;

    const TOP: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BOTTOM: Rgba<u8> = Rgba([0, 0, 255, 128]);

    fn temp_path(extension: &str) -> PathBuf {
        std::env::temp_dir().join(format!("texture-{}.{}", fastrand::u64(..), extension))
    }

    fn write_two_row_png() -> PathBuf {
        let image = RgbaImage::from_fn(3, 2, |_, y| if y == 0 { TOP } else { BOTTOM });
        let path = temp_path("png");
        image.save(&path).unwrap();

        path
    }

    #[test]
    fn loads_png_as_rgba() {
        let path = write_two_row_png();

        let image = load_image(&path, TextureOptions::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(*image.get_pixel(0, 0), TOP);
        assert_eq!(*image.get_pixel(2, 1), BOTTOM);
    }

    #[test]
    fn flips_rows_when_asked() {
        let path = write_two_row_png();

        let image = load_image(
            &path,
            TextureOptions {
                flip_vertically: true,
            },
        )
        .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(*image.get_pixel(0, 0), BOTTOM);
        assert_eq!(*image.get_pixel(1, 1), TOP);
    }

    #[test]
    fn expands_rgb_to_rgba() {
        let image = image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]));
        let path = temp_path("png");
        image.save(&path).unwrap();

        let loaded = load_image(&path, TextureOptions::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(*loaded.get_pixel(1, 1), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = temp_path("png");

        let error = load_image(&path, TextureOptions::default()).unwrap_err();

        assert!(matches!(error, ImageLoadError::ImageNotFound(ref missing) if *missing == path));
    }

    #[test]
    fn garbage_is_unsupported() {
        let path = temp_path("png");
        fs::write(&path, b"definitely not an image").unwrap();

        let error = load_image(&path, TextureOptions::default()).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(error, ImageLoadError::UnsupportedImage(_)));
        assert!(error.to_string().contains("is not supported"));
    }

    #[test]
    fn shipped_textures_decode() {
        let textures = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/textures");

        for name in ["container.png", "awesomeface.png"] {
            let image = load_image(&textures.join(name), TextureOptions::default()).unwrap();
            assert!(image.width() > 0 && image.height() > 0);
        }
    }
}
