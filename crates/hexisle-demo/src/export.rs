//! PNG export of debug images.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use hexisle_terrain::debug_viz::DebugImage;

/// Errors from writing a debug image.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Writes `image` as an 8-bit RGBA PNG, creating parent directories as needed.
pub fn write_png(image: &DebugImage, path: &Path) -> Result<(), ExportError> {
    let create_error = |source| ExportError::Create {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(create_error)?;
    }
    let file = File::create(path).map_err(create_error)?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    writer.finish()?;
    Ok(())
}
