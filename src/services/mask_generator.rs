//! Numbered alpha masks for rectangular minimaps.
//!
//! Each mask is an opaque white square with transparent bands of growing
//! height at the top and bottom edge. Mask `n` of `count` leaves the central
//! band visible; lower numbers crop more of the map.

use crate::error::MaskError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];
const BYTES_PER_PIXEL: usize = 4;

/// Largest accepted mask edge in pixels
pub const MAX_MASK_SIZE: u32 = 8192;

/// Options for [`generate_masks`]
#[derive(Debug, Clone, PartialEq)]
pub struct MaskOptions {
    /// Directory receiving `<n>.png`
    pub output_dir: PathBuf,
    /// Width and height in pixels
    pub size: u32,
    /// Number of masks; band heights run from 0 to `count - 1`
    pub count: u32,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("masks"),
            size: 256,
            count: 127,
        }
    }
}

/// Render one RGBA8 mask.
///
/// Rows `0..=band` (the top rectangle includes its far edge) and rows
/// `size - band..size` are fully transparent; everything else is opaque white.
/// Rows past the image edge are ignored.
pub fn render_mask(size: u32, band: u32) -> Vec<u8> {
    if size == 0 {
        return Vec::new();
    }
    let size = size as usize;
    let band = band as usize;
    let row_bytes = size * BYTES_PER_PIXEL;
    let mut pixels: Vec<u8> = OPAQUE_WHITE.repeat(size * size);

    let top_end = (band + 1).min(size);
    let bottom_start = size.saturating_sub(band);

    for (y, row) in pixels.chunks_exact_mut(row_bytes).enumerate() {
        if y < top_end || y >= bottom_start {
            for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                px[3] = 0;
            }
        }
    }

    pixels
}

/// File number for a band height: `count + 1 - band`, so the full set runs
/// from `count + 1` down to `2`. `None` when the number does not fit a `u32`
/// or the band lies past `count`.
pub fn mask_number(count: u32, band: u32) -> Option<u32> {
    count.checked_add(1)?.checked_sub(band)
}

/// Write every mask into `options.output_dir`, creating it if needed.
/// Returns the written paths in generation order.
pub fn generate_masks(options: &MaskOptions) -> Result<Vec<PathBuf>, MaskError> {
    if options.size == 0 || options.size > MAX_MASK_SIZE {
        return Err(MaskError::UnsupportedSize(options.size));
    }
    if mask_number(options.count, 0).is_none() {
        return Err(MaskError::UnsupportedCount(options.count));
    }

    std::fs::create_dir_all(&options.output_dir).map_err(|source| MaskError::CreateDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let mut written = Vec::new();
    for band in 0..options.count {
        let number =
            mask_number(options.count, band).ok_or(MaskError::UnsupportedCount(options.count))?;
        let path = options.output_dir.join(format!("{number}.png"));
        let pixels = render_mask(options.size, band);
        write_png(&path, options.size, &pixels)?;
        written.push(path);
    }

    tracing::info!(
        masks = written.len(),
        size = options.size,
        dir = %options.output_dir.display(),
        "Generated masks"
    );
    Ok(written)
}

/// Encode RGBA8 pixels as a PNG file.
fn write_png(path: &Path, size: u32, pixels: &[u8]) -> Result<(), MaskError> {
    let io_err = |source: std::io::Error| MaskError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), size, size);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;
    Ok(())
}
