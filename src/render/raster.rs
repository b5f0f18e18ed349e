use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use anyhow::Context as _;

use crate::avatar::compose::AvatarDescriptor;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::svg::{TextBaseline, to_svg};

// Avoid pathological allocations from misconfigured dimensions.
const MAX_DIM: u32 = 4096;

static FONTDB: LazyLock<Arc<usvg::fontdb::Database>> = LazyLock::new(|| {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts for avatar rasterization");
    Arc::new(db)
});

/// Straight (non-premultiplied) RGBA8 pixels of a rendered avatar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarBitmap {
    /// Width in px.
    pub width: u32,
    /// Height in px.
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl AvatarBitmap {
    /// RGBA8 value of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> AvatarResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| AvatarError::render("bitmap buffer does not match its dimensions"))?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode avatar png")?;
        Ok(buf)
    }

    /// Encode as PNG and write to `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> AvatarResult<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Render `desc` to pixels.
///
/// Uses the descriptor's dimensions, or a `fallback_size_px` square when it has none.
pub fn rasterize(desc: &AvatarDescriptor, fallback_size_px: u32) -> AvatarResult<AvatarBitmap> {
    fn to_px(v: f64) -> AvatarResult<u32> {
        if !v.is_finite() || v < 1.0 {
            return Err(AvatarError::render(format!("invalid avatar dimension: {v}")));
        }
        let px = v.round() as u32;
        if px > MAX_DIM {
            return Err(AvatarError::render(format!(
                "avatar dimension too large: {px} (max {MAX_DIM})"
            )));
        }
        Ok(px)
    }

    let fallback = f64::from(fallback_size_px);
    let width = to_px(desc.width.unwrap_or(fallback))?;
    let height = to_px(desc.height.or(desc.width).unwrap_or(fallback))?;

    let sized = AvatarDescriptor {
        width: Some(f64::from(width)),
        height: Some(f64::from(height)),
        ..desc.clone()
    };
    let svg = to_svg(&sized, TextBaseline::DyShift);

    let opts = usvg::Options {
        fontdb: Arc::clone(&*FONTDB),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| AvatarError::render(format!("parse avatar svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AvatarError::render("failed to allocate avatar pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    unpremultiply_rgba8_in_place(&mut data);
    Ok(AvatarBitmap {
        width,
        height,
        data,
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
