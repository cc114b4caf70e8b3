use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context as _;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::category::Category;

pub const ICON_SIZE: u32 = 64;
const MARGIN: u32 = 4;

const EMBEDDED_SUCCESS: &[u8] = include_bytes!("../assets/icons/success.png");
const EMBEDDED_ERROR: &[u8] = include_bytes!("../assets/icons/error.png");
const EMBEDDED_INFO: &[u8] = include_bytes!("../assets/icons/info.png");
const EMBEDDED_WARNING: &[u8] = include_bytes!("../assets/icons/warning.png");

/// Where the icon bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSource {
    #[default]
    Synthesized,
    /// Pre-baked PNGs compiled into the binary, no rasterization.
    Embedded,
}

/// Fills a disc of `color` centred on a transparent square canvas.
///
/// Edge pixels are either in or out, there is no anti-aliasing.
pub fn render(color: [u8; 4]) -> RgbaImage {
    let center = i64::from(ICON_SIZE / 2);
    let radius = i64::from(ICON_SIZE / 2 - MARGIN);

    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = i64::from(x) - center;
        let dy = i64::from(y) - center;

        if dx * dx + dy * dy <= radius * radius {
            Rgba(color)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

pub fn render_category(category: Category) -> RgbaImage {
    render(category.palette().rgba)
}

pub fn embedded_png(category: Category) -> &'static [u8] {
    match category {
        Category::Success => EMBEDDED_SUCCESS,
        Category::Error => EMBEDDED_ERROR,
        Category::Info => EMBEDDED_INFO,
        Category::Warning => EMBEDDED_WARNING,
    }
}

/// Icon files carry the category plus a per-process token so that concurrent
/// runs never share a file.
pub fn file_name(category: Category) -> String {
    format!(
        "notify_icon_{category}_{}_{:04x}.png",
        process::id(),
        rand::random::<u16>()
    )
}

/// An icon file on disk, removed when dropped.
#[derive(Debug)]
pub struct TransientIcon {
    path: PathBuf,
}

impl TransientIcon {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientIcon {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            log::debug!("Could not remove icon '{}': {e}", self.path.display());
        }
    }
}

pub fn write(category: Category, dir: &Path, source: IconSource) -> anyhow::Result<TransientIcon> {
    let path = dir.join(file_name(category));

    let icon = persist(path, |path| match source {
        IconSource::Synthesized => render_category(category)
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to write icon '{}'", path.display())),
        IconSource::Embedded => fs::write(path, embedded_png(category))
            .with_context(|| format!("Failed to write icon '{}'", path.display())),
    })?;

    log::debug!("Wrote {category} icon to '{}'", icon.path().display());

    Ok(icon)
}

/// Guards `path` before `fill` runs, so a half-written file is removed on error.
fn persist(
    path: PathBuf,
    fill: impl FnOnce(&Path) -> anyhow::Result<()>,
) -> anyhow::Result<TransientIcon> {
    let icon = TransientIcon { path };
    fill(&icon.path)?;
    Ok(icon)
}
