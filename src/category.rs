use core::fmt;
use core::str::FromStr;

use crate::notifier::Audio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Error,
    Info,
    Warning,
}

/// Fixed presentation of a category.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub token: &'static str,
    pub label: &'static str,
    pub rgba: [u8; 4],
    /// Not drawn into the raster, kept for text renderings.
    pub symbol: char,
    pub audio: Audio,
}

const INFO: usize = 2;

static PALETTES: [Palette; 4] = [
    Palette {
        token: "success",
        label: "Success",
        rgba: [46, 204, 113, 255],
        symbol: '✓',
        audio: Audio::Default,
    },
    Palette {
        token: "error",
        label: "Error",
        rgba: [231, 76, 60, 255],
        symbol: '✗',
        audio: Audio::Default,
    },
    Palette {
        token: "info",
        label: "Info",
        rgba: [52, 152, 219, 255],
        symbol: 'ℹ',
        audio: Audio::Silent,
    },
    Palette {
        token: "warning",
        label: "Warning",
        rgba: [241, 196, 15, 255],
        symbol: '⚠',
        audio: Audio::Default,
    },
];

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Info,
        Category::Warning,
    ];

    pub fn palette(self) -> &'static Palette {
        palette_for(self.as_str())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Info => "info",
            Category::Warning => "warning",
        }
    }
}

/// Looks a palette up by its token, falling back to `info` for anything unknown.
pub fn palette_for(name: &str) -> &'static Palette {
    PALETTES
        .iter()
        .find(|palette| palette.token == name)
        .unwrap_or(&PALETTES[INFO])
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid notification type: {0}. Valid types are: success, error, info, warning")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
