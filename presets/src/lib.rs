//! Named brand and message presets plus request-input parsing helpers.
//!
//! Brands and presets are closed enumerations rather than runtime lookup
//! tables, so adding one is a compile-time-checked change and an unknown
//! name is an explicit error. Colors travel as plain `[r, g, b, a]` arrays
//! here; the compositing crate owns the pixel types.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// RGBA quadruple, 0-255 per channel; alpha 0 is fully transparent.
pub type ColorSpec = [u8; 4];

/// Default banner fill: translucent black.
pub const DEFAULT_FILL: ColorSpec = [0, 0, 0, 180];

/// Default text fill: opaque white.
pub const DEFAULT_TEXT: ColorSpec = [255, 255, 255, 255];

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("unknown brand: {name:?}{}", .suggestion.map(|s| format!(" (did you mean {s:?}?)")).unwrap_or_default())]
    UnknownBrand {
        name: String,
        suggestion: Option<&'static str>,
    },

    #[error("unknown preset index: {0} (valid: 1-5)")]
    UnknownPreset(u32),
}

/// One-click marketing messages, numbered 1-5 like the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Preset {
    BuyDown,
    PriceImprovement,
    BuilderCloseOut,
    VaFirstTimeBuyer,
    OpenHouse,
}

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::BuyDown,
        Self::PriceImprovement,
        Self::BuilderCloseOut,
        Self::VaFirstTimeBuyer,
        Self::OpenHouse,
    ];

    pub fn from_index(index: u32) -> Result<Self, PresetError> {
        match index {
            1 => Ok(Self::BuyDown),
            2 => Ok(Self::PriceImprovement),
            3 => Ok(Self::BuilderCloseOut),
            4 => Ok(Self::VaFirstTimeBuyer),
            5 => Ok(Self::OpenHouse),
            other => Err(PresetError::UnknownPreset(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BuyDown => "1/0 BUY DOWN STARTING @ 3.99%",
            Self::PriceImprovement => "PRICE IMPROVEMENT",
            Self::BuilderCloseOut => "BUILDER CLOSE-OUT SPECIAL",
            Self::VaFirstTimeBuyer => "VA & FIRST-TIME BUYER FRIENDLY",
            Self::OpenHouse => "OPEN HOUSE THIS WEEKEND",
        }
    }

    /// Placement style name understood by the compositing crate.
    pub fn style_name(self) -> &'static str {
        match self {
            Self::BuyDown | Self::BuilderCloseOut | Self::OpenHouse => "left_strip",
            Self::PriceImprovement | Self::VaFirstTimeBuyer => "bottom_ribbon",
        }
    }
}

/// Builder brand kits: label, colors and preferred style in one bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Brand {
    Coventry,
    Davidson,
}

impl Brand {
    pub const ALL: [Self; 2] = [Self::Coventry, Self::Davidson];

    pub fn name(self) -> &'static str {
        match self {
            Self::Coventry => "coventry",
            Self::Davidson => "davidson",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Coventry => "COVENTRY CLOSE-OUT SPECIAL",
            Self::Davidson => "DAVIDSON INCENTIVE",
        }
    }

    pub fn strip_color(self) -> ColorSpec {
        match self {
            Self::Coventry => [7, 42, 80, 200],
            Self::Davidson => [0, 0, 0, 180],
        }
    }

    pub fn text_color(self) -> ColorSpec {
        match self {
            Self::Coventry => [255, 255, 255, 255],
            Self::Davidson => [255, 255, 0, 255],
        }
    }

    pub fn style_name(self) -> &'static str {
        match self {
            Self::Coventry => "left_strip",
            Self::Davidson => "bottom_ribbon",
        }
    }
}

impl FromStr for Brand {
    type Err = PresetError;

    /// Case-insensitive lookup; a near miss gets a `did you mean` hint.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        for brand in Self::ALL {
            if brand.name() == lowered {
                return Ok(brand);
            }
        }
        let suggestion = Self::ALL
            .iter()
            .map(|b| (b.name(), levenshtein::levenshtein(&lowered, b.name())))
            .filter(|&(_, d)| d <= 2)
            .min_by_key(|&(_, d)| d)
            .map(|(name, _)| name);
        Err(PresetError::UnknownBrand {
            name: s.to_string(),
            suggestion,
        })
    }
}

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn sanitize_text(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Parse a `"r,g,b,a"` string, falling back to `default` on any malformed
/// input. Malformed colors are a documented soft failure, not an error.
pub fn parse_rgba(s: &str, default: ColorSpec) -> ColorSpec {
    let parts: Vec<_> = s.split(',').map(|p| p.trim().parse::<u8>()).collect();
    match parts.as_slice() {
        [Ok(r), Ok(g), Ok(b), Ok(a)] => [*r, *g, *b, *a],
        _ => default,
    }
}
