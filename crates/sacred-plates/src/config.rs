//! Rendering profiles and studio configuration.
//!
//! A [`PlateVariant`] names a profile; [`StudioConfig`] holds the profile
//! for each variant plus the canonical pattern size. Every field has a
//! default, so a partial YAML/JSON file only overrides what it mentions.

use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::GeometryParameters;

/// Named rendering profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateVariant {
    Thumbnail,
    Full,
}

impl PlateVariant {
    pub fn all() -> &'static [PlateVariant] {
        &[PlateVariant::Thumbnail, PlateVariant::Full]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlateVariant::Thumbnail => "thumbnail",
            PlateVariant::Full => "full",
        }
    }

    pub fn from_name(name: &str) -> Option<PlateVariant> {
        match name.to_lowercase().as_str() {
            "thumbnail" | "thumb" => Some(PlateVariant::Thumbnail),
            "full" => Some(PlateVariant::Full),
            _ => None,
        }
    }

    /// Base stroke opacity before jitter.
    pub fn opacity(&self) -> f64 {
        match self {
            PlateVariant::Thumbnail => 0.85,
            PlateVariant::Full => 0.92,
        }
    }
}

impl std::fmt::Display for PlateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canvas and stroke settings for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderProfile {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stroke_width: f64,
    /// Curve resolution handed to generators and the line-set converter
    pub detail: u32,
    /// Relative stroke-width variation per element (0.1 = ±10%)
    pub jitter: f64,
}

impl RenderProfile {
    pub const THUMBNAIL: RenderProfile = RenderProfile {
        width: 320.0,
        height: 240.0,
        padding: 26.0,
        stroke_width: 1.2,
        detail: 48,
        jitter: 0.12,
    };

    pub const FULL: RenderProfile = RenderProfile {
        width: 960.0,
        height: 720.0,
        padding: 48.0,
        stroke_width: 1.6,
        detail: 140,
        jitter: 0.08,
    };
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::THUMBNAIL
    }
}

/// A profile as written in a config file: any subset of fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProfileOverrides {
    width: Option<f64>,
    height: Option<f64>,
    padding: Option<f64>,
    stroke_width: Option<f64>,
    detail: Option<u32>,
    jitter: Option<f64>,
}

impl ProfileOverrides {
    fn apply(self, base: RenderProfile) -> RenderProfile {
        RenderProfile {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            padding: self.padding.unwrap_or(base.padding),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            detail: self.detail.unwrap_or(base.detail),
            jitter: self.jitter.unwrap_or(base.jitter),
        }
    }
}

fn thumbnail_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<RenderProfile, D::Error> {
    Ok(ProfileOverrides::deserialize(d)?.apply(RenderProfile::THUMBNAIL))
}

fn full_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<RenderProfile, D::Error> {
    Ok(ProfileOverrides::deserialize(d)?.apply(RenderProfile::FULL))
}

/// Settings shared by every request a studio serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Canonical pattern size passed to generators
    pub size: f64,
    /// Missing fields keep the built-in thumbnail values
    #[serde(deserialize_with = "thumbnail_overrides")]
    pub thumbnail: RenderProfile,
    /// Missing fields keep the built-in full values
    #[serde(deserialize_with = "full_overrides")]
    pub full: RenderProfile,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            size: 2.0,
            thumbnail: RenderProfile::THUMBNAIL,
            full: RenderProfile::FULL,
        }
    }
}

impl StudioConfig {
    pub fn profile(&self, variant: PlateVariant) -> &RenderProfile {
        match variant {
            PlateVariant::Thumbnail => &self.thumbnail,
            PlateVariant::Full => &self.full,
        }
    }

    /// Generator parameters for a variant.
    pub fn parameters(&self, variant: PlateVariant) -> GeometryParameters {
        GeometryParameters::new(self.size, self.profile(variant).detail)
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_profile(mut self, variant: PlateVariant, profile: RenderProfile) -> Self {
        match variant {
            PlateVariant::Thumbnail => self.thumbnail = profile,
            PlateVariant::Full => self.full = profile,
        }
        self
    }
}
