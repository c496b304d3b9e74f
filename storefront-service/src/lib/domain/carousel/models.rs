use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::SlideAttributeError;
use crate::domain::values::Label;

/// Homepage carousel entry linking to a product, a page, or an external URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSlide {
    pub id: SlideId,
    pub title: Label,
    pub subtitle: Option<String>,
    pub image_url: Label,
    pub link_type: LinkType,
    pub link_target: Label,
    pub button_text: Option<String>,
    pub order: i32,
    pub effect: SlideEffect,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Slide identifier (database serial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub i32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a slide's `link_target` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkType {
    /// Target is a product slug
    Product,
    /// Target is a page slug
    Page,
    /// Target is an absolute URL
    External,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Product => "PRODUCT",
            LinkType::Page => "PAGE",
            LinkType::External => "EXTERNAL",
        }
    }
}

impl FromStr for LinkType {
    type Err = SlideAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRODUCT" => Ok(LinkType::Product),
            "PAGE" => Ok(LinkType::Page),
            "EXTERNAL" => Ok(LinkType::External),
            other => Err(SlideAttributeError::UnknownLinkType(other.to_string())),
        }
    }
}

/// Transition used when the slide is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlideEffect {
    #[default]
    Slide,
    Fade,
}

impl SlideEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideEffect::Slide => "SLIDE",
            SlideEffect::Fade => "FADE",
        }
    }
}

impl FromStr for SlideEffect {
    type Err = SlideAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SLIDE" => Ok(SlideEffect::Slide),
            "FADE" => Ok(SlideEffect::Fade),
            other => Err(SlideAttributeError::UnknownEffect(other.to_string())),
        }
    }
}

/// Validated slide fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDraft {
    pub title: Label,
    pub subtitle: Option<String>,
    pub image_url: Label,
    pub link_type: LinkType,
    pub link_target: Label,
    pub button_text: Option<String>,
    pub order: i32,
    pub effect: SlideEffect,
}
