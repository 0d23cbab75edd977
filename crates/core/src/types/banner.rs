//! Promotional banners for the home page carousel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::BannerId;

/// A single promotional banner.
///
/// Banners are fetched once at bootstrap, ordered by creation time
/// descending, and the fetched list is the carousel's only data source for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BannerRow", into = "BannerRow")]
pub struct Banner {
    pub id: BannerId,
    pub content: BannerContent,
    pub created_at: DateTime<Utc>,
}

/// The banner payload, tagged by the row's `type` column.
///
/// Exactly two cases; rendering dispatches exhaustively on the tag. An
/// `Image` banner without an image URL degrades to the text panel (which is
/// empty when title and description are also absent).
#[derive(Debug, Clone, PartialEq)]
pub enum BannerContent {
    Image {
        image_url: Option<String>,
        title: Option<String>,
        description: Option<String>,
    },
    Text {
        title: Option<String>,
        description: Option<String>,
    },
}

impl BannerContent {
    /// The banner title, regardless of variant.
    #[must_use]
    pub const fn title(&self) -> Option<&String> {
        match self {
            Self::Image { title, .. } | Self::Text { title, .. } => title.as_ref(),
        }
    }
}

/// Flat wire representation of a banner row.
///
/// The data service stores banners as a single table with a `type`
/// discriminator and nullable payload columns; [`Banner`] normalizes that
/// into the tagged [`BannerContent`] enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BannerRow {
    id: BannerId,
    #[serde(rename = "type")]
    kind: BannerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BannerKind {
    Image,
    // Any unrecognized tag renders as a text banner, matching the
    // fall-through in the original table design.
    #[serde(other)]
    Text,
}

impl From<BannerRow> for Banner {
    fn from(row: BannerRow) -> Self {
        let content = match row.kind {
            BannerKind::Image => BannerContent::Image {
                image_url: row.image_url,
                title: row.title,
                description: row.description,
            },
            BannerKind::Text => BannerContent::Text {
                title: row.title,
                description: row.description,
            },
        };

        Self {
            id: row.id,
            content,
            created_at: row.created_at,
        }
    }
}

impl From<Banner> for BannerRow {
    fn from(banner: Banner) -> Self {
        match banner.content {
            BannerContent::Image {
                image_url,
                title,
                description,
            } => Self {
                id: banner.id,
                kind: BannerKind::Image,
                image_url,
                title,
                description,
                created_at: banner.created_at,
            },
            BannerContent::Text { title, description } => Self {
                id: banner.id,
                kind: BannerKind::Text,
                image_url: None,
                title,
                description,
                created_at: banner.created_at,
            },
        }
    }
}
