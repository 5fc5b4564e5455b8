use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Tokens issued by Instagram start with `IGQ`; the literal `IGQ...` is what
/// the sample `.env` ships with and means nobody filled it in.
pub const PLACEHOLDER_TOKEN_PREFIX: &str = "IGQ...";

/// Server-held Instagram Graph API credential.
///
/// `Debug` is redacted so the token never ends up in logs through `Config`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// False for empty values and for the placeholder shipped in examples
    pub fn is_usable(&self) -> bool {
        let value = self.0.trim();
        !value.is_empty() && !value.starts_with(PLACEHOLDER_TOKEN_PREFIX)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Image,
    Video,
    CarouselAlbum,
}

/// One item of the Graph API `/me/media` response
#[derive(Debug, Clone, Deserialize)]
pub struct RawMedia {
    pub id: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub media_type: MediaType,
    #[serde(default)]
    pub media_url: Option<String>,
    pub permalink: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Graph API list envelope. Paging cursors are ignored, only the first page is served.
///
/// Items stay untyped until [`MediaPage::into_posts`] so one bad item cannot
/// fail the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaPage {
    pub data: Vec<Value>,
}

impl MediaPage {
    /// Normalizes every item in upstream order, skipping the ones that do not
    /// parse (missing id or permalink, unknown media type)
    pub fn into_posts(self) -> Vec<Post> {
        self.data
            .into_iter()
            .filter_map(|item| {
                let id = item
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or("<missing>")
                    .to_string();
                match serde_json::from_value::<RawMedia>(item) {
                    Ok(raw) => Some(Post::from(raw)),
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "Skipping Instagram media item");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Normalized post sent to the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub permalink: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub media_type: MediaType,
}

impl Post {
    /// Image shown on the tile. Videos use their thumbnail.
    pub fn display_url(&self) -> Option<&str> {
        match self.media_type {
            MediaType::Video => self
                .thumbnail_url
                .as_deref()
                .or(self.media_url.as_deref()),
            MediaType::Image | MediaType::CarouselAlbum => self.media_url.as_deref(),
        }
    }
}

impl From<RawMedia> for Post {
    fn from(raw: RawMedia) -> Self {
        Self {
            id: raw.id,
            caption: raw.caption.unwrap_or_default(),
            media_url: raw.media_url,
            permalink: raw.permalink,
            thumbnail_url: raw.thumbnail_url,
            media_type: raw.media_type,
        }
    }
}
