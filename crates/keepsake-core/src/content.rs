//! Card content: message sections and gallery photos.
//!
//! Content ships inside the binary as a JSON document. It is decoded into raw
//! records first and then validated into the immutable model types the state
//! machines work with.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{CardError, CardResult};

/// The content document compiled into the card.
const BUILTIN_CONTENT: &str = include_str!("../assets/card.json");

/// Date format used by the content document.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extra content rendered inside a section below its body text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionWidget {
    /// The photo gallery / timeline
    PhotoGallery,
    /// A gift box that bursts into sparkles when clicked
    GiftBox,
    /// A list of names signing the card
    Signatures { names: Vec<String> },
}

/// One message screen of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
    /// `#rrggbb` colour used for the title and progress dot
    pub accent_color: String,
    pub widget: Option<SectionWidget>,
}

/// One gallery photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Asset path relative to the asset directory
    pub source: String,
    pub caption: String,
    pub date: NaiveDate,
}

impl Photo {
    /// Long-form date, e.g. "April 1, 2021".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Validated card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    pub sections: Vec<Section>,
    pub photos: Vec<Photo>,
}

#[derive(Deserialize)]
struct RawContent {
    title: String,
    sections: Vec<RawSection>,
    photos: Vec<RawPhoto>,
}

#[derive(Deserialize)]
struct RawSection {
    title: String,
    #[serde(default)]
    body: String,
    accent_color: String,
    #[serde(default)]
    widget: Option<SectionWidget>,
}

#[derive(Deserialize)]
struct RawPhoto {
    source: String,
    caption: String,
    date: String,
}

impl CardContent {
    /// Decode the content document compiled into the binary.
    pub fn builtin() -> CardResult<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Decode and validate a content document.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let raw: RawContent = serde_json::from_str(json)?;

        if raw.sections.is_empty() {
            return Err(CardError::EmptySections);
        }
        if raw.photos.is_empty() {
            return Err(CardError::EmptyGallery);
        }

        let sections = raw
            .sections
            .into_iter()
            .map(|s| {
                if !is_hex_color(&s.accent_color) {
                    return Err(CardError::InvalidColor {
                        section: s.title,
                        value: s.accent_color,
                    });
                }
                Ok(Section {
                    title: s.title,
                    body: s.body,
                    accent_color: s.accent_color,
                    widget: s.widget,
                })
            })
            .collect::<CardResult<Vec<_>>>()?;

        let photos = raw
            .photos
            .into_iter()
            .map(|p| match NaiveDate::parse_from_str(&p.date, DATE_FORMAT) {
                Ok(date) => Ok(Photo {
                    source: p.source,
                    caption: p.caption,
                    date,
                }),
                Err(_) => Err(CardError::InvalidDate {
                    caption: p.caption,
                    value: p.date,
                }),
            })
            .collect::<CardResult<Vec<_>>>()?;

        tracing::debug!(
            sections = sections.len(),
            photos = photos.len(),
            "Card content loaded"
        );

        Ok(Self {
            title: raw.title,
            sections,
            photos,
        })
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_loads() {
        let content = CardContent::builtin().unwrap();
        assert_eq!(content.title, "Happy Mother's Day!");
        assert_eq!(content.sections.len(), 5);
        assert_eq!(content.photos.len(), 5);
        assert_eq!(content.photos[0].caption, "Our First Memory Together");
    }

    #[test]
    fn test_builtin_signatures() {
        let content = CardContent::builtin().unwrap();
        let last = content.sections.last().unwrap();
        assert_eq!(last.title, "From All Of Us");
        assert_eq!(
            last.widget,
            Some(SectionWidget::Signatures {
                names: vec![
                    "Nanu".to_string(),
                    "Aadu".to_string(),
                    "Arnav".to_string(),
                    "Shivu".to_string(),
                ]
            })
        );
    }

    #[test]
    fn test_display_date() {
        let content = CardContent::builtin().unwrap();
        assert_eq!(content.photos[0].display_date(), "April 1, 2021");
        assert_eq!(content.photos[4].display_date(), "August 11, 2023");
    }

    #[test]
    fn test_rejects_empty_sections() {
        let json = r##"{"title": "t", "sections": [], "photos": [
            {"source": "a.jpg", "caption": "a", "date": "2021-01-01"}
        ]}"##;
        assert!(matches!(
            CardContent::from_json(json),
            Err(CardError::EmptySections)
        ));
    }

    #[test]
    fn test_rejects_empty_gallery() {
        let json = r##"{"title": "t", "sections": [
            {"title": "s", "accent_color": "#FF69B4"}
        ], "photos": []}"##;
        assert!(matches!(
            CardContent::from_json(json),
            Err(CardError::EmptyGallery)
        ));
    }

    #[test]
    fn test_rejects_bad_color() {
        let json = r##"{"title": "t", "sections": [
            {"title": "s", "accent_color": "pink"}
        ], "photos": [
            {"source": "a.jpg", "caption": "a", "date": "2021-01-01"}
        ]}"##;
        match CardContent::from_json(json) {
            Err(CardError::InvalidColor { section, value }) => {
                assert_eq!(section, "s");
                assert_eq!(value, "pink");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_date() {
        let json = r##"{"title": "t", "sections": [
            {"title": "s", "accent_color": "#FF69B4"}
        ], "photos": [
            {"source": "a.jpg", "caption": "a", "date": "April 1, 2021"}
        ]}"##;
        assert!(matches!(
            CardContent::from_json(json),
            Err(CardError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CardContent::from_json("not json"),
            Err(CardError::Content(_))
        ));
    }
}
