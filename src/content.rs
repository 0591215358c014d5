//! Slide text as produced by the language model, and the curriculum that drives
//! generation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} slides, but got {found}")]
    SlideCount { expected: usize, found: usize },

    #[error("slide {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("curriculum entry {path:?} should be {expected}")]
    Curriculum { path: String, expected: &'static str },
}

/// The text of one slide and the prompt for the picture that goes with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Body text shown under the picture
    pub content: String,
    /// Prompt handed to the image generator
    pub image: String,
}

/// Every slide of one lesson, in order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    /// Parse model output and check it has exactly `expected` non-empty slides
    pub fn from_json(json: &str, expected: usize) -> Result<SlideDeck, ContentError> {
        let deck: SlideDeck = serde_json::from_str(json.trim())?;
        deck.validate(expected)?;
        Ok(deck)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, expected: usize) -> Result<SlideDeck, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, expected)
    }

    pub fn validate(&self, expected: usize) -> Result<(), ContentError> {
        if self.slides.len() != expected {
            return Err(ContentError::SlideCount {
                expected,
                found: self.slides.len(),
            });
        }

        for (index, slide) in self.slides.iter().enumerate() {
            if slide.content.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    index: index + 1,
                    field: "content",
                });
            }
            if slide.image.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    index: index + 1,
                    field: "image",
                });
            }
        }

        Ok(())
    }

    /// JSON schema of a deck, for constraining model output to something
    /// [SlideDeck::from_json] accepts
    pub fn schema() -> Value {
        json!({
            "title": "SlideDeck",
            "type": "object",
            "properties": {
                "slides": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "content": { "type": "string" },
                            "image": { "type": "string" }
                        },
                        "required": ["content", "image"]
                    }
                }
            },
            "required": ["slides"]
        })
    }
}

/// The instruction sent to the language model for a lesson on `topic`
pub fn lesson_prompt(topic: &str, count: usize) -> String {
    format!(
        r#"You are an expert educator creating educational slides. For the topic "{topic}", generate exactly {count} slides.
Each slide must be a JSON object with two keys:
  - "content": 3~5 sentences of text in layman's terms, all lowercase besides proper nouns, explaining the topic in an engaging and easy-to-understand manner.
  - "image": a specific stable diffusion prompt describing an image that complements the slide's content. The prompt should name specific elements (portraits, paintings, diagrams, ...) and describe the mood and visual style.
The default image prompt should be for a vertical 4:3 image in a minimalistic and aesthetic style, for example:
    "portrait of a serene figure in minimalist style, vertical 4:3 composition, soft pastel colors, clean lines, calm aesthetic background"
Only diverge from this default if the topic explicitly mentions a different art style or artist.

Format your output as valid JSON that strictly follows this schema:

{schema}
"#,
        schema = SlideDeck::schema()
    )
}

/// A curriculum: units made of weeks made of lesson topics, all in authored order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Curriculum {
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub title: String,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub title: String,
    pub lessons: Vec<String>,
}

/// One lesson topic together with the unit and week it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson<'c> {
    pub unit: &'c str,
    pub week: &'c str,
    pub topic: &'c str,
}

impl Curriculum {
    /// Parse a curriculum of the form `{"unit": {"week": ["lesson", ...]}}`. Key order
    /// in the document is kept.
    pub fn from_json(json: &str) -> Result<Curriculum, ContentError> {
        let root: Map<String, Value> = serde_json::from_str(json)?;

        let mut units = Vec::with_capacity(root.len());
        for (unit_title, weeks) in root {
            let Value::Object(weeks) = weeks else {
                return Err(ContentError::Curriculum {
                    path: unit_title,
                    expected: "an object of weeks",
                });
            };

            let mut unit = Unit {
                title: unit_title,
                weeks: Vec::with_capacity(weeks.len()),
            };
            for (week_title, lessons) in weeks {
                let lessons: Vec<String> =
                    serde_json::from_value(lessons).map_err(|_| ContentError::Curriculum {
                        path: format!("{}/{}", unit.title, week_title),
                        expected: "an array of lesson topics",
                    })?;
                unit.weeks.push(Week {
                    title: week_title,
                    lessons,
                });
            }
            units.push(unit);
        }

        Ok(Curriculum { units })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Curriculum, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Every lesson, unit by unit and week by week
    pub fn lessons(&self) -> impl Iterator<Item = Lesson<'_>> {
        self.units.iter().flat_map(|unit| {
            unit.weeks.iter().flat_map(move |week| {
                week.lessons.iter().map(move |topic| Lesson {
                    unit: &unit.title,
                    week: &week.title,
                    topic,
                })
            })
        })
    }
}
