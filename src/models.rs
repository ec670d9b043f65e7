//! Frontend Models
//!
//! Scenario content, answers and the results handoff.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One answer choice of a scripted question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: u32,
    pub text: String,
    /// Placeholder for the "your own answer" text entry
    #[serde(default)]
    pub free_text: bool,
}

impl Choice {
    pub fn fixed(id: u32, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            free_text: false,
        }
    }

    pub fn free_text(id: u32) -> Self {
        Self {
            id,
            text: String::new(),
            free_text: true,
        }
    }
}

/// Scripted question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub choices: Vec<Choice>,
}

/// Question id and text only, for listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub id: u32,
    pub text: String,
}

impl From<&Question> for QuestionSummary {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
        }
    }
}

/// Recorded answer to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// A card dragged into the slot
    Choice { id: u32, text: String },
    /// Typed by the user
    FreeText { text: String },
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Choice { text, .. } | Answer::FreeText { text } => text,
        }
    }

    pub fn choice_id(&self) -> Option<u32> {
        match self {
            Answer::Choice { id, .. } => Some(*id),
            Answer::FreeText { .. } => None,
        }
    }
}

/// Answers keyed by question id
pub type AnswerMap = BTreeMap<u32, Answer>;

/// Everything the results scene needs once the guide is complete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsHandoff {
    pub questions: Vec<Question>,
    pub answers: AnswerMap,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("{0} is not a number")]
    NotANumber(&'static str),
    #[error("latitude must be between -90 and 90")]
    LatitudeRange,
    #[error("longitude must be between -180 and 180")]
    LongitudeRange,
}

/// User location picked in the first scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Parse form input; accepts a decimal comma
    pub fn parse(lat: &str, lng: &str) -> Result<Self, LocationError> {
        let lat = parse_coordinate(lat, "latitude")?;
        let lng = parse_coordinate(lng, "longitude")?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LocationError::LatitudeRange);
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(LocationError::LongitudeRange);
        }
        Ok(Self { lat, lng })
    }
}

fn parse_coordinate(raw: &str, name: &'static str) -> Result<f64, LocationError> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(LocationError::NotANumber(name))
}
