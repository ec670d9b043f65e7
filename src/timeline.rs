//! Timeline Document
//!
//! JSON payload sent to the analysis service:
//! `{ "timeline": { "situation_1": {..}, "situation_2": {..} } }`,
//! one entry per question in scenario order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::{AnswerMap, Question};
use crate::questions::INITIAL_SITUATION;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Only present on the first entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    pub event: String,
    pub actions: Vec<String>,
    pub chosen_action: String,
}

/// Entries keyed `situation_<k>`, serialized in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<(String, TimelineEntry)>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&TimelineEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, entry)| entry)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineDocument {
    pub timeline: Timeline,
}

impl TimelineDocument {
    pub fn build(questions: &[Question], answers: &AnswerMap) -> Self {
        let entries = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let step = index + 1;
                let event = if question.text.is_empty() {
                    format!("Event {}", step)
                } else {
                    question.text.clone()
                };
                let actions = question
                    .choices
                    .iter()
                    .filter(|choice| !choice.free_text)
                    .map(|choice| choice.text.clone())
                    .collect();
                let chosen_action = answers
                    .get(&question.id)
                    .map(|answer| answer.text().to_string())
                    .unwrap_or_default();
                let entry = TimelineEntry {
                    situation: (index == 0).then(|| INITIAL_SITUATION.to_string()),
                    event,
                    actions,
                    chosen_action,
                };
                (format!("situation_{}", step), entry)
            })
            .collect();
        Self {
            timeline: Timeline { entries },
        }
    }
}
