//! Session Storage
//!
//! Keeps the full question content for the results page across reloads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::Question;

const QUESTIONS_KEY: &str = "questions";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored value is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn session_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .session_storage()
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

fn save<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    session_storage()?
        .set_item(key, &json)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))
}

fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    let raw = session_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?;
    match raw {
        Some(json) => Ok(Some(decode(&json)?)),
        None => Ok(None),
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, StorageError> {
    Ok(serde_json::from_str(json)?)
}

pub fn save_questions(questions: &[Question]) -> Result<(), StorageError> {
    save(QUESTIONS_KEY, questions)
}

pub fn load_questions() -> Result<Option<Vec<Question>>, StorageError> {
    load(QUESTIONS_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::flood_scenario;

    #[test]
    fn test_stored_questions_decode() {
        let json = serde_json::to_string(&flood_scenario()).unwrap();
        let questions: Vec<Question> = decode(&json).unwrap();
        assert_eq!(questions, flood_scenario());
    }

    #[test]
    fn test_legacy_entries_without_free_text_flag() {
        let questions: Vec<Question> =
            decode(r#"[{"id": 1, "text": "Alerte", "choices": [{"id": 1, "text": "Monter"}]}]"#).unwrap();
        assert!(!questions[0].choices[0].free_text);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = decode::<Vec<Question>>("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
    }
}
