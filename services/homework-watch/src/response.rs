//! Response validation
//!
//! Checks the shape of a decoded API response before any field is read.

use serde_json::Value;

use crate::{Result, WatchError};

/// A validated API response: the homework records in API order plus the
/// server-side timestamp of the response window.
#[derive(Debug)]
pub struct HomeworkFeed {
    /// Homework records, most recent submission first
    pub homeworks: Vec<Value>,
    /// The response's `current_date`, when it is an integer
    pub current_date: Option<i64>,
}

/// Validate a decoded API response.
///
/// The response must be a JSON object carrying both `homeworks` (an array)
/// and `current_date`. The record sequence is returned unchanged; it may be
/// empty.
pub fn validate(response: Value) -> Result<HomeworkFeed> {
    let Value::Object(mut map) = response else {
        return Err(WatchError::MalformedResponse(
            "response is not a JSON object",
        ));
    };

    if !map.contains_key("homeworks") || !map.contains_key("current_date") {
        return Err(WatchError::MissingKeys);
    }

    let current_date = map.get("current_date").and_then(Value::as_i64);

    let Some(Value::Array(homeworks)) = map.remove("homeworks") else {
        return Err(WatchError::MalformedResponse("`homeworks` is not an array"));
    };

    Ok(HomeworkFeed {
        homeworks,
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_response_passes_records_through_unchanged() {
        let response = json!({
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"}
            ],
            "current_date": 1700000000
        });

        let feed = validate(response).unwrap();
        assert_eq!(feed.homeworks.len(), 2);
        assert_eq!(feed.homeworks[0]["homework_name"], "hw2");
        assert_eq!(feed.homeworks[1]["homework_name"], "hw1");
        assert_eq!(feed.current_date, Some(1_700_000_000));
    }

    #[test]
    fn empty_homeworks_is_valid() {
        let feed = validate(json!({"homeworks": [], "current_date": 100})).unwrap();
        assert!(feed.homeworks.is_empty());
        assert_eq!(feed.current_date, Some(100));
    }

    #[test]
    fn non_object_response_is_malformed() {
        let err = validate(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, WatchError::MalformedResponse(_)));

        let err = validate(json!("homeworks")).unwrap_err();
        assert!(matches!(err, WatchError::MalformedResponse(_)));
    }

    #[test]
    fn missing_homeworks_key_is_missing_keys() {
        let err = validate(json!({"current_date": 100})).unwrap_err();
        assert!(matches!(err, WatchError::MissingKeys));
    }

    #[test]
    fn missing_current_date_key_is_missing_keys() {
        let err = validate(json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, WatchError::MissingKeys));
    }

    #[test]
    fn non_array_homeworks_is_malformed() {
        let err = validate(json!({"homeworks": {}, "current_date": 100})).unwrap_err();
        assert!(matches!(err, WatchError::MalformedResponse(_)));
    }

    #[test]
    fn non_integer_current_date_is_passed_as_none() {
        let feed = validate(json!({"homeworks": [], "current_date": "today"})).unwrap();
        assert_eq!(feed.current_date, None);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let feed = validate(json!({
            "homeworks": [],
            "current_date": 100,
            "pagination": {"count": 0}
        }))
        .unwrap();
        assert_eq!(feed.current_date, Some(100));
    }
}
