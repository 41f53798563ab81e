use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item. The id is supplied by the caller and is not required
/// to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Todo {
        Todo {
            id: 1,
            name: "buy milk".to_string(),
            due_date: Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap(),
            is_completed: false,
        }
    }

    #[test]
    fn todo_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "buy milk");
        assert_eq!(json["dueDate"], "2030-01-02T03:04:05Z");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn todo_accepts_offset_timestamps() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":7,"name":"x","dueDate":"2030-01-02T05:04:05+02:00","isCompleted":true}"#,
        )
        .unwrap();
        assert_eq!(todo.due_date, Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap());
        assert!(todo.is_completed);
    }

    #[test]
    fn todo_rejects_missing_due_date() {
        let result: Result<Todo, _> =
            serde_json::from_str(r#"{"id":1,"name":"x","isCompleted":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_allows_empty_name() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"name":"","dueDate":"2030-01-01T00:00:00Z","isCompleted":false}"#,
        )
        .unwrap();
        assert!(todo.name.is_empty());
    }
}
