use serde::{Deserialize, Serialize};

/// Identifier assigned by whichever backend owns the record. The remote
/// service assigns them server-side; the local store derives them from
/// creation time.
pub type TaskId = i64;

/// Task priority as carried on the wire.
///
/// The remote service has historically emitted both the accented and the
/// unaccented spelling of the medium level, so deserialization accepts
/// either; serialization always writes the canonical unaccented form.
/// Unrecognized values fall back to `Low`, which keeps a fetch from failing
/// on data the renderer is expected to tolerate anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Canonical wire spelling.
    pub fn as_wire(self) -> &'static str {
        match self {
            Priority::High => "ALTA",
            Priority::Medium => "MEDIA",
            Priority::Low => "BAIXA",
        }
    }

    /// Display label for cards and JSON output.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ALTA" => Priority::High,
            "MEDIA" | "MÉDIA" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_wire().to_string()
    }
}

/// A single task record as exchanged with either backend.
///
/// The due date is carried verbatim rather than parsed: a malformed value
/// coming back from a backend still fetches cleanly, and the presentation
/// layer decides what to show for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "prioridade", default)]
    pub priority: Priority,

    #[serde(rename = "dataLimite", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(rename = "concluida", default)]
    pub completed: bool,
}

impl Task {
    /// Copy with the completion flag inverted. Updates always send the full
    /// record, so the copy carries everything else unchanged.
    pub fn with_completion_toggled(&self) -> Task {
        Task {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// A record submitted for creation, before a backend has assigned an id.
/// Serializes with the same wire names as [`Task`] and no `id` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "prioridade", default)]
    pub priority: Priority,

    #[serde(rename = "dataLimite", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(rename = "concluida", default)]
    pub completed: bool,
}

impl TaskDraft {
    /// Promote the draft to a full record once a backend has picked an id.
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            completed: self.completed,
        }
    }
}

/// Which slice of the list the UI is showing. Process-wide display state,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, completed: bool) -> Task {
        Task {
            id,
            name: format!("task {}", id),
            description: String::new(),
            priority: Priority::Low,
            due_date: None,
            completed,
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let record = Task {
            id: 1,
            name: "Ship the release".to_string(),
            description: "Tag and push".to_string(),
            priority: Priority::High,
            due_date: Some("2023-12-01".to_string()),
            completed: false,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["nome"], "Ship the release");
        assert_eq!(value["descricao"], "Tag and push");
        assert_eq!(value["prioridade"], "ALTA");
        assert_eq!(value["dataLimite"], "2023-12-01");
        assert_eq!(value["concluida"], false);
    }

    #[test]
    fn draft_serializes_without_an_id() {
        let draft = TaskDraft {
            name: "Buy milk".to_string(),
            description: String::new(),
            priority: Priority::Low,
            due_date: None,
            completed: false,
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("dataLimite").is_none());
        assert_eq!(value["nome"], "Buy milk");
        assert_eq!(value["concluida"], false);
    }

    #[test]
    fn accented_medium_is_an_alias() {
        let accented: Priority = serde_json::from_value(serde_json::json!("MÉDIA")).unwrap();
        let plain: Priority = serde_json::from_value(serde_json::json!("MEDIA")).unwrap();
        assert_eq!(accented, Priority::Medium);
        assert_eq!(plain, Priority::Medium);
    }

    #[test]
    fn medium_normalizes_to_unaccented_on_output() {
        assert_eq!(serde_json::to_value(Priority::Medium).unwrap(), "MEDIA");
    }

    #[test]
    fn unknown_priority_falls_back_to_low() {
        let parsed: Priority = serde_json::from_value(serde_json::json!("URGENT")).unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn missing_wire_fields_take_defaults() {
        let record: Task = serde_json::from_str(r#"{"id":3,"nome":"Bare"}"#).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.priority, Priority::Low);
        assert!(record.due_date.is_none());
        assert!(!record.completed);
    }

    #[test]
    fn toggling_twice_restores_the_flag() {
        let record = task(1, false);
        let toggled = record.with_completion_toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.with_completion_toggled(), record);
    }

    #[test]
    fn filter_predicates_match_completion_state() {
        let pending = task(1, false);
        let done = task(2, true);

        assert!(StatusFilter::All.matches(&pending));
        assert!(StatusFilter::All.matches(&done));
        assert!(StatusFilter::Pending.matches(&pending));
        assert!(!StatusFilter::Pending.matches(&done));
        assert!(StatusFilter::Completed.matches(&done));
        assert!(!StatusFilter::Completed.matches(&pending));
    }
}
