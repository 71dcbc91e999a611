//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads exactly so serde round-trips stay
//! lossless. Optional and newly added server fields use `serde(default)` so
//! an older client keeps working against a newer backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use proctor::config::ProctorConfig;

/// Platform roles. Unknown values from a newer backend fall back to
/// [`UserRole::Unknown`] instead of failing the whole payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Parent,
    Admin,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Display label for toolbars and profile chips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
            Self::Admin => "admin",
            Self::Unknown => "member",
        }
    }
}

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email, if the account has one on file.
    pub email: Option<String>,
    /// Platform role.
    #[serde(default)]
    pub role: UserRole,
}

/// One exam available to the signed-in student, as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamSummary {
    /// Exam template identifier (UUID string).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Allotted time in seconds.
    pub duration_secs: i64,
    pub question_count: u32,
    /// Whether attempts run under proctoring rules.
    #[serde(default)]
    pub proctored: bool,
}

/// Question presentation kinds the exam page knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    FreeText,
    SingleChoice,
    MultiChoice,
}

/// A selectable option for choice questions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
}

/// One question inside an attempt. The prompt is markdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier (UUID string); keys the answer map.
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// Points this question is worth, for the header display.
    #[serde(default)]
    pub points: f64,
}

/// One in-progress test instance, created by the start-test call and owned
/// exclusively by the active exam session until submit or abandonment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamAttempt {
    /// Opaque attempt identifier; keys autosave and submit calls.
    pub attempt_id: String,
    /// The exam template this attempt instantiates.
    pub exam_id: String,
    pub title: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
    /// Server-stamped start time in milliseconds since the Unix epoch.
    pub started_at_ms: i64,
    /// Allotted time in seconds.
    pub duration_secs: i64,
    /// Proctoring rules for this attempt; defaults apply when the template
    /// carries none.
    #[serde(default)]
    pub proctoring: ProctorConfig,
}

/// A student's current response to one question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    /// Free-form text.
    Text(String),
    /// Selected option ids (one for single choice, any number for multi).
    Choices(Vec<String>),
    /// Structured payload for rich question widgets.
    Structured(serde_json::Value),
}

impl AnswerValue {
    /// True when the response carries no content worth counting as answered.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Choices(ids) => ids.is_empty(),
            Self::Structured(value) => value.is_null(),
        }
    }
}

/// Request body for autosave and submit: the full answer snapshot keyed by
/// question id. The client is the source of truth until submit, so every
/// send carries the complete map rather than a delta.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub answers: HashMap<String, AnswerValue>,
}

/// Per-question correctness row inside a submission result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: String,
    pub correct: bool,
    #[serde(default)]
    pub points_awarded: f64,
}

/// Server-computed outcome of a submitted attempt. Immutable once received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub attempt_id: String,
    pub score: f64,
    pub max_score: f64,
    #[serde(default)]
    pub breakdown: Vec<QuestionOutcome>,
    pub submitted_at_ms: i64,
}

impl SubmissionResult {
    /// Score as a 0–100 percentage; zero when the exam has no points.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.max_score <= 0.0 {
            return 0.0;
        }
        (self.score / self.max_score) * 100.0
    }

    /// Count of correct rows in the breakdown.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.breakdown.iter().filter(|row| row.correct).count()
    }
}
