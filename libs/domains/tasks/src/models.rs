use chrono::{DateTime, Utc};
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

// utoipa only takes literals in `#[schema]`, the schema tests keep those
// in line with these
pub const TITLE_MAX_LEN: u64 = 200;
pub const DESCRIPTION_MAX_LEN: u64 = 1000;
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    /// Not done yet
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Task entity - a stored task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Task {
    /// Assigned by the store, never reused
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Set once on creation
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A validated task that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateTask {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    #[schema(min_length = 1, max_length = 200)]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[schema(max_length = 1000)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

/// DTO for updating an existing task
///
/// Each field is `None` when absent from the body and `Some(None)` when sent
/// as `null`. Only `description` may be nulled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, min_length = 1, max_length = 200)]
    #[ts(optional)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, max_length = 1000)]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<TaskStatus>)]
    #[ts(optional)]
    pub status: Option<Option<TaskStatus>>,
}

/// Maps any present value, `null` included, to `Some`. Paired with
/// `#[serde(default)]` so an absent field stays `None`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl Validate for UpdateTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.title {
            Some(None) => errors.add("title", not_null_error()),
            Some(Some(title)) => {
                let len = title.chars().count() as u64;
                if !(1..=TITLE_MAX_LEN).contains(&len) {
                    errors.add("title", length_error(Some(1), TITLE_MAX_LEN, title));
                }
            }
            None => {}
        }

        if let Some(Some(description)) = &self.description {
            if description.chars().count() as u64 > DESCRIPTION_MAX_LEN {
                errors.add(
                    "description",
                    length_error(None, DESCRIPTION_MAX_LEN, description),
                );
            }
        }

        if let Some(None) = self.status {
            errors.add("status", not_null_error());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn not_null_error() -> ValidationError {
    ValidationError::new("not_null").with_message(Cow::from("field may not be null"))
}

// Same shape as the derived `length` rule so clients see one format
fn length_error(min: Option<u64>, max: u64, value: &str) -> ValidationError {
    let mut error = ValidationError::new("length");
    if let Some(min) = min {
        error.add_param(Cow::from("min"), &min);
    }
    error.add_param(Cow::from("max"), &max);
    error.add_param(Cow::from("value"), &value);
    error
}

/// Query parameters for listing tasks
///
/// Negative values are rejected, not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of leading tasks to skip
    #[serde(default)]
    #[validate(range(min = 0))]
    #[param(minimum = 0, default = 0)]
    pub skip: i64,
    /// Maximum number of tasks to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 0))]
    #[param(minimum = 0, default = 100)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// Row offset for the store. Only meaningful after validation.
    pub fn offset(&self) -> u64 {
        self.skip.max(0) as u64
    }

    /// Row limit for the store. Only meaningful after validation.
    pub fn row_limit(&self) -> u64 {
        self.limit.max(0) as u64
    }
}

/// DTO for task response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
        }
    }
}

impl Task {
    /// Apply updates from an already validated UpdateTask DTO
    ///
    /// Absent fields are left alone. `id` and `created_at` never change.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(Some(title)) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(Some(status)) = update.status {
            self.status = status;
        }
    }
}
