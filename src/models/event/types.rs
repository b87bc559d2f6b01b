use serde::{Deserialize, Serialize};

/// Event record as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Event on the wire. The identifier stays a string named `_id` — the
/// contract the registration clients were written against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEventResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for ApiEventResponse {
    fn from(e: Event) -> Self {
        ApiEventResponse {
            id: e.id.to_string(),
            title: e.title,
            description: e.description,
            date: e.date,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Create/update event request.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
}
