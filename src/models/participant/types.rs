use serde::{Deserialize, Serialize};

/// Participant record as stored — no password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub usn: String,
    pub college: String,
    pub created_at: String,
    pub updated_at: String,
}

/// New participant data for creation. `password` is already hashed.
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
    pub usn: String,
    pub college: String,
}

/// Registration payload as sent over the wire. Shared by the server
/// boundary and the client component, so the two cannot drift apart.
///
/// Fields default to empty so a missing field reports "X is required"
/// instead of a bare deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub college: String,
    #[serde(default, rename = "eventsRegistered")]
    pub events_registered: Vec<String>,
}

/// Created-participant response. Identifiers are strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiParticipantResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub usn: String,
    pub college: String,
    #[serde(rename = "eventsRegistered")]
    pub events_registered: Vec<String>,
    pub created_at: String,
}

impl ApiParticipantResponse {
    pub fn from_parts(p: Participant, event_ids: Vec<i64>) -> Self {
        ApiParticipantResponse {
            id: p.id.to_string(),
            name: p.name,
            email: p.email,
            contact: p.contact,
            usn: p.usn,
            college: p.college,
            events_registered: event_ids.iter().map(|id| id.to_string()).collect(),
            created_at: p.created_at,
        }
    }
}
