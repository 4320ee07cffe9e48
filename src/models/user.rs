use serde::Serialize;

const AVATAR_BASE: &str = "https://avatars.githubusercontent.com/u/";
const CREATED_AT: &str = "2024-01-01 10:00:00";

/// Mock user record; every field is derived from the requested id
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub status: String,
    pub created: String,
}

impl UserRecord {
    /// Synthesize a record by string interpolation.
    ///
    /// There is no backing store, so any id (numeric or not) yields a
    /// syntactically valid record with that value embedded.
    pub fn synthesize(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("User{}", id),
            email: format!("user{}@example.com", id),
            avatar: format!("{}{}", AVATAR_BASE, id),
            role: "user".to_string(),
            status: "active".to_string(),
            created: CREATED_AT.to_string(),
        }
    }
}
