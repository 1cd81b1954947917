//! Wire DTOs for the club backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`_id`, `registeredUsers`,
//! `eventimages`, ...) via serde renames so the rest of the client can use
//! ordinary Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One item of the event feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Body of `GET /api/event?page=N`. A missing `events` key counts as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EventPage {
    #[serde(default)]
    pub events: Vec<EventSummary>,
}

/// Full event as shown on the detail route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "registeredUsers")]
    pub registered_users: Vec<String>,
    #[serde(default, rename = "eventimages")]
    pub event_images: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl EventDetail {
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered_users.iter().any(|id| id == user_id)
    }

    pub fn participant_count(&self) -> usize {
        self.registered_users.len()
    }
}

/// Entry of the "my registered events" list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    #[default]
    Seminar,
    Workshop,
    Conference,
}

impl EventCategory {
    pub const ALL: [Self; 3] = [Self::Seminar, Self::Workshop, Self::Conference];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seminar => "seminar",
            Self::Workshop => "workshop",
            Self::Conference => "conference",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Seminar => "Seminar",
            Self::Workshop => "Workshop",
            Self::Conference => "Conference",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    #[default]
    Cse,
    Ece,
    Mech,
}

impl Branch {
    pub const ALL: [Self; 3] = [Self::Cse, Self::Ece, Self::Mech];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cse => "cse",
            Self::Ece => "ece",
            Self::Mech => "mech",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cse => "Computer Science",
            Self::Ece => "Electronics",
            Self::Mech => "Mechanical",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == raw)
    }
}

/// Body of `POST /api/event`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: EventCategory,
    pub branch: Branch,
    pub thumbnail: String,
}

/// Account role chosen at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Alumni,
    Admin,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Self; 5] = [Self::Student, Self::Teacher, Self::Alumni, Self::Admin, Self::SuperAdmin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Alumni => "alumni",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Alumni => "Alumni",
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// Study year chosen at signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Year {
    FirstYear,
    SecondYear,
    ThirdYear,
    FinalYear,
    PassedOut,
}

impl Year {
    pub const ALL: [Self; 5] = [Self::FirstYear, Self::SecondYear, Self::ThirdYear, Self::FinalYear, Self::PassedOut];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstYear => "first_year",
            Self::SecondYear => "second_year",
            Self::ThirdYear => "third_year",
            Self::FinalYear => "final_year",
            Self::PassedOut => "passed_out",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstYear => "First Year",
            Self::SecondYear => "Second Year",
            Self::ThirdYear => "Third Year",
            Self::FinalYear => "Final Year",
            Self::PassedOut => "Passed Out",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|y| y.as_str() == raw)
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
}

/// Login responses come either as the bare user or wrapped in `{ "user": ... }`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Wrapped { user: SessionUser },
    Bare(SessionUser),
}

impl LoginResponse {
    pub fn into_user(self) -> SessionUser {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Body of `POST /api/event/{id}/register|unregister`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Body of `PATCH /api/event/{id}/images`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImagesPatch {
    pub images: Vec<String>,
}

/// One file accepted by the upload service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}

/// Render an ISO-ish backend date (`2025-03-14T00:00:00.000Z`) as its
/// calendar-date part. Anything unrecognised is shown verbatim.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = raw.split('T').next().unwrap_or(raw);
    let parts: Vec<&str> = date.split('-').collect();
    let is_iso = parts.len() == 3
        && parts[0].len() == 4
        && parts[1].len() == 2
        && parts[2].len() == 2
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()));
    if is_iso {
        format!("{}/{}/{}", parts[1], parts[2], parts[0])
    } else {
        raw.to_owned()
    }
}
