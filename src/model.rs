//! Domain records shared by the catalog stores and the engine.

use time::{Date, OffsetDateTime};

/// Identifier of a cast member.
pub type CastId = i64;
/// Identifier of a crew member.
pub type CrewId = i64;
/// Identifier of a film.
pub type FilmId = i64;
/// Identifier of a rating user.
pub type UserId = i64;

/// A credited cast member of a film.
#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    /// Cast member id, unique across the dataset.
    pub id: CastId,
    /// Billed name.
    pub name: String,
}

impl CastMember {
    /// Creates a cast member record.
    pub fn new(id: CastId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A credited crew member of a film.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewMember {
    /// Crew member id, unique across the dataset.
    pub id: CrewId,
    /// Billed name.
    pub name: String,
    /// Job on the production, e.g. "Director".
    pub role: String,
}

impl CrewMember {
    /// Creates a crew member record.
    pub fn new(id: CrewId, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}

/// A single user's rating of a single film.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    /// Rating user.
    pub user: UserId,
    /// Rated film.
    pub film: FilmId,
    /// Score on the dataset's scale (0.5 to 5.0 for MovieLens exports).
    pub score: f32,
    /// When the rating was submitted.
    pub timestamp: OffsetDateTime,
}

impl Rating {
    /// Creates a rating record.
    pub fn new(user: UserId, film: FilmId, score: f32, timestamp: OffsetDateTime) -> Self {
        Self {
            user,
            film,
            score,
            timestamp,
        }
    }
}

/// Film metadata held by [`crate::catalog::FilmStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    /// Film id, unique across the dataset.
    pub id: FilmId,
    /// Release title.
    pub title: String,
    /// Theatrical release date.
    pub release: Date,
    /// Production budget in dollars.
    pub budget: i64,
    /// Gross revenue in dollars.
    pub revenue: i64,
    /// Runtime in minutes.
    pub runtime: f64,
}

impl Film {
    /// Creates a film record; financial fields and runtime start at zero.
    pub fn new(id: FilmId, title: impl Into<String>, release: Date) -> Self {
        Self {
            id,
            title: title.into(),
            release,
            budget: 0,
            revenue: 0,
            runtime: 0.0,
        }
    }
}
