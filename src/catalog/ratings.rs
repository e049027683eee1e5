//! User × film rating storage and aggregates.

use time::OffsetDateTime;

use crate::model::{FilmId, Rating, UserId};
use crate::primitives::IndexedStore;

/// Default bucket count for the film index.
const DEFAULT_FILM_BUCKETS: usize = 4096;
/// Bucket count for each film's per-user table.
const USER_BUCKETS_PER_FILM: usize = 128;

/// Ratings keyed by film, then by user.
///
/// One rating per user × film pair; `add` rejects duplicates and `set`
/// upserts. Timestamp range queries are exclusive on both bounds
/// (`start < t < end`).
#[derive(Debug)]
pub struct RatingStore {
    films: IndexedStore<FilmId, IndexedStore<UserId, Rating>>,
    len: usize,
}

impl Default for RatingStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_FILM_BUCKETS)
    }
}

impl RatingStore {
    /// Creates an empty store with the default film bucket count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with `capacity` film buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            films: IndexedStore::with_capacity(capacity),
            len: 0,
        }
    }

    /// Total number of stored ratings.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no rating is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when at least one user rated `film`.
    pub fn contains_film(&self, film: FilmId) -> bool {
        self.films.contains_key(film)
    }

    /// Rated film ids in first-rating order.
    pub fn film_ids(&self) -> Vec<FilmId> {
        self.films.keys().copied().collect()
    }

    /// Records a rating. Returns false when the user already rated the
    /// film.
    pub fn add(
        &mut self,
        user: UserId,
        film: FilmId,
        score: f32,
        timestamp: OffsetDateTime,
    ) -> bool {
        if !self.films.contains_key(film) {
            self.films
                .put(film, IndexedStore::with_capacity(USER_BUCKETS_PER_FILM));
        }
        let Some(per_film) = self.films.get_mut(film) else {
            return false;
        };
        let added = per_film.put(user, Rating::new(user, film, score, timestamp));
        if added {
            self.len += 1;
        }
        added
    }

    /// Removes a user's rating of a film; reports whether one existed.
    pub fn remove(&mut self, user: UserId, film: FilmId) -> bool {
        let Some(per_film) = self.films.get_mut(film) else {
            return false;
        };
        let removed = per_film.remove(user);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Upserts a rating: replaces the user's existing rating of the film or
    /// records a new one.
    pub fn set(
        &mut self,
        user: UserId,
        film: FilmId,
        score: f32,
        timestamp: OffsetDateTime,
    ) -> bool {
        if let Some(per_film) = self.films.get_mut(film) {
            if per_film.contains_key(user) {
                return per_film.replace(user, Rating::new(user, film, score, timestamp));
            }
        }
        self.add(user, film, score, timestamp)
    }

    /// Every score given to `film`, in rating-insertion order.
    pub fn film_ratings(&self, film: FilmId) -> Vec<f32> {
        let Some(per_film) = self.films.get(film) else {
            return Vec::new();
        };
        let mut scores = Vec::with_capacity(per_film.len());
        for &user in per_film.keys() {
            if let Some(rating) = per_film.get(user) {
                scores.push(rating.score);
            }
        }
        scores
    }

    /// Every score `user` gave, scanning films in first-rating order.
    pub fn user_ratings(&self, user: UserId) -> Vec<f32> {
        let mut scores = Vec::new();
        for &film in self.films.keys() {
            if let Some(rating) = self.films.get(film).and_then(|per_film| per_film.get(user)) {
                scores.push(rating.score);
            }
        }
        scores
    }

    /// Average score of a film; `None` when nobody rated it.
    pub fn film_average(&self, film: FilmId) -> Option<f32> {
        let scores = self.film_ratings(film);
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f32>() / scores.len() as f32)
    }

    /// Average score a user gives; `None` when they rated nothing.
    pub fn user_average(&self, user: UserId) -> Option<f32> {
        let scores = self.user_ratings(user);
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f32>() / scores.len() as f32)
    }

    /// Films whose average score is at least `min_avg`, in first-rating
    /// order.
    pub fn films_with_average_at_least(&self, min_avg: f32) -> Vec<FilmId> {
        let mut qualifying = Vec::new();
        for &film in self.films.keys() {
            if self.film_average(film).is_some_and(|avg| avg >= min_avg) {
                qualifying.push(film);
            }
        }
        qualifying
    }

    /// Scores of `film` submitted strictly between `start` and `end`.
    pub fn film_ratings_between(
        &self,
        film: FilmId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Vec<f32> {
        let Some(per_film) = self.films.get(film) else {
            return Vec::new();
        };
        let mut scores = Vec::new();
        for &user in per_film.keys() {
            if let Some(rating) = per_film.get(user) {
                if rating.timestamp > start && rating.timestamp < end {
                    scores.push(rating.score);
                }
            }
        }
        scores
    }

    /// Scores `user` submitted strictly between `start` and `end`.
    pub fn user_ratings_between(
        &self,
        user: UserId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Vec<f32> {
        let mut scores = Vec::new();
        for &film in self.films.keys() {
            if let Some(rating) = self.films.get(film).and_then(|per_film| per_film.get(user)) {
                if rating.timestamp > start && rating.timestamp < end {
                    scores.push(rating.score);
                }
            }
        }
        scores
    }

    /// Every score submitted strictly between `start` and `end`.
    pub fn ratings_between(&self, start: OffsetDateTime, end: OffsetDateTime) -> Vec<f32> {
        let mut scores = Vec::new();
        for &film in self.films.keys() {
            scores.extend(self.film_ratings_between(film, start, end));
        }
        scores
    }

    /// The `n` most-rated films, most ratings first. Ties keep first-rating
    /// order.
    pub fn top_films(&self, n: usize) -> Vec<FilmId> {
        let mut counts: Vec<(FilmId, usize)> = Vec::with_capacity(self.films.len());
        for &film in self.films.keys() {
            let count = self.films.get(film).map_or(0, |per_film| per_film.len());
            counts.push((film, count));
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts.into_iter().map(|(film, _)| film).collect()
    }

    /// The `n` users with the most ratings, most first. Ties keep
    /// first-rating order.
    pub fn most_active_users(&self, n: usize) -> Vec<UserId> {
        let mut totals: IndexedStore<UserId, usize> = IndexedStore::with_capacity(self.len);
        for &film in self.films.keys() {
            if let Some(per_film) = self.films.get(film) {
                for &user in per_film.keys() {
                    match totals.get_mut(user) {
                        Some(count) => *count += 1,
                        None => {
                            totals.put(user, 1);
                        }
                    }
                }
            }
        }
        let mut counts: Vec<(UserId, usize)> = Vec::with_capacity(totals.len());
        for &user in totals.keys() {
            counts.push((user, totals.get(user).copied().unwrap_or(0)));
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts.into_iter().map(|(user, _)| user).collect()
    }
}
