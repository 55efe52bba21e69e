use std::collections::BTreeSet;

use crate::errors::{BookingError, BookingResult};
use crate::models::doctor::Doctor;
use crate::service::api_service::BookingApi;

pub type FavoriteSet = BTreeSet<i64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteOutcome {
    pub favorites: FavoriteSet,
    pub favorited: bool,
}

pub struct FavoritesService;

impl FavoritesService {
    pub async fn load(api: &dyn BookingApi, email: &str) -> BookingResult<FavoriteSet> {
        let favorites = api.favorites(email).await?;
        Ok(favorites.into_iter().map(|doctor| doctor.id).collect())
    }

    /// The backend decides the new state; the returned set follows it. On
    /// error the caller keeps its current set.
    pub async fn toggle(
        api: &dyn BookingApi,
        email: Option<&str>,
        doctor_id: i64,
        current: &FavoriteSet,
    ) -> BookingResult<FavoriteOutcome> {
        let email = email.ok_or(BookingError::NotSignedIn)?;
        let result = api.toggle_favorite(email, doctor_id).await?;
        let mut favorites = current.clone();
        if result.favorited {
            favorites.insert(doctor_id);
        } else {
            favorites.remove(&doctor_id);
        }
        Ok(FavoriteOutcome {
            favorites,
            favorited: result.favorited,
        })
    }
}

/// Copies the set onto the list so every doctor's flag agrees with it.
pub fn mark_favorites(doctors: &[Doctor], favorites: &FavoriteSet) -> Vec<Doctor> {
    doctors
        .iter()
        .map(|doctor| Doctor {
            is_favorite: favorites.contains(&doctor.id),
            ..doctor.clone()
        })
        .collect()
}
