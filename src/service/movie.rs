//! Movie service.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::error::{ServiceResult, settle};
use crate::db::{Database, Id, Movie, MovieRepository};

/// Movie operations exposed to the API layer.
///
/// Generic over `D: Database`; the database is injected by the caller
/// and shared through an `Arc`.
pub struct MovieService<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc needs to be cloneable, not D
impl<D: Database> Clone for MovieService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> MovieService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn db(&self) -> &D {
        &self.db
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<Movie>> {
        let result = self.db.movies().list().await;
        settle("listing movies", result)
            .inspect(|movies| debug!(count = movies.len(), "Listed movies"))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Id) -> ServiceResult<Movie> {
        let result = self.db.movies().get(id).await;
        settle("fetching movie", result)
    }

    /// Store a new movie and return it with its assigned ID.
    #[instrument(skip(self, movie), fields(name = %movie.name))]
    pub async fn save(&self, movie: &Movie) -> ServiceResult<Movie> {
        let result = self.db.movies().create(movie).await;
        settle("saving movie", result).inspect(|saved| info!(id = saved.id, "Movie saved"))
    }

    #[instrument(skip(self, movie), fields(id = movie.id))]
    pub async fn update(&self, movie: &Movie) -> ServiceResult<Movie> {
        let result = self.db.movies().update(movie).await;
        settle("updating movie", result).inspect(|_| info!("Movie updated"))
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Id) -> ServiceResult<()> {
        let result = self.db.movies().delete(id).await;
        settle("deleting movie", result).inspect(|_| info!("Movie deleted"))
    }

    #[instrument(skip(self))]
    pub async fn update_rental_status(&self, id: Id, rental_status: &str) -> ServiceResult<()> {
        let result = self
            .db
            .movies()
            .update_rental_status(id, rental_status)
            .await;
        settle("updating rental status", result).inspect(|_| info!("Rental status updated"))
    }
}
