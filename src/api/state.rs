//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::service::MovieService;

/// Shared application state.
///
/// Generic over `D: Database` so tests and production can use different
/// storage backends. The database is injected, never created here.
pub struct AppState<D: Database> {
    db: Arc<D>,
    movies: MovieService<D>,
}

// Manual Clone impl - only the Arcs are cloned, D need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            movies: self.movies.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self {
            movies: MovieService::new(Arc::clone(&db)),
            db,
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a reference to the movie service.
    pub fn movies(&self) -> &MovieService<D> {
        &self.movies
    }
}
