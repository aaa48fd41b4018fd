//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, Movie},
};

/// Repository for Movie operations.
///
/// Every operation is a single statement. A write that matches no row
/// reports `DbError::NotFound` rather than an affected-row count.
pub trait MovieRepository {
    /// Get all movies in storage order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Movie>>> + Send;

    /// Get a movie by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Movie>> + Send;

    /// Insert a new movie. The input `id` is ignored; the stored record
    /// with its assigned ID is returned.
    fn create(&self, movie: &Movie) -> impl Future<Output = DbResult<Movie>> + Send;

    /// Overwrite the mutable fields of an existing movie and stamp
    /// `modified_at` with the current time.
    fn update(&self, movie: &Movie) -> impl Future<Output = DbResult<Movie>> + Send;

    /// Delete a movie by ID.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;

    /// Change only the rental status of a movie.
    fn update_rental_status(
        &self,
        id: Id,
        rental_status: &str,
    ) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Owns the connection pool. Opened at startup, closed at shutdown.
pub trait Database: Send + Sync {
    type Movies<'a>: MovieRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Check that storage answers a trivial query.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the movie repository.
    fn movies(&self) -> Self::Movies<'_>;

    /// Close all pooled connections.
    fn close(&self) -> impl Future<Output = ()> + Send;
}
