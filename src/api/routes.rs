//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::state::AppState;
use super::v1::{
    self, HealthResponse, MovieResponse, SaveMovieRequest, ServiceResponse, UpdateMovieRequest,
};
use crate::db::Database;

/// Base path of the movie endpoints.
pub const MOVIE_BASE_PATH: &str = "/api/v1/movie";

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        version = "0.1.0",
        description = "Movie catalogue and rental status management",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::health,
        v1::list_movies,
        v1::get_movie,
        v1::save_movie,
        v1::update_movie,
        v1::delete_movie,
        v1::update_rental_status,
    ),
    components(
        schemas(
            HealthResponse,
            MovieResponse,
            SaveMovieRequest,
            UpdateMovieRequest,
            ServiceResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "movies", description = "Movie management endpoints")
    )
)]
pub struct ApiDoc;

/// Open CORS: any origin, method and header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = routes!(D => {
        get "/health" => v1::health,
    });

    // Movie routes (generic over Database)
    let movie_routes = routes!(D => {
        get "/list" => v1::list_movies,
        get "/{id}" => v1::get_movie,
        post "/save" => v1::save_movie,
        post "/update" => v1::update_movie,
        delete "/delete/{id}" => v1::delete_movie,
        put "/updateEstadoAlquiler/{id}" => v1::update_rental_status,
    });

    system_routes
        .nest(MOVIE_BASE_PATH, movie_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(cors_layer())
        .with_state(state)
}
