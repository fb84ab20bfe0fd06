use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{admin, auth, bookings, events, health, tickets};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration.
    //
    // With no configured origins everything is allowed, which rules out
    // credentials; the cookie-based user session then only works
    // same-origin. Configured origins get the full credentialed setup.
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    };

    // User session routes
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/profile", get(auth::profile));

    // Admin routes
    let admin_routes = Router::new()
        .route("/admin/register", post(admin::register))
        .route("/admin/login", post(admin::login))
        .route("/admin/booking-stats", get(admin::booking_stats));

    // Event catalog. /createEvent doubles as a listing endpoint because
    // the original admin frontend fetched it with GET; /events is the
    // canonical path.
    let event_routes = Router::new()
        .route("/createEvent", get(events::list_events).post(events::create_event))
        .route("/events", get(events::list_events))
        .route(
            "/event/:id",
            get(events::get_event)
                .delete(events::delete_event)
                .post(events::like_event),
        );

    // Legacy tickets
    let ticket_routes = Router::new()
        .route("/tickets", get(tickets::list_tickets).post(tickets::create_ticket))
        .route("/tickets/user/:user_id", get(tickets::list_user_tickets))
        .route("/tickets/:id", delete(tickets::delete_ticket));

    // Bookings
    let booking_routes = Router::new()
        .route("/bookings", get(bookings::list_bookings).post(bookings::create_booking))
        .route(
            "/bookings/:id",
            get(bookings::get_booking).delete(bookings::cancel_booking),
        )
        .route("/bookings/event/:event_id", get(bookings::list_event_bookings));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(admin_routes)
        .merge(event_routes)
        .merge(ticket_routes)
        .merge(booking_routes)
        .nest_service("/uploads", ServeDir::new(&config.uploads.dir))
        // Event images come in as multipart; raise the body cap above the
        // 2 MB default to the configured upload limit.
        .layer(DefaultBodyLimit::max(config.uploads.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
