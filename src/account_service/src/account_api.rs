use account_adapters::config::{AllowedOrigins, ApplicationSettings};
use account_axum::{
    AppState, require_auth,
    routes::{
        change_password, current_user, login, logout, refresh_token, register, update_account,
        update_avatar, update_cover_image,
    },
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header, request},
    middleware,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

pub const USERS_PATH: &str = "/api/v1/users";

/// The HTTP face of the account service.
pub struct AccountApi {
    router: Router,
}

impl AccountApi {
    /// Builds every `/api/v1/users` route over the given state.
    ///
    /// Multipart routes get the larger upload body limit; everything else is
    /// capped at the JSON limit. Unmatched paths are served from the public
    /// directory.
    pub fn new(state: AppState, settings: &ApplicationSettings) -> Self {
        let upload_limit = DefaultBodyLimit::max(settings.upload_body_limit);

        let protected = Router::new()
            .route("/logout", post(logout))
            .route("/change-password", post(change_password))
            .route("/current-user", get(current_user).post(current_user))
            .route(
                "/update-account",
                patch(update_account).post(update_account),
            )
            .route(
                "/avatar",
                patch(update_avatar)
                    .post(update_avatar)
                    .layer(upload_limit.clone()),
            )
            .route(
                "/cover-image",
                patch(update_cover_image)
                    .post(update_cover_image)
                    .layer(upload_limit.clone()),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

        let users = Router::new()
            .route("/register", post(register).layer(upload_limit))
            .route("/login", post(login))
            .route("/refresh-token", post(refresh_token))
            .merge(protected);

        let router = Router::new()
            .nest(USERS_PATH, users)
            .layer(DefaultBodyLimit::max(settings.json_body_limit))
            .fallback_service(ServeDir::new(&settings.public_dir))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Converts the api into a router that can be mounted on another router.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
