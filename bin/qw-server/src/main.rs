//! QueueWise Server
//!
//! Demo queue-management server backed entirely by in-memory mock data:
//! - Auth APIs: signup, login, logout, current user
//! - Queue APIs: centers, stats, predictions, anomalies, time slots
//! - Appointments and heuristic recommendations
//! - Simulation tick that perturbs the mock data and republishes it
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUEUEWISE_CONFIG` | - | Path to the TOML config file |
//! | `QUEUEWISE_HTTP_PORT` | `8080` | HTTP API port |
//! | `QUEUEWISE_HTTP_HOST` | `0.0.0.0` | Bind address |
//! | `QUEUEWISE_CORS_ORIGINS` | `http://localhost:3000` | Comma-separated CORS origins, `*` for any |
//! | `QUEUEWISE_SESSION_COOKIE` | `qw_session` | Session cookie name |
//! | `QUEUEWISE_SESSION_SECURE` | `false` | Secure flag on the session cookie |
//! | `QUEUEWISE_SESSION_TTL_SECS` | `604800` | Session lifetime (one week) |
//! | `QUEUEWISE_REALTIME_ENABLED` | `false` | Publish to the external provider |
//! | `QUEUEWISE_REALTIME_URL` | - | Provider REST base URL |
//! | `QUEUEWISE_REALTIME_APP_ID` | - | Provider application id |
//! | `QUEUEWISE_REALTIME_KEY` | - | Provider public key |
//! | `QUEUEWISE_REALTIME_SECRET` | - | Provider signing secret |
//! | `QUEUEWISE_DEV_MODE` | `false` | Seed demo data, enable debug listing |
//! | `RUST_LOG` | `info` | Log level |
//! | `LOG_FORMAT` | `text` | `json` for structured output |

use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Extension, Router};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use qw_config::AppConfig;
use qw_platform::appointment::api::{appointments_router, AppointmentsState};
use qw_platform::appointment::store::AppointmentStore;
use qw_platform::auth::api::{auth_router, AuthState};
use qw_platform::auth::session::SessionService;
use qw_platform::center::api::{centers_router, stats_router, CentersState};
use qw_platform::center::entity::QueueStats;
use qw_platform::center::store::CenterStore;
use qw_platform::insight::api::{insights_router, InsightsState};
use qw_platform::insight::store::InsightStore;
use qw_platform::realtime::api::{realtime_router, RealtimeApiState, RealtimeCredentials};
use qw_platform::recommendation::api::{recommendations_router, RecommendationsState};
use qw_platform::seed;
use qw_platform::shared::middleware::AppState;
use qw_platform::simulation::{simulation_router, SimulationService, SimulationState};
use qw_platform::timeslot::api::{timeslots_router, TimeSlotsState};
use qw_platform::user::api::{users_router, UsersState};
use qw_platform::user::store::UserStore;
use qw_realtime::{HttpPublisher, InMemoryPublisher, RealtimePublisher};

#[tokio::main]
async fn main() -> Result<()> {
    qw_common::logging::init_logging("qw-server");

    info!("Starting QueueWise Server");

    let config = AppConfig::load()?;

    // Stores: seeded demo data in dev mode, empty otherwise
    let (user_store, center_store, insight_store) = if config.dev_mode {
        (
            seed::seed_user_store(),
            seed::seed_center_store(),
            seed::seed_insight_store(),
        )
    } else {
        (
            Arc::new(UserStore::new()),
            Arc::new(CenterStore::new(Vec::new(), QueueStats::new(1, 0, 0))),
            Arc::new(InsightStore::new(Vec::new(), Vec::new())),
        )
    };
    let appointment_store = Arc::new(AppointmentStore::new());
    let session_service = Arc::new(SessionService::new(config.session.ttl_secs));

    // Publisher: the external provider when configured, in-process bus otherwise
    let publisher: Arc<dyn RealtimePublisher> =
        if config.realtime.enabled && config.realtime.is_configured() {
            let http = HttpPublisher::new(qw_realtime::http::ProviderConfig {
                base_url: config.realtime.base_url.clone(),
                app_id: config.realtime.app_id.clone(),
                key: config.realtime.key.clone(),
                secret: config.realtime.secret.clone(),
            })?;
            Arc::new(http)
        } else {
            if config.realtime.enabled {
                warn!("Realtime enabled but credentials incomplete; using the in-process bus");
            }
            Arc::new(InMemoryPublisher::new())
        };
    info!(publisher = publisher.name(), "Realtime publisher ready");

    let simulation_service = Arc::new(SimulationService::new(
        center_store.clone(),
        insight_store.clone(),
        publisher,
    ));

    let auth_state = AuthState::new(user_store.clone(), session_service.clone())
        .with_session_cookie_settings(
            &config.session.cookie_name,
            config.session.secure,
            &config.session.same_site,
        );
    let realtime_state = RealtimeApiState {
        credentials: config.realtime.is_configured().then(|| RealtimeCredentials {
            key: config.realtime.key.clone(),
            secret: config.realtime.secret.clone(),
        }),
    };

    let (router, mut openapi) = OpenApiRouter::new()
        .nest("/api/auth", auth_router(auth_state))
        .nest(
            "/api/users",
            users_router(UsersState {
                user_store: user_store.clone(),
                debug_listing_enabled: config.dev_mode,
            }),
        )
        .nest(
            "/api/centers",
            centers_router(CentersState {
                center_store: center_store.clone(),
            }),
        )
        .nest(
            "/api/appointments",
            appointments_router(AppointmentsState {
                appointment_store,
                center_store: center_store.clone(),
            }),
        )
        .nest(
            "/api/timeslots",
            timeslots_router(TimeSlotsState {
                center_store: center_store.clone(),
            }),
        )
        .nest(
            "/api/recommendations",
            recommendations_router(RecommendationsState {
                user_store: user_store.clone(),
                center_store: center_store.clone(),
            }),
        )
        .nest(
            "/api/simulation",
            simulation_router(SimulationState {
                service: simulation_service,
            }),
        )
        .nest("/api/realtime", realtime_router(realtime_state))
        .nest(
            "/api",
            stats_router(CentersState {
                center_store: center_store.clone(),
            }),
        )
        .nest("/api", insights_router(InsightsState { insight_store }))
        .split_for_parts();

    openapi.info.title = "QueueWise API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.description =
        Some("REST APIs for queues, appointments, and recommendations".to_string());

    let app = Router::new()
        .merge(router)
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/q/openapi", openapi))
        .layer(Extension(AppState::new(session_service, user_store)
            .with_cookie_name(&config.session.cookie_name)))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.http.cors_origins));

    let addr = format!("{}:{}", config.http.host, config.http.port);
    info!("API server listening on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("QueueWise Server shutdown complete");
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }
    let origins: Vec<axum::http::HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();
    cors.allow_origin(origins)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
