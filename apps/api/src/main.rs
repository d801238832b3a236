use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use booking_cell::handlers::AppointmentState;
use booking_cell::services::availability::AvailabilityService;
use booking_cell::services::booking::BookingService;
use booking_cell::services::notify::LogNotifier;
use booking_cell::services::queries::AppointmentQueryService;
use booking_cell::store::AppointmentStore;
use catalog_cell::store::CatalogStore;
use shared_config::AppConfig;
use shared_utils::clock::{Clock, SystemClock};

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Salud Clinic API server");

    // Load configuration
    let config = AppConfig::from_env();

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Create shared state
    let catalog = Arc::new(CatalogStore::seeded());
    let store = Arc::new(AppointmentStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let notifier = Arc::new(LogNotifier);

    let appointment_state = AppointmentState {
        booking: Arc::new(BookingService::new(
            Arc::clone(&store),
            Arc::clone(&catalog),
            Arc::clone(&clock),
            notifier,
        )),
        availability: Arc::new(AvailabilityService::new(
            Arc::clone(&store),
            Arc::clone(&clock),
        )),
        queries: Arc::new(AppointmentQueryService::new(
            Arc::clone(&store),
            Arc::clone(&clock),
        )),
        catalog: Arc::clone(&catalog),
    };

    // Build the application router
    let app = router::create_router(catalog, appointment_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = config.bind_addr();
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
