use anyhow::Context;
use axum::{Router, routing::get};
use configuration::settings::Config;
use database::{DbRepository, PeriodAggregator};
use reporter::ComparativeReporter;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState<A> {
    pub reporter: ComparativeReporter<A>,
}

/// Builds the API routes over any aggregator.
pub fn router<A: PeriodAggregator + 'static>(state: Arc<AppState<A>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/reports/sales-comparison",
            get(handlers::get_sales_comparison::<A>),
        )
        .route(
            "/api/reports/product-comparison",
            get(handlers::get_product_comparison::<A>),
        )
        .route(
            "/api/reports/category-comparison",
            get(handlers::get_category_comparison::<A>),
        )
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Connects to the database, applies migrations and serves the report API.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let addr = config.server.bind_address();

    let db_pool = database::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout(),
    )
    .await?;
    database::run_migrations(&db_pool).await?;

    let reporter = ComparativeReporter::new(
        DbRepository::new(db_pool),
        config.reports.top_products_limit,
    );
    let app = router(Arc::new(AppState { reporter }));

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
