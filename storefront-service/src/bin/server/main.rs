use std::sync::Arc;

use auth::Authenticator;
use auth::Role;
use sqlx::postgres::PgPoolOptions;
use storefront_service::config::Config;
use storefront_service::domain::carousel::service::CarouselService;
use storefront_service::domain::category::service::CategoryService;
use storefront_service::domain::enquiry::service::EnquiryService;
use storefront_service::domain::page::service::PageService;
use storefront_service::domain::product::service::ProductService;
use storefront_service::domain::user::models::EmailAddress;
use storefront_service::domain::user::models::ProvisionUserCommand;
use storefront_service::domain::user::ports::AuthServicePort;
use storefront_service::domain::user::service::AuthService;
use storefront_service::inbound::http::router::create_router;
use storefront_service::inbound::http::router::AppState;
use storefront_service::outbound::repositories::PostgresCarouselRepository;
use storefront_service::outbound::repositories::PostgresCategoryRepository;
use storefront_service::outbound::repositories::PostgresEnquiryRepository;
use storefront_service::outbound::repositories::PostgresPageRepository;
use storefront_service::outbound::repositories::PostgresProductRepository;
use storefront_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "storefront-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        jwt_expiration_hours = config.jwt.expiration_hours,
        bootstrap_admin = config.bootstrap_admin.is_some(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        Arc::clone(&authenticator),
    ));

    if let Some(admin) = &config.bootstrap_admin {
        let user = auth_service
            .provision_user(ProvisionUserCommand {
                name: admin.name.clone(),
                email: EmailAddress::new(admin.email.clone())?,
                password: admin.password.clone(),
                role: Role::Admin,
            })
            .await?;
        tracing::info!(user_id = %user.id, email = %user.email, "Bootstrap admin ready");
    }

    let state = AppState {
        auth_service,
        category_service: Arc::new(CategoryService::new(Arc::new(
            PostgresCategoryRepository::new(pg_pool.clone()),
        ))),
        product_service: Arc::new(ProductService::new(Arc::new(
            PostgresProductRepository::new(pg_pool.clone()),
        ))),
        page_service: Arc::new(PageService::new(Arc::new(PostgresPageRepository::new(
            pg_pool.clone(),
        )))),
        carousel_service: Arc::new(CarouselService::new(Arc::new(
            PostgresCarouselRepository::new(pg_pool.clone()),
        ))),
        enquiry_service: Arc::new(EnquiryService::new(Arc::new(
            PostgresEnquiryRepository::new(pg_pool),
        ))),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
