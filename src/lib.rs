pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use db::{create_pool, DbPool};

use infrastructure::order_repo::DieselOrderRepository;
use infrastructure::razorpay::RazorpayGateway;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_status,
        handlers::orders::delete_order,
        handlers::payment::create_gateway_order,
    ),
    components(schemas(
        handlers::orders::CreateOrderRequest,
        handlers::orders::OrderResponse,
        handlers::orders::OrderLinePayload,
        handlers::orders::ProductSnapshot,
        handlers::orders::UpdateStatusRequest,
        handlers::payment::CreateGatewayOrderRequest,
        handlers::payment::GatewayOrderResponse,
        domain::order::CustomerInfo,
        domain::order::OrderStatus,
        domain::order::PaymentStatus,
        domain::order::PaymentMethod,
        domain::order::ShippingMethod,
    )),
    tags(
        (name = "orders", description = "Order record store"),
        (name = "payment", description = "Payment gateway"),
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to the configured host:port.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(pool: DbPool, config: &AppConfig) -> std::io::Result<actix_web::dev::Server> {
    let repo = web::Data::new(DieselOrderRepository::new(pool));
    let gateway = web::Data::new(RazorpayGateway::new(
        config.razorpay_key_id.clone(),
        config.razorpay_key_secret.clone(),
    ));
    let config_data = web::Data::new(config.clone());
    let bind_addr = (config.host.clone(), config.port);

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(repo.clone())
            .app_data(gateway.clone())
            .app_data(config_data.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("", web::get().to(handlers::orders::list_orders))
                    .route("/{id_or_code}", web::get().to(handlers::orders::get_order))
                    .route("/{id}", web::patch().to(handlers::orders::update_status))
                    .route("/{id}", web::delete().to(handlers::orders::delete_order)),
            )
            .service(
                web::scope("/payment")
                    .route("/create-order", web::post().to(handlers::payment::create_gateway_order)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run())
}
