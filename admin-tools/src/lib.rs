// Operational tooling for the PlanetKids storefront database

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod audit;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod utils;


/// Load `.env` and install the tracing subscriber shared by every binary
pub fn init_tracing() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_tools=info,seed_admin=info,audit_slugs=info,generate_hash=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
