use admin_tools::{
    config::SeedConfig,
    seed::{self, SeedOutcome},
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    admin_tools::init_tracing();

    tracing::info!("Seeding PlanetKids administrator account");

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid seed configuration: {:#}", e);
            eprintln!("Error seeding database: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // The pool is released inside `run` before anything is reported
    match seed::run(&config).await {
        Ok(SeedOutcome::Created(user)) => {
            println!("Admin user created: {}", user.email);
            println!("Password: {}", config.admin.password);
            ExitCode::SUCCESS
        }
        Ok(SeedOutcome::AlreadyExists) => {
            println!("Admin user already exists: {}", config.admin.email);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(persistence = e.is_persistence(), "Seeding failed: {}", e);
            eprintln!("Error seeding database: {}", e);
            ExitCode::FAILURE
        }
    }
}
