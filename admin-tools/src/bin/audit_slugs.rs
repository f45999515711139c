use admin_tools::{audit, config::AuditConfig, db};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    admin_tools::init_tracing();

    let config = AuditConfig::from_env()?;
    let pool = db::create_pool(&config.database).await?;

    let result = audit::run_audit(&pool, &config).await;
    pool.close().await;

    let report = result?;
    println!("Checking subcategory slugs (first {}):\n", config.limit);
    print!("{}", report.render());

    if report.mismatch_count() > 0 {
        tracing::warn!(
            mismatches = report.mismatch_count(),
            "Some slugs do not follow the category name"
        );
    }

    Ok(())
}
