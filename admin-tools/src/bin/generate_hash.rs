use admin_tools::{
    config::{AdminAccount, HashConfig},
    seed::manual_insert_sql,
    utils::hash_password,
};
use std::env;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    admin_tools::init_tracing();

    let mut admin = AdminAccount::from_env();
    if let Some(password) = env::args().nth(1) {
        admin.password = password;
    }

    let config = HashConfig::from_env()?;
    let password_hash = hash_password(&admin.password, &config)?;

    tracing::debug!(algorithm = %config.algorithm, cost = config.cost, "Password hashed");

    println!("Hashed password:");
    println!("{}", password_hash);
    println!();
    println!("To create the admin user manually:");
    println!("1. Run: npx prisma studio");
    println!("2. Open the User table");
    println!("3. Click \"Add record\"");
    println!("4. Fill in:");
    println!("   - email: {}", admin.email);
    println!("   - name: {}", admin.name);
    println!("   - password: {}", password_hash);
    println!("   - role: ADMIN");
    println!("5. Save the record");
    println!();
    println!("Or with SQL:");
    println!(
        "{}",
        manual_insert_sql(
            &Uuid::new_v4().to_string(),
            &admin.email,
            &admin.name,
            &password_hash
        )
    );

    Ok(())
}
