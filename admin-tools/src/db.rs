use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{Category, Role, SubcategoryWithParent, User};

/// Create a database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    Ok(pool)
}

// ============================================================================
// User Operations
// ============================================================================

const USER_COLUMNS: &str = r#"
    id, email, name, password, role::text AS role,
    "createdAt"::timestamp AS "createdAt", "updatedAt"::timestamp AS "updatedAt"
"#;

/// Insert a user unless one with the same email already exists
///
/// Returns the new row, or `None` when the email was taken. The existing row
/// is never touched.
pub async fn insert_user_if_absent(
    pool: &PgPool,
    id: &str,
    email: &str,
    name: &str,
    password_hash: &str,
    role: Role,
) -> Result<Option<User>> {
    let sql = format!(
        r#"
        INSERT INTO "User" (id, email, name, password, role, "createdAt", "updatedAt")
        VALUES ($1, $2, $3, $4, $5::"Role", NOW(), NOW())
        ON CONFLICT (email) DO NOTHING
        RETURNING {}
        "#,
        USER_COLUMNS
    );

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let sql = format!(r#"SELECT {} FROM "User" WHERE email = $1"#, USER_COLUMNS);

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Count users with the given email
pub async fn count_users_by_email(pool: &PgPool, email: &str) -> Result<i64> {
    let count: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "User" WHERE email = $1"#)
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(count.0)
}

// ============================================================================
// Category Operations
// ============================================================================

/// Get category by ID
pub async fn get_category_by_id(pool: &PgPool, category_id: &str) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, slug, "parentId", "displayOrder"
        FROM "Category"
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

/// List subcategories joined to their parent, lowest display order first
///
/// Equal display orders fall back to the child id so repeated runs print the
/// same sequence.
pub async fn list_subcategories_with_parent(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<SubcategoryWithParent>> {
    let rows = sqlx::query_as::<_, SubcategoryWithParent>(
        r#"
        SELECT
            c.id,
            c.name,
            c.slug,
            c."displayOrder" AS display_order,
            p.id AS parent_id,
            p.name AS parent_name,
            p.slug AS parent_slug
        FROM "Category" c
        INNER JOIN "Category" p ON p.id = c."parentId"
        WHERE c."parentId" IS NOT NULL
        ORDER BY c."displayOrder" ASC, c.id ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
