use sqlx::PgPool;
use std::fmt::Write as _;

use crate::config::AuditConfig;
use crate::db;
use crate::error::Result;
use crate::models::SubcategoryWithParent;
use crate::utils::{category_url, slugify};

/// One audited subcategory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub parent_name: String,
    pub parent_slug: String,
    pub name: String,
    pub slug: String,
    pub display_order: i32,
    pub url: String,
    /// Stored slug equals the slug of the child name or of "parent child"
    pub slug_matches_name: bool,
}

impl AuditEntry {
    pub fn from_row(row: &SubcategoryWithParent, url_prefix: &str) -> Self {
        let candidates = [
            slugify(&row.name),
            slugify(&format!("{} {}", row.parent_name, row.name)),
        ];

        AuditEntry {
            parent_name: row.parent_name.clone(),
            parent_slug: row.parent_slug.clone(),
            name: row.name.clone(),
            slug: row.slug.clone(),
            display_order: row.display_order,
            url: category_url(url_prefix, &row.slug),
            slug_matches_name: candidates.iter().any(|c| *c == row.slug),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    pub fn from_rows(rows: &[SubcategoryWithParent], url_prefix: &str) -> Self {
        AuditReport {
            entries: rows
                .iter()
                .map(|row| AuditEntry::from_row(row, url_prefix))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mismatch_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.slug_matches_name).count()
    }

    /// Human readable listing for the operator
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.entries.is_empty() {
            out.push_str("No subcategories found.\n");
            return out;
        }

        for entry in &self.entries {
            let _ = writeln!(out, "Parent: {} ({})", entry.parent_name, entry.parent_slug);
            let _ = writeln!(out, "  Child:        {}", entry.name);
            let _ = writeln!(out, "  Slug:         {}", entry.slug);
            let _ = writeln!(out, "  Expected URL: {}", entry.url);
            if !entry.slug_matches_name {
                let _ = writeln!(out, "  ! slug does not match the category name");
            }
            out.push('\n');
        }

        out
    }
}

/// Load up to `config.limit` subcategories and build the report
pub async fn run_audit(pool: &PgPool, config: &AuditConfig) -> Result<AuditReport> {
    let rows = db::list_subcategories_with_parent(pool, config.limit).await?;
    let report = AuditReport::from_rows(&rows, &config.url_prefix);

    tracing::info!(
        rows = report.entries.len(),
        mismatches = report.mismatch_count(),
        "Slug audit finished"
    );

    Ok(report)
}
