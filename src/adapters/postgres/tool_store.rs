//! PostgreSQL implementation of ToolStore.
//!
//! The `tools` table plays the role of the document collection: the
//! database assigns ids (`BIGSERIAL`) and sorts results.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::tool::{Tool, ToolDraft, ToolId};
use crate::ports::{StoreError, ToolStore};

/// PostgreSQL implementation of ToolStore.
#[derive(Clone)]
pub struct PostgresToolStore {
    pool: PgPool,
}

impl PostgresToolStore {
    /// Creates a new PostgresToolStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToolStore for PostgresToolStore {
    async fn list(&self) -> Result<Vec<Tool>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, brand, description, img_name
            FROM tools
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to fetch tools: {}", e)))?;

        rows.iter()
            .map(|row| ToolRow::from_pg(row).map(Tool::from))
            .collect()
    }

    async fn exists(&self, id: ToolId) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM tools WHERE id = $1) AS found")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Database(format!("Failed to check tool: {}", e)))?;

        column(&row, "found")
    }

    async fn insert(&self, draft: ToolDraft) -> Result<Tool, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO tools (name, price, brand, description, img_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, brand, description, img_name
            "#,
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.brand)
        .bind(&draft.description)
        .bind(&draft.img_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to insert tool: {}", e)))?;

        ToolRow::from_pg(&row).map(Tool::from)
    }

    async fn update(&self, id: ToolId, draft: ToolDraft) -> Result<Tool, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE tools SET
                name = $2,
                price = $3,
                brand = $4,
                description = $5,
                img_name = $6
            WHERE id = $1
            RETURNING id, name, price, brand, description, img_name
            "#,
        )
        .bind(id.value())
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.brand)
        .bind(&draft.description)
        .bind(&draft.img_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to update tool: {}", e)))?;

        let row = found(row, id)?;
        ToolRow::from_pg(&row).map(Tool::from)
    }

    async fn remove(&self, id: ToolId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM tools WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(format!("Failed to delete tool: {}", e)))?;

        ensure_affected(result.rows_affected(), id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, StoreError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| StoreError::Database(format!("Failed to get {}: {}", name, e)))
}

/// Column values of one `tools` row.
#[derive(Debug, Clone, PartialEq)]
struct ToolRow {
    id: i64,
    name: String,
    price: f64,
    brand: String,
    description: String,
    img_name: String,
}

impl ToolRow {
    fn from_pg(row: &PgRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: column(row, "id")?,
            name: column(row, "name")?,
            price: column(row, "price")?,
            brand: column(row, "brand")?,
            description: column(row, "description")?,
            img_name: column(row, "img_name")?,
        })
    }
}

impl From<ToolRow> for Tool {
    fn from(row: ToolRow) -> Self {
        Tool {
            id: ToolId::new(row.id),
            name: row.name,
            price: row.price,
            brand: row.brand,
            description: row.description,
            img_name: row.img_name,
        }
    }
}

/// A `RETURNING` query that matched nothing means the id is unknown.
fn found<T>(row: Option<T>, id: ToolId) -> Result<T, StoreError> {
    row.ok_or(StoreError::NotFound(id))
}

/// A `DELETE` that touched no row means the id is unknown.
fn ensure_affected(rows_affected: u64, id: ToolId) -> Result<(), StoreError> {
    if rows_affected == 0 {
        return Err(StoreError::NotFound(id));
    }
    Ok(())
}
