//! Entry repository for reflection journal entries
//!
//! Table: entries (id, data, created_at, updated_at). The `work`, `struggle`
//! and `intention` fields live together inside the JSON `data` column; `id`
//! and the timestamps are first-class columns. Reads reshape the stored row
//! back into the flat [`Entry`] view.

use chrono::{DateTime, Utc};
use rf_core::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Entry row from database
#[derive(Debug, Clone, FromRow)]
struct EntryRow {
    id: String,
    data: JsonValue,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Flat entry view reshaped from a stored row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub work: String,
    pub struggle: String,
    pub intention: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    fn from_row(row: EntryRow) -> StoreResult<Self> {
        Ok(Self {
            work: payload_field(&row.id, &row.data, "work")?,
            struggle: payload_field(&row.id, &row.data, "struggle")?,
            intention: payload_field(&row.id, &row.data, "intention")?,
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for creating an entry
///
/// Extra fields round-trip through the payload blob unchanged. Datetimes
/// serialize as ISO-8601 strings inside the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryDto {
    /// Client-supplied id; a random v4 UUID is assigned when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub work: String,
    pub struggle: String,
    pub intention: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// DTO for updating an entry
///
/// The stored payload is fully replaced, not merged: fields not passed here
/// (beyond the injected `id` and `updated_at`) are lost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntryDto {
    pub work: String,
    pub struggle: String,
    pub intention: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// The id that will be stored for a create: the client-supplied one, or a
/// fresh random UUID
fn assigned_id(dto: &CreateEntryDto) -> String {
    dto.id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Serialize the create input as the payload blob. The generated id is not
/// injected; it lives in the id column and a client-supplied id passes
/// through via the DTO itself.
fn create_payload(dto: &CreateEntryDto) -> StoreResult<JsonValue> {
    Ok(serde_json::to_value(dto)?)
}

/// Serialize the update input as the payload blob, stamping `id` and
/// `updated_at` over whatever the caller passed
fn update_payload(
    dto: &UpdateEntryDto,
    entry_id: &str,
    updated_at: DateTime<Utc>,
) -> StoreResult<JsonValue> {
    let mut payload = serde_json::to_value(dto)?;
    if let JsonValue::Object(map) = &mut payload {
        map.insert("id".to_string(), JsonValue::String(entry_id.to_string()));
        map.insert("updated_at".to_string(), serde_json::to_value(updated_at)?);
    }
    Ok(payload)
}

fn payload_field(id: &str, data: &JsonValue, field: &'static str) -> StoreResult<String> {
    data.get(field)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| StoreError::MalformedRecord {
            id: id.to_string(),
            field,
        })
}

/// Entry repository
///
/// Each operation runs one parameterized statement on a pooled connection.
/// No transactions, no caching, no retry.
#[derive(Clone)]
pub struct EntryRepository {
    pool: PgPool,
}

impl EntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new entry and return it as read back from the database
    pub async fn create(&self, dto: CreateEntryDto) -> StoreResult<Entry> {
        let entry_id = assigned_id(&dto);
        let data = create_payload(&dto)?;

        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            INSERT INTO entries (id, data, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(&entry_id)
        .bind(&data)
        .bind(dto.created_at)
        .bind(dto.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Entry::from_row(row)
    }

    /// Fetch every entry in storage order
    pub async fn find_all(&self) -> StoreResult<Vec<Entry>> {
        let rows =
            sqlx::query_as::<_, EntryRow>("SELECT id, data, created_at, updated_at FROM entries")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Entry::from_row).collect()
    }

    /// Fetch one entry by id; `None` when no row matches
    pub async fn find_by_id(&self, entry_id: &str) -> StoreResult<Option<Entry>> {
        let row = sqlx::query_as::<_, EntryRow>(
            "SELECT id, data, created_at, updated_at FROM entries WHERE id = $1",
        )
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Entry::from_row).transpose()
    }

    /// Overwrite an entry's payload and bump `updated_at` to now (UTC).
    /// A nonexistent id affects zero rows and is a silent success.
    pub async fn update(&self, entry_id: &str, dto: UpdateEntryDto) -> StoreResult<()> {
        let updated_at = Utc::now();
        let data = update_payload(&dto, entry_id, updated_at)?;

        sqlx::query(
            r#"
            UPDATE entries
            SET data = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(entry_id)
        .bind(&data)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete one entry by id; a nonexistent id is a silent no-op
    pub async fn delete(&self, entry_id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(entry_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete every entry unconditionally
    pub async fn delete_all(&self) -> StoreResult<()> {
        sqlx::query("DELETE FROM entries")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
