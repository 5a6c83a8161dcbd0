// ABOUTME: Ingredient table schema and IngredientStore implementation for SQLite
// ABOUTME: Enumerations are stored as their wire names, lists as JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use async_trait::async_trait;
use bakebase_core::constants::limits;
use bakebase_core::errors::{AppError, AppResult};
use bakebase_core::models::{IngredientRecord, LeaveningType};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::debug;
use uuid::Uuid;

use super::Database;
use crate::store::{summarize_categories, CategorySummary, IngredientFilter, IngredientStore};

const SELECT_INGREDIENTS: &str = r"
    SELECT id, name, category, description,
           water_content_pct, protein_content_pct, fat_content_pct,
           starch_content_pct, sugar_content_pct, fiber_content_pct,
           ph_level_min, ph_level_max, density_g_per_ml, standard_measurement_unit,
           gluten_forming, emulsifying, leavening_type, hygroscopic,
           typical_hydration_ratio, flavor_profile, primary_function, interactions,
           substitution_ratio, temperature_sensitivity, source_notes, confidence_level
    FROM ingredients
";

impl Database {
    /// Create the ingredients table and its indexes
    pub(super) async fn migrate_ingredients(&self) -> AppResult<()> {
        self.execute_ddl(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                water_content_pct REAL NOT NULL DEFAULT 0,
                protein_content_pct REAL NOT NULL DEFAULT 0,
                fat_content_pct REAL NOT NULL DEFAULT 0,
                starch_content_pct REAL NOT NULL DEFAULT 0,
                sugar_content_pct REAL NOT NULL DEFAULT 0,
                fiber_content_pct REAL NOT NULL DEFAULT 0,
                ph_level_min REAL,
                ph_level_max REAL,
                density_g_per_ml REAL,
                standard_measurement_unit TEXT NOT NULL,
                gluten_forming INTEGER NOT NULL DEFAULT 0,
                emulsifying INTEGER NOT NULL DEFAULT 0,
                leavening_type TEXT,
                hygroscopic INTEGER NOT NULL DEFAULT 0,
                typical_hydration_ratio REAL,
                flavor_profile TEXT NOT NULL DEFAULT '[]',
                primary_function TEXT NOT NULL DEFAULT '',
                interactions TEXT NOT NULL DEFAULT '[]',
                substitution_ratio TEXT NOT NULL DEFAULT '[]',
                temperature_sensitivity TEXT NOT NULL DEFAULT '',
                source_notes TEXT NOT NULL DEFAULT '',
                confidence_level TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .await?;
        self.execute_ddl("CREATE INDEX IF NOT EXISTS idx_ingredients_category ON ingredients(category)")
            .await?;
        self.execute_ddl("CREATE INDEX IF NOT EXISTS idx_ingredients_name ON ingredients(name)")
            .await
    }

    fn row_to_ingredient(row: &SqliteRow) -> AppResult<IngredientRecord> {
        Ok(IngredientRecord {
            id: get(row, "id")?,
            name: get(row, "name")?,
            category: parse_wire_name("category", get(row, "category")?)?,
            description: get(row, "description")?,
            water_content_pct: get(row, "water_content_pct")?,
            protein_content_pct: get(row, "protein_content_pct")?,
            fat_content_pct: get(row, "fat_content_pct")?,
            starch_content_pct: get(row, "starch_content_pct")?,
            sugar_content_pct: get(row, "sugar_content_pct")?,
            fiber_content_pct: get(row, "fiber_content_pct")?,
            ph_level_min: get(row, "ph_level_min")?,
            ph_level_max: get(row, "ph_level_max")?,
            density_g_per_ml: get(row, "density_g_per_ml")?,
            standard_measurement_unit: parse_wire_name(
                "standard_measurement_unit",
                get(row, "standard_measurement_unit")?,
            )?,
            gluten_forming: get(row, "gluten_forming")?,
            emulsifying: get(row, "emulsifying")?,
            leavening_type: get::<Option<String>>(row, "leavening_type")?
                .map(|value| parse_wire_name("leavening_type", value))
                .transpose()?,
            hygroscopic: get(row, "hygroscopic")?,
            typical_hydration_ratio: get(row, "typical_hydration_ratio")?,
            flavor_profile: parse_json_column("flavor_profile", &get::<String>(row, "flavor_profile")?)?,
            primary_function: get(row, "primary_function")?,
            interactions: parse_json_column("interactions", &get::<String>(row, "interactions")?)?,
            substitution_ratio: parse_json_column(
                "substitution_ratio",
                &get::<String>(row, "substitution_ratio")?,
            )?,
            temperature_sensitivity: get(row, "temperature_sensitivity")?,
            source_notes: get(row, "source_notes")?,
            confidence_level: parse_wire_name("confidence_level", get(row, "confidence_level")?)?,
        })
    }
}

#[async_trait]
impl IngredientStore for Database {
    async fn list_ingredients(
        &self,
        filter: &IngredientFilter,
    ) -> AppResult<Vec<IngredientRecord>> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_INGREDIENTS);
        query.push(" WHERE 1 = 1");
        if let Some(category) = filter.category {
            query.push(" AND category = ").push_bind(category.as_str());
        }
        if let Some(function) = filter.function.as_deref().filter(|f| !f.trim().is_empty()) {
            query
                .push(" AND instr(lower(primary_function), lower(")
                .push_bind(function.trim().to_owned())
                .push(")) > 0");
        }
        query.push(" ORDER BY name");

        let rows = query
            .build()
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to list ingredients: {e}")))?;
        rows.iter().map(Self::row_to_ingredient).collect()
    }

    async fn get_ingredient(&self, id: &str) -> AppResult<Option<IngredientRecord>> {
        let row = sqlx::query(&format!("{SELECT_INGREDIENTS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get ingredient: {e}")))?;
        row.as_ref().map(Self::row_to_ingredient).transpose()
    }

    async fn get_ingredients_by_ids(&self, ids: &[String]) -> AppResult<Vec<IngredientRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_INGREDIENTS);
        query.push(" WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(id.as_str());
        }
        separated.push_unseparated(")");

        let rows = query
            .build()
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get ingredients by id: {e}")))?;
        rows.iter().map(Self::row_to_ingredient).collect()
    }

    async fn search_ingredients(&self, query: &str) -> AppResult<Vec<IngredientRecord>> {
        let rows = sqlx::query(&format!(
            "{SELECT_INGREDIENTS}
             WHERE instr(lower(name), lower($1)) > 0
                OR instr(lower(description), lower($1)) > 0
                OR instr(lower(primary_function), lower($1)) > 0
                OR instr(lower(category), lower($1)) > 0
             ORDER BY name"
        ))
        .bind(query.trim())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to search ingredients: {e}")))?;
        rows.iter().map(Self::row_to_ingredient).collect()
    }

    async fn category_summaries(&self) -> AppResult<Vec<CategorySummary>> {
        let rows = sqlx::query(&format!("{SELECT_INGREDIENTS} ORDER BY rowid"))
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to load categories: {e}")))?;
        let records = rows
            .iter()
            .map(Self::row_to_ingredient)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(summarize_categories(&records, limits::CATEGORY_EXAMPLES))
    }

    async fn count_ingredients(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count ingredients: {e}")))?;
        u64::try_from(count)
            .map_err(|e| AppError::internal(format!("Integer conversion failed for count: {e}")))
    }

    async fn insert_ingredient(&self, record: &IngredientRecord) -> AppResult<String> {
        record.validate()?;
        let id = if record.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            record.id.clone()
        };

        sqlx::query(
            r"
            INSERT INTO ingredients (
                id, name, category, description,
                water_content_pct, protein_content_pct, fat_content_pct,
                starch_content_pct, sugar_content_pct, fiber_content_pct,
                ph_level_min, ph_level_max, density_g_per_ml, standard_measurement_unit,
                gluten_forming, emulsifying, leavening_type, hygroscopic,
                typical_hydration_ratio, flavor_profile, primary_function, interactions,
                substitution_ratio, temperature_sensitivity, source_notes, confidence_level,
                created_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27
            )
            ",
        )
        .bind(&id)
        .bind(&record.name)
        .bind(record.category.as_str())
        .bind(&record.description)
        .bind(record.water_content_pct)
        .bind(record.protein_content_pct)
        .bind(record.fat_content_pct)
        .bind(record.starch_content_pct)
        .bind(record.sugar_content_pct)
        .bind(record.fiber_content_pct)
        .bind(record.ph_level_min)
        .bind(record.ph_level_max)
        .bind(record.density_g_per_ml)
        .bind(record.standard_measurement_unit.as_str())
        .bind(record.gluten_forming)
        .bind(record.emulsifying)
        .bind(record.leavening_type.map(LeaveningType::as_str))
        .bind(record.hygroscopic)
        .bind(record.typical_hydration_ratio)
        .bind(serde_json::to_string(&record.flavor_profile)?)
        .bind(&record.primary_function)
        .bind(serde_json::to_string(&record.interactions)?)
        .bind(serde_json::to_string(&record.substitution_ratio)?)
        .bind(&record.temperature_sensitivity)
        .bind(&record.source_notes)
        .bind(record.confidence_level.as_str())
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to insert ingredient {}: {e}", record.name)))?;

        debug!(ingredient.id = %id, ingredient.name = %record.name, "Inserted ingredient");
        Ok(id)
    }

    async fn clear_ingredients(&self) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ingredients")
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to clear ingredients: {e}")))?;
        debug!(removed = result.rows_affected(), "Cleared ingredients");
        Ok(())
    }
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> AppResult<T>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(column)
        .map_err(|e| AppError::database(format!("Failed to read column {column}: {e}")))
}

fn parse_wire_name<T: DeserializeOwned>(column: &str, value: String) -> AppResult<T> {
    serde_json::from_value(Value::String(value))
        .map_err(|e| AppError::database(format!("Invalid stored {column}: {e}")))
}

fn parse_json_column<T: DeserializeOwned>(column: &str, text: &str) -> AppResult<T> {
    serde_json::from_str(text)
        .map_err(|e| AppError::database(format!("Invalid JSON in {column}: {e}")))
}
