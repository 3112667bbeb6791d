use crate::domain::entities::Template;
use crate::domain::errors::DomainResult;
use crate::domain::ports::template_repository::{TemplateFilter, TemplateRepository};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Any, QueryBuilder, Row};

const TEMPLATE_COLUMNS: &str = "SELECT id, user_id, name, subject, text, html, modified_date FROM templates";

fn template_from_row(row: &AnyRow) -> Result<Template, sqlx::Error> {
    let modified_date: String = row.try_get("modified_date")?;
    let modified_date = DateTime::parse_from_rfc3339(&modified_date)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);

    Ok(Template {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        subject: row.try_get("subject")?,
        text: row.try_get("text")?,
        html: row.try_get("html")?,
        modified_date,
    })
}

fn select_templates(filter: &TemplateFilter) -> QueryBuilder<'static, Any> {
    let mut builder = QueryBuilder::new(TEMPLATE_COLUMNS);
    builder.push(" WHERE user_id = ");
    builder.push_bind(filter.owner_id);

    if let Some(id) = filter.id {
        builder.push(" AND id = ");
        builder.push_bind(id);
    }

    if let Some(name) = &filter.name {
        builder.push(" AND name = ");
        builder.push_bind(name.clone());
    }

    builder.push(" ORDER BY id ASC");
    builder
}

#[async_trait]
impl TemplateRepository for Database {
    async fn find_templates(&self, filter: &TemplateFilter) -> DomainResult<Vec<Template>> {
        let rows = select_templates(filter)
            .build()
            .fetch_all(&self.pool)
            .await?;

        let mut templates = Vec::with_capacity(rows.len());
        for row in rows {
            templates.push(template_from_row(&row)?);
        }

        Ok(templates)
    }

    async fn find_template(&self, filter: &TemplateFilter) -> DomainResult<Option<Template>> {
        let mut builder = select_templates(filter);
        builder.push(" LIMIT 1");

        let row = builder.build().fetch_optional(&self.pool).await?;

        match row {
            Some(row) => Ok(Some(template_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert_template(&self, template: &Template) -> DomainResult<i64> {
        let row = sqlx::query(
            "INSERT INTO templates (user_id, name, subject, text, html, modified_date)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(template.user_id)
        .bind(&template.name)
        .bind(&template.subject)
        .bind(&template.text)
        .bind(&template.html)
        .bind(template.modified_date.to_rfc3339())
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;
        tracing::info!("Template created: id={}, name={}", id, template.name);
        Ok(id)
    }

    async fn update_template(&self, template: &Template) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE templates
             SET name = ?, subject = ?, text = ?, html = ?, modified_date = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&template.name)
        .bind(&template.subject)
        .bind(&template.text)
        .bind(&template.html)
        .bind(template.modified_date.to_rfc3339())
        .bind(template.id)
        .bind(template.user_id)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            "Template updated: id={}, rows_affected={}",
            template.id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn delete_template(&self, id: i64, owner_id: i64) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        tracing::info!(
            "Template deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
