use crate::domain::entities::Template;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::template_repository::{TemplateFilter, TemplateRepository};
use chrono::Utc;
use std::sync::Arc;

fn record(operation: &'static str, outcome: &'static str) {
    metrics::counter!(
        "template_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

/// Logs a storage failure where it happened and hands it back unchanged.
fn storage_failed(operation: &'static str, err: DomainError) -> DomainError {
    tracing::error!(operation, "Template storage error: {}", err);
    record(operation, "error");
    err
}

/// Owner-scoped CRUD over email templates.
#[derive(Clone)]
pub struct TemplateService {
    template_repo: Arc<dyn TemplateRepository>,
}

impl TemplateService {
    pub fn new(template_repo: Arc<dyn TemplateRepository>) -> Self {
        Self { template_repo }
    }

    pub async fn list(&self, owner_id: i64) -> DomainResult<Vec<Template>> {
        let templates = self
            .template_repo
            .find_templates(&TemplateFilter::owned_by(owner_id))
            .await
            .map_err(|e| storage_failed("list", e))?;

        record("list", "ok");
        Ok(templates)
    }

    pub async fn get(&self, id: i64, owner_id: i64) -> DomainResult<Template> {
        let template = self
            .template_repo
            .find_template(&TemplateFilter::owned_by(owner_id).with_id(id))
            .await
            .map_err(|e| storage_failed("get", e))?
            .ok_or_else(|| DomainError::NotFound(format!("Template {} not found", id)))?;

        record("get", "ok");
        Ok(template)
    }

    pub async fn get_by_name(&self, name: &str, owner_id: i64) -> DomainResult<Template> {
        let template = self
            .template_repo
            .find_template(&TemplateFilter::owned_by(owner_id).with_name(name))
            .await
            .map_err(|e| storage_failed("get_by_name", e))?
            .ok_or_else(|| DomainError::NotFound(format!("Template '{}' not found", name)))?;

        record("get_by_name", "ok");
        Ok(template)
    }

    /// Validates, stamps the modification time and stores a new template.
    /// The returned value carries the generated id.
    pub async fn create(&self, mut template: Template) -> DomainResult<Template> {
        if let Err(e) = template.validate() {
            tracing::debug!("Rejected template for user {}: {}", template.user_id, e);
            record("create", "invalid");
            return Err(e.into());
        }

        template.id = 0;
        self.ensure_name_available(&template, "create").await?;

        template.modified_date = Utc::now();
        template.id = self
            .template_repo
            .insert_template(&template)
            .await
            .map_err(|e| storage_failed("create", e))?;

        record("create", "ok");
        Ok(template)
    }

    /// Replaces every field of the stored template with the same id and owner.
    pub async fn update(&self, mut template: Template) -> DomainResult<Template> {
        if let Err(e) = template.validate() {
            tracing::debug!("Rejected update of template {}: {}", template.id, e);
            record("update", "invalid");
            return Err(e.into());
        }

        // Ownership before name: another owner's id must read as missing
        let owned = self
            .template_repo
            .find_template(&TemplateFilter::owned_by(template.user_id).with_id(template.id))
            .await
            .map_err(|e| storage_failed("update", e))?;
        if owned.is_none() {
            record("update", "not_found");
            return Err(DomainError::NotFound(format!(
                "Template {} not found",
                template.id
            )));
        }

        self.ensure_name_available(&template, "update").await?;

        template.modified_date = Utc::now();
        let updated = self
            .template_repo
            .update_template(&template)
            .await
            .map_err(|e| storage_failed("update", e))?;

        if updated == 0 {
            record("update", "not_found");
            return Err(DomainError::NotFound(format!(
                "Template {} not found",
                template.id
            )));
        }

        record("update", "ok");
        Ok(template)
    }

    /// Removes the template if the owner matches. Nothing matching is not an error.
    pub async fn delete(&self, id: i64, owner_id: i64) -> DomainResult<()> {
        self.template_repo
            .delete_template(id, owner_id)
            .await
            .map_err(|e| storage_failed("delete", e))?;

        record("delete", "ok");
        Ok(())
    }

    async fn ensure_name_available(
        &self,
        template: &Template,
        operation: &'static str,
    ) -> DomainResult<()> {
        let existing = self
            .template_repo
            .find_template(&TemplateFilter::owned_by(template.user_id).with_name(&template.name))
            .await
            .map_err(|e| storage_failed(operation, e))?;

        match existing {
            Some(other) if other.id != template.id => {
                record(operation, "conflict");
                Err(DomainError::Conflict("Template name already in use".to_string()))
            }
            _ => Ok(()),
        }
    }
}
