use crate::domain::entities::Template;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Equality criteria for template lookups. The owner is always part of the
/// filter; `id` and `name` only apply when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFilter {
    pub owner_id: i64,
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl TemplateFilter {
    pub fn owned_by(owner_id: i64) -> Self {
        Self {
            owner_id,
            id: None,
            name: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn matches(&self, template: &Template) -> bool {
        template.user_id == self.owner_id
            && self.id.map_or(true, |id| template.id == id)
            && self.name.as_deref().map_or(true, |name| template.name == name)
    }
}

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// All templates matching the filter, ordered by id.
    async fn find_templates(&self, filter: &TemplateFilter) -> DomainResult<Vec<Template>>;

    async fn find_template(&self, filter: &TemplateFilter) -> DomainResult<Option<Template>>;

    /// Inserts the template and returns the generated id.
    async fn insert_template(&self, template: &Template) -> DomainResult<i64>;

    /// Overwrites the row with the same id and owner. Returns rows affected.
    async fn update_template(&self, template: &Template) -> DomainResult<u64>;

    /// Deletes the row with the given id and owner. Returns rows affected.
    async fn delete_template(&self, id: i64, owner_id: i64) -> DomainResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_always_checks_owner() {
        let mut template = Template::new(1, "welcome").with_text("hi");
        template.id = 5;

        assert!(TemplateFilter::owned_by(1).matches(&template));
        assert!(!TemplateFilter::owned_by(2).matches(&template));
        assert!(!TemplateFilter::owned_by(2).with_id(5).matches(&template));
    }

    #[test]
    fn test_filter_optional_criteria() {
        let mut template = Template::new(1, "welcome").with_text("hi");
        template.id = 5;

        assert!(TemplateFilter::owned_by(1).with_id(5).matches(&template));
        assert!(!TemplateFilter::owned_by(1).with_id(6).matches(&template));
        assert!(TemplateFilter::owned_by(1)
            .with_name("welcome")
            .matches(&template));
        assert!(!TemplateFilter::owned_by(1).with_name("").matches(&template));
    }
}
