use async_trait::async_trait;
use mailplate::domain::entities::Template;
use mailplate::domain::errors::{DomainError, DomainResult};
use mailplate::domain::ports::template_repository::{TemplateFilter, TemplateRepository};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Vec-backed repository that counts every storage call and can be told to fail.
#[derive(Default)]
pub struct InMemoryTemplateRepository {
    templates: Mutex<Vec<Template>>,
    calls: AtomicUsize,
    failing: AtomicBool,
    fail_from_call: Mutex<Option<usize>>,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Lets the next `calls` storage calls succeed and fails every one after.
    pub fn fail_after(&self, calls: usize) {
        *self.fail_from_call.lock().unwrap() = Some(self.calls() + calls + 1);
    }

    pub fn stored(&self) -> Vec<Template> {
        self.templates.lock().unwrap().clone()
    }

    fn enter(&self) -> DomainResult<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let past_limit = self
            .fail_from_call
            .lock()
            .unwrap()
            .map_or(false, |limit| call >= limit);
        if past_limit || self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn find_templates(&self, filter: &TemplateFilter) -> DomainResult<Vec<Template>> {
        self.enter()?;
        let templates = self.templates.lock().unwrap();
        Ok(templates.iter().filter(|t| filter.matches(t)).cloned().collect())
    }

    async fn find_template(&self, filter: &TemplateFilter) -> DomainResult<Option<Template>> {
        self.enter()?;
        let templates = self.templates.lock().unwrap();
        Ok(templates.iter().find(|t| filter.matches(t)).cloned())
    }

    async fn insert_template(&self, template: &Template) -> DomainResult<i64> {
        self.enter()?;
        let mut templates = self.templates.lock().unwrap();
        let id = templates.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let mut stored = template.clone();
        stored.id = id;
        templates.push(stored);
        Ok(id)
    }

    async fn update_template(&self, template: &Template) -> DomainResult<u64> {
        self.enter()?;
        let mut templates = self.templates.lock().unwrap();
        match templates
            .iter_mut()
            .find(|t| t.id == template.id && t.user_id == template.user_id)
        {
            Some(existing) => {
                *existing = template.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_template(&self, id: i64, owner_id: i64) -> DomainResult<u64> {
        self.enter()?;
        let mut templates = self.templates.lock().unwrap();
        let before = templates.len();
        templates.retain(|t| !(t.id == id && t.user_id == owner_id));
        Ok((before - templates.len()) as u64)
    }
}
