use crate::domain::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reusable message body (text and/or HTML) with a subject, owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub id: i64,
    #[serde(skip)]
    pub user_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub html: String,
    #[serde(default = "Utc::now")]
    pub modified_date: DateTime<Utc>,
}

impl Template {
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            user_id,
            name: name.into(),
            subject: String::new(),
            text: String::new(),
            html: String::new(),
            modified_date: Utc::now(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// A template needs a name and at least one body format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameNotSpecified);
        }
        if self.text.is_empty() && self.html.is_empty() {
            return Err(ValidationError::MissingContentParameter);
        }
        Ok(())
    }
}

/// Ownership link between a user and a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTemplate {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(skip)]
    pub template_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let template = Template::new(1, "").with_text("hi");
        assert_eq!(template.validate(), Err(ValidationError::NameNotSpecified));
    }

    #[test]
    fn test_name_checked_before_content() {
        let template = Template::new(1, "");
        assert_eq!(template.validate(), Err(ValidationError::NameNotSpecified));
    }

    #[test]
    fn test_validate_requires_some_content() {
        let template = Template::new(1, "welcome").with_subject("Hello");
        assert_eq!(
            template.validate(),
            Err(ValidationError::MissingContentParameter)
        );
    }

    #[test]
    fn test_validate_accepts_text_or_html() {
        assert!(Template::new(1, "a").with_text("hi").validate().is_ok());
        assert!(Template::new(1, "b").with_html("<p>hi</p>").validate().is_ok());
    }

    #[test]
    fn test_serialization_hides_owner() {
        let mut template = Template::new(7, "welcome").with_text("hi");
        template.id = 42;

        let value = serde_json::to_value(&template).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["id"], 42);
        assert_eq!(obj["name"], "welcome");
        assert!(obj.contains_key("modified_date"));
        assert!(!obj.contains_key("user_id"));
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn test_deserialization_ignores_owner_field() {
        let template: Template =
            serde_json::from_str(r#"{"name":"welcome","html":"<b>x</b>","user_id":99}"#).unwrap();

        assert_eq!(template.user_id, 0);
        assert_eq!(template.id, 0);
        assert_eq!(template.html, "<b>x</b>");
        assert!(template.text.is_empty());
    }

    #[test]
    fn test_user_template_serializes_to_empty_object() {
        let link = UserTemplate {
            user_id: 1,
            template_id: 2,
        };
        assert_eq!(serde_json::to_string(&link).unwrap(), "{}");
    }
}
