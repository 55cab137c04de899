//! Declarative form layouts

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    TextArea,
    Checkbox,
    /// Placeholder option (empty value) is rendered by the view, not listed here
    Select(Vec<SelectOption>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub required_message: Option<String>,
    pub placeholder: Option<String>,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            required_message: None,
            placeholder: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn phone(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Phone)
    }

    pub fn text_area(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn required(mut self, message: &str) -> Self {
        self.required = true;
        self.required_message = Some(message.to_string());
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    pub fn required_message(&self) -> String {
        self.required_message
            .clone()
            .unwrap_or_else(|| format!("{} is required", self.label))
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn new(title: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Ordered data-entry steps of one form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    pub id: String,
    pub steps: Vec<StepSpec>,
}

impl FormSpec {
    pub fn new(id: &str, steps: Vec<StepSpec>) -> Self {
        Self {
            id: id.to_string(),
            steps,
        }
    }

    /// At least one step, no empty step, field names unique across steps.
    ///
    /// Unique names are what keeps a later step from overwriting an earlier
    /// step's values when drafts are merged.
    pub fn validate(&self) -> CoreResult<()> {
        if self.steps.is_empty() {
            return Err(CoreError::Config(format!("form {} has no steps", self.id)));
        }

        let mut seen = HashSet::new();
        for (index, step) in self.steps.iter().enumerate() {
            if step.fields.is_empty() {
                return Err(CoreError::Config(format!(
                    "form {} step {} has no fields",
                    self.id,
                    index + 1
                )));
            }
            for field in &step.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(CoreError::Config(format!(
                        "form {} declares field {} more than once",
                        self.id, field.name
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    fn role_options(include_academic: bool) -> Vec<SelectOption> {
        let mut options = vec![
            SelectOption::new("clergy", "Clergy/Faith Leader"),
            SelectOption::new("admin", "Administrative Staff"),
            SelectOption::new("tech", "Technology Team"),
            SelectOption::new("consultant", "Consultant/Advisor"),
        ];
        if include_academic {
            options.push(SelectOption::new("academic", "Academic/Researcher"));
        }
        options.push(SelectOption::new("other", "Other"));
        options
    }

    /// Three-step "book a demo" lead form
    pub fn demo_request() -> Self {
        Self::new(
            "demo-request",
            vec![
                StepSpec::new(
                    "Tell us about yourself",
                    vec![
                        FieldSpec::text("name", "Full Name")
                            .required("Name is required")
                            .placeholder("Your full name"),
                        FieldSpec::email("email", "Email Address")
                            .required("Email is required")
                            .placeholder("Your email"),
                        FieldSpec::phone("phone", "Phone Number")
                            .required("Phone number is required")
                            .placeholder("Your phone number"),
                    ],
                ),
                StepSpec::new(
                    "About your organization",
                    vec![
                        FieldSpec::text("organization", "Organization Name")
                            .required("Organization name is required")
                            .placeholder("Your organization"),
                        FieldSpec::select("role", "Your Role", Self::role_options(false))
                            .required("Role is required")
                            .placeholder("Select your role"),
                        FieldSpec::select(
                            "size",
                            "Organization Size",
                            vec![
                                SelectOption::new("1-50", "1-50 members"),
                                SelectOption::new("51-200", "51-200 members"),
                                SelectOption::new("201-500", "201-500 members"),
                                SelectOption::new("501-1000", "501-1000 members"),
                                SelectOption::new("1000+", "1000+ members"),
                            ],
                        )
                        .required("Organization size is required")
                        .placeholder("Select organization size"),
                    ],
                ),
                StepSpec::new(
                    "Your interests",
                    vec![
                        FieldSpec::checkbox(
                            "interestedIn.spiritualAgents",
                            "AI-Powered Spiritual Agents",
                        ),
                        FieldSpec::checkbox("interestedIn.virtualSpaces", "Virtual Sacred Spaces"),
                        FieldSpec::checkbox("interestedIn.analytics", "Engagement Dashboard"),
                        FieldSpec::text_area("message", "Anything else you'd like to share?")
                            .placeholder("Tell us about your specific needs or questions"),
                        FieldSpec::select(
                            "referral",
                            "How did you hear about us?",
                            vec![
                                SelectOption::new("search", "Search Engine"),
                                SelectOption::new("social", "Social Media"),
                                SelectOption::new("conference", "Conference/Event"),
                                SelectOption::new("recommendation", "Colleague Recommendation"),
                                SelectOption::new("press", "Press/Media"),
                                SelectOption::new("other", "Other"),
                            ],
                        )
                        .placeholder("Select an option"),
                    ],
                ),
            ],
        )
    }

    /// Single-step research preview download form
    pub fn research_download() -> Self {
        Self::new(
            "research-download",
            vec![StepSpec::new(
                "Download Research Preview",
                vec![
                    FieldSpec::text("name", "Full Name")
                        .required("Name is required")
                        .placeholder("John Smith"),
                    FieldSpec::email("email", "Email Address")
                        .required("Email is required")
                        .placeholder("john@example.com"),
                    FieldSpec::text("organization", "Organization")
                        .required("Organization is required")
                        .placeholder("Your organization"),
                    FieldSpec::select("role", "Your Role", Self::role_options(true))
                        .required("Role is required")
                        .placeholder("Select your role"),
                ],
            )],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(FormSpec::demo_request().validate().is_ok());
        assert!(FormSpec::research_download().validate().is_ok());
        assert_eq!(FormSpec::demo_request().step_count(), 3);
        assert_eq!(FormSpec::research_download().step_count(), 1);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let spec = FormSpec::new(
            "dup",
            vec![
                StepSpec::new("one", vec![FieldSpec::text("name", "Name")]),
                StepSpec::new("two", vec![FieldSpec::text("name", "Name again")]),
            ],
        );
        assert!(matches!(spec.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_empty_forms_rejected() {
        assert!(FormSpec::new("none", vec![]).validate().is_err());
        assert!(FormSpec::new("hollow", vec![StepSpec::new("empty", vec![])])
            .validate()
            .is_err());
    }

    #[test]
    fn test_default_required_message() {
        let field = FieldSpec::text("city", "City");
        assert_eq!(field.required_message(), "City is required");
    }
}
