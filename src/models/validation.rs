use std::fmt;

use crate::models::templating::MsgTemplating;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn require(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.push(FieldViolation::required(field));
    }
}

pub fn validate_templating(templating: &MsgTemplating) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    require(&mut errors, "template.name", &templating.template.name);
    require(&mut errors, "template.uuid", &templating.template.identifier);

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::templating::TemplateRef;

    fn templating(name: &str, identifier: &str) -> MsgTemplating {
        MsgTemplating {
            template: TemplateRef {
                name: name.to_string(),
                identifier: identifier.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn accepts_complete_template_reference() {
        assert!(validate_templating(&templating("welcome", "4ed5000f")).is_ok());
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = validate_templating(&templating("", "")).unwrap_err();

        assert_eq!(errors.fields(), vec!["template.name", "template.uuid"]);
        assert_eq!(
            errors.to_string(),
            "template.name: is required; template.uuid: is required"
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(validate_templating(&templating(" ", "abc")).is_ok());
    }
}
