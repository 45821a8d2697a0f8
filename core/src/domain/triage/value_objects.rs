use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct TriageInput {
    pub symptoms: String,
}

/// Free-text symptom description that is known to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomQuery(String);

impl SymptomQuery {
    pub fn parse(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CoreError::Invalid);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_rejected() {
        assert_eq!(SymptomQuery::parse(""), Err(CoreError::Invalid));
        assert_eq!(SymptomQuery::parse(" \n\t "), Err(CoreError::Invalid));
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = SymptomQuery::parse("  I have a mild headache \n").unwrap();
        assert_eq!(query.as_str(), "I have a mild headache");
    }
}
