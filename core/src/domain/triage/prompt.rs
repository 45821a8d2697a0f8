use crate::domain::common::entities::app_errors::CoreError;

pub const DISCLAIMER: &str = "This is not a medical diagnosis. Please consult a licensed healthcare professional for an accurate diagnosis and treatment.";

/// Prefix of the advice text substituted when the generator call fails.
pub const ADVICE_ERROR_MARKER: &str = "❌ API Error:";

const SYMPTOMS_PLACEHOLDER: &str = "{symptoms}";

const ADVICE_PROMPT_TEMPLATE: &str = r#"You are a compassionate medical assistant.

A user has described these symptoms:
"{symptoms}"

Based on these symptoms, please provide:

1. A short statement predicting the most likely disease or condition.
2. A list of suitable foods to eat (as bullet points or numbered list).
3. A list of general over-the-counter medicines or remedies (as bullet points or numbered list).
   Avoid prescription drugs.

Present the answer clearly separated into three sections titled 'Disease:', 'Foods:', and 'Medicines:'.

Use empathetic and clear language.

End with this disclaimer:
"{disclaimer}"
"#;

pub fn build_advice_prompt(symptoms: &str) -> String {
    ADVICE_PROMPT_TEMPLATE
        .replace("{disclaimer}", DISCLAIMER)
        .replace(SYMPTOMS_PLACEHOLDER, symptoms)
}

pub fn advice_error_placeholder(error: &CoreError) -> String {
    format!("{ADVICE_ERROR_MARKER} {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_query_and_headings() {
        let prompt = build_advice_prompt("I have a mild headache");

        assert!(prompt.contains("\"I have a mild headache\""));
        assert!(prompt.contains("'Disease:', 'Foods:', and 'Medicines:'"));
        assert!(prompt.contains(DISCLAIMER));
        assert!(!prompt.contains(SYMPTOMS_PLACEHOLDER));
    }

    #[test]
    fn test_query_braces_are_not_expanded() {
        let prompt = build_advice_prompt("pain near {disclaimer}");
        assert!(prompt.contains("pain near {disclaimer}"));
    }

    #[test]
    fn test_error_placeholder_carries_detail() {
        let placeholder =
            advice_error_placeholder(&CoreError::ExternalServiceError("timeout".to_string()));

        assert!(placeholder.starts_with(ADVICE_ERROR_MARKER));
        assert!(placeholder.ends_with("External service error: timeout"));
    }
}
