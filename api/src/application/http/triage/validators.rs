use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTriageRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "symptoms must be between 1 and 5000 characters"
    ))]
    #[schema(example = "I have had a mild headache and a runny nose since yesterday")]
    pub symptoms: String,
}
