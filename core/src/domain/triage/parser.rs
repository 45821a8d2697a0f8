//! Heuristic extraction of the Disease, Foods and Medicines sections from
//! free-text advice.
//!
//! The advice generator returns prose with no guaranteed schema, so every step
//! here degrades to a fallback value instead of failing. Sections are located
//! in the fixed order Disease, Foods, Medicines using the first occurrence of
//! each heading. Headings that come out of that order produce overlapping
//! sections (see the `out_of_order` test), which is a known limitation.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::triage::{entities::ParsedAdvice, schema::StructuredAdvice};

/// A heading is the word (optionally pluralized) followed by a colon, or the
/// word alone on its own line. Markdown emphasis or `#` around it is allowed.
fn heading_pattern(word: &str) -> Regex {
    Regex::new(&format!(
        r"(?im)\b{word}s?[ \t*_]*:|^[ \t#*_]*{word}s?[ \t*_\r]*$"
    ))
    .expect("valid heading regex")
}

static DISEASE_HEADING: LazyLock<Regex> = LazyLock::new(|| heading_pattern("disease"));
static FOODS_HEADING: LazyLock<Regex> = LazyLock::new(|| heading_pattern("food"));
static MEDICINES_HEADING: LazyLock<Regex> = LazyLock::new(|| heading_pattern("medicine"));

static LEADING_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*{1,2}\s*").unwrap());
static TRAILING_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\*{1,2}:?$").unwrap());

static LIST_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•\d.)\s]+").unwrap());
static INLINE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*|\*|_").unwrap());

/// Raw, uncleaned section bodies. `None` means the heading was not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdviceSections<'a> {
    pub disease: Option<&'a str>,
    pub foods: Option<&'a str>,
    pub medicines: Option<&'a str>,
}

/// Body of the section opened by `heading`: everything up to the next
/// `terminator` heading after it, or to the end of the text.
fn extract_section<'a>(text: &'a str, heading: &Regex, terminator: Option<&Regex>) -> Option<&'a str> {
    let start = heading.find(text)?.end();
    let end = terminator
        .and_then(|next| next.find_at(text, start))
        .map_or(text.len(), |m| m.start());

    Some(&text[start..end])
}

pub fn split_sections(text: &str) -> AdviceSections<'_> {
    AdviceSections {
        disease: extract_section(text, &DISEASE_HEADING, Some(&FOODS_HEADING)),
        foods: extract_section(text, &FOODS_HEADING, Some(&MEDICINES_HEADING)),
        medicines: extract_section(text, &MEDICINES_HEADING, None),
    }
}

pub fn clean_disease(text: &str) -> String {
    let text = text.trim();
    let text = LEADING_EMPHASIS.replace(text, "");
    let text = TRAILING_EMPHASIS.replace(&text, "");
    let text: &str = &text;
    let text = text.strip_suffix(':').unwrap_or(text);

    text.trim_end().to_string()
}

/// Cleans one bullet line. Returns `None` when nothing displayable is left.
pub fn clean_list_item(line: &str) -> Option<String> {
    let line = line.trim();
    let line = LIST_PREFIX.replace(line, "");
    let line = INLINE_EMPHASIS.replace_all(&line, "");
    let line: &str = &line;
    let line = line.strip_suffix(':').unwrap_or(line).trim();

    (!line.is_empty()).then(|| line.to_string())
}

pub fn clean_list(text: &str) -> Vec<String> {
    text.lines().filter_map(clean_list_item).collect()
}

pub fn parse_advice(raw: &str) -> ParsedAdvice {
    let sections = split_sections(raw);

    ParsedAdvice::new(
        sections.disease.map(clean_disease),
        sections.foods.map(clean_list).unwrap_or_default(),
        sections.medicines.map(clean_list).unwrap_or_default(),
    )
}

/// Decodes advice produced under the JSON response schema. The same cleanup
/// applies since models still decorate values with markdown.
pub fn parse_structured_advice(raw: &str) -> Option<ParsedAdvice> {
    let body = strip_code_fence(raw);
    let structured: StructuredAdvice = serde_json::from_str(body).ok()?;

    Some(ParsedAdvice::new(
        Some(clean_disease(&structured.disease)),
        structured.foods.iter().filter_map(|f| clean_list_item(f)).collect(),
        structured
            .medicines
            .iter()
            .filter_map(|m| clean_list_item(m))
            .collect(),
    ))
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);

    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::entities::DISEASE_FALLBACK;

    const WELL_FORMED: &str = "\
**Disease:** Tension headache, likely triggered by stress or dehydration.

**Foods:**
* Water and herbal teas
* **Leafy greens** rich in magnesium
* Bananas

**Medicines:**
1. Acetaminophen (Tylenol)
2. Ibuprofen (Advil)
3. A cold compress on the forehead

This is not a medical diagnosis. Please consult a licensed healthcare professional for an accurate diagnosis and treatment.";

    #[test]
    fn test_well_formed_response() {
        let advice = parse_advice(WELL_FORMED);

        assert_eq!(
            advice.disease,
            "Tension headache, likely triggered by stress or dehydration."
        );
        assert_eq!(
            advice.foods,
            vec![
                "Water and herbal teas",
                "Leafy greens rich in magnesium",
                "Bananas"
            ]
        );
        assert_eq!(
            &advice.medicines[..3],
            &[
                "Acetaminophen (Tylenol)",
                "Ibuprofen (Advil)",
                "A cold compress on the forehead"
            ]
        );
    }

    #[test]
    fn test_medicines_section_runs_to_end_of_text() {
        // The trailing disclaimer is not a heading, so it stays in the last section.
        let advice = parse_advice(WELL_FORMED);

        assert_eq!(advice.medicines.len(), 4);
        assert!(advice.medicines[3].starts_with("This is not a medical diagnosis."));
    }

    #[test]
    fn test_headings_case_and_plural_variants() {
        let raw = "DISEASE: Common cold\nfood:\n- Chicken broth\nMEDICINE:\n- Throat lozenges";
        let advice = parse_advice(raw);

        assert_eq!(advice.disease, "Common cold");
        assert_eq!(advice.foods, vec!["Chicken broth"]);
        assert_eq!(advice.medicines, vec!["Throat lozenges"]);
    }

    #[test]
    fn test_headings_without_colon_on_own_line() {
        let raw = "## Disease\nInfluenza\n\n## Foods\n- Broth\n\n**Medicines**\n- Rest";
        let advice = parse_advice(raw);

        assert_eq!(advice.disease, "Influenza");
        assert_eq!(advice.foods, vec!["Broth"]);
        assert_eq!(advice.medicines, vec!["Rest"]);
    }

    #[test]
    fn test_heading_whitespace_before_colon() {
        let raw = "Diseases : Migraine\nFoods :\n- Ginger tea\nMedicines :\n- Ibuprofen";
        let advice = parse_advice(raw);

        assert_eq!(advice.disease, "Migraine");
        assert_eq!(advice.foods, vec!["Ginger tea"]);
        assert_eq!(advice.medicines, vec!["Ibuprofen"]);
    }

    #[test]
    fn test_word_inside_other_word_is_not_a_heading() {
        let raw = "Disease: Flu\nSeafood: avoid for now\nFoods:\n- Rice";
        let advice = parse_advice(raw);

        assert_eq!(advice.disease, "Flu\nSeafood: avoid for now");
        assert_eq!(advice.foods, vec!["Rice"]);
        assert!(advice.medicines.is_empty());
    }

    #[test]
    fn test_text_without_headings_falls_back() {
        let advice = parse_advice("Some unrelated text with no headings");

        assert_eq!(advice.disease, DISEASE_FALLBACK);
        assert!(advice.foods.is_empty());
        assert!(advice.medicines.is_empty());
    }

    #[test]
    fn test_error_placeholder_falls_back() {
        let advice =
            parse_advice("❌ API Error: External service error: LLM API error: connection refused");

        assert_eq!(advice, ParsedAdvice::default());
    }

    #[test]
    fn test_empty_disease_body_falls_back() {
        let advice = parse_advice("Disease:\nFoods:\n- Rice\nMedicines:\n- Rest");

        assert_eq!(advice.disease, DISEASE_FALLBACK);
        assert_eq!(advice.foods, vec!["Rice"]);
        assert_eq!(advice.medicines, vec!["Rest"]);
    }

    #[test]
    fn test_missing_foods_lets_disease_run_to_end() {
        let advice = parse_advice("Disease: Flu\nMedicines:\n- Rest");

        assert_eq!(advice.disease, "Flu\nMedicines:\n- Rest");
        assert!(advice.foods.is_empty());
        assert_eq!(advice.medicines, vec!["Rest"]);
    }

    #[test]
    fn test_out_of_order_headings_overlap() {
        let raw = "Disease: Common cold\nMedicines:\n- Paracetamol\nFoods:\n- Soup\n";
        let advice = parse_advice(raw);

        assert_eq!(advice.disease, "Common cold\nMedicines:\n- Paracetamol");
        assert_eq!(advice.foods, vec!["Soup"]);
        assert_eq!(advice.medicines, vec!["Paracetamol", "Foods", "Soup"]);
    }

    #[test]
    fn test_repeated_heading_uses_first_occurrence() {
        let raw = "Disease: Flu\nFoods:\n- Rice\nFoods:\n- Toast\nMedicines:\n- Rest";
        let advice = parse_advice(raw);

        assert_eq!(advice.foods, vec!["Rice", "Foods", "Toast"]);
    }

    #[test]
    fn test_split_sections_reports_missing() {
        let sections = split_sections("Foods:\n- Rice");

        assert!(sections.disease.is_none());
        assert_eq!(sections.foods, Some("\n- Rice"));
        assert!(sections.medicines.is_none());
    }

    #[test]
    fn test_clean_disease_strips_emphasis_and_colon() {
        assert_eq!(clean_disease("**  Seasonal Flu  **:"), "Seasonal Flu");
        assert_eq!(clean_disease("  *Allergic rhinitis*  "), "Allergic rhinitis");
        assert_eq!(clean_disease("Migraine:"), "Migraine");
        assert_eq!(clean_disease("**Flu:**"), "Flu");
    }

    #[test]
    fn test_clean_disease_keeps_inner_emphasis() {
        assert_eq!(
            clean_disease("Likely **viral** infection"),
            "Likely **viral** infection"
        );
    }

    #[test]
    fn test_clean_list_item_strips_markdown() {
        assert_eq!(
            clean_list_item("**- Chicken soup:**"),
            Some("Chicken soup".to_string())
        );
        assert_eq!(
            clean_list_item("• _Warm_ ginger tea"),
            Some("Warm ginger tea".to_string())
        );
        assert_eq!(
            clean_list_item("  * **Honey** with lemon  "),
            Some("Honey with lemon".to_string())
        );
    }

    #[test]
    fn test_clean_list_item_discards_empty() {
        assert_eq!(clean_list_item(""), None);
        assert_eq!(clean_list_item("   "), None);
        assert_eq!(clean_list_item("**"), None);
        assert_eq!(clean_list_item("1."), None);
        assert_eq!(clean_list_item(":"), None);
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(clean_list("1. Rest\n2) Drink water"), vec!["Rest", "Drink water"]);
    }

    #[test]
    fn test_list_keeps_order_and_skips_blank_lines() {
        let list = clean_list("\n- Oatmeal\n\n- Bananas\n   \n- Toast\n");
        assert_eq!(list, vec!["Oatmeal", "Bananas", "Toast"]);
    }

    #[test]
    fn test_clean_list_item_is_idempotent_for_common_bullets() {
        let lines = [
            "**- Chicken soup:**",
            "1. Rest",
            "2) Drink water",
            "• _Warm_ ginger tea",
            "- Ibuprofen (Advil) :",
            "* **Leafy greens** rich in magnesium",
            "Plain item",
        ];

        for line in lines {
            let once = clean_list_item(line).unwrap();
            let twice = clean_list_item(&once).unwrap();
            assert_eq!(once, twice, "cleanup changed {once:?} on second pass");
        }
    }

    // Each step runs once, in order: prefix, emphasis, one colon. Markup that
    // hides a prefix or doubles a colon needs a second pass to disappear.
    #[test]
    fn test_clean_list_item_single_pass_limits() {
        let hidden_prefix = clean_list_item("_1. Rest_").unwrap();
        assert_eq!(hidden_prefix, "1. Rest");
        assert_eq!(clean_list_item(&hidden_prefix).unwrap(), "Rest");

        let double_colon = clean_list_item("Rest::").unwrap();
        assert_eq!(double_colon, "Rest:");
        assert_eq!(clean_list_item(&double_colon).unwrap(), "Rest");
    }

    #[test]
    fn test_cleanup_trims_space_left_by_colon() {
        assert_eq!(clean_disease("Flu :"), "Flu");
        assert_eq!(clean_list_item("- Ibuprofen :").unwrap(), "Ibuprofen");
    }

    #[test]
    fn test_structured_advice_is_cleaned() {
        let raw = r#"{
            "disease": "**Tension headache**",
            "foods": ["- Water", "**Bananas**", ""],
            "medicines": ["1. Acetaminophen"]
        }"#;

        let advice = parse_structured_advice(raw).unwrap();
        assert_eq!(advice.disease, "Tension headache");
        assert_eq!(advice.foods, vec!["Water", "Bananas"]);
        assert_eq!(advice.medicines, vec!["Acetaminophen"]);
    }

    #[test]
    fn test_structured_advice_inside_code_fence() {
        let raw = "```json\n{\"disease\": \"Flu\", \"foods\": [], \"medicines\": []}\n```";

        let advice = parse_structured_advice(raw).unwrap();
        assert_eq!(advice.disease, "Flu");
        assert!(advice.foods.is_empty());
    }

    #[test]
    fn test_structured_advice_rejects_prose() {
        assert!(parse_structured_advice(WELL_FORMED).is_none());
    }

    #[test]
    fn test_structured_advice_missing_fields_fall_back() {
        let advice = parse_structured_advice("{}").unwrap();
        assert_eq!(advice, ParsedAdvice::default());
    }
}
