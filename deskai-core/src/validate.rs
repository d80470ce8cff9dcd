use crate::error::ValidationError;

/// A required entry: non-empty after trimming.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(trimmed.to_string())
}

/// A required text area that was seeded with placeholder text. Untouched
/// placeholder content counts as empty, as does a value the user started
/// from the placeholder's leading hint (e.g. left "e.g., ..." in place).
pub fn required_non_placeholder(
    field: &'static str,
    value: &str,
    placeholder: &str,
) -> Result<String, ValidationError> {
    let trimmed = required(field, value)?;

    if trimmed == placeholder.trim() || placeholder_hint(placeholder).is_some_and(|h| trimmed.starts_with(h)) {
        return Err(ValidationError::Placeholder { field });
    }

    Ok(trimmed)
}

// The hint is the placeholder up to and including the first comma, which
// is how the seeded texts start ("e.g.,", "List your key skills,").
fn placeholder_hint(placeholder: &str) -> Option<&str> {
    let idx = placeholder.find(',')?;
    Some(&placeholder[..=idx])
}

/// Optional entries keep their trimmed value; blank becomes the given
/// substitute so prompts never interpolate empty strings.
pub fn optional_or(value: &str, substitute: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        substitute.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILLS_PLACEHOLDER: &str =
        "e.g., Python, JavaScript, React, SQL, Machine Learning, Project Management...";

    #[test]
    fn required_rejects_blank() {
        assert_eq!(
            required("job title", "   "),
            Err(ValidationError::Missing { field: "job title" })
        );
        assert_eq!(required("job title", " QA Lead ").unwrap(), "QA Lead");
    }

    #[test]
    fn untouched_placeholder_is_rejected() {
        assert_eq!(
            required_non_placeholder("skills", SKILLS_PLACEHOLDER, SKILLS_PLACEHOLDER),
            Err(ValidationError::Placeholder { field: "skills" })
        );
    }

    #[test]
    fn edited_placeholder_prefix_is_still_rejected() {
        assert_eq!(
            required_non_placeholder("skills", "e.g., Rust", SKILLS_PLACEHOLDER),
            Err(ValidationError::Placeholder { field: "skills" })
        );
    }

    #[test]
    fn real_content_passes() {
        assert_eq!(
            required_non_placeholder("skills", "Rust, SQL", SKILLS_PLACEHOLDER).unwrap(),
            "Rust, SQL"
        );
    }

    #[test]
    fn optional_substitutes_blank() {
        assert_eq!(optional_or("  ", "Not specified"), "Not specified");
        assert_eq!(optional_or(" Fintech ", "Not specified"), "Fintech");
    }
}
