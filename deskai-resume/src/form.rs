use deskai_core::error::ValidationError;
use deskai_core::validate::{required, required_non_placeholder};

pub const EXPERIENCE_LEVELS: [&str; 5] = [
    "Entry Level (0-2 years)",
    "Mid Level (3-5 years)",
    "Senior Level (6-10 years)",
    "Lead/Principal (10+ years)",
    "Executive Level",
];

pub const SKILLS_PLACEHOLDER: &str =
    "List your key skills, tools, and technologies separated by commas";
pub const ACHIEVEMENTS_PLACEHOLDER: &str =
    "Summarize top achievements, metrics, or noteworthy projects";
pub const INDUSTRIES_PLACEHOLDER: &str =
    "Optional: List industries or company types you are targeting";
pub const REQUIREMENTS_PLACEHOLDER: &str =
    "Paste key responsibilities or qualifications from a job description";

/// Both panels of the agent window: the profile on the left, the target
/// role on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeForm {
    pub name: String,
    pub current_role: String,
    pub experience: String,
    pub skills: String,
    pub achievements: String,
    pub industries: String,
    pub target_role: String,
    pub requirements: String,
}

impl Default for ResumeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            current_role: String::new(),
            experience: EXPERIENCE_LEVELS[0].into(),
            skills: SKILLS_PLACEHOLDER.into(),
            achievements: ACHIEVEMENTS_PLACEHOLDER.into(),
            industries: INDUSTRIES_PLACEHOLDER.into(),
            target_role: String::new(),
            requirements: REQUIREMENTS_PLACEHOLDER.into(),
        }
    }
}

/// Validated profile handed to the prompt builder. Only the target role
/// and real skills are mandatory; the rest flows through as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeProfile {
    pub name: String,
    pub current_role: String,
    pub experience: String,
    pub skills: String,
    pub achievements: String,
    pub industries: String,
    pub target_role: String,
    pub requirements: String,
}

impl ResumeForm {
    pub fn profile(&self) -> Result<ResumeProfile, ValidationError> {
        Ok(ResumeProfile {
            name: self.name.trim().to_string(),
            current_role: self.current_role.trim().to_string(),
            experience: self.experience.trim().to_string(),
            skills: required_non_placeholder("core skills", &self.skills, SKILLS_PLACEHOLDER)?,
            achievements: self.achievements.trim().to_string(),
            industries: self.industries.trim().to_string(),
            target_role: required("target job title", &self.target_role)?,
            requirements: self.requirements.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ResumeForm {
        ResumeForm {
            name: "Jane Doe".into(),
            current_role: "Backend Developer".into(),
            experience: EXPERIENCE_LEVELS[2].into(),
            skills: "Rust, Postgres, Kafka".into(),
            achievements: "Cut p99 latency by 40%".into(),
            industries: "Fintech".into(),
            target_role: "Senior Backend Engineer".into(),
            requirements: "5+ years building services".into(),
        }
    }

    #[test]
    fn missing_target_role_blocks() {
        let form = ResumeForm {
            target_role: "  ".into(),
            ..filled_form()
        };
        assert_eq!(
            form.profile(),
            Err(ValidationError::Missing {
                field: "target job title"
            })
        );
    }

    #[test]
    fn untouched_skills_placeholder_blocks() {
        let form = ResumeForm {
            skills: SKILLS_PLACEHOLDER.into(),
            ..filled_form()
        };
        assert_eq!(
            form.profile(),
            Err(ValidationError::Placeholder {
                field: "core skills"
            })
        );
    }

    #[test]
    fn optional_fields_may_stay_seeded() {
        let form = ResumeForm {
            name: String::new(),
            achievements: ACHIEVEMENTS_PLACEHOLDER.into(),
            ..filled_form()
        };
        let profile = form.profile().unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.achievements, ACHIEVEMENTS_PLACEHOLDER);
    }

    #[test]
    fn reset_reseeds_every_text_area() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, ResumeForm::default());
        assert_eq!(form.requirements, REQUIREMENTS_PLACEHOLDER);
    }
}
