use deskai_core::error::ValidationError;
use deskai_core::validate::{required, required_non_placeholder};

pub const EXPERIENCE_LEVELS: [&str; 5] = [
    "Entry Level (0-2 years)",
    "Mid Level (3-5 years)",
    "Senior Level (6-10 years)",
    "Lead/Principal (10+ years)",
    "Executive Level",
];

pub const SALARY_RANGES: [&str; 7] = [
    "Not specified",
    "$30,000 - $50,000",
    "$50,000 - $70,000",
    "$70,000 - $100,000",
    "$100,000 - $150,000",
    "$150,000 - $200,000",
    "$200,000+",
];

pub const SKILLS_PLACEHOLDER: &str =
    "e.g., Python, JavaScript, React, SQL, Machine Learning, Project Management...";

/// The search-parameters panel, one field per widget. Values arrive from
/// the widget layer as plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSearchForm {
    pub job_title: String,
    pub experience: String,
    pub skills: String,
    pub expected_salary: String,
}

impl Default for JobSearchForm {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            experience: EXPERIENCE_LEVELS[0].into(),
            skills: SKILLS_PLACEHOLDER.into(),
            expected_salary: SALARY_RANGES[0].into(),
        }
    }
}

/// Validated inputs for the strategy and resume-tips actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub job_title: String,
    pub experience: String,
    pub skills: String,
    pub expected_salary: String,
}

/// Validated inputs for the market-trends action, which only insists on a
/// job title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendsParams {
    pub job_title: String,
    pub skills: String,
}

impl JobSearchForm {
    pub fn search_params(&self) -> Result<SearchParams, ValidationError> {
        Ok(SearchParams {
            job_title: required("job title", &self.job_title)?,
            experience: self.experience.trim().to_string(),
            skills: required_non_placeholder("skills", &self.skills, SKILLS_PLACEHOLDER)?,
            expected_salary: self.expected_salary.trim().to_string(),
        })
    }

    pub fn trends_params(&self) -> Result<TrendsParams, ValidationError> {
        Ok(TrendsParams {
            job_title: required("job title", &self.job_title)?,
            skills: self.skills.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_not_submittable() {
        let form = JobSearchForm::default();
        assert_eq!(
            form.search_params(),
            Err(ValidationError::Missing { field: "job title" })
        );
    }

    #[test]
    fn placeholder_skills_block_submission() {
        let form = JobSearchForm {
            job_title: "Software Engineer".into(),
            ..Default::default()
        };
        assert_eq!(
            form.search_params(),
            Err(ValidationError::Placeholder { field: "skills" })
        );
    }

    #[test]
    fn complete_form_validates() {
        let form = JobSearchForm {
            job_title: " Software Engineer ".into(),
            experience: EXPERIENCE_LEVELS[1].into(),
            skills: "Rust, SQL".into(),
            expected_salary: SALARY_RANGES[3].into(),
        };

        let params = form.search_params().unwrap();
        assert_eq!(params.job_title, "Software Engineer");
        assert_eq!(params.skills, "Rust, SQL");
        assert_eq!(params.expected_salary, "$70,000 - $100,000");
    }

    #[test]
    fn trends_need_only_a_job_title() {
        let form = JobSearchForm {
            job_title: "Data Scientist".into(),
            ..Default::default()
        };
        let params = form.trends_params().unwrap();
        assert_eq!(params.job_title, "Data Scientist");
    }

    #[test]
    fn reset_restores_placeholders_and_choices() {
        let mut form = JobSearchForm {
            job_title: "QA Lead".into(),
            experience: EXPERIENCE_LEVELS[4].into(),
            skills: "Selenium".into(),
            expected_salary: SALARY_RANGES[6].into(),
        };
        form.reset();
        assert_eq!(form, JobSearchForm::default());
        assert_eq!(form.skills, SKILLS_PLACEHOLDER);
    }
}
