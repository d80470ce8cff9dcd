use deskai_core::validate::optional_or;

use crate::form::ResumeProfile;

/// Resume-writer briefing. Blank identity fields fall back to neutral
/// stand-ins so the model never sees empty labels.
pub fn build_resume_prompt(profile: &ResumeProfile) -> String {
    format!(
        "You are an expert resume writer creating tailored resume content. Use the details \
below to craft a professional resume draft:\n\n\
Candidate Name: {name}\n\
Current Role: {current_role}\n\
Experience Level: {experience}\n\
Core Skills: {skills}\n\
Achievements: {achievements}\n\
Target Role: {target_role}\n\
Target Industries: {industries}\n\
Job Requirements: {requirements}\n\n\
Produce a markdown-formatted resume draft that includes:\n\
- A concise professional summary aligned with the target role\n\
- 4-5 bullet points highlighting relevant experience and accomplishments\n\
- A dedicated achievements section leveraging provided highlights (focus on metrics)\n\
- A core competencies section grouping skills into categories\n\
- Optional industry alignment notes if industries are provided\n\n\
Ensure content is ATS-friendly, uses strong action verbs, and incorporates keywords from \
the target role and requirements.",
        name = optional_or(&profile.name, "Candidate"),
        current_role = optional_or(&profile.current_role, "Not specified"),
        experience = profile.experience,
        skills = profile.skills,
        achievements = profile.achievements,
        target_role = profile.target_role,
        industries = profile.industries,
        requirements = profile.requirements,
    )
}
