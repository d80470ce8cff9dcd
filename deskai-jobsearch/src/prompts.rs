use crate::form::{SearchParams, TrendsParams};

/// Career-advisor briefing for the main action. The section list matches
/// what the results panel is designed around.
pub fn build_strategy_prompt(params: &SearchParams) -> String {
    format!(
        "You are a professional career advisor and job search expert. Help create a \
comprehensive job search strategy based on the following parameters:\n\n\
Job Title: {job_title}\n\
Experience Level: {experience}\n\
Skills: {skills}\n\
Expected Salary: {expected_salary}\n\n\
Please provide a detailed response that includes:\n\n\
1. **Optimized Job Search Keywords**: Suggest the best keywords and phrases to use when \
searching for this position on job boards.\n\n\
2. **Job Board Recommendations**: Recommend the top 5-7 job boards and platforms where \
this type of position is commonly posted.\n\n\
3. **Skills Gap Analysis**: Based on the provided skills, identify any additional skills \
that would make the candidate more competitive for this role.\n\n\
4. **Salary Insights**: Provide insights about the salary expectations for this role and \
experience level, including factors that might affect compensation.\n\n\
5. **Application Strategy**: Suggest the best approach for applying to these positions, \
including:\n\
   - How to tailor resumes for this role\n\
   - Key points to highlight in cover letters\n\
   - Interview preparation tips\n\n\
6. **Networking Opportunities**: Suggest professional networks, communities, or events \
where one could connect with professionals in this field.\n\n\
7. **Company Types**: Recommend types of companies (startups, enterprises, specific \
industries) that typically hire for this role.\n\n\
8. **Timeline and Expectations**: Provide realistic expectations about the job search \
timeline for this level of position.\n\n\
Format your response in a clear, organized manner with proper headings and bullet points \
for easy reading.",
        job_title = params.job_title,
        experience = params.experience,
        skills = params.skills,
        expected_salary = params.expected_salary,
    )
}

pub fn build_trends_prompt(params: &TrendsParams) -> String {
    format!(
        "As a job market analyst, provide insights about current market trends for:\n\n\
Job Title: {job_title}\n\
Skills: {skills}\n\n\
Please analyze and provide:\n\n\
1. **Market Demand**: Current demand for this role in the job market\n\
2. **Growth Trends**: Whether this field is growing, stable, or declining\n\
3. **Emerging Skills**: New skills that are becoming important in this field\n\
4. **Remote Work Opportunities**: Availability of remote/hybrid positions\n\
5. **Geographic Hotspots**: Cities or regions with high demand for this role\n\
6. **Industry Trends**: Key trends affecting this profession\n\n\
Keep the response concise but informative.",
        job_title = params.job_title,
        skills = params.skills,
    )
}

pub fn build_resume_tips_prompt(params: &SearchParams) -> String {
    format!(
        "As a professional resume writer, provide specific resume optimization tips for:\n\n\
Target Job Title: {job_title}\n\
Experience Level: {experience}\n\
Current Skills: {skills}\n\n\
Provide actionable advice on:\n\n\
1. **Resume Structure**: Best format for this experience level\n\
2. **Key Sections**: Essential sections to include\n\
3. **Skills Presentation**: How to best showcase the provided skills\n\
4. **Experience Description**: How to describe work experience effectively\n\
5. **Keywords**: Important keywords to include for ATS systems\n\
6. **Common Mistakes**: What to avoid for this type of role\n\n\
Keep recommendations specific and actionable.",
        job_title = params.job_title,
        experience = params.experience,
        skills = params.skills,
    )
}
