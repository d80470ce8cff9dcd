use std::sync::Arc;

use deskai_appcore::service::AppService;
use deskai_engine::gemini::GeminiTextGenerator;
use deskai_jobsearch::app::{ActionOutcome, JobSearchApp};
use deskai_jobsearch::{APP_TITLE, APP_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Desktop shell placeholder.
    // The widget layer binds the same surface exercised here: fill the
    // form, press an action, drain completions on the owning thread.

    let service = AppService::from_env(Arc::new(GeminiTextGenerator::new()));

    println!("{APP_TITLE} v{APP_VERSION}");

    let (mut app, mut completions) = JobSearchApp::new(service);
    println!("status: {}", app.assistant_status_line());

    app.form.job_title =
        std::env::var("JOB_TITLE").unwrap_or_else(|_| "Software Engineer".into());
    app.form.skills = std::env::var("SKILLS")
        .unwrap_or_else(|_| "Rust, SQL, distributed systems".into());

    match app.generate_strategy() {
        ActionOutcome::Submitted => {
            if let Some(completion) = completions.recv().await {
                app.handle_completion(&completion);
            }

            let payload = app.status_payload();
            println!("stage: {}", payload.stage_label);
            match app.result_text() {
                Some(text) => println!("{text}"),
                None => println!("error: {}", payload.error.unwrap_or_default()),
            }
        }
        ActionOutcome::Blocked(failure) => println!("blocked: {failure}"),
        ActionOutcome::Busy => println!("busy"),
    }

    Ok(())
}
