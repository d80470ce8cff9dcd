use std::sync::Arc;

use deskai_appcore::service::AppService;
use deskai_engine::gemini::GeminiTextGenerator;
use deskai_resume::app::{ActionOutcome, ResumeApp};
use deskai_resume::{APP_TITLE, APP_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Desktop shell placeholder.
    // The widget layer binds the same surface exercised here.

    let service = AppService::from_env(Arc::new(GeminiTextGenerator::new()));

    println!("{APP_TITLE} v{APP_VERSION}");

    let (mut app, mut completions) = ResumeApp::new(service);
    println!("status: {}", app.assistant_status_line());

    app.form.name = std::env::var("CANDIDATE_NAME").unwrap_or_default();
    app.form.target_role =
        std::env::var("TARGET_ROLE").unwrap_or_else(|_| "Senior Backend Engineer".into());
    app.form.skills = std::env::var("SKILLS")
        .unwrap_or_else(|_| "Rust, Postgres, Kafka, observability".into());

    match app.generate_resume_content() {
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
