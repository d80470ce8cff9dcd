use deskai_appcore::dispatch::{
    Acknowledgement, Completion, DispatchOutcome, GenerationDispatcher,
};
use deskai_appcore::service::AppService;
use deskai_appcore::status::{RequestStatus, StatusPayload};
use deskai_core::error::ClientFailure;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::form::JobSearchForm;
use crate::prompts::{build_resume_tips_prompt, build_strategy_prompt, build_trends_prompt};

/// Synchronous answer to a button press. Anything asynchronous arrives
/// later through the completion channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Submitted,
    /// Rejected before dispatch: validation failed or the assistant never
    /// initialized. No external call was made.
    Blocked(ClientFailure),
    /// A generation is already running.
    Busy,
}

/// Everything the widget layer binds: the form, the action handlers, and
/// the status it renders. The completion receiver returned by `new` must
/// be drained on the thread that owns the widgets.
pub struct JobSearchApp {
    service: AppService,
    dispatcher: GenerationDispatcher,
    pub form: JobSearchForm,
    status: RequestStatus,
}

impl JobSearchApp {
    pub fn new(service: AppService) -> (Self, UnboundedReceiver<Completion>) {
        let (dispatcher, completions) = GenerationDispatcher::channel();
        (
            Self {
                service,
                dispatcher,
                form: JobSearchForm::default(),
                status: RequestStatus::new(),
            },
            completions,
        )
    }

    pub fn assistant_status_line(&self) -> &'static str {
        self.service.status().line()
    }

    pub fn generate_strategy(&mut self) -> ActionOutcome {
        match self.form.search_params() {
            Ok(params) => self.submit(build_strategy_prompt(&params)),
            Err(e) => self.block(e.into()),
        }
    }

    pub fn analyze_market_trends(&mut self) -> ActionOutcome {
        match self.form.trends_params() {
            Ok(params) => self.submit(build_trends_prompt(&params)),
            Err(e) => self.block(e.into()),
        }
    }

    pub fn resume_tips(&mut self) -> ActionOutcome {
        match self.form.search_params() {
            Ok(params) => self.submit(build_resume_tips_prompt(&params)),
            Err(e) => self.block(e.into()),
        }
    }

    /// Applies one drained completion. Returns false for completions that
    /// belong to a cleared generation; those must not reach the screen.
    pub fn handle_completion(&mut self, completion: &Completion) -> bool {
        match self.dispatcher.acknowledge(completion) {
            Acknowledgement::Current => {
                self.status.apply(completion);
                true
            }
            Acknowledgement::Stale => false,
        }
    }

    pub fn clear_form(&mut self) {
        self.form.reset();
        self.dispatcher.clear();
        self.status.reset();
    }

    pub fn status_payload(&self) -> StatusPayload {
        self.status.payload()
    }

    /// The generated text, exactly as the provider returned it.
    pub fn result_text(&self) -> Option<&str> {
        self.status.last_text()
    }

    fn submit(&mut self, prompt: String) -> ActionOutcome {
        if !self.service.is_available() {
            return self.block(ClientFailure::Config(
                "the assistant is not available; check the API key".into(),
            ));
        }

        match self.dispatcher.dispatch(self.service.clone(), prompt) {
            DispatchOutcome::Started(_) => {
                self.status.begin();
                ActionOutcome::Submitted
            }
            DispatchOutcome::Busy => ActionOutcome::Busy,
        }
    }

    fn block(&mut self, failure: ClientFailure) -> ActionOutcome {
        self.status.reject(&failure);
        ActionOutcome::Blocked(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use deskai_appcore::status::RequestStage;
    use deskai_core::config::ClientConfig;
    use deskai_core::error::FailureKind;
    use deskai_engine::traits::{GeneratedReply, TextGenerator};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingGenerator {
        calls: Arc<AtomicUsize>,
        delay: Duration,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn generate(
            &self,
            _base_url: &str,
            _api_key: &str,
            model: &str,
            prompt: &str,
        ) -> anyhow::Result<GeneratedReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(GeneratedReply {
                text: format!("reply to: {}", &prompt[..prompt.len().min(40)]),
                provider: "test".into(),
                model: model.into(),
            })
        }
    }

    fn test_app(delay: Duration) -> (JobSearchApp, UnboundedReceiver<Completion>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let cfg =
            ClientConfig::from_values("k", None, Some("https://example.com".into())).unwrap();
        let service = AppService::ready(
            cfg,
            Arc::new(CountingGenerator {
                calls: calls.clone(),
                delay,
            }),
        );
        let (app, completions) = JobSearchApp::new(service);
        (app, completions, calls)
    }

    #[tokio::test]
    async fn placeholder_skills_block_without_any_call() {
        let (mut app, _completions, calls) = test_app(Duration::ZERO);
        app.form.job_title = "Software Engineer".into();
        // Skills stay at the seeded placeholder.

        let outcome = app.generate_strategy();
        match outcome {
            ActionOutcome::Blocked(failure) => {
                assert_eq!(failure.kind(), FailureKind::Validation)
            }
            other => panic!("expected blocked, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(app.status_payload().stage, RequestStage::Error);
    }

    #[tokio::test]
    async fn strategy_round_trip_shows_the_reply() {
        let (mut app, mut completions, calls) = test_app(Duration::ZERO);
        app.form.job_title = "Software Engineer".into();
        app.form.skills = "Rust, SQL".into();

        assert_eq!(app.generate_strategy(), ActionOutcome::Submitted);
        assert_eq!(app.status_payload().stage, RequestStage::Generating);

        let completion = completions.recv().await.unwrap();
        assert!(app.handle_completion(&completion));

        assert_eq!(app.status_payload().stage, RequestStage::Success);
        assert!(app.result_text().unwrap().starts_with("reply to:"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn second_action_while_generating_reports_busy() {
        let (mut app, mut completions, _) = test_app(Duration::from_millis(200));
        app.form.job_title = "Software Engineer".into();
        app.form.skills = "Rust".into();

        assert_eq!(app.generate_strategy(), ActionOutcome::Submitted);
        assert_eq!(app.analyze_market_trends(), ActionOutcome::Busy);

        let completion = completions.recv().await.unwrap();
        assert!(app.handle_completion(&completion));
        assert_eq!(app.status_payload().stage, RequestStage::Success);
    }

    #[tokio::test]
    async fn clear_drops_the_in_flight_result() {
        let (mut app, mut completions, _) = test_app(Duration::from_millis(50));
        app.form.job_title = "Software Engineer".into();
        app.form.skills = "Rust".into();

        assert_eq!(app.generate_strategy(), ActionOutcome::Submitted);
        app.clear_form();

        let completion = completions.recv().await.unwrap();
        assert!(!app.handle_completion(&completion));
        assert_eq!(app.status_payload().stage, RequestStage::Idle);
        assert!(app.result_text().is_none());
        assert_eq!(app.form, JobSearchForm::default());
    }

    #[tokio::test]
    async fn missing_api_key_blocks_with_config_kind() {
        let (mut app, _completions) = JobSearchApp::new(AppService::unavailable(
            "GEMINI_API_KEY is not set; the assistant cannot start without it",
        ));
        app.form.job_title = "Software Engineer".into();
        app.form.skills = "Rust".into();

        match app.generate_strategy() {
            ActionOutcome::Blocked(failure) => assert_eq!(failure.kind(), FailureKind::Config),
            other => panic!("expected blocked, got {other:?}"),
        }
        assert_eq!(
            app.assistant_status_line(),
            "AI assistant unavailable - check API key"
        );
    }

    #[tokio::test]
    async fn trends_run_with_an_untouched_skills_area() {
        let (mut app, mut completions, calls) = test_app(Duration::ZERO);
        app.form.job_title = "Data Scientist".into();

        assert_eq!(app.analyze_market_trends(), ActionOutcome::Submitted);
        let completion = completions.recv().await.unwrap();
        assert!(app.handle_completion(&completion));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
