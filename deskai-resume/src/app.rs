use deskai_appcore::dispatch::{
    Acknowledgement, Completion, DispatchOutcome, GenerationDispatcher,
};
use deskai_appcore::service::AppService;
use deskai_appcore::status::{RequestStatus, StatusPayload};
use deskai_core::error::ClientFailure;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::form::ResumeForm;
use crate::prompts::build_resume_prompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Submitted,
    Blocked(ClientFailure),
    Busy,
}

/// The agent window's single action surface: one form, one button.
pub struct ResumeApp {
    service: AppService,
    dispatcher: GenerationDispatcher,
    pub form: ResumeForm,
    status: RequestStatus,
}

impl ResumeApp {
    pub fn new(service: AppService) -> (Self, UnboundedReceiver<Completion>) {
        let (dispatcher, completions) = GenerationDispatcher::channel();
        (
            Self {
                service,
                dispatcher,
                form: ResumeForm::default(),
                status: RequestStatus::new(),
            },
            completions,
        )
    }

    pub fn assistant_status_line(&self) -> &'static str {
        self.service.status().line()
    }

    pub fn generate_resume_content(&mut self) -> ActionOutcome {
        let profile = match self.form.profile() {
            Ok(profile) => profile,
            Err(e) => {
                let failure: ClientFailure = e.into();
                self.status.reject(&failure);
                return ActionOutcome::Blocked(failure);
            }
        };

        if !self.service.is_available() {
            let failure = ClientFailure::Config(
                "the assistant is not available; check the API key".into(),
            );
            self.status.reject(&failure);
            return ActionOutcome::Blocked(failure);
        }

        let prompt = build_resume_prompt(&profile);
        match self.dispatcher.dispatch(self.service.clone(), prompt) {
            DispatchOutcome::Started(_) => {
                self.status.begin();
                ActionOutcome::Submitted
            }
            DispatchOutcome::Busy => ActionOutcome::Busy,
        }
    }

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

    pub fn result_text(&self) -> Option<&str> {
        self.status.last_text()
    }
}
