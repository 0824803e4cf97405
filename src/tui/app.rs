use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::session::{Session, Stage, StageKind};
use crate::transport::{FeedbackSink, Navigator, SubmitError, deliver};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    InitialState, SurveyState, ThankYouState, draw_help, draw_initial, draw_survey, draw_thank_you,
};
use super::widgets::{Notice, draw_notice};

/// How long the event loop waits for a key before checking for finished submissions.
const TICK: Duration = Duration::from_millis(100);

type SubmitOutcome = Result<(), SubmitError>;

/// Top-level application state.
pub struct App {
    session: Session,
    initial: InitialState,
    survey: SurveyState,
    notice: Option<Notice>,
    show_help: bool,
    should_quit: bool,
    review_url: String,
    sink: Arc<dyn FeedbackSink>,
    navigator: Box<dyn Navigator>,
    runtime: Handle,
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
}

impl App {
    /// Creates a new `App` in the initial stage.
    ///
    /// Submissions are spawned on `runtime`; `review_url` is opened through
    /// `navigator` on positive feedback.
    pub fn new(
        sink: Arc<dyn FeedbackSink>,
        navigator: Box<dyn Navigator>,
        review_url: impl Into<String>,
        runtime: Handle,
    ) -> Self {
        let (outcome_tx, outcome_rx) = unbounded_channel();
        Self {
            session: Session::new(),
            initial: InitialState::new(),
            survey: SurveyState::new(),
            notice: None,
            show_help: false,
            should_quit: false,
            review_url: review_url.into(),
            sink,
            navigator,
            runtime,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Main event loop: draw → poll event → dispatch → collect submissions → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            self.poll_submissions();
        }
        Ok(())
    }

    /// Renders the current stage, then any overlay.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.session.stage() {
            Stage::Initial => draw_initial(&self.initial, frame, area),
            Stage::Survey(survey) => draw_survey(&self.survey, survey, frame, area),
            Stage::ThankYou => draw_thank_you(frame, area),
        }
        if self.show_help {
            draw_help(self.session.kind(), frame, area);
        }
        if let Some(notice) = &self.notice {
            draw_notice(notice, frame, area);
        }
    }

    /// Handles a key event: quit chord and overlays first, then the stage's screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The notice blocks everything until acknowledged.
        if self.notice.take().is_some() {
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }
        if key.code == KeyCode::F(1) {
            self.show_help = true;
            return;
        }

        let action = match self.session.kind() {
            StageKind::Initial => self.initial.handle_key(key),
            StageKind::Survey => self.survey.handle_key(key),
            StageKind::ThankYou => ThankYouState.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies a screen action to the session and performs its side effect.
    fn apply(&mut self, action: Action) {
        let result = match action {
            Action::None => Ok(()),
            Action::Positive => self.session.choose_positive().map(|()| self.open_review()),
            Action::Negative => self.session.choose_negative().map(|()| {
                self.survey = SurveyState::new();
            }),
            Action::SelectReason(reason) => self.session.select_reason(reason),
            Action::EditComments(edit) => self.session.edit_comments(edit),
            Action::Submit => self.submit(),
            Action::Dismiss => self.session.dismiss().map(|()| {
                self.initial = InitialState::new();
            }),
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
        };
        if let Err(err) = result {
            tracing::debug!(?action, error = %err, "action ignored");
        }
    }

    fn open_review(&self) {
        match self.navigator.open(&self.review_url) {
            Ok(()) => tracing::info!(url = %self.review_url, "opened review page"),
            Err(err) => tracing::warn!(url = %self.review_url, error = %err, "could not open review page"),
        }
    }

    /// Starts a submission in the background if the survey allows it.
    fn submit(&mut self) -> Result<(), crate::session::SessionError> {
        let payload = self.session.begin_submit(Utc::now())?;
        let sink = Arc::clone(&self.sink);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = deliver(sink.as_ref(), &payload).await;
            // The receiver is gone only if the app has shut down.
            let _ = tx.send(outcome);
        });
        Ok(())
    }

    /// Applies the outcome of every submission that has finished.
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish_submit(outcome);
        }
    }

    fn finish_submit(&mut self, outcome: SubmitOutcome) {
        let succeeded = outcome.is_ok();
        if let Err(err) = self.session.complete_submit(succeeded) {
            tracing::debug!(error = %err, "submission outcome discarded");
            return;
        }
        if !succeeded {
            self.notice = Some(Notice::submission_failed());
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the blocking notice currently shown, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns `true` while the help overlay is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Blocks until the outstanding submission finishes and applies it.
    #[cfg(test)]
    fn settle(&mut self) {
        if let Some(outcome) = self.outcome_rx.blocking_recv() {
            self.finish_submit(outcome);
        }
    }
}
