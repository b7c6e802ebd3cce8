//! Analysis controller
//!
//! Owns the input mode and the lifecycle of one submission, and drives an
//! injected [`ViewPort`]. The controller never talks to a UI toolkit
//! directly, so the same logic backs the terminal front end and the tests.
//!
//! A submission runs in two halves so an event loop can do the network call
//! elsewhere:
//!
//! ```text
//! begin_submit()      read + trim input, build request, show loading
//!      │
//!      ▼
//! backend.analyze()   run by the caller (or by submit())
//!      │
//!      ▼
//! complete_submit()   show error or results, then hide loading
//! ```

use crate::error::{AnalysisError, Result};
use crate::presentation::ResultsModel;
use crate::traits::AnalysisBackend;
use crate::types::{AnalysisRequest, AnalysisResult, InputMode};

/// Surface the controller writes to.
///
/// Setters are expected to be plain state writes; the controller decides
/// ordering and makes sure only one of loading / error / results is shown.
pub trait ViewPort {
    /// Current raw value of the input field for `mode`.
    fn input_value(&self, mode: InputMode) -> String;

    /// Show the input section for `mode` and hide the other one.
    fn show_input_section(&mut self, mode: InputMode);

    /// Move keyboard focus to the input field for `mode`.
    fn focus_input(&mut self, mode: InputMode);

    /// Mark the mode control for `mode` as the single active one.
    fn set_active_mode(&mut self, mode: InputMode);

    fn set_loading(&mut self, loading: bool);

    /// Show an error message, or hide the error region with `None`.
    fn set_error(&mut self, message: Option<String>);

    /// Show results, or hide the results region with `None`.
    fn set_results(&mut self, results: Option<ResultsModel>);
}

/// A request handed out by [`AnalysisController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub request: AnalysisRequest,
}

/// How a call to [`AnalysisController::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Results were rendered.
    Rendered,
    /// The error view was shown with this error.
    Failed(AnalysisError),
    /// Another submission was in flight; nothing changed.
    Ignored,
}

/// Controller for the analysis page.
pub struct AnalysisController<V: ViewPort> {
    mode: InputMode,
    view: V,
    target_level: Option<String>,
    /// Id of the submission currently in flight.
    in_flight: Option<u64>,
    next_id: u64,
}

impl<V: ViewPort> AnalysisController<V> {
    /// Create a controller in URL mode with nothing shown.
    pub fn new(view: V) -> Self {
        let mut controller = Self {
            mode: InputMode::default(),
            view,
            target_level: None,
            in_flight: None,
            next_id: 1,
        };
        controller.set_mode(InputMode::default());
        controller
    }

    /// Level sent along with raw text requests.
    #[must_use]
    pub fn with_target_level(mut self, target_level: Option<String>) -> Self {
        self.target_level = target_level;
        self
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Level sent along with text requests, if any.
    pub fn target_level(&self) -> Option<&str> {
        self.target_level.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Switch input mode. Safe to repeat with the active mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.view.show_input_section(mode);
        self.view.focus_input(mode);
        self.view.set_active_mode(mode);
    }

    /// Validate the active input and enter the loading state.
    ///
    /// On empty input the error view is shown and [`AnalysisError::EmptyInput`]
    /// returned. While another submission is in flight,
    /// [`AnalysisError::SubmissionInFlight`] is returned and the view is left
    /// alone.
    pub fn begin_submit(&mut self) -> Result<Submission> {
        if let Some(id) = self.in_flight {
            log::debug!("[controller] Submission {id} still in flight, ignoring submit");
            return Err(AnalysisError::SubmissionInFlight);
        }

        let raw = self.view.input_value(self.mode);
        let value = raw.trim();
        if value.is_empty() {
            let error = AnalysisError::EmptyInput { mode: self.mode };
            log::warn!("[controller] {error}");
            self.show_error(&error);
            return Err(error);
        }

        let request =
            AnalysisRequest::for_mode(self.mode, value.to_string(), self.target_level.clone());

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight = Some(id);

        self.view.set_error(None);
        self.view.set_results(None);
        self.view.set_loading(true);

        log::debug!(
            "[controller] Submission {id} dispatched to {}",
            request.path()
        );

        Ok(Submission { id, request })
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Outcomes for anything but the in-flight submission are dropped. The
    /// loading state is always cleared last.
    pub fn complete_submit(
        &mut self,
        id: u64,
        outcome: Result<AnalysisResult>,
    ) -> Option<SubmitOutcome> {
        if self.in_flight != Some(id) {
            log::debug!("[controller] Dropping outcome of stale submission {id}");
            return None;
        }

        let settled = match outcome {
            Ok(result) => {
                self.render(&result);
                SubmitOutcome::Rendered
            }
            Err(error) => {
                if error.is_expected() {
                    log::warn!("[controller] Submission {id} failed: {error}");
                } else {
                    log::error!("[controller] Submission {id} failed: {error}");
                }
                self.show_error(&error);
                SubmitOutcome::Failed(error)
            }
        };

        self.in_flight = None;
        self.view.set_loading(false);
        Some(settled)
    }

    /// Run one full submission against `backend`.
    pub async fn submit<B>(&mut self, backend: &B) -> SubmitOutcome
    where
        B: AnalysisBackend + ?Sized,
    {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(AnalysisError::SubmissionInFlight) => return SubmitOutcome::Ignored,
            Err(error) => return SubmitOutcome::Failed(error),
        };

        let outcome = backend.analyze(&submission.request).await;
        self.complete_submit(submission.id, outcome)
            .unwrap_or(SubmitOutcome::Ignored)
    }

    /// Project `result` onto the results region.
    ///
    /// Replaces whatever was shown before; calling it twice with the same
    /// result shows the same thing.
    pub fn render(&mut self, result: &AnalysisResult) {
        let raw_url = self.view.input_value(InputMode::Url);
        let model = ResultsModel::build(result, self.mode, &raw_url);
        self.view.set_loading(false);
        self.view.set_error(None);
        self.view.set_results(Some(model));
    }

    fn show_error(&mut self, error: &AnalysisError) {
        self.view.set_results(None);
        self.view.set_loading(false);
        self.view.set_error(Some(error.user_message()));
    }
}
