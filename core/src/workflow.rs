//! Upload/process workflow controller.
//!
//! Drives one video through file selection → validation → upload →
//! process → results, and owns everything the page shows along the way.
//!
//! ```text
//!   Idle ──select_file──▶ Ready ──begin_run──▶ Uploading ──▶ Processing ──▶ Completed ──▶ Results
//!                           ▲                      │              │
//!                           └──────── Failed ◀─────┴──────────────┘
//!   reset: any phase ──▶ Idle
//! ```
//!
//! The controller itself is synchronous. [`run_workflow`] performs the two
//! requests in order and feeds each outcome back through a
//! [`StateCell`], so no borrow of the controller is held while a
//! request is in flight.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::api::CaptionApi;
use crate::catalog::{find_language, language_name, CaptionStyle};
use crate::config::{
    DEFAULT_LANGUAGE, MSG_COMPLETE, MSG_PROCESSING, MSG_UPLOADING, PREVIEW_LIMIT, PROGRESS_DONE,
    PROGRESS_START, PROGRESS_UPLOADED,
};
use crate::error::{ApiError, ValidationError, WorkflowError, WorkflowResult};
use crate::types::{
    ProcessRequest, ProcessResponse, StyleResult, UploadResponse, Usage, UserStatus, VideoFile,
};
use crate::validation::validate_video;

// =============================================================================
// State
// =============================================================================

/// Form state for one video-to-captions session.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowState<F> {
    pub uploaded_file: Option<VideoFile<F>>,
    /// Set only from a successful upload response
    pub uploaded_filename: Option<String>,
    pub selected_styles: BTreeSet<CaptionStyle>,
    pub selected_language: String,
    /// One per requested style, in request order
    pub result_filenames: Vec<String>,
}

impl<F> Default for WorkflowState<F> {
    fn default() -> Self {
        Self {
            uploaded_file: None,
            uploaded_filename: None,
            selected_styles: BTreeSet::from([CaptionStyle::default()]),
            selected_language: DEFAULT_LANGUAGE.to_string(),
            result_filenames: Vec::new(),
        }
    }
}

/// Where the controller is in its linear sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No file yet
    Idle,
    /// File accepted, waiting for the trigger
    Ready,
    Uploading,
    Processing,
    /// Both requests done, results not revealed yet
    Completed,
    Results,
    /// Last run failed; the trigger is armed again
    Failed,
}

impl Phase {
    /// A run is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Uploading | Phase::Processing)
    }

    /// Selection can no longer change without a reset.
    fn is_locked(&self) -> bool {
        matches!(self, Phase::Uploading | Phase::Processing | Phase::Completed | Phase::Results)
    }
}

/// Cosmetic progress indicator with fixed checkpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub message: String,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            percent: PROGRESS_START,
            message: String::new(),
        }
    }
}

impl Progress {
    /// Move forward; never goes backwards within a run.
    fn advance(&mut self, percent: u8, message: &str) {
        self.percent = self.percent.max(percent.min(PROGRESS_DONE));
        self.message = message.to_string();
    }
}

/// Which page sections are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub upload_prompt: bool,
    pub file_info: bool,
    pub style: bool,
    pub language: bool,
    pub action: bool,
    pub progress: bool,
    pub results: bool,
    pub error: bool,
}

/// Everything the caller needs to perform one run's requests.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPlan<F> {
    pub file: VideoFile<F>,
    pub styles: Vec<CaptionStyle>,
    pub language: String,
}

/// One numbered caption line in a preview.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewLine {
    /// 1-based
    pub number: usize,
    pub text: String,
    pub time_range: String,
}

impl PreviewLine {
    /// `"1. HELLO THERE"`
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.text)
    }
}

/// Results-view section for one style.
#[derive(Clone, Debug, PartialEq)]
pub struct StylePreview {
    pub style: CaptionStyle,
    pub total_captions: usize,
    pub language: String,
    pub lines: Vec<PreviewLine>,
    pub subtitle_file: String,
    pub download_url: String,
}

// =============================================================================
// Controller
// =============================================================================

/// Owns the workflow state and the view derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowController<F> {
    state: WorkflowState<F>,
    phase: Phase,
    progress: Progress,
    error: Option<String>,
    upgrade_required: bool,
    results: Vec<StyleResult>,
    usage: Usage,
    username: Option<String>,
    /// Server uploads no longer referenced by the state, awaiting release
    stale_uploads: Vec<String>,
}

impl<F: Clone> Default for WorkflowController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> WorkflowController<F> {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::default(),
            phase: Phase::Idle,
            progress: Progress::default(),
            error: None,
            upgrade_required: false,
            results: Vec::new(),
            usage: Usage::default(),
            username: None,
            stale_uploads: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &WorkflowState<F> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Message shown in the error section.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The last failure was the free-tier limit.
    pub fn upgrade_required(&self) -> bool {
        self.upgrade_required
    }

    pub fn results(&self) -> &[StyleResult] {
        &self.results
    }

    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_style_selected(&self, style: CaptionStyle) -> bool {
        self.state.selected_styles.contains(&style)
    }

    /// The generate button accepts clicks.
    pub fn trigger_enabled(&self) -> bool {
        !self.phase.is_locked()
    }

    pub fn sections(&self) -> Sections {
        let has_file = self.state.uploaded_file.is_some();
        Sections {
            upload_prompt: !has_file,
            file_info: has_file,
            style: has_file,
            language: has_file,
            action: has_file && matches!(self.phase, Phase::Ready | Phase::Failed),
            progress: matches!(self.phase, Phase::Uploading | Phase::Processing | Phase::Completed),
            results: self.phase == Phase::Results,
            error: self.error.is_some(),
        }
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Accept a picked or dropped file.
    ///
    /// A rejected file leaves the state untouched and shows the reason.
    pub fn select_file(&mut self, file: VideoFile<F>) -> WorkflowResult<()> {
        if self.phase.is_locked() {
            log::warn!("Ignoring file selection while {:?}", self.phase);
            return Err(self.locked_error());
        }

        if let Err(e) = validate_video(&file) {
            log::warn!("Rejected {} ({}, {} bytes): {}", file.name, file.media_type, file.size, e);
            self.show_error(&e.to_string(), false);
            return Err(e.into());
        }

        log::info!("Selected {} ({} bytes)", file.name, file.size);
        self.state.uploaded_file = Some(file);
        self.phase = Phase::Ready;
        self.clear_error();
        Ok(())
    }

    /// Flip one style in the multi-style selection. Returns whether the
    /// style is selected afterwards.
    pub fn toggle_style(&mut self, style: CaptionStyle) -> bool {
        if self.phase.is_locked() {
            return self.is_style_selected(style);
        }
        if !self.state.selected_styles.remove(&style) {
            self.state.selected_styles.insert(style);
        }
        self.is_style_selected(style)
    }

    /// Replace the selection with exactly one style.
    pub fn select_style(&mut self, style: CaptionStyle) {
        if self.phase.is_locked() {
            return;
        }
        self.state.selected_styles = BTreeSet::from([style]);
    }

    pub fn select_language(&mut self, code: &str) -> Result<(), ValidationError> {
        let language = find_language(code)?;
        if !self.phase.is_locked() {
            self.state.selected_language = language.code.to_string();
        }
        Ok(())
    }

    /// Account status from `/auth/user/status`.
    pub fn set_user_status(&mut self, status: UserStatus) {
        self.username = Some(status.username);
        self.usage = Usage {
            videos_processed: Some(status.videos_processed),
            videos_remaining: Some(status.videos_remaining),
        };
    }

    /// Back to defaults: no file, default style and language, initial view.
    pub fn reset(&mut self) {
        log::info!("Resetting workflow");
        self.retire_upload();
        self.state = WorkflowState::default();
        self.phase = Phase::Idle;
        self.progress = Progress::default();
        self.results.clear();
        self.clear_error();
    }

    // -------------------------------------------------------------------------
    // Run steps
    // -------------------------------------------------------------------------

    /// Check preconditions and arm the progress indicator.
    ///
    /// On success the trigger is disabled until the run ends.
    pub fn begin_run(&mut self) -> WorkflowResult<RunPlan<F>> {
        if self.phase.is_locked() {
            log::warn!("Run requested while {:?}", self.phase);
            return Err(self.locked_error());
        }

        let file = match &self.state.uploaded_file {
            Some(file) => file.clone(),
            None => return Err(self.reject(ValidationError::NoFileSelected)),
        };
        if self.state.selected_styles.is_empty() {
            return Err(self.reject(ValidationError::NoStyleSelected));
        }

        // Every run starts from the upload, even if a previous one got further.
        self.retire_upload();
        self.state.result_filenames.clear();
        self.results.clear();
        self.clear_error();
        self.progress = Progress::default();
        self.progress.advance(PROGRESS_START, MSG_UPLOADING);
        self.phase = Phase::Uploading;

        Ok(RunPlan {
            file,
            styles: self.state.selected_styles.iter().copied().collect(),
            language: self.state.selected_language.clone(),
        })
    }

    /// Record the server filename and build the process request.
    pub fn upload_succeeded(&mut self, upload: UploadResponse) -> ProcessRequest {
        log::info!("Uploaded as {}", upload.filename);
        let request = ProcessRequest::new(
            &upload,
            self.state.selected_styles.iter().copied().collect(),
            self.state.selected_language.clone(),
        );
        self.state.uploaded_filename = Some(upload.filename);
        self.progress.advance(PROGRESS_UPLOADED, MSG_PROCESSING);
        self.phase = Phase::Processing;
        request
    }

    /// Store per-style results. A response that does not carry exactly one
    /// result per requested style fails the run.
    pub fn process_succeeded(&mut self, response: ProcessResponse) -> WorkflowResult<()> {
        let requested: Vec<CaptionStyle> = self.state.selected_styles.iter().copied().collect();
        let (mut results, usage) = response.into_parts();

        if results.len() != requested.len() {
            let err = WorkflowError::Process(ApiError::Decode(format!(
                "expected {} style results, got {}",
                requested.len(),
                results.len()
            )));
            self.fail(&err);
            return Err(err);
        }

        for (result, style) in results.iter_mut().zip(&requested) {
            result.style.get_or_insert(*style);
        }

        log::info!("Generated captions for {} style(s)", results.len());
        self.state.result_filenames = results.iter().map(|r| r.srt_filename.clone()).collect();
        self.results = results;
        self.merge_usage(usage);
        self.progress.advance(PROGRESS_DONE, MSG_COMPLETE);
        self.phase = Phase::Completed;
        Ok(())
    }

    /// Switch from the finished progress bar to the results view.
    pub fn reveal_results(&mut self) {
        if self.phase == Phase::Completed {
            self.phase = Phase::Results;
        }
    }

    /// End the current run with an error and re-arm the trigger.
    pub fn fail(&mut self, err: &WorkflowError) {
        log::error!("Workflow failed: {}", err);
        let upgrade = err.api_error().is_some_and(ApiError::upgrade_required);
        self.show_error(&err.to_string(), upgrade);
        if self.phase.is_running() || self.phase == Phase::Completed {
            self.phase = Phase::Failed;
        }
    }

    /// Results-view sections, one per style, with capped previews.
    pub fn previews(&self, download_url: impl Fn(&str) -> String) -> Vec<StylePreview> {
        let language = language_name(&self.state.selected_language).to_string();
        self.results
            .iter()
            .filter_map(|result| {
                let style = result.style?;
                let lines = result
                    .captions
                    .iter()
                    .take(PREVIEW_LIMIT)
                    .enumerate()
                    .map(|(i, caption)| PreviewLine {
                        number: i + 1,
                        text: caption.text.clone(),
                        time_range: caption.time_range(),
                    })
                    .collect();
                Some(StylePreview {
                    style,
                    total_captions: result.total_captions.unwrap_or(result.captions.len()),
                    language: language.clone(),
                    lines,
                    subtitle_file: result.srt_filename.clone(),
                    download_url: download_url(&result.srt_filename),
                })
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Hand over uploads that nothing references any more.
    pub fn take_stale_uploads(&mut self) -> Vec<String> {
        std::mem::take(&mut self.stale_uploads)
    }

    fn retire_upload(&mut self) {
        if let Some(filename) = self.state.uploaded_filename.take() {
            self.stale_uploads.push(filename);
        }
    }

    fn locked_error(&self) -> WorkflowError {
        if self.phase.is_running() {
            WorkflowError::AlreadyRunning
        } else {
            WorkflowError::Locked
        }
    }

    fn reject(&mut self, err: ValidationError) -> WorkflowError {
        log::warn!("Run rejected: {}", err);
        self.show_error(&err.to_string(), false);
        err.into()
    }

    fn show_error(&mut self, message: &str, upgrade_required: bool) {
        self.error = Some(message.to_string());
        self.upgrade_required = upgrade_required;
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.upgrade_required = false;
    }

    fn merge_usage(&mut self, usage: Usage) {
        if usage.videos_processed.is_some() {
            self.usage.videos_processed = usage.videos_processed;
        }
        if usage.videos_remaining.is_some() {
            self.usage.videos_remaining = usage.videos_remaining;
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Shared access to state that outlives each request.
///
/// Implementations must not hold the borrow past `f`.
pub trait StateCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for RefCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Run the upload stage, then the process stage.
///
/// Every failure is already recorded on the controller when this returns;
/// the `Err` is for the caller's logging. On success the controller is in
/// [`Phase::Completed`] and [`WorkflowController::reveal_results`] shows
/// the results.
pub async fn run_workflow<A, C>(api: &A, cell: &C) -> WorkflowResult<()>
where
    A: CaptionApi,
    C: StateCell<WorkflowController<A::File>>,
{
    let plan = cell.with_mut(|c| c.begin_run())?;
    log::info!(
        "Uploading {} for {} style(s) in {}",
        plan.file.name,
        plan.styles.len(),
        plan.language
    );

    let upload = match api.upload(&plan.file).await {
        Ok(upload) => upload,
        Err(e) => return Err(abort(cell, WorkflowError::Upload(e))),
    };
    let request = cell.with_mut(|c| c.upload_succeeded(upload));

    let response = match api.process(&request).await {
        Ok(response) => response,
        Err(e) => return Err(abort(cell, WorkflowError::Process(e))),
    };
    cell.with_mut(|c| c.process_succeeded(response))
}

fn abort<F, C>(cell: &C, err: WorkflowError) -> WorkflowError
where
    F: Clone,
    C: StateCell<WorkflowController<F>>,
{
    cell.with_mut(|c| c.fail(&err));
    err
}

/// Reset for a new video and release every earlier upload on the server.
///
/// Release failures are logged, never shown.
pub async fn start_over<A, C>(api: &A, cell: &C)
where
    A: CaptionApi,
    C: StateCell<WorkflowController<A::File>>,
{
    let stale = cell.with_mut(|c| {
        c.reset();
        c.take_stale_uploads()
    });

    for filename in stale {
        if let Err(e) = api.cleanup(&filename).await {
            log::warn!("Could not release {}: {}", filename, e);
        }
    }
}

/// Load account counters for the header.
pub async fn refresh_usage<A, C>(api: &A, cell: &C)
where
    A: CaptionApi,
    C: StateCell<WorkflowController<A::File>>,
{
    match api.user_status().await {
        Ok(status) => cell.with_mut(|c| c.set_user_status(status)),
        Err(e) => log::warn!("Could not load account status: {}", e),
    }
}
