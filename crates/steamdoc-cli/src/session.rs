//! Session driver
//!
//! Owns everything that lives as long as one run of the program: settings,
//! credentials, the history log, the last generated document and at most
//! one in-flight generation. Every action returns a [`SessionError`] on
//! failure; none of them panic.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use steamdoc_ast::StyledDocument;
use steamdoc_core::{
    build_prompt, tokenize, ConfigError, Credentials, ExportFormat, HistoryEntry, HistoryLog,
    RequestForm, Settings, TextSurface, ValidationError, ViewRenderer,
};
use steamdoc_services::{
    worker, GeminiClient, GeminiConfig, GenerationJob, GoogleTranslator, JobError, JobHandle,
    ServiceError, TextGenerator, Translator,
};
use thiserror::Error;

use crate::export::{self, ExportError};

/// Shown by the `about` command
pub const ABOUT: &str = "STEAM Integration Generator\n\
Generates STEAM integration ideas and 5E lesson plans with Gemini AI.\n\
https://github.com/rajat-ed/steam-integration-generator";

/// Builds a text generator from the current credentials
pub type GeneratorFactory =
    Box<dyn Fn(&Credentials) -> Result<Arc<dyn TextGenerator>, SessionError>>;

/// A failed session action
#[derive(Error, Debug)]
pub enum SessionError {
    /// Form input rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Generation failed
    #[error(transparent)]
    Generation(JobError),

    /// Translation failed
    #[error(transparent)]
    Translation(JobError),

    /// Export failed
    #[error("Failed to export STEAM ideas: {0}")]
    Export(#[from] ExportError),

    /// Nothing has been generated yet
    #[error("No STEAM ideas to export.")]
    NothingToExport,

    /// A generation is still running
    #[error("Generating, please wait...")]
    Busy,

    /// Configuration or credentials problem
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JobError> for SessionError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::Translation(_) => SessionError::Translation(err),
            _ => SessionError::Generation(err),
        }
    }
}

/// The most recent successful generation
#[derive(Debug, Clone)]
pub struct Generated {
    /// Lesson topic, used as the export title
    pub topic: String,
    /// Final text as returned by the services
    pub text: String,
    /// Tokenized text
    pub document: StyledDocument,
}

struct Pending {
    handle: JobHandle,
    entry: HistoryEntry,
}

/// Interactive session state
pub struct Session {
    settings: Settings,
    credentials: Credentials,
    history: HistoryLog,
    export_format: ExportFormat,
    make_generator: GeneratorFactory,
    translator: Arc<dyn Translator>,
    pending: Option<Pending>,
    output: Option<Generated>,
}

impl Session {
    /// Create a session with explicit services
    pub fn new(
        settings: Settings,
        credentials: Credentials,
        make_generator: GeneratorFactory,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let export_format = settings.export.default_format;
        Self {
            settings,
            credentials,
            history: HistoryLog::new(),
            export_format,
            make_generator,
            translator,
            pending: None,
            output: None,
        }
    }

    /// Create a session backed by Gemini and Google Translate
    pub fn connect(settings: Settings, credentials: Credentials) -> Result<Self, SessionError> {
        let translator = GoogleTranslator::with_url(
            settings.translation.base_url.clone(),
            Duration::from_secs(settings.translation.timeout_secs),
        )
        .map_err(|e| SessionError::Translation(JobError::Translation(e)))?;

        let generation = settings.generation.clone();
        let make_generator: GeneratorFactory = Box::new(move |credentials: &Credentials| {
            let key = credentials
                .api_key()
                .ok_or(SessionError::Config(ConfigError::MissingApiKey))?;
            let config = GeminiConfig::new(key, generation.model.clone())
                .with_base_url(generation.base_url.clone())
                .with_timeout(Duration::from_secs(generation.timeout_secs));
            let client = GeminiClient::new(config).map_err(generation_error)?;
            Ok(Arc::new(client) as Arc<dyn TextGenerator>)
        });

        Ok(Self::new(
            settings,
            credentials,
            make_generator,
            Arc::new(translator),
        ))
    }

    /// Settings in effect
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Credentials in effect
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Mutable credentials, for the show-key preference
    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    /// Replace the API key; an invalid key keeps the current one
    pub fn change_api_key(&mut self, key: &str) -> Result<(), SessionError> {
        self.credentials.set_api_key(key)?;
        Ok(())
    }

    /// History of successful generations, oldest first
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Format used when an export path does not decide it
    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    /// Select the export format
    pub fn set_export_format(&mut self, format: ExportFormat) {
        self.export_format = format;
    }

    /// The last generated output, if any
    pub fn output(&self) -> Option<&Generated> {
        self.output.as_ref()
    }

    /// Whether a generation is in flight
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and start generating in the background
    pub fn start_generation(&mut self, form: &RequestForm) -> Result<(), SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::Busy);
        }

        let request = form.validate()?;
        let generator = (self.make_generator)(&self.credentials)?;

        let mut job = GenerationJob::new(build_prompt(&request));
        if let Some(code) = request.language.translation_code() {
            job = job.translate_to(code);
        }

        let entry = HistoryEntry::new(
            request.topic.clone(),
            request.outcomes.clone(),
            request.age_group.clone(),
            request.language.label(),
        );

        log::debug!("starting {} generation for {:?}", request.output_type, request.topic);
        let handle = worker::spawn(job, generator, Arc::clone(&self.translator));
        self.pending = Some(Pending { handle, entry });
        Ok(())
    }

    /// Check on the running generation without blocking
    ///
    /// Returns `None` while nothing has finished.
    pub fn poll_generation(&mut self) -> Option<Result<(), SessionError>> {
        let result = self.pending.as_ref()?.handle.try_result()?;
        let pending = self.pending.take()?;
        Some(self.finish(pending.entry, result))
    }

    /// Block until the running generation finishes
    pub fn wait_generation(&mut self) -> Result<(), SessionError> {
        match self.pending.take() {
            Some(pending) => {
                let result = pending.handle.wait();
                self.finish(pending.entry, result)
            }
            None => Ok(()),
        }
    }

    /// Validate, generate and wait
    pub fn generate(&mut self, form: &RequestForm) -> Result<(), SessionError> {
        self.start_generation(form)?;
        self.wait_generation()
    }

    fn finish(
        &mut self,
        entry: HistoryEntry,
        result: Result<steamdoc_services::GeneratedText, JobError>,
    ) -> Result<(), SessionError> {
        let generated = result?;
        let topic = entry.topic.clone();
        self.history.record(entry);
        self.load_text(topic, generated.text);
        Ok(())
    }

    /// Use `text` as the current output without calling any service
    pub fn load_text(&mut self, topic: impl Into<String>, text: impl Into<String>) {
        let text = text.into();
        let document = tokenize(&text);
        self.output = Some(Generated {
            topic: topic.into(),
            text,
            document,
        });
    }

    /// Render the current output onto a surface
    ///
    /// With nothing generated the surface is cleared.
    pub fn display<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        match &self.output {
            Some(output) => ViewRenderer::render(&output.document, surface),
            None => ViewRenderer::render(&StyledDocument::new(), surface),
        }
    }

    /// Export the current output
    ///
    /// The format comes from `format`, then the path's extension, then the
    /// session's selected format. A path without extension gets one.
    pub fn export(
        &self,
        path: &Path,
        format: Option<ExportFormat>,
    ) -> Result<PathBuf, SessionError> {
        let output = self
            .output
            .as_ref()
            .filter(|o| !o.text.trim().is_empty())
            .ok_or(SessionError::NothingToExport)?;

        let format = export::resolve_format(path, format, self.export_format);
        let path = export::with_default_extension(path, format);
        export::export_document(
            &output.document,
            &path,
            format,
            &self.settings.export,
            Some(&output.topic),
        )?;
        Ok(path)
    }

    /// Drop the current output; history is kept
    pub fn clear(&mut self) {
        self.output = None;
    }
}

fn generation_error(err: ServiceError) -> SessionError {
    SessionError::Generation(JobError::Generation(err))
}
