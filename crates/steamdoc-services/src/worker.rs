//! Background generation worker
//!
//! A job runs generation and, when a target language is set, translation on
//! its own thread. Exactly one `Result` is sent back over a channel; the
//! caller polls or blocks on the returned [`JobHandle`].

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::error::JobError;
use crate::service::{TextGenerator, Translator};

/// Work description for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    /// Prompt sent to the generator
    pub prompt: String,
    /// Two-letter language code to translate into, if any
    pub target_language: Option<String>,
}

impl GenerationJob {
    /// Job without translation
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            target_language: None,
        }
    }

    /// Translate the generated text into `code`
    pub fn translate_to(mut self, code: impl Into<String>) -> Self {
        self.target_language = Some(code.into());
        self
    }
}

/// Successful job output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    /// Final text (translated when a target language was requested)
    pub text: String,
    /// Whether translation was applied
    pub translated: bool,
}

/// Run a job on the current thread
pub fn run_job(
    job: &GenerationJob,
    generator: &dyn TextGenerator,
    translator: &dyn Translator,
) -> Result<GeneratedText, JobError> {
    log::debug!("running generation job with {}", generator.name());
    let text = generator
        .generate(&job.prompt)
        .map_err(JobError::Generation)?;

    match &job.target_language {
        Some(code) => {
            log::debug!("translating result with {} into {}", translator.name(), code);
            let text = translator
                .translate(&text, code)
                .map_err(JobError::Translation)?;
            Ok(GeneratedText {
                text,
                translated: true,
            })
        }
        None => Ok(GeneratedText {
            text,
            translated: false,
        }),
    }
}

/// Start a job on a background thread
pub fn spawn(
    job: GenerationJob,
    generator: Arc<dyn TextGenerator>,
    translator: Arc<dyn Translator>,
) -> JobHandle {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = run_job(&job, generator.as_ref(), translator.as_ref());
        if tx.send(result).is_err() {
            log::warn!("generation result dropped: receiver went away");
        }
    });
    JobHandle { receiver: rx }
}

/// Receiving end of a spawned job
#[derive(Debug)]
pub struct JobHandle {
    receiver: Receiver<Result<GeneratedText, JobError>>,
}

impl JobHandle {
    /// Block until the job reports
    pub fn wait(self) -> Result<GeneratedText, JobError> {
        self.receiver.recv().unwrap_or(Err(JobError::WorkerLost))
    }

    /// Poll without blocking; `None` while the job is still running
    pub fn try_result(&self) -> Option<Result<GeneratedText, JobError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(JobError::WorkerLost)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ServiceError};
    use std::sync::Mutex;
    use std::time::Duration;

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("**Idea** {}", prompt))
        }
    }

    struct EmptyGenerator;

    impl TextGenerator for EmptyGenerator {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn generate(&self, _prompt: &str) -> Result<String> {
            Err(ServiceError::EmptyResponse)
        }
    }

    #[derive(Default)]
    struct RecordingTranslator {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl Translator for RecordingTranslator {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn translate(&self, text: &str, target: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), target.to_string()));
            Ok(format!("[{}] {}", target, text))
        }
    }

    struct FailingTranslator;

    impl Translator for FailingTranslator {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn translate(&self, _text: &str, _target: &str) -> Result<String> {
            Err(ServiceError::InvalidResponse("bad".to_string()))
        }
    }

    #[test]
    fn test_run_without_translation() {
        let translator = RecordingTranslator::default();
        let result = run_job(&GenerationJob::new("volcanoes"), &EchoGenerator, &translator).unwrap();
        assert_eq!(result.text, "**Idea** volcanoes");
        assert!(!result.translated);
        assert!(translator.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_run_with_translation() {
        let translator = RecordingTranslator::default();
        let job = GenerationJob::new("volcanoes").translate_to("ne");
        let result = run_job(&job, &EchoGenerator, &translator).unwrap();
        assert_eq!(result.text, "[ne] **Idea** volcanoes");
        assert!(result.translated);

        let calls = translator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "ne");
    }

    #[test]
    fn test_generation_failure_skips_translation() {
        let translator = RecordingTranslator::default();
        let job = GenerationJob::new("x").translate_to("ne");
        let err = run_job(&job, &EmptyGenerator, &translator).unwrap_err();
        assert!(matches!(err, JobError::Generation(ServiceError::EmptyResponse)));
        assert_eq!(
            err.to_string(),
            "Error generating STEAM ideas: Could not generate any meaningful output, please try again."
        );
        assert!(translator.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_translation_failure() {
        let job = GenerationJob::new("x").translate_to("ne");
        let err = run_job(&job, &EchoGenerator, &FailingTranslator).unwrap_err();
        assert!(matches!(err, JobError::Translation(_)));
        assert!(err.to_string().starts_with("Error in translation:"));
    }

    #[test]
    fn test_spawn_delivers_one_result() {
        let handle = spawn(
            GenerationJob::new("rivers"),
            Arc::new(EchoGenerator),
            Arc::new(RecordingTranslator::default()),
        );
        let result = handle.wait().unwrap();
        assert_eq!(result.text, "**Idea** rivers");
    }

    #[test]
    fn test_try_result_polls_until_done() {
        let handle = spawn(
            GenerationJob::new("rivers"),
            Arc::new(EchoGenerator),
            Arc::new(RecordingTranslator::default()),
        );

        let mut result = None;
        for _ in 0..200 {
            if let Some(r) = handle.try_result() {
                result = Some(r);
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(result.expect("worker reported").is_ok());
    }
}
