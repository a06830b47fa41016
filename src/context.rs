//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::adapters::live::bedrock::BedrockGenerator;
use crate::adapters::live::callback::HttpCallbackSender;
use crate::adapters::live::s3::S3ObjectStore;
use crate::adapters::live::system::{RandomSeed, SystemClock};
use crate::adapters::live::translate::AwsTranslator;
use crate::adapters::recording::callback::RecordingCallbackSender;
use crate::adapters::recording::image_generator::RecordingImageGenerator;
use crate::adapters::recording::object_store::RecordingObjectStore;
use crate::adapters::recording::translator::RecordingTranslator;
use crate::adapters::replaying::callback::ReplayingCallbackSender;
use crate::adapters::replaying::image_generator::ReplayingImageGenerator;
use crate::adapters::replaying::object_store::ReplayingObjectStore;
use crate::adapters::replaying::translator::ReplayingTranslator;
use crate::cassette::load::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::DrawingError;
use crate::ports::{CallbackSender, Clock, ImageGenerator, ObjectStore, SeedSource, Translator};

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Translation port.
    pub translator: Box<dyn Translator>,
    /// Image generator port.
    pub generator: Box<dyn ImageGenerator>,
    /// Object store port.
    pub store: Box<dyn ObjectStore>,
    /// Callback port.
    pub callback: Box<dyn CallbackSender>,
    /// Time source for object keys.
    pub clock: Box<dyn Clock>,
    /// Seed source for generation requests.
    pub seeds: Box<dyn SeedSource>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// Must be called after the context that shares the recorder is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        if recorder.is_empty() {
            warn!("recording finished without any interactions");
        }
        debug!(interactions = recorder.len(), "writing cassette");
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context from shared AWS configuration.
    #[must_use]
    pub fn live(aws: &aws_config::SdkConfig) -> Self {
        Self {
            translator: Box::new(AwsTranslator::new(aws)),
            generator: Box::new(BedrockGenerator::new(aws)),
            store: Box::new(S3ObjectStore::new(aws)),
            callback: Box::new(HttpCallbackSender::new()),
            clock: Box::new(SystemClock),
            seeds: Box::new(RandomSeed),
        }
    }

    /// Wrap every network port of `inner` with a recorder writing under `dir`.
    #[must_use]
    pub fn recording(inner: Self, dir: &Path) -> (Self, RecordingSession) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = dir.join(&timestamp).join("invocation.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-invocation"),
            get_commit_hash(),
        )));

        let ctx = Self {
            translator: Box::new(RecordingTranslator::new(inner.translator, Arc::clone(&recorder))),
            generator: Box::new(RecordingImageGenerator::new(
                inner.generator,
                Arc::clone(&recorder),
            )),
            store: Box::new(RecordingObjectStore::new(inner.store, Arc::clone(&recorder))),
            callback: Box::new(RecordingCallbackSender::new(inner.callback, Arc::clone(&recorder))),
            clock: inner.clock,
            seeds: inner.seeds,
        };

        (ctx, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file.
    ///
    /// Clock and seed stay live; they never leave the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, DrawingError> {
        let replayer = load_cassette(path)
            .map_err(|e| DrawingError::Config(format!("Failed to load cassette: {e}")))?;
        debug!(interactions = replayer.remaining(), "loaded cassette");
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self {
            translator: Box::new(ReplayingTranslator::new(Arc::clone(&replayer))),
            generator: Box::new(ReplayingImageGenerator::new(Arc::clone(&replayer))),
            store: Box::new(ReplayingObjectStore::new(Arc::clone(&replayer))),
            callback: Box::new(ReplayingCallbackSender::new(replayer)),
            clock: Box::new(SystemClock),
            seeds: Box::new(RandomSeed),
        })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
