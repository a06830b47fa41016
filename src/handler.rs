//! The text-to-image request pipeline.

use tracing::{info, info_span, Instrument};

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::DrawingError;
use crate::event::{InvocationRequest, SkillResponse};
use crate::naming::{object_key, public_url};
use crate::ports::{CallbackRequest, ImageRequest, TranslateRequest, UploadRequest};
use crate::scratch::ScratchImage;

/// Runs one invocation: translate, generate, persist, upload, call back.
pub struct RequestHandler {
    ctx: ServiceContext,
    settings: Settings,
}

impl RequestHandler {
    /// Create a handler over the given ports and settings.
    #[must_use]
    pub fn new(ctx: ServiceContext, settings: Settings) -> Self {
        Self { ctx, settings }
    }

    /// Handle one request, returning `true` once the callback is delivered.
    ///
    /// Steps run strictly in order; the first failure aborts the rest, so no
    /// callback is sent for a failed invocation. The scratch file is removed
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub async fn handle(&self, request: &InvocationRequest) -> Result<bool, DrawingError> {
        let span = info_span!("invocation", callback_url = %request.callback_url);
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: &InvocationRequest) -> Result<bool, DrawingError> {
        let english_text = self
            .ctx
            .translator
            .translate(&TranslateRequest::korean_to_english(&request.text_input))
            .await?;
        info!(prompt = %english_text, "translated prompt");

        let generation = &self.settings.generation;
        let image_request = ImageRequest {
            model_id: generation.model_id.clone(),
            prompt: english_text,
            style_preset: generation.style_preset.clone(),
            seed: self.ctx.seeds.next_seed(),
            cfg_scale: generation.cfg_scale,
            steps: generation.steps,
        };
        let image = self.ctx.generator.generate(&image_request).await?;
        info!(seed = image_request.seed, bytes = image.data.len(), "generated image");

        let scratch = ScratchImage::write(&self.settings.scratch_path, &image.data)?;

        let key = object_key(self.ctx.clock.now());
        self.ctx
            .store
            .upload(&UploadRequest {
                path: scratch.path().to_path_buf(),
                bucket: self.settings.bucket.clone(),
                key: key.clone(),
            })
            .await?;
        let image_url = public_url(&self.settings.bucket, &self.settings.region, &key);
        info!(%key, %image_url, "uploaded image");

        let receipt = self
            .ctx
            .callback
            .send(&CallbackRequest {
                url: request.callback_url.clone(),
                body: SkillResponse::image(image_url),
            })
            .await?;
        info!(status = receipt.status, "delivered callback");

        drop(scratch);
        Ok(true)
    }
}
