//! Callback port for notifying the chat-bot platform.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::DrawingError;
use crate::event::SkillResponse;

/// A callback delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    /// Callback URL supplied by the caller.
    pub url: String,
    /// JSON body to post.
    pub body: SkillResponse,
}

/// Acknowledgement of a delivered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackReceipt {
    /// HTTP status returned by the callback target.
    pub status: u16,
}

/// Boxed future type returned by [`CallbackSender::send`].
pub type CallbackFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CallbackReceipt, DrawingError>> + Send + 'a>>;

/// Delivers callback bodies over HTTP.
pub trait CallbackSender: Send + Sync {
    /// Post the body to the callback URL.
    fn send(&self, request: &CallbackRequest) -> CallbackFuture<'_>;
}
