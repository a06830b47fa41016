//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the request handler and an
//! external system or a source of nondeterminism. Implementations live in
//! `src/adapters/`.

pub mod callback;
pub mod clock;
pub mod image_generator;
pub mod object_store;
pub mod seed;
pub mod translator;

pub use callback::{CallbackRequest, CallbackSender};
pub use clock::Clock;
pub use image_generator::{ImageGenerator, ImageRequest};
pub use object_store::{ObjectStore, UploadRequest};
pub use seed::SeedSource;
pub use translator::{TranslateRequest, Translator};
