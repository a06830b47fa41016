//! Live adapters that talk to AWS and the callback target.

pub mod bedrock;
pub mod callback;
pub mod s3;
pub mod system;
pub mod translate;
