/// Generation failures.
pub mod error;
/// Gemini backend.
pub mod gemini;

use futures::future::BoxFuture;

pub use self::error::{GenerationError, GenerationResult};

/// Opaque capability turning a natural-language prompt into generated text.
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    fn generate(&self, prompt: String) -> BoxFuture<'static, GenerationResult<String>>;
}
