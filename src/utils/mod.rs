//! Cross-cutting helpers: file output, path expansion, progress and
//! credential redaction.

pub mod fs;
pub mod platform;
pub mod progress;
pub mod security;

pub use fs::{atomic_write, ensure_dir, safe_write};
pub use platform::{get_home_dir, resolve_path};
pub use progress::{ProgressBar, spinner_with_message};
pub use security::redact_url;
