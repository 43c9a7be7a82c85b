//! Input validation for names that end up on a command line or in a path.

use crate::ports::CoreError;

/// Characters that could change the meaning of a command if a name were ever
/// interpolated into a shell string.
const ILLEGAL_CHARS: &[char] = &[
    '&', '|', ';', '$', '\'', '`', '(', ')', '"', '\n', '\r', '>', '<',
];

/// Whether `arg` contains shell metacharacters or would escape the log directory.
#[must_use]
pub fn is_illegal(arg: &str) -> bool {
    arg.contains(ILLEGAL_CHARS) || arg.split(['/', '\\']).any(|part| part == "..")
}

/// Validate a model name before any command or path is built from it.
///
/// # Examples
///
/// ```rust
/// use aitools_core::utils::validation::check_model_name;
///
/// assert!(check_model_name("llama2:7b").is_ok());
/// assert!(check_model_name("hf.co/bartowski/Qwen2.5-7B-GGUF:Q4_K_M").is_ok());
/// assert!(check_model_name("bad;name").is_err());
/// ```
pub fn check_model_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() || is_illegal(name) {
        return Err(CoreError::IllegalInput(name.to_string()));
    }
    Ok(())
}
