pub mod ollama;
pub mod translate;

pub use ollama::OllamaAnalysisAdapter;
pub use translate::GoogleTranslateAdapter;

use mood_check_core::ports::PortError;
use std::time::Duration;

/// Maps a `reqwest` failure onto the port's error kinds.
pub(crate) fn port_error_from_reqwest(error: reqwest::Error, timeout: Duration) -> PortError {
    if error.is_timeout() {
        PortError::Timeout(timeout)
    } else if error.is_decode() {
        PortError::MalformedResponse(error.to_string())
    } else {
        PortError::Transport(error.to_string())
    }
}
