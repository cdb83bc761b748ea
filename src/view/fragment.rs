//! The three mutually exclusive status fragments.

use std::fmt;

use crate::status::state::{ConnectionState, Status};

pub const LOADING_TEXT: &str = "⏳ Conectando con el backend...";
pub const SUCCESS_TEXT: &str = "✅ Conexión exitosa con el backend";
pub const ERROR_TEXT: &str = "❌ Error de conexión";
pub const ERROR_DETAIL: &str = "No se pudo establecer conexión con el backend";

/// View fragment for one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Loading,
    Success { message: String },
    Error,
}

impl Fragment {
    /// Select the fragment matching the state's status.
    pub fn select(state: &ConnectionState) -> Self {
        match state.status() {
            Status::Loading => Fragment::Loading,
            Status::Success => Fragment::Success {
                message: state.message().to_string(),
            },
            Status::Error => Fragment::Error,
        }
    }

    /// Status this fragment is guarded by.
    pub fn status(&self) -> Status {
        match self {
            Fragment::Loading => Status::Loading,
            Fragment::Success { .. } => Status::Success,
            Fragment::Error => Status::Error,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Loading => writeln!(f, "{LOADING_TEXT}"),
            Fragment::Success { message } => {
                writeln!(f, "{SUCCESS_TEXT}")?;
                writeln!(f, "Mensaje recibido: \"{message}\"")
            }
            Fragment::Error => {
                writeln!(f, "{ERROR_TEXT}")?;
                writeln!(f, "{ERROR_DETAIL}")
            }
        }
    }
}
