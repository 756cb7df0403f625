/// Failure buckets with stable process exit codes.
///
/// - `Config`: invalid axes, empty corpus, bad pool size. Raised before any
///   worker starts.
/// - `Process`: the external solver could not be run or produced unusable
///   output. Fatal to the whole sweep.
/// - `Export`: writing result files failed. The console summary has already
///   been printed by the time exports run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Process,
    Export,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Config => 2,
            ErrorKind::Process => 3,
            ErrorKind::Export => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn process(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Process,
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Export,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(AppError::config("x").exit_code(), 2);
        assert_eq!(AppError::process("x").exit_code(), 3);
        assert_eq!(AppError::export("x").exit_code(), 4);
    }

    #[test]
    fn display_is_the_message() {
        let err = AppError::process("solver said no");
        assert_eq!(err.to_string(), "solver said no");
    }
}
