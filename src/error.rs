/// Exit code for unusable local input (e.g. an unreadable `--input` export).
pub const EXIT_INPUT: u8 = 2;
/// Fetch failures; logged by the client and never returned from `run`.
pub const EXIT_FETCH: u8 = 4;
/// Exit code for failures writing artifacts (report JSON, chart images).
pub const EXIT_OUTPUT: u8 = 5;

/// Application error carrying the process exit code it maps to.
///
/// Fetch failures and empty inventories never produce an `AppError`; they are
/// logged and degrade to "nothing to do".
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::new(EXIT_FETCH, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(EXIT_OUTPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
