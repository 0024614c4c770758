/// Exit code for missing or malformed configuration.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for failures talking to the remote project API.
pub const EXIT_REMOTE: u8 = 4;

/// A fatal error that aborts the run and maps onto a process exit code.
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

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(EXIT_REMOTE, message)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_exit_codes() {
        assert_eq!(AppError::config("x").exit_code(), EXIT_CONFIG);
        assert_eq!(AppError::remote("x").exit_code(), EXIT_REMOTE);
        assert_eq!(AppError::remote("boom").to_string(), "boom");
    }
}
