/// Broad failure category. Every kind is fatal for the run; the kind only
/// decides the process exit code and how the failure reads in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unsupported configuration value (model name, split ratio, ...).
    Config,
    /// A column the step requires is absent from the dataset.
    MissingColumn,
    /// A step received data of the wrong shape.
    Contract,
    /// The dataset itself is empty or unusable.
    Data,
    /// Least-squares fitting or prediction failed numerically.
    Fit,
    /// Filesystem read/write failure.
    Io,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Config | ErrorKind::MissingColumn | ErrorKind::Io => 2,
            ErrorKind::Contract | ErrorKind::Data => 3,
            ErrorKind::Fit => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn missing_column(name: &str) -> Self {
        Self::new(
            ErrorKind::MissingColumn,
            format!("'{name}' column missing from dataset."),
        )
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Contract, message)
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Data, message)
    }

    pub fn fit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fit, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
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
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::config("x").exit_code(), 2);
        assert_eq!(AppError::missing_column("review_score").exit_code(), 2);
        assert_eq!(AppError::contract("x").exit_code(), 3);
        assert_eq!(AppError::fit("x").exit_code(), 4);
    }

    #[test]
    fn missing_column_names_the_column() {
        let err = AppError::missing_column("review_score");
        assert_eq!(err.kind(), ErrorKind::MissingColumn);
        assert!(err.to_string().contains("review_score"));
    }
}
