use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ArityMismatch,
    InvalidState,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
    Config,

    // Internal
    Internal,
}

impl AppErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            AppErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            AppErrorKind::NotFound => "ERR_NOT_FOUND",
            AppErrorKind::ArityMismatch => "ERR_ARITY_MISMATCH",
            AppErrorKind::InvalidState => "ERR_INVALID_STATE",
            AppErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            AppErrorKind::Io => "ERR_IO",
            AppErrorKind::Persistence => "ERR_PERSISTENCE",
            AppErrorKind::Config => "ERR_CONFIG",
            AppErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation,
/// table and column the failure relates to.
#[derive(Debug, Clone)]
pub struct AppError {
    kind: AppErrorKind,
    op: Option<String>,
    table: Option<String>,
    column: Option<String>,
    message: String,
}

impl AppError {
    /// Create a new error with the specified kind
    pub fn new(kind: AppErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            column: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add column context
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> AppErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {})", column)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

// ========== End Error Facility ==========

/// Domain errors raised by the editor and the catalog checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Table is not present in the store catalog
    #[error("Unknown table: {table}")]
    UnknownTable { table: String },

    /// Column is not present on the table
    #[error("Unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },

    /// Submitted value count differs from the table's column count
    #[error("Table {table} has {expected} columns but {actual} values were given")]
    ArityMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Confirm or dismiss issued while the tab is listing
    #[error("No dialog is open on table {table}")]
    NotInDialog { table: String },

    /// Primary-key matching requested on a table without a declared key
    #[error("Table {table} has no primary key column")]
    NoPrimaryKey { table: String },

    /// Tab index outside the open tabs
    #[error("No tab at index {index}")]
    NoSuchTab { index: usize },
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        let message = err.to_string();
        match err {
            EditorError::UnknownTable { table } => AppError::new(AppErrorKind::NotFound)
                .with_table(table)
                .with_message(message),
            EditorError::UnknownColumn { table, column } => AppError::new(AppErrorKind::NotFound)
                .with_table(table)
                .with_column(column)
                .with_message(message),
            EditorError::ArityMismatch { table, .. } => {
                AppError::new(AppErrorKind::ArityMismatch)
                    .with_table(table)
                    .with_message(message)
            }
            EditorError::NotInDialog { table } => AppError::new(AppErrorKind::InvalidState)
                .with_table(table)
                .with_message(message),
            EditorError::NoPrimaryKey { table } => AppError::new(AppErrorKind::InvalidInput)
                .with_table(table)
                .with_message(message),
            EditorError::NoSuchTab { .. } => {
                AppError::new(AppErrorKind::InvalidInput).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_table() {
        let err = AppError::new(AppErrorKind::Persistence)
            .with_op("insert_row")
            .with_table("Client")
            .with_message("UNIQUE constraint failed");

        let text = err.to_string();
        assert!(text.starts_with("[ERR_PERSISTENCE]"));
        assert!(text.contains("in operation 'insert_row'"));
        assert!(text.contains("(table: Client)"));
    }

    #[test]
    fn test_display_without_context_is_just_code() {
        let err = AppError::new(AppErrorKind::Internal);
        assert_eq!(err.to_string(), "[ERR_INTERNAL]");
    }
}
