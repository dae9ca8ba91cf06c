//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use realtydb_core::log_op_start;
/// log_op_start!("insert_row");
/// log_op_start!("insert_row", table = "Client");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = realtydb_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = realtydb_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use realtydb_core::log_op_end;
/// log_op_end!("insert_row", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = realtydb_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = realtydb_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use realtydb_core::log_op_error;
/// # use realtydb_core::errors::EditorError;
/// let err = EditorError::UnknownTable { table: "Nope".to_string() };
/// log_op_error!("list_rows", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let app_err: $crate::errors::AppError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = realtydb_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?app_err.kind(),
            err_code = app_err.code(),
            err_message = app_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let app_err: $crate::errors::AppError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = realtydb_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?app_err.kind(),
            err_code = app_err.code(),
            err_message = app_err.message(),
            $($field)*
        );
    }};
}
