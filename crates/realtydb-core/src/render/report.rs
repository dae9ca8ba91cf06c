use std::path::Path;

use crate::errors::{AppError, AppErrorKind, Result};
use crate::store::TabularStore;

/// Totals of a written report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub tables: usize,
    pub rows: u64,
}

/// Render the flat-text report of every table in `store`
///
/// One block per table, in catalog order:
///
/// ```text
/// Table: <name>
/// \tColumns: <c1>, <c2>
/// \tData:
/// \t\t<v1>, <v2>
///
/// Row count: <n>
///
/// ```
///
/// The row count comes from a separate count query, not from the rows listed.
pub fn render_report<S: TabularStore + ?Sized>(store: &S) -> Result<(String, ReportSummary)> {
    let mut output = String::new();
    let mut summary = ReportSummary::default();

    for table in store.list_tables()? {
        let columns: Vec<String> = store
            .list_columns(&table)?
            .into_iter()
            .map(|c| c.name)
            .collect();

        output.push_str(&format!("Table: {}\n", table));
        output.push_str(&format!("\tColumns: {}\n", columns.join(", ")));
        output.push_str("\tData:\n");
        for row in store.list_rows(&table, None)? {
            output.push_str(&format!("\t\t{}\n", row.joined()));
        }
        output.push('\n');

        let count = store.count_rows(&table)?;
        output.push_str(&format!("Row count: {}\n\n", count));

        summary.tables += 1;
        summary.rows += count;
    }

    Ok((output, summary))
}

/// Render the report and write it to `path`, replacing any existing file
pub fn write_report<S: TabularStore + ?Sized>(store: &S, path: &Path) -> Result<ReportSummary> {
    let (text, summary) = render_report(store)?;
    std::fs::write(path, text).map_err(|e| {
        AppError::new(AppErrorKind::Io)
            .with_op("write_report")
            .with_message(format!("cannot write {}: {}", path.display(), e))
    })?;
    tracing::info!(
        path = %path.display(),
        tables = summary.tables,
        rows = summary.rows,
        "report written"
    );
    Ok(summary)
}
