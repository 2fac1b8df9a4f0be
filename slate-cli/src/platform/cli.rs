//! CLI error output
//!
//! Human-readable errors with the offending source line, or JSON reports.

use slate_api::SlateError;

/// Print an error to stderr, or its JSON report to stdout
pub fn print_error(e: &SlateError, source: Option<&str>, as_json: bool) {
    let report = e.to_report();
    if as_json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("Error: cannot serialize report: {err}"),
        }
        return;
    }

    eprintln!("error: {report}");
    if let (Some(source), SlateError::Runtime(d)) = (source, e) {
        print_source_context(source, d.range.start.line, d.range.start.column);
    }
}

/// Print the lines around `error_line` with a caret under `error_col`
fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = source.lines().collect();
    if error_line == 0 || error_line > lines.len() {
        return;
    }

    let first = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let last = (error_line + CONTEXT_LINES).min(lines.len());
    let width = last.to_string().len();

    eprintln!("{}|--", "-".repeat(width + 1));
    for line_no in first..=last {
        eprintln!("{line_no:>width$} | {}", lines[line_no - 1]);
        if line_no == error_line {
            eprintln!("{} | {}^", " ".repeat(width), " ".repeat(error_col.saturating_sub(1)));
        }
    }
    eprintln!("{}|--", "-".repeat(width + 1));
}
