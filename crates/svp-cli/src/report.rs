//! Plain-text rendering of validation results.

use svp_core::ValidationResult;

/// `VALID`/`INVALID` on the first line, then one indented line per issue
/// (errors, then warnings, then info).
pub fn render_report(result: &ValidationResult) -> String {
    let mut out = String::from(if result.is_valid() { "VALID\n" } else { "INVALID\n" });
    let issues = result
        .errors()
        .iter()
        .chain(result.warnings())
        .chain(result.info());
    for issue in issues {
        out.push_str(&format!("  {}  {issue}\n", issue.severity));
    }
    out
}

/// Exit status for a result: `1` when invalid, or when `strict_warnings`
/// is set and any warning was raised.
pub fn exit_code(result: &ValidationResult, strict_warnings: bool) -> u8 {
    let failed = !result.is_valid() || (strict_warnings && !result.warnings().is_empty());
    u8::from(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use svp_core::ValidationIssue;

    #[test]
    fn report_lists_errors_before_warnings() {
        let result = ValidationResult::new(
            vec![ValidationIssue::error("name", "name is required")],
            vec![ValidationIssue::warning("image", "image is recommended")],
        );
        assert_eq!(
            render_report(&result),
            "INVALID\n  error  name: name is required\n  warning  image: image is recommended\n"
        );
    }

    #[test]
    fn clean_result_is_one_line() {
        assert_eq!(render_report(&ValidationResult::new(vec![], vec![])), "VALID\n");
    }

    #[test]
    fn strict_warnings_fail_the_run() {
        let warned = ValidationResult::new(vec![], vec![ValidationIssue::warning("a", "b")]);
        assert_eq!(exit_code(&warned, false), 0);
        assert_eq!(exit_code(&warned, true), 1);
        assert_eq!(exit_code(&ValidationResult::single_error("x", "y"), false), 1);
    }
}
