//! The test runner: one document, one vector file, one report section.
//!
//! [`run`] drives the whole engine. It extracts the document's assignment,
//! evaluates it against every vector in order, classifies each outcome, and
//! appends a complete section to the cumulative report file. Extraction and
//! vector-load failures abort the run before anything is written; a single
//! vector's evaluation failure becomes that vector's `error` result and the
//! batch continues.

#![warn(missing_docs)]

pub mod error;
pub mod report;
pub mod vectors;

pub use error::RunError;
pub use report::{ReportSection, ResultLine};
pub use vectors::{parse_vectors, TestVector};

use std::fmt;
use std::path::{Path, PathBuf};
use strobe_common::Verdict;
use strobe_extract::{scan_assignments, ExtractError};

/// Computed-output sentinel for a vector whose evaluation failed.
pub const ERROR_SENTINEL: &str = "error";

/// Expected-output sentinel for a vector with no expectation.
pub const MISSING_SENTINEL: &str = "X";

/// The outcome of one run, surfaced to the invoker so it can print the
/// tally without re-reading the report file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Summary {
    /// Number of vectors that passed.
    pub passed: usize,
    /// Total number of vectors.
    pub total: usize,
    /// Where the report section was appended.
    pub report_path: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} tests passed", self.passed, self.total)
    }
}

/// Runs one document against one vector file, appending to one report.
///
/// Steps, in order:
/// 1. read the document and extract its assignment (fatal on failure;
///    documents with several assignments get a warning and the first one);
/// 2. load the ordered vectors (fatal on failure);
/// 3. evaluate each vector, absorbing per-vector failures as the `error`
///    sentinel; classify against `expected_<target>`, with a missing
///    expectation reported as [`Verdict::MissingExpected`];
/// 4. append the section (header, lines, `<pass>/<total> tests passed`)
///    to the report file under an exclusive lock;
/// 5. return the [`Summary`].
pub fn run(
    document_path: &Path,
    vectors_path: &Path,
    report_path: &Path,
) -> Result<Summary, RunError> {
    let source = std::fs::read_to_string(document_path).map_err(|source| RunError::SourceRead {
        path: document_path.to_path_buf(),
        source,
    })?;

    let mut found = scan_assignments(&source);
    if found.len() > 1 {
        log::warn!(
            "{}: {} assignments found, simulating only the first",
            document_path.display(),
            found.len()
        );
    }
    if found.is_empty() {
        return Err(ExtractError::NoAssignmentFound.into());
    }
    let assignment = found.swap_remove(0);
    log::debug!(
        "extracted {} <= {}",
        assignment.target,
        assignment.expression
    );

    let content =
        std::fs::read_to_string(vectors_path).map_err(|source| RunError::VectorLoad {
            path: vectors_path.to_path_buf(),
            reason: source.to_string(),
        })?;
    let vectors = parse_vectors(&content).map_err(|e| RunError::VectorLoad {
        path: vectors_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut lines = Vec::with_capacity(vectors.len());
    for (index, vector) in vectors.iter().enumerate() {
        let computed = match strobe_expr::evaluate(&assignment.expression, &vector.bindings()) {
            Ok(bit) => bit.to_string(),
            Err(e) => {
                log::debug!("vector {index}: {e}");
                ERROR_SENTINEL.to_string()
            }
        };
        let (expected, verdict) = match vector.expected_for(&assignment.target) {
            Some(exp) => {
                let verdict = if computed == exp {
                    Verdict::Pass
                } else {
                    Verdict::Fail
                };
                (exp.to_string(), verdict)
            }
            None => (MISSING_SENTINEL.to_string(), Verdict::MissingExpected),
        };
        lines.push(ResultLine {
            inputs: vector
                .inputs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            target: assignment.target.clone(),
            computed,
            expected,
            verdict,
        });
    }

    let passed = lines.iter().filter(|l| l.verdict.is_pass()).count();
    let total = lines.len();
    let section = ReportSection {
        document: document_stem(document_path),
        lines,
        passed,
    };
    report::append_report(report_path, &section.render()).map_err(|source| {
        RunError::ReportWrite {
            path: report_path.to_path_buf(),
            source,
        }
    })?;

    Ok(Summary {
        passed,
        total,
        report_path: report_path.to_path_buf(),
    })
}

/// The document's file stem, used in the report section header.
fn document_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Project {
        tmp: TempDir,
    }

    impl Project {
        fn new(document: &str, vectors_json: &str) -> Self {
            let tmp = TempDir::new().unwrap();
            std::fs::write(tmp.path().join("dut.vhdl"), document).unwrap();
            std::fs::write(tmp.path().join("dut_tests.json"), vectors_json).unwrap();
            Self { tmp }
        }

        fn run(&self) -> Result<Summary, RunError> {
            run(
                &self.tmp.path().join("dut.vhdl"),
                &self.tmp.path().join("dut_tests.json"),
                &self.tmp.path().join("report.txt"),
            )
        }

        fn report(&self) -> String {
            std::fs::read_to_string(self.tmp.path().join("report.txt")).unwrap()
        }

        fn report_exists(&self) -> bool {
            self.tmp.path().join("report.txt").exists()
        }
    }

    #[test]
    fn end_to_end_pass_and_fail() {
        let project = Project::new(
            "q <= a and b;",
            r#"[
                {"a": "1", "b": "1", "expected_q": "1"},
                {"a": "1", "b": "0", "expected_q": "1"}
            ]"#,
        );
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(format!("{summary}"), "1/2 tests passed");

        let report = project.report();
        assert!(report.contains("===== Simulation: dut ====="));
        assert!(report.contains("a=1 b=1 -> q=1 (expected: 1) PASS"));
        assert!(report.contains("a=1 b=0 -> q=0 (expected: 1) FAIL"));
        assert!(report.contains("1/2 tests passed"));
    }

    #[test]
    fn append_only_across_runs() {
        let project = Project::new("q <= a;", r#"[{"a": "1", "expected_q": "1"}]"#);
        project.run().unwrap();
        project.run().unwrap();
        let report = project.report();
        assert_eq!(report.matches("===== Simulation: dut =====").count(), 2);
        assert_eq!(report.matches("1/1 tests passed").count(), 2);
    }

    #[test]
    fn evaluation_error_is_contained() {
        // Second vector drops the "b" binding; only that vector errors.
        let project = Project::new(
            "q <= a and b;",
            r#"[
                {"a": "1", "b": "1", "expected_q": "1"},
                {"a": "1", "expected_q": "1"},
                {"a": "0", "b": "0", "expected_q": "0"}
            ]"#,
        );
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.total, 3);
        assert!(project
            .report()
            .contains("a=1 -> q=error (expected: 1) FAIL"));
    }

    #[test]
    fn expected_error_sentinel_can_pass() {
        // Verdicts are byte-for-byte string comparisons, so a vector that
        // expects the error sentinel passes when evaluation fails.
        let project = Project::new(
            "q <= a and b;",
            r#"[{"a": "1", "expected_q": "error"}]"#,
        );
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 1);
        assert!(project
            .report()
            .contains("a=1 -> q=error (expected: error) PASS"));
    }

    #[test]
    fn missing_expectation_is_its_own_verdict() {
        let project = Project::new("q <= a;", r#"[{"a": "1"}]"#);
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 0);
        assert!(project
            .report()
            .contains("a=1 -> q=1 (expected: X) MISSING_EXPECTED"));
    }

    #[test]
    fn no_assignment_aborts_without_report() {
        let project = Project::new("entity dut is end;", "[]");
        let err = project.run().unwrap_err();
        assert!(matches!(
            err,
            RunError::Extract(ExtractError::NoAssignmentFound)
        ));
        assert!(!project.report_exists());
    }

    #[test]
    fn malformed_vectors_abort_without_report() {
        let project = Project::new("q <= a;", "{\"not\": \"an array\"}");
        let err = project.run().unwrap_err();
        assert!(matches!(err, RunError::VectorLoad { .. }));
        assert!(!project.report_exists());
    }

    #[test]
    fn missing_vector_file_aborts() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("dut.vhdl"), "q <= a;").unwrap();
        let err = run(
            &tmp.path().join("dut.vhdl"),
            &tmp.path().join("absent.json"),
            &tmp.path().join("report.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, RunError::VectorLoad { .. }));
    }

    #[test]
    fn missing_document_aborts() {
        let tmp = TempDir::new().unwrap();
        let err = run(
            &tmp.path().join("absent.vhdl"),
            &tmp.path().join("absent.json"),
            &tmp.path().join("report.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, RunError::SourceRead { .. }));
    }

    #[test]
    fn first_assignment_wins_in_multi_assignment_document() {
        let project = Project::new(
            "x <= a or b;\ny <= a and b;",
            r#"[{"a": "1", "b": "0", "expected_x": "1"}]"#,
        );
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 1);
        assert!(project.report().contains("-> x=1"));
    }

    #[test]
    fn generic_input_names_in_file_order() {
        let project = Project::new(
            "y <= (sel and d1) or ((not sel) and d0);",
            r#"[{"sel": "1", "d0": "0", "d1": "1", "expected_y": "1"}]"#,
        );
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 1);
        assert!(project
            .report()
            .contains("sel=1 d0=0 d1=1 -> y=1 (expected: 1) PASS"));
    }

    #[test]
    fn report_lines_preserve_vector_order() {
        let project = Project::new(
            "q <= a xor b;",
            r#"[
                {"a": "0", "b": "0", "expected_q": "0"},
                {"a": "0", "b": "1", "expected_q": "1"},
                {"a": "1", "b": "0", "expected_q": "1"},
                {"a": "1", "b": "1", "expected_q": "0"}
            ]"#,
        );
        let summary = project.run().unwrap();
        assert_eq!(summary.passed, 4);
        let report = project.report();
        let first = report.find("a=0 b=0").unwrap();
        let last = report.find("a=1 b=1").unwrap();
        assert!(first < last);
        assert!(report.contains("4/4 tests passed"));
    }
}
