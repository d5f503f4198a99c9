//! Report formatting and the locked append to the cumulative report file.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use strobe_common::Verdict;

/// One vector's outcome, formatted as a single report line:
/// `a=1 b=0 -> q=1 (expected: 1) PASS`
/// with one `name=value` token per input signal in vector key order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResultLine {
    /// Input `(name, value)` pairs in vector key order.
    pub inputs: Vec<(String, String)>,
    /// The driven target signal.
    pub target: String,
    /// The computed output: `0`, `1`, or the `error` sentinel.
    pub computed: String,
    /// The expected output, or the `X` sentinel when absent.
    pub expected: String,
    /// The verdict for this vector.
    pub verdict: Verdict,
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.inputs {
            write!(f, "{name}={value} ")?;
        }
        write!(
            f,
            "-> {}={} (expected: {}) {}",
            self.target, self.computed, self.expected, self.verdict
        )
    }
}

/// The block of text one run appends to the cumulative report.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReportSection {
    /// The document stem named in the section header.
    pub document: String,
    /// One line per vector, in vector order.
    pub lines: Vec<ResultLine>,
    /// Number of vectors with a `PASS` verdict.
    pub passed: usize,
}

impl ReportSection {
    /// Renders the full section: header, result lines, summary line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n===== Simulation: {} =====\n", self.document));
        for line in &self.lines {
            out.push_str(&format!("{line}\n"));
        }
        out.push_str(&format!(
            "{}/{} tests passed\n",
            self.passed,
            self.lines.len()
        ));
        out
    }
}

/// Appends a rendered section to the report file under an exclusive lock.
///
/// The file is created if absent and never truncated. The advisory lock
/// covers the single write, so concurrent invocations sharing one report
/// file cannot interleave their sections.
pub fn append_report(path: &Path, section: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _lock = file_guard::lock(&file, file_guard::Lock::Exclusive, 0, 1)?;
    (&file).write_all(section.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line(verdict: Verdict) -> ResultLine {
        ResultLine {
            inputs: vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "0".to_string()),
            ],
            target: "q".to_string(),
            computed: "0".to_string(),
            expected: "0".to_string(),
            verdict,
        }
    }

    #[test]
    fn line_format() {
        assert_eq!(
            format!("{}", sample_line(Verdict::Pass)),
            "a=1 b=0 -> q=0 (expected: 0) PASS"
        );
    }

    #[test]
    fn line_format_generalizes_beyond_two_inputs() {
        let line = ResultLine {
            inputs: vec![
                ("sel".to_string(), "0".to_string()),
                ("d0".to_string(), "1".to_string()),
                ("d1".to_string(), "0".to_string()),
            ],
            target: "y".to_string(),
            computed: "1".to_string(),
            expected: "1".to_string(),
            verdict: Verdict::Pass,
        };
        assert_eq!(format!("{line}"), "sel=0 d0=1 d1=0 -> y=1 (expected: 1) PASS");
    }

    #[test]
    fn section_render() {
        let section = ReportSection {
            document: "and_gate".to_string(),
            lines: vec![sample_line(Verdict::Pass), sample_line(Verdict::Fail)],
            passed: 1,
        };
        let text = section.render();
        assert!(text.starts_with("\n===== Simulation: and_gate =====\n"));
        assert!(text.ends_with("1/2 tests passed\n"));
        assert_eq!(text.lines().filter(|l| l.contains("-> q=")).count(), 2);
    }

    #[test]
    fn empty_section_render() {
        let section = ReportSection {
            document: "empty".to_string(),
            lines: Vec::new(),
            passed: 0,
        };
        assert!(section.render().ends_with("0/0 tests passed\n"));
    }

    #[test]
    fn append_creates_and_appends() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        append_report(&path, "first\n").unwrap();
        append_report(&path, "second\n").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn lock_is_released_after_append() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        append_report(&path, "one\n").unwrap();
        // A second append would block forever if the first held the lock.
        append_report(&path, "two\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
