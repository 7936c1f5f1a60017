//! CSV inspection
//!
//! Reports the irregularities the converter tolerates (short and long rows,
//! unterminated quotes, repeated header names) without changing how a
//! document converts.

use crate::conversion::ConversionOptions;
use crate::parser::tokenize_line_detailed;
use std::collections::HashSet;
use std::fmt;

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// What was found on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    EmptyDocument,
    ShortRow { expected: usize, found: usize },
    LongRow { expected: usize, found: usize },
    UnterminatedQuote,
    DuplicateHeader { name: String },
}

/// A single inspection finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionIssue {
    pub severity: IssueSeverity,
    /// 1-based line number in the original document, if the issue has one
    pub line: Option<usize>,
    pub kind: IssueKind,
}

impl fmt::Display for InspectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        match &self.kind {
            IssueKind::EmptyDocument => write!(f, "document has no non-blank lines"),
            IssueKind::ShortRow { expected, found } => write!(
                f,
                "{} fields, expected {}; missing values become empty strings",
                found, expected
            ),
            IssueKind::LongRow { expected, found } => write!(
                f,
                "{} fields, expected {}; extra values are dropped",
                found, expected
            ),
            IssueKind::UnterminatedQuote => write!(f, "quoted field is not closed before line end"),
            IssueKind::DuplicateHeader { name } => {
                write!(f, "header '{}' repeats; the last value wins", name)
            }
        }
    }
}

/// Inspection result
#[derive(Debug, Clone, Default)]
pub struct InspectionReport {
    /// Lines that would be parsed, header included
    pub line_count: usize,
    /// Keys every record would carry
    pub keys: Vec<String>,
    pub issues: Vec<InspectionIssue>,
}

impl InspectionReport {
    fn add(&mut self, severity: IssueSeverity, line: Option<usize>, kind: IssueKind) {
        self.issues.push(InspectionIssue {
            severity,
            line,
            kind,
        });
    }

    /// Check if the document converts (no errors)
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }
}

/// Walks a document the same way the converter does and records findings
pub struct CsvInspector {
    options: ConversionOptions,
}

impl CsvInspector {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Inspect a document
    pub fn inspect(&self, content: &str) -> InspectionReport {
        let mut report = InspectionReport::default();

        let lines: Vec<(usize, &str)> = content
            .split('\n')
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !self.options.skip_empty_lines || !line.trim().is_empty())
            .collect();

        report.line_count = lines.len();

        let Some(&(first_number, first_line)) = lines.first() else {
            report.add(IssueSeverity::Error, None, IssueKind::EmptyDocument);
            return report;
        };

        let first = tokenize_line_detailed(first_line, self.options.delimiter);
        let expected = first.fields.len();

        let data_lines = if self.options.has_header {
            if first.unterminated_quote {
                report.add(
                    IssueSeverity::Warning,
                    Some(first_number),
                    IssueKind::UnterminatedQuote,
                );
            }
            let mut seen = HashSet::new();
            for name in &first.fields {
                if !seen.insert(name.as_str()) {
                    report.add(
                        IssueSeverity::Warning,
                        Some(first_number),
                        IssueKind::DuplicateHeader { name: name.clone() },
                    );
                }
            }
            report.keys = first.fields.clone();
            &lines[1..]
        } else {
            report.keys = (1..=expected).map(|i| format!("column_{}", i)).collect();
            &lines[..]
        };

        for &(number, line) in data_lines {
            let tokenized = tokenize_line_detailed(line, self.options.delimiter);
            let found = tokenized.fields.len();

            if tokenized.unterminated_quote {
                report.add(IssueSeverity::Warning, Some(number), IssueKind::UnterminatedQuote);
            }
            if found < expected {
                report.add(
                    IssueSeverity::Warning,
                    Some(number),
                    IssueKind::ShortRow { expected, found },
                );
            } else if found > expected {
                report.add(
                    IssueSeverity::Warning,
                    Some(number),
                    IssueKind::LongRow { expected, found },
                );
            }
        }

        tracing::debug!(
            lines = report.line_count,
            issues = report.issues.len(),
            "inspected CSV document"
        );

        report
    }
}
