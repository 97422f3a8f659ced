//! Validation service: read edge lists and classify them.

use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::application::edges::EdgeList;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{ValidationOptions, Validator, Verdict};

/// Result of checking one edge-list source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// File path or pseudo-name such as `<stdin>`
    pub source: String,
    pub edge_count: usize,
    pub node_count: usize,
    pub verdict: Verdict<String>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

/// Runs the validator over edge-list sources with configured options.
#[derive(Debug, Clone)]
pub struct ValidationService {
    validator: Validator,
}

impl ValidationService {
    pub fn new(settings: &Settings) -> Self {
        Self::with_options(settings.validation_options())
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            validator: Validator::new(options),
        }
    }

    /// Parse `content` and validate it.
    #[instrument(level = "debug", skip(self, content))]
    pub fn check_str(&self, source_name: &str, content: &str) -> ApplicationResult<Report> {
        let edges = EdgeList::parse(content).map_err(|error| ApplicationError::Parse {
            source_name: source_name.to_string(),
            error,
        })?;

        let verdict = self.validator.validate(edges.edges());
        debug!(%verdict, "validated");

        Ok(Report {
            source: source_name.to_string(),
            edge_count: edges.len(),
            node_count: edges.node_count(),
            verdict,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn check_path(&self, path: &Path) -> ApplicationResult<Report> {
        let content = std::fs::read_to_string(path).with_path_context("read edge list", path)?;
        self.check_str(&path.display().to_string(), &content)
    }

    /// Validate everything readable from `reader`, e.g. stdin.
    pub fn check_reader<R: Read>(
        &self,
        source_name: &str,
        mut reader: R,
    ) -> ApplicationResult<Report> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .with_context(&format!("read edge list: {}", source_name))?;
        self.check_str(source_name, &content)
    }

    /// Check several files in parallel. Results keep the order of `paths`.
    #[instrument(level = "debug", skip(self, paths), fields(count = paths.len()))]
    pub fn check_paths(&self, paths: &[PathBuf]) -> Vec<(PathBuf, ApplicationResult<Report>)> {
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| (path.clone(), self.check_path(path)))
            .collect();

        let valid = results
            .iter()
            .filter(|(_, r)| matches!(r, Ok(report) if report.is_valid()))
            .count();
        info!(total = results.len(), valid, "batch checked");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    #[test]
    fn given_valid_content_when_checking_then_reports_counts() {
        let service = ValidationService::with_options(ValidationOptions::default());
        let report = service
            .check_str("inline", "1 2\n2 4\n5 7\n7 2\n9 5\n")
            .unwrap();

        assert!(report.is_valid());
        assert_eq!(report.edge_count, 5);
        assert_eq!(report.node_count, 6);
    }

    #[test]
    fn given_third_child_when_checking_then_names_parent() {
        let service = ValidationService::with_options(ValidationOptions::default());
        let report = service.check_str("inline", "1 2\n3 2\n2 12\n5 2\n").unwrap();

        assert_eq!(
            report.verdict,
            Verdict::Invalid(Violation::ArityExceeded {
                node: "2".to_string(),
                limit: 2
            })
        );
    }

    #[test]
    fn given_bad_line_when_checking_then_parse_error_names_source() {
        let service = ValidationService::with_options(ValidationOptions::default());
        let err = service.check_str("edges.txt", "1 2\nnope\n").unwrap_err();
        assert!(matches!(err, ApplicationError::Parse { .. }));
        assert!(err.to_string().starts_with("edges.txt: line 2"));
    }

    #[test]
    fn given_reader_when_checking_then_reads_all() {
        let service = ValidationService::with_options(ValidationOptions::default());
        let report = service
            .check_reader("<stdin>", "a b\nc b\n".as_bytes())
            .unwrap();
        assert!(report.is_valid());
        assert_eq!(report.source, "<stdin>");
    }
}
