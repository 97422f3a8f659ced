//! Text format for edge lists.
//!
//! One `child parent` (or `child,parent`) pair per line. Blank lines and `#`
//! comments are skipped, including a trailing comment after an edge.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use thiserror::Error;
use tracing::{instrument, trace};

use crate::domain::Edge;

static EDGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<child>[^\s,#]+)\s*(?:,\s*|\s+)(?P<parent>[^\s,#]+)$")
        .expect("edge line pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeParseError {
    #[error("line {line}: expected 'child parent' or 'child,parent', got '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// Parsed edges, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<Edge<String>>,
}

impl EdgeList {
    #[instrument(level = "debug", skip(content), fields(bytes = content.len()))]
    pub fn parse(content: &str) -> Result<Self, EdgeParseError> {
        let mut edges = Vec::new();

        for (i, line) in content.lines().enumerate() {
            let trimmed = strip_comment(line).trim();
            if trimmed.is_empty() {
                continue;
            }

            let caps = EDGE_LINE
                .captures(trimmed)
                .ok_or_else(|| EdgeParseError::MalformedLine {
                    line: i + 1,
                    content: line.trim().to_string(),
                })?;
            let edge = Edge::new(caps["child"].to_string(), caps["parent"].to_string());
            trace!(child = %edge.child, parent = %edge.parent, "edge");
            edges.push(edge);
        }

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[Edge<String>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distinct ids appearing as child or parent.
    pub fn node_count(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|e| [&e.child, &e.parent])
            .unique()
            .count()
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1 2")]
    #[case("1,2")]
    #[case("1 , 2")]
    #[case("  1\t2  ")]
    #[case("1 2 # trailing comment")]
    fn given_edge_line_when_parsing_then_extracts_pair(#[case] input: &str) {
        let list = EdgeList::parse(input).unwrap();
        assert_eq!(list.edges(), &[Edge::new("1".to_string(), "2".to_string())]);
    }

    #[test]
    fn given_comments_and_blanks_when_parsing_then_skips_them() {
        let content = "# header\n\na b\n   \n# another\nc b\n";
        let list = EdgeList::parse(content).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.node_count(), 3);
    }

    #[rstest]
    #[case("a b c", 1)]
    #[case("ok parent\nlonely", 2)]
    #[case("a,", 1)]
    #[case("x y\n\n,b", 3)]
    fn given_malformed_line_when_parsing_then_reports_line_number(
        #[case] input: &str,
        #[case] expected_line: usize,
    ) {
        let err = EdgeList::parse(input).unwrap_err();
        let EdgeParseError::MalformedLine { line, .. } = err;
        assert_eq!(line, expected_line);
    }

    #[test]
    fn given_empty_content_when_parsing_then_no_edges() {
        let list = EdgeList::parse("").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.node_count(), 0);
    }
}
