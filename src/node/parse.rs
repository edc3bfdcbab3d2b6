//! Parsing of plain-text node lists.
//!
//! The accepted format is one `x,y` pair per line. Blank lines are skipped,
//! fields beyond the second are ignored, and ids follow the order in which
//! nodes appear.

use super::error::NodeParseError;
use super::Node;

/// Parses a node list, one `x,y` coordinate pair per line.
///
/// Line numbers in errors are 1-based and count blank lines.
pub fn parse_nodes(input: &str) -> Result<Vec<Node>, NodeParseError> {
    let mut nodes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split(',').map(str::trim);
        let x = parse_coordinate(fields.next(), line)?;
        let y = parse_coordinate(fields.next(), line)?;

        nodes.push(Node::new(x, y, nodes.len()));
    }

    Ok(nodes)
}

fn parse_coordinate(field: Option<&str>, line: usize) -> Result<f64, NodeParseError> {
    let value = match field {
        Some(v) if !v.is_empty() => v,
        _ => return Err(NodeParseError::MissingCoordinate { line }),
    };

    let parsed: f64 = value.parse().map_err(|_| NodeParseError::InvalidNumber {
        line,
        value: value.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(NodeParseError::NonFinite { line });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_list() {
        let nodes = parse_nodes("0,0\n10.5,3\n-2, 7.25\n").unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], Node::new(0.0, 0.0, 0));
        assert_eq!(nodes[1], Node::new(10.5, 3.0, 1));
        assert_eq!(nodes[2], Node::new(-2.0, 7.25, 2));
    }

    #[test]
    fn skips_blank_lines_and_keeps_dense_ids() {
        let nodes = parse_nodes("\n1,1\n\n   \n2,2\n").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].id, 1);
    }

    #[test]
    fn ignores_extra_fields() {
        let nodes = parse_nodes("1,2,label\n").unwrap();
        assert_eq!(nodes, vec![Node::new(1.0, 2.0, 0)]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let nodes = parse_nodes("1,2\r\n3,4\r\n").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1], Node::new(3.0, 4.0, 1));
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        assert!(parse_nodes("").unwrap().is_empty());
    }

    #[test]
    fn missing_coordinate_reports_line() {
        let err = parse_nodes("1,2\n\n3\n").unwrap_err();
        assert_eq!(err, NodeParseError::MissingCoordinate { line: 3 });
    }

    #[test]
    fn empty_field_is_missing() {
        let err = parse_nodes("1,\n").unwrap_err();
        assert_eq!(err, NodeParseError::MissingCoordinate { line: 1 });
    }

    #[test]
    fn invalid_number_reports_value() {
        let err = parse_nodes("1,2\nx,4\n").unwrap_err();
        assert_eq!(
            err,
            NodeParseError::InvalidNumber {
                line: 2,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn non_finite_rejected() {
        let err = parse_nodes("inf,1\n").unwrap_err();
        assert_eq!(err, NodeParseError::NonFinite { line: 1 });
        let err = parse_nodes("1,NaN\n").unwrap_err();
        assert_eq!(err, NodeParseError::NonFinite { line: 1 });
    }
}
