//! Line-based text format for graphs and spanning-forest reports.
//!
//! Input: the first non-blank line holds the vertex capacity; each following
//! non-blank line is one edge `v1 v2 weight` (two integers and a float).
//!
//! ```text
//! 4
//! 0 1 1.0
//! 1 2 2.0
//! ```
//!
//! Output: every edge with its classification, then one `parent[i] = p` line
//! per vertex slot, with `-1` for roots.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::graph::{Classification, Graph};
use crate::mst::ParentArray;

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_vertex(token: &str, line: usize) -> Result<usize> {
    let value: i64 = token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid vertex id `{token}`")))?;
    usize::try_from(value).map_err(|_| parse_error(line, format!("negative vertex id {value}")))
}

/// Read a graph in the text format. Edges start out [`Classification::Unvisited`].
pub fn read_graph(reader: impl BufRead) -> Result<Graph> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l));

    let mut graph = None;
    for (line_no, line) in lines.by_ref() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let capacity: usize = text
            .parse()
            .map_err(|_| parse_error(line_no, format!("invalid vertex count `{text}`")))?;
        graph = Some(Graph::new(capacity).map_err(|e| parse_error(line_no, e.to_string()))?);
        break;
    }
    let mut graph = graph.ok_or_else(|| parse_error(1, "missing vertex count"))?;

    for (line_no, line) in lines {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [v1, v2, weight] => {
                let v1 = parse_vertex(v1, line_no)?;
                let v2 = parse_vertex(v2, line_no)?;
                let weight: f64 = weight
                    .parse()
                    .map_err(|_| parse_error(line_no, format!("invalid weight `{weight}`")))?;
                if weight.is_nan() {
                    return Err(parse_error(line_no, "weight is not a number"));
                }
                graph
                    .add_edge(v1, v2, weight, Classification::Unvisited)
                    .map_err(|e| parse_error(line_no, e.to_string()))?;
            }
            _ => return Err(parse_error(line_no, "expected `v1 v2 weight`")),
        }
    }
    Ok(graph)
}

/// Write classified edges followed by the parent array.
pub fn write_report(mut out: impl Write, graph: &Graph, parents: &ParentArray) -> Result<()> {
    writeln!(out, "Edges after Kruskal:")?;
    for (_, edge) in graph.edges() {
        writeln!(out, "{edge}")?;
    }
    writeln!(out)?;
    writeln!(out, "Parent array (after BFS):")?;
    for (i, p) in parents.as_signed().iter().enumerate() {
        writeln!(out, "parent[{i}] = {p}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::{Bfs, Kruskal};

    #[test]
    fn reads_square() {
        let input = "4\n0 1 1.0\n1 2 2.0\n\n2 3 1\n0 3 5.5\n";
        let g = read_graph(input.as_bytes()).unwrap();
        assert_eq!(g.capacity(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.edge(3, 0).unwrap().weight(), 5.5);
    }

    #[test]
    fn capacity_only() {
        let g = read_graph("  3  \n".as_bytes()).unwrap();
        assert_eq!(g.capacity(), 3);
        assert!(g.is_empty());
    }

    #[test]
    fn missing_capacity() {
        let err = read_graph("\n\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn malformed_lines_report_line_number() {
        let cases = [
            ("x\n", 1),
            ("0\n", 1),
            ("3\n0 1\n", 2),
            ("3\n0 1 2.0\n0 b 1.0\n", 3),
            ("3\n0 -1 1.0\n", 2),
            ("3\n0 1 heavy\n", 2),
            ("3\n0 1 NaN\n", 2),
            ("3\n0 3 1.0\n", 2),
            ("3\n1 1 1.0\n", 2),
            ("3\n0 1 1.0\n1 0 2.0\n", 3),
        ];
        for (input, expected) in cases {
            match read_graph(input.as_bytes()) {
                Err(Error::Parse { line, .. }) => assert_eq!(line, expected, "input {input:?}"),
                other => panic!("input {input:?}: expected parse error, got {other:?}"),
            }
        }
    }

    #[test]
    fn report_format() {
        let mut g = read_graph("3\n0 1 1.9\n1 2 2.0\n0 2 12.0\n".as_bytes()).unwrap();
        Kruskal::new().run(&mut g).unwrap();
        let parents = Bfs::new().run(&g).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &g, &parents).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Edges after Kruskal:\n\
             0 --(01)--> 1\tSelected\n\
             0 --(12)--> 2\tRejected\n\
             1 --(02)--> 2\tSelected\n\
             \n\
             Parent array (after BFS):\n\
             parent[0] = -1\n\
             parent[1] = 0\n\
             parent[2] = 1\n"
        );
    }
}
