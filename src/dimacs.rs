use std::fs;
use std::path::Path;

use log::{debug, warn};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{map_res, eof};
use nom::sequence::{preceded, terminated, tuple};

use crate::error::{CliqueError, Result};
use crate::graph::Graph;


/** DIMACS instance as read from a file: header counts and the 1-based edge list. */
#[derive(Debug, Clone)]
pub struct DimacsInstance {
    /// instance name (file name)
    pub name: String,
    /// nb vertices announced by the header
    pub n: usize,
    /// nb edges announced by the header
    pub m: usize,
    /// edges of the graph (1-based, as in the file)
    pub edges: Vec<(usize,usize)>,
}

impl DimacsInstance {
    /** builds the adjacency representation of the instance */
    pub fn graph(&self) -> Result<Graph> {
        Graph::from_one_based_edges(self.n, &self.edges)
    }
}


/// reads a number
fn read_number(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers, each preceded by spaces, and nothing else until the end of the line
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        tuple((preceded(space1, read_number), preceded(space1, read_number))),
        tuple((space0, eof)),
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e"), read_two_integers)(s)
}


/** parses the content of a DIMACS file.
 - lines starting with 'c' are comments
 - "p edge n m" (or "p col n m") gives the number of vertices and edges
 - "e u v" is an edge between u and v (1-based)
*/
pub fn parse_dimacs(name:&str, content:&str) -> Result<DimacsInstance> {
    let parse_error = |line:usize, reason:String| CliqueError::Parse {
        file: name.to_string(), line, reason
    };
    let mut header:Option<(usize,usize)> = None;
    let mut edges = Vec::new();
    for (i,raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('c') { continue; }
        if line.starts_with('p') {
            if header.is_some() {
                return Err(parse_error(i+1, "duplicate header".to_string()));
            }
            let (_,(n,m)) = read_header(line)
                .map_err(|_| parse_error(i+1, format!("invalid header '{}'", line)))?;
            header = Some((n,m));
        } else if line.starts_with('e') {
            let n = match header {
                None => return Err(parse_error(i+1, "edge before header".to_string())),
                Some((n,_)) => n,
            };
            let (_,(u,v)) = read_edge(line)
                .map_err(|_| parse_error(i+1, format!("invalid edge '{}'", line)))?;
            if u == 0 || v == 0 || u > n || v > n {
                return Err(parse_error(i+1, format!("vertex out of range 1..={}", n)));
            }
            if u == v {
                return Err(parse_error(i+1, format!("self loop on vertex {}", u)));
            }
            edges.push((u,v));
        } else {
            debug!("{}:{}: ignoring line '{}'", name, i+1, line);
        }
    }
    let (n,m) = header.ok_or_else(|| parse_error(0, "missing header".to_string()))?;
    if edges.len() != m && 2*edges.len() != m {
        warn!("{}: header announces {} edges, read {}", name, m, edges.len());
    }
    Ok(DimacsInstance { name: name.to_string(), n, m, edges })
}


/// reads an instance from file
pub fn read_from_file(path:&Path) -> Result<DimacsInstance> {
    let content = fs::read_to_string(path).map_err(|source| CliqueError::InstanceSource {
        path: path.display().to_string(), source
    })?;
    let name = path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    parse_dimacs(&name, &content)
}


/** reads every regular file of a directory as a DIMACS instance.
Instances are returned sorted by name. Any unreadable or malformed file aborts the whole read.
*/
pub fn read_instances_dir(path:&Path) -> Result<Vec<DimacsInstance>> {
    let source_error = |source| CliqueError::InstanceSource {
        path: path.display().to_string(), source
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(source_error)? {
        let entry = entry.map_err(source_error)?;
        if entry.file_type().map_err(source_error)?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    files.iter().map(|f| read_from_file(f)).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = read_from_file(Path::new("insts/triangle.clq")).unwrap();
        assert_eq!(inst.name, "triangle.clq");
        assert_eq!(inst.n, 3);
        assert_eq!(inst.m, 3);
        assert_eq!(inst.edges, vec![(1,2),(2,3),(1,3)]);
        let g = inst.graph().unwrap();
        assert!(g.is_clique(&[0,1,2]));
    }

    #[test]
    fn test_read_dir_sorted() {
        let insts = read_instances_dir(Path::new("insts")).unwrap();
        let names:Vec<&str> = insts.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["isolated.clq", "path.clq", "triangle.clq"]);
    }

    #[test]
    fn test_missing_dir() {
        let res = read_instances_dir(Path::new("insts/does-not-exist"));
        assert!(matches!(res, Err(CliqueError::InstanceSource { .. })));
    }

    #[test]
    fn test_read_header() {
        assert_eq!(read_header("p edge 2 1").unwrap().1, (2,1));
        assert_eq!(read_header("p col 12 30").unwrap().1, (12,30));
        assert!(read_header("p edge 2").is_err());
        assert!(read_header("p edge 2 x").is_err());
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("e 1 2").unwrap().1, (1,2));
        assert_eq!(read_edge("e  10\t20 ").unwrap().1, (10,20));
        assert!(read_edge("e 1").is_err());
        assert!(read_edge("e 1 2 3").is_err());
    }

    #[test]
    fn test_comments_and_crlf() {
        let s = "c a comment\r\nc another\r\np edge 2 1\r\ne 1 2\r\n";
        let inst = parse_dimacs("tiny", s).unwrap();
        assert_eq!((inst.n, inst.m), (2,1));
        assert_eq!(inst.edges, vec![(1,2)]);
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            parse_dimacs("a", "e 1 2\np edge 2 1\n"),
            Err(CliqueError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_dimacs("b", "p edge 2 1\ne 1 3\n"),
            Err(CliqueError::Parse { line: 2, .. })
        ));
        assert!(parse_dimacs("c", "p edge 2 1\ne 2 2\n").is_err());
        assert!(parse_dimacs("d", "p edge 2 1\ne 1 b\n").is_err());
        assert!(matches!(parse_dimacs("e", "c nothing\n"), Err(CliqueError::Parse { line: 0, .. })));
    }
}
