use bit_set::BitSet;

use crate::error::{CliqueError, Result};

/** Vertex Id (0-based) */
pub type VertexId = usize;

/** Clique, stored in insertion order */
pub type Clique = Vec<VertexId>;

/** models an undirected graph given as a benchmark instance.
The adjacency relation is dense: adj_matrix[i] is the bitset of the neighbors of i.
The graph is never modified after construction.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges (duplicates counted once)
    m: usize,
    /// adj_matrix[i]: bitset of the vertices adjacent to i
    adj_matrix: Vec<BitSet>,
}


impl Graph {

    /** graph with n isolated vertices */
    pub fn with_vertices(n:usize) -> Self {
        Self { n, m:0, adj_matrix: vec![BitSet::with_capacity(n) ; n] }
    }

    /** builds a graph from a list of 0-based edges.
    Duplicate edges are ignored. Self loops and out of range endpoints are errors.
    */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        let mut res = Self::with_vertices(n);
        for &(u,v) in edges {
            if u >= n || v >= n || u == v {
                return Err(CliqueError::InvalidEdge(u, v, n));
            }
            res.add_edge(u, v);
        }
        Ok(res)
    }

    /** builds a graph from a list of 1-based edges (DIMACS numbering) */
    pub fn from_one_based_edges(n:usize, edges:&[(usize,usize)]) -> Result<Self> {
        let mut zero_based = Vec::with_capacity(edges.len());
        for &(u,v) in edges {
            if u == 0 || v == 0 {
                return Err(CliqueError::InvalidEdge(u, v, n));
            }
            zero_based.push((u-1, v-1));
        }
        Self::from_edges(n, &zero_based)
    }

    fn add_edge(&mut self, u:VertexId, v:VertexId) {
        if self.adj_matrix[u].insert(v) {
            self.adj_matrix[v].insert(u);
            self.m += 1;
        }
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// iterator over the vertices
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /// bitset of the vertices adjacent to u
    pub fn neighbors(&self, u:VertexId) -> &BitSet { &self.adj_matrix[u] }

    /// number of neighbors of u in the full graph
    pub fn degree(&self, u:VertexId) -> usize { self.adj_matrix[u].len() }

    /** returns if a and b are adjacent (O(1)) */
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /** returns true iff every pair of distinct vertices of the path is adjacent.
    O(k²) where k is the length of the path.
    */
    pub fn is_clique(&self, path:&[VertexId]) -> bool {
        for (i,a) in path.iter().enumerate() {
            for b in &path[i+1..] {
                if a == b || !self.are_adjacent(*a, *b) { return false; }
            }
        }
        true
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_one_based_edges(3, &[(1,2),(2,3),(1,3)]).unwrap()
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let g = Graph::from_edges(4, &[(0,1),(1,2),(2,3)]).unwrap();
        for u in g.vertices() {
            assert!(!g.are_adjacent(u, u));
            for v in g.vertices() {
                assert_eq!(g.are_adjacent(u, v), g.are_adjacent(v, u));
            }
        }
        assert_eq!(g.nb_edges(), 3);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(3), 1);
    }

    #[test]
    fn test_duplicate_edges() {
        let g = Graph::from_edges(2, &[(0,1),(1,0),(0,1)]).unwrap();
        assert_eq!(g.nb_edges(), 1);
        assert_eq!(g.degree(0), 1);
    }

    #[test]
    fn test_invalid_edges() {
        assert!(matches!(Graph::from_edges(2, &[(0,0)]), Err(CliqueError::InvalidEdge(0,0,2))));
        assert!(matches!(Graph::from_edges(2, &[(0,2)]), Err(CliqueError::InvalidEdge(0,2,2))));
        assert!(Graph::from_one_based_edges(2, &[(0,1)]).is_err());
        assert!(Graph::from_one_based_edges(2, &[(1,3)]).is_err());
    }

    #[test]
    fn test_display_statistics() {
        triangle().display_statistics();
        Graph::with_vertices(0).display_statistics();
    }

    #[test]
    fn test_is_clique() {
        let g = triangle();
        assert!(g.is_clique(&[]));
        assert!(g.is_clique(&[2]));
        assert!(g.is_clique(&[0,1,2]));
        assert!(!g.is_clique(&[0,0]));
        let path = Graph::from_one_based_edges(3, &[(1,2),(2,3)]).unwrap();
        assert!(path.is_clique(&[1,0]));
        assert!(!path.is_clique(&[0,1,2]));
    }
}
