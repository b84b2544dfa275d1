use bit_set::BitSet;

use crate::graph::{Graph, VertexId};


/** degree of each vertex in the full graph.
A fresh table is taken at the beginning of every trial.
*/
#[derive(Debug, Clone)]
pub struct DegreeTable {
    /// degrees[v]: nb neighbors of v
    degrees: Vec<usize>,
}

impl DegreeTable {
    /** snapshot of the degrees of the graph */
    pub fn new(graph:&Graph) -> Self {
        Self { degrees: graph.vertices().map(|v| graph.degree(v)).collect() }
    }

    /// degree of v
    pub fn degree(&self, v:VertexId) -> usize { self.degrees[v] }
}


/** vertices still eligible for extension during one trial.
A vertex leaves the pool as soon as it is chosen as a candidate, and never comes back.
Iteration is in ascending vertex order.
*/
#[derive(Debug, Clone)]
pub struct AvailablePool {
    /// members of the pool
    vertices: BitSet,
}

impl AvailablePool {
    /** pool containing every vertex of the graph */
    pub fn full(graph:&Graph) -> Self {
        let mut vertices = BitSet::with_capacity(graph.nb_vertices());
        for v in graph.vertices() { vertices.insert(v); }
        Self { vertices }
    }

    /// true iff v is still available
    pub fn contains(&self, v:VertexId) -> bool { self.vertices.contains(v) }

    /// removes v from the pool, returns true if it was available
    pub fn remove(&mut self, v:VertexId) -> bool { self.vertices.remove(v) }

    /// nb vertices still available
    pub fn len(&self) -> usize { self.vertices.len() }

    /// true iff no vertex is available
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// available vertices, in ascending order
    pub fn iter(&self) -> impl Iterator<Item=VertexId> + '_ { self.vertices.iter() }

    /** neighbors of u that are still available, in ascending order */
    pub fn available_neighbors(&self, graph:&Graph, u:VertexId) -> Vec<VertexId> {
        graph.neighbors(u).intersection(&self.vertices).collect()
    }
}
