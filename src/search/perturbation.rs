use rand::Rng;

use crate::graph::{Clique, VertexId};


/** removes two vertices at random positions from a clique of size > 1.
The second position is drawn among the remaining vertices after the first removal.
A clique of size 2 becomes empty; cliques of size <= 1 are left untouched.
Returns the removed vertices (they do not come back to the available pool).
*/
pub fn perturb<R>(clique:&mut Clique, rng:&mut R) -> Vec<VertexId> where R: Rng + ?Sized {
    let mut removed = Vec::with_capacity(2);
    if clique.len() > 1 {
        for _ in 0..2 {
            let pos = rng.gen_range(0..clique.len());
            removed.push(clique.remove(pos));
        }
    }
    removed
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_removes_two() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for len in 2..10 {
            let mut clique:Clique = (0..len).collect();
            let removed = perturb(&mut clique, &mut rng);
            assert_eq!(clique.len(), len-2);
            assert_eq!(removed.len(), 2);
            assert_ne!(removed[0], removed[1]);
            for v in &removed { assert!(!clique.contains(v)); }
            // insertion order of the remaining vertices is kept
            assert!(clique.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_small_cliques_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut empty:Clique = Vec::new();
        assert!(perturb(&mut empty, &mut rng).is_empty());
        let mut single = vec![7];
        assert!(perturb(&mut single, &mut rng).is_empty());
        assert_eq!(single, vec![7]);
    }
}
