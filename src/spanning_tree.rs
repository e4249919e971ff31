use num_traits::Float;

#[derive(Clone, Debug)]
pub(crate) struct MstEdge<T> {
    pub(crate) left_node_id: usize,
    pub(crate) right_node_id: usize,
    pub(crate) distance: T,
}

/// Builds a minimum spanning tree over the mutual reachability matrix using
/// Prim's algorithm with a dense scan. The matrix is already O(n^2), so a
/// priority queue would not change the asymptotic cost.
pub(crate) struct MstBuilder<'a, T> {
    matrix: &'a [Vec<T>],
}

impl<'a, T: Float> MstBuilder<'a, T> {
    pub(crate) fn new(matrix: &'a [Vec<T>]) -> Self {
        Self { matrix }
    }

    /// Returns the n - 1 tree edges in the order Prim discovered them.
    /// Ties on the candidate weight resolve to the smallest vertex index,
    /// which keeps the output deterministic.
    pub(crate) fn build(&self) -> Vec<MstEdge<T>> {
        let n_samples = self.matrix.len();
        let mut in_tree = vec![false; n_samples];
        let mut best_weight = vec![T::infinity(); n_samples];
        let mut best_from = vec![0_usize; n_samples];

        in_tree[0] = true;
        for v in 1..n_samples {
            best_weight[v] = self.matrix[0][v];
        }

        let mut mst = Vec::with_capacity(n_samples.saturating_sub(1));

        for _ in 1..n_samples {
            let mut next_node = 0;
            let mut current_min_dist = T::infinity();
            for v in 0..n_samples {
                if in_tree[v] {
                    continue;
                }
                if best_weight[v] < current_min_dist {
                    current_min_dist = best_weight[v];
                    next_node = v;
                }
            }

            mst.push(MstEdge {
                left_node_id: best_from[next_node],
                right_node_id: next_node,
                distance: best_weight[next_node],
            });
            in_tree[next_node] = true;

            for v in 0..n_samples {
                if in_tree[v] {
                    continue;
                }
                let weight = self.matrix[next_node][v];
                if weight < best_weight[v] {
                    best_weight[v] = weight;
                    best_from[v] = next_node;
                }
            }
        }
        mst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::union_find::UnionFind;

    fn square_matrix() -> Vec<Vec<f64>> {
        // Four vertices: 0-1 and 2-3 are cheap, crossing is expensive.
        vec![
            vec![0.0, 1.0, 4.0, 6.0],
            vec![1.0, 0.0, 5.0, 4.0],
            vec![4.0, 5.0, 0.0, 2.0],
            vec![6.0, 4.0, 2.0, 0.0],
        ]
    }

    #[test]
    fn produces_n_minus_one_edges() {
        let matrix = square_matrix();
        let mst = MstBuilder::new(&matrix).build();
        assert_eq!(mst.len(), 3);
    }

    #[test]
    fn spans_all_vertices() {
        let matrix = square_matrix();
        let mst = MstBuilder::new(&matrix).build();
        let mut uf = UnionFind::new(matrix.len());
        for edge in &mst {
            uf.union(edge.left_node_id, edge.right_node_id);
        }
        let root = uf.find(0);
        for v in 1..matrix.len() {
            assert_eq!(uf.find(v), root);
        }
    }

    #[test]
    fn picks_the_cheap_edges() {
        let matrix = square_matrix();
        let mst = MstBuilder::new(&matrix).build();
        let total: f64 = mst.iter().map(|e| e.distance).sum();
        // Optimal tree is 1.0 + 4.0 + 2.0.
        assert_eq!(total, 7.0);
    }

    #[test]
    fn ties_resolve_to_the_smallest_index() {
        let matrix = vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        let mst = MstBuilder::new(&matrix).build();
        assert_eq!(mst[0].right_node_id, 1);
        assert_eq!(mst[1].right_node_id, 2);
    }

    #[test]
    fn edge_endpoints_record_the_closest_tree_vertex() {
        // Vertex 2 is closest to vertex 1, not to the start vertex.
        let matrix = vec![
            vec![0.0, 1.0, 9.0],
            vec![1.0, 0.0, 2.0],
            vec![9.0, 2.0, 0.0],
        ];
        let mst = MstBuilder::new(&matrix).build();
        assert_eq!(mst[1].left_node_id, 1);
        assert_eq!(mst[1].right_node_id, 2);
        assert_eq!(mst[1].distance, 2.0);
    }

    #[test]
    fn two_points_give_one_edge() {
        let matrix = vec![vec![0.0, 3.0], vec![3.0, 0.0]];
        let mst = MstBuilder::new(&matrix).build();
        assert_eq!(mst.len(), 1);
        assert_eq!(mst[0].distance, 3.0);
    }
}
