use crate::spanning_tree::MstEdge;
use crate::union_find::UnionFind;
use crate::DendroscanError;
use num_traits::Float;
use tracing::trace;

/// A node of the cluster hierarchy.
///
/// All clusters live in a flat arena (`Vec<Cluster<T>>`) and reference their
/// children by arena index, so the tree carries no owned cycles and the
/// hierarchy can be walked without recursion. Nodes are created while the
/// spanning tree is cut edge by edge and are never restructured afterwards;
/// only `stability` is filled in later, during extraction.
#[derive(Debug, Clone)]
pub(crate) struct Cluster<T> {
    pub(crate) id: usize,
    /// Member point indices, sorted ascending.
    pub(crate) members: Vec<usize>,
    /// Per member, the smallest weight among spanning-tree edges incident to
    /// the point whose other endpoint is also a member. Zero when the point
    /// has no in-cluster edge. Parallel to `members`.
    pub(crate) min_reach: Vec<T>,
    /// Weight of the edge whose removal created this cluster. The cluster
    /// exists at every scale below this.
    pub(crate) birth_distance: T,
    /// The largest `min_reach` of any member: the scale at which the cluster
    /// starts shedding points.
    pub(crate) leave_edge_weight: T,
    pub(crate) left_child: Option<usize>,
    pub(crate) right_child: Option<usize>,
    /// Filled in during extraction.
    pub(crate) stability: T,
}

impl<T: Float> Cluster<T> {
    pub(crate) fn size(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn contains(&self, point: usize) -> bool {
        self.members.binary_search(&point).is_ok()
    }

    pub(crate) fn has_children(&self) -> bool {
        self.left_child.is_some() || self.right_child.is_some()
    }
}

/// Builds the cluster hierarchy by cutting spanning-tree edges in descending
/// weight order.
///
/// Each cut finds the smallest existing cluster containing both edge
/// endpoints and splits its members into the two components left when the
/// edge and everything heavier is removed. Whether the split produces two
/// child clusters, a single surviving child, or kills the cluster depends on
/// the component sizes relative to `min_cluster_size`.
pub(crate) struct HierarchyBuilder<'a, T> {
    mst: &'a [MstEdge<T>],
    n_samples: usize,
    min_cluster_size: usize,
}

impl<'a, T: Float> HierarchyBuilder<'a, T> {
    pub(crate) fn new(mst: &'a [MstEdge<T>], n_samples: usize, min_cluster_size: usize) -> Self {
        Self {
            mst,
            n_samples,
            min_cluster_size,
        }
    }

    pub(crate) fn build(&self) -> Result<Vec<Cluster<T>>, DendroscanError> {
        let mut edges = self.mst.to_vec();
        edges.sort_by(|a, b| b.distance.partial_cmp(&a.distance).expect("Invalid floats"));

        let mut clusters = Vec::new();
        let root_members = (0..self.n_samples).collect();
        let root = self.create_cluster(0, root_members, edges[0].distance);
        clusters.push(root);

        let mut union_find = UnionFind::new(self.n_samples);

        for (position, edge) in edges.iter().enumerate() {
            let parent_id = self.find_split_target(&clusters, edge)?;
            if clusters[parent_id].has_children() {
                // The edge was already handled transitively by an earlier,
                // heavier cut.
                continue;
            }
            let (side_left, side_right) =
                self.split_members(&mut union_find, &clusters[parent_id], &edges, position, edge)?;
            self.apply_split_rule(&mut clusters, parent_id, side_left, side_right, edge.distance);
        }
        Ok(clusters)
    }

    /// The smallest existing cluster containing both edge endpoints. Cluster
    /// sizes strictly decrease in creation order for overlapping member
    /// sets, so the newest match is the smallest.
    fn find_split_target(
        &self,
        clusters: &[Cluster<T>],
        edge: &MstEdge<T>,
    ) -> Result<usize, DendroscanError> {
        clusters
            .iter()
            .rev()
            .find(|cluster| {
                cluster.contains(edge.left_node_id) && cluster.contains(edge.right_node_id)
            })
            .map(|cluster| cluster.id)
            .ok_or_else(|| {
                DendroscanError::InvariantViolation(format!(
                    "no cluster contains both endpoints of edge {}-{}",
                    edge.left_node_id, edge.right_node_id
                ))
            })
    }

    /// Partitions the parent's members into the component containing the
    /// edge's left endpoint and the component containing its right endpoint,
    /// connected through strictly later (lighter or equal) edges only.
    fn split_members(
        &self,
        union_find: &mut UnionFind,
        parent: &Cluster<T>,
        edges: &[MstEdge<T>],
        position: usize,
        edge: &MstEdge<T>,
    ) -> Result<(Vec<usize>, Vec<usize>), DendroscanError> {
        union_find.reset();
        for later in &edges[position + 1..] {
            if parent.contains(later.left_node_id) && parent.contains(later.right_node_id) {
                union_find.union(later.left_node_id, later.right_node_id);
            }
        }

        let left_root = union_find.find(edge.left_node_id);
        let right_root = union_find.find(edge.right_node_id);
        if left_root == right_root {
            return Err(DendroscanError::InvariantViolation(format!(
                "edge {}-{} did not separate its cluster",
                edge.left_node_id, edge.right_node_id
            )));
        }

        let mut side_left = Vec::new();
        let mut side_right = Vec::new();
        for &point in &parent.members {
            let root = union_find.find(point);
            if root == left_root {
                side_left.push(point);
            } else if root == right_root {
                side_right.push(point);
            }
        }
        if side_left.len() + side_right.len() != parent.size() {
            return Err(DendroscanError::InvariantViolation(format!(
                "members of cluster {} fell outside both sides of a split",
                parent.id
            )));
        }
        Ok((side_left, side_right))
    }

    /// Applies the split rule to the two components:
    /// - both sides of at least two points: a true split into two children;
    /// - one side reaching `min_cluster_size`, the other a stray point: the
    ///   surviving side continues as a single child and the stray point
    ///   falls out of the hierarchy;
    /// - both sides below `min_cluster_size`: the cluster dies and its
    ///   fragments are recorded as terminal leaves.
    fn apply_split_rule(
        &self,
        clusters: &mut Vec<Cluster<T>>,
        parent_id: usize,
        side_left: Vec<usize>,
        side_right: Vec<usize>,
        weight: T,
    ) {
        let left_len = side_left.len();
        let right_len = side_right.len();

        if left_len >= 2 && right_len >= 2 {
            let left_id = clusters.len();
            clusters.push(self.create_cluster(left_id, side_left, weight));
            let right_id = clusters.len();
            clusters.push(self.create_cluster(right_id, side_right, weight));
            clusters[parent_id].left_child = Some(left_id);
            clusters[parent_id].right_child = Some(right_id);
            trace!(parent = parent_id, left = left_id, right = right_id, "split cluster");
        } else if left_len.max(right_len) >= self.min_cluster_size {
            let survivor = if left_len >= right_len { side_left } else { side_right };
            let child_id = clusters.len();
            clusters.push(self.create_cluster(child_id, survivor, weight));
            clusters[parent_id].left_child = Some(child_id);
            trace!(parent = parent_id, child = child_id, "cluster shed a stray point");
        } else {
            // Neither fragment can ever reach the cluster size floor.
            let left_id = clusters.len();
            clusters.push(self.create_cluster(left_id, side_left, weight));
            let right_id = clusters.len();
            clusters.push(self.create_cluster(right_id, side_right, weight));
            clusters[parent_id].left_child = Some(left_id);
            clusters[parent_id].right_child = Some(right_id);
            trace!(parent = parent_id, "cluster died");
        }
    }

    fn create_cluster(&self, id: usize, mut members: Vec<usize>, birth_distance: T) -> Cluster<T> {
        members.sort_unstable();

        let mut min_reach = vec![T::zero(); members.len()];
        let mut has_edge = vec![false; members.len()];
        for edge in self.mst {
            let left = members.binary_search(&edge.left_node_id);
            let right = members.binary_search(&edge.right_node_id);
            if let (Ok(left_idx), Ok(right_idx)) = (left, right) {
                for idx in [left_idx, right_idx] {
                    if !has_edge[idx] || edge.distance < min_reach[idx] {
                        min_reach[idx] = edge.distance;
                        has_edge[idx] = true;
                    }
                }
            }
        }
        let leave_edge_weight = min_reach.iter().copied().fold(T::zero(), T::max);

        Cluster {
            id,
            members,
            min_reach,
            birth_distance,
            leave_edge_weight,
            left_child: None,
            right_child: None,
            stability: T::zero(),
        }
    }
}

/// Keeps the clusters whose member count reaches `min_cluster_size`,
/// preserving creation order so the root stays first whenever it qualifies.
pub(crate) fn condense<T: Float>(clusters: &[Cluster<T>], min_cluster_size: usize) -> Vec<usize> {
    clusters
        .iter()
        .filter(|cluster| cluster.size() >= min_cluster_size)
        .map(|cluster| cluster.id)
        .collect()
}
