//! Density-based hierarchical clustering ("HDBSCAN") in Rust, with per-point
//! cluster membership probabilities. Generic over floating point numeric
//! types.
//!
//! The algorithm finds the groups of points that persist the longest as the
//! density threshold is tightened, which makes it a good fit for real world
//! data because:
//!  1. It does not assume that every data point belongs to a cluster. A data
//!     set can contain "noise" points, which receive the label -1;
//!  2. It allows clusters of varying densities, unlike plain DBSCAN which
//!     applies one static density threshold everywhere; and
//!  3. It makes no assumptions about how many clusters there have to be. The
//!     winning clusters are simply those that are the most stable across
//!     densities.
//!
//! The pipeline transforms pairwise distances into mutual reachability
//! distances, spans them with a minimum spanning tree, cuts the tree edge by
//! edge from the widest scale down to grow a cluster hierarchy, drops the
//! branches that never reach the minimum cluster size, and finally selects
//! the most stable frontier of the hierarchy as the flat clustering.
//!
//! # Examples
//!```
//!use std::collections::HashSet;
//!use dendroscan::{Dendroscan, DendroscanParams};
//!
//!let data: Vec<Vec<f32>> = vec![
//!    vec![1.0, 1.0],
//!    vec![1.1, 1.0],
//!    vec![1.0, 1.1],
//!    vec![1.1, 1.1],
//!    vec![9.0, 9.0],
//!    vec![9.1, 9.0],
//!    vec![9.0, 9.1],
//!    vec![9.1, 9.1],
//!    vec![5.0, 5.0],
//!];
//!let params = DendroscanParams::builder()
//!    .min_cluster_size(3)
//!    .min_samples(2)
//!    .build()
//!    .unwrap();
//!let mut clusterer = Dendroscan::new(&data, params);
//!let labels = clusterer.fit().unwrap().to_vec();
//!// First four points form one cluster
//!assert_eq!(1, labels[..4].iter().collect::<HashSet<_>>().len());
//!// Next four points are a second cluster
//!assert_eq!(1, labels[4..8].iter().collect::<HashSet<_>>().len());
//!// The final point is noise
//!assert_eq!(-1, labels[8]);
//!// Every clustered point carries a membership probability
//!assert!(clusterer.probabilities().iter().all(|p| (0.0..=1.0).contains(p)));
//!```
//!
//! # References
//! * [Campello, R.J.G.B.; Moulavi, D.; Sander, J. Density-based clustering based on hierarchical density estimates.](https://link.springer.com/chapter/10.1007/978-3-642-37456-2_14)
//! * [How HDBSCAN Works](https://hdbscan.readthedocs.io/en/latest/how_hdbscan_works.html)

pub use crate::dendroscan::Dendroscan;
pub use crate::error::DendroscanError;
pub use crate::hyper_parameters::{DendroscanParams, ParamsBuilder};

mod dendroscan;
mod distance;
mod error;
mod extraction;
mod hierarchy;
mod hyper_parameters;
mod mutual_reachability;
mod spanning_tree;
mod union_find;
mod validation;
