//! Route search on 4-connected grids.
//!
//! This crate plans routes over a [`CellGrid`](gridroute_core::CellGrid)
//! with an optional terrain cost layer:
//!
//! - **Breadth-first** search, FIFO order ([`Algorithm::BreadthFirst`])
//! - **Uniform-cost** search, ordered by accumulated cost ([`Algorithm::UniformCost`])
//! - **A\*** search with a Manhattan heuristic ([`Algorithm::AStar`])
//! - **A\* with replanning** around an obstacle discovered mid-route ([`replan`])
//!
//! Every call computes from scratch and returns its full visitation trace
//! along with the path, so callers can replay how the search unfolded.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration, bounds |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic |
//!
//! [`RouteMap`] implements all three for a grid and terrain pair.

mod algorithm;
mod distance;
mod frontier;
mod plan;
mod reconstruct;
mod replan;
mod routemap;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use distance::manhattan;
pub use frontier::{Frontier, PriorityFrontier};
pub use plan::{Plan, RunStats, plan};
pub use reconstruct::reconstruct_path;
pub use replan::{ReplanConfig, ReplanOutcome, ReplanStage, ReplanStatus, replan};
pub use routemap::RouteMap;
pub use search::{SearchResult, search};
pub use traits::{AstarPather, Pather, WeightedPather};
