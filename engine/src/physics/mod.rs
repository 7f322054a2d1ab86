//! Physics module for the orbit camera rig
//!
//! The rig consumes exactly one physics service: a synchronous volumetric
//! ray cast. This module defines that seam and a small box scene that
//! implements it for tests, tools, and the headless demo.
//!
//! # Submodules
//!
//! - [`query`] - The [`SceneQuery`] trait, entity ids, and hit records
//! - [`collision`] - Slab-method box intersection and [`AabbScene`]

pub mod collision;
pub mod query;

pub use collision::{AabbScene, SceneBox, aabb_contains, ray_aabb_intersect};
pub use query::{EmptyScene, EntityId, RayHit, SceneQuery};
