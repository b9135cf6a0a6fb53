//! Vector helpers and ray/box primitives used by the camera and picking.
//!
//! Vectors and matrices are plain [`glam`] types; this module only adds
//! what glam leaves out: validated spherical construction, fallible
//! normalization, and the slab-tested [`Ray`]/[`Aabb`] pair.

mod aabb;
mod ray;
mod vector;

pub use aabb::{Aabb, RayHit};
pub use ray::Ray;
pub(crate) use vector::spherical_offset;
pub use vector::{from_spherical_coords, try_unit};
