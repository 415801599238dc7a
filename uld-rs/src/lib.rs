#![doc = document_features::document_features!()]
//! Entities, geometry and I/O for loading a single rigid container (or ULD) with box-shaped cargo.

/// Entities to model the single-container loading problem
pub mod entities;

/// Geometric primitives and the rotation generator
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
