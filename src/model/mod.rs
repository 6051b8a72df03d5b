//! Core data structures for octahedral complex enumeration.
//!
//! - [`atom`] – Labelled atom with Cartesian coordinates.
//! - [`ligand`] – Ligand geometry in its local frame (anchor at the origin, extending along +z).
//! - [`site`] – The six octahedral coordination sites.
//! - [`assignment`] – Ligand-to-site assignments, the objects being enumerated.
//! - [`complex`] – Fully placed complexes ready for serialization.
//!
//! Ligand geometries are read-only inputs. Assignments are created and dropped
//! freely during enumeration, and each kept assignment becomes exactly one
//! [`ComplexStructure`](complex::ComplexStructure).

pub mod assignment;
pub mod atom;
pub mod complex;
pub mod ligand;
pub mod site;
