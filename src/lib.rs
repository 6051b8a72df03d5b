//! Enumerates the geometrically distinct ligand arrangements of an octahedral
//! coordination complex and builds a 3-D structure for each one.
//!
//! Given six ligand names (repeats allowed) and a central-atom label, the
//! crate finds every assignment of ligands to the six octahedral sites that is
//! not related to another by a symmetry operation of the octahedron, places
//! each ligand's stored geometry on its site, and hands back complete
//! structures ready to be written as XYZ files.
//!
//! # Features
//!
//! - **Isomer enumeration** — Distinct orderings of the ligand multiset are
//!   reduced under all 48 operations of the point group `Oh`
//! - **Rigid placement** — Ligands stored in a local frame (donor atom at the
//!   origin, pointing along +z) are rotated and translated onto each site
//! - **Ligand libraries** — Named geometries in TOML, with a built-in set of
//!   common monodentate ligands
//! - **XYZ I/O** — Write assembled complexes, read fragments for import
//!
//! # Quick Start
//!
//! ```
//! use octa_forge::{BuildConfig, LigandLibrary, build_complexes, enumerate_distinct_arrangements};
//!
//! // Six different ligands: 15 stereoisomers
//! let arrangements = enumerate_distinct_arrangements(&["A", "B", "C", "D", "E", "F"])?;
//! assert_eq!(arrangements.len(), 15);
//!
//! // [Co(NH3)3Cl3]: fac and mer
//! let complexes = build_complexes(
//!     LigandLibrary::builtin(),
//!     "Co",
//!     &["Ammonia", "Ammonia", "Ammonia", "Chloride", "Chloride", "Chloride"],
//!     &BuildConfig::default(),
//! )?;
//! assert_eq!(complexes.len(), 2);
//!
//! // Central atom + 3 × NH3 + 3 × Cl
//! assert_eq!(complexes[0].atom_count(), 1 + 3 * 4 + 3);
//!
//! let mut xyz = Vec::new();
//! octa_forge::io::write_complex(&mut xyz, &complexes[0])?;
//! assert!(String::from_utf8(xyz)?.starts_with("16\nOctahedral complex Co:"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`geometry`] — Rotations, ligand placement and ligand alignment
//! - [`library`] — Ligand libraries and the [`LigandStore`] trait
//! - [`io`] — XYZ reading and writing
//!
//! # Data Types
//!
//! - [`Atom`] — Labelled atom with Cartesian coordinates
//! - [`LigandGeometry`] — Ligand in its local frame
//! - [`Site`] — One of the six coordination sites
//! - [`SiteAssignment`] — Ligand names bound to the six sites
//! - [`ComplexStructure`] — Placed central atom and ligands
//! - [`SymmetryOperation`] — One of the 48 operations of `Oh`, acting on sites

mod build;
mod model;

pub mod geometry;
pub mod io;
pub mod library;

pub use model::assignment::SiteAssignment;
pub use model::atom::Atom;
pub use model::complex::{ComplexStructure, PlacedLigand};
pub use model::ligand::{LigandGeometry, ORIGIN_TOLERANCE};
pub use model::site::{DEFAULT_BOND_LENGTH, Site};

pub use build::{
    BuildConfig, DedupStrategy, ErrorKind, OCTAHEDRAL_GROUP, OperationClass, SymmetryOperation,
    are_equivalent, assemble_complex, build_complexes, canonical_image,
    enumerate_arrangements_with, enumerate_distinct_arrangements, find_operation,
};

pub use library::{LigandLibrary, LigandStore};

pub use build::Error as BuildError;
pub use geometry::Error as GeometryError;
pub use io::Error as IoError;
pub use library::Error as LibraryError;
