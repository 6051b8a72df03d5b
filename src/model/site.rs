use nalgebra::Vector3;
use std::fmt;

/// Metal–ligand distance used when no other bond length is configured.
pub const DEFAULT_BOND_LENGTH: f64 = 2.0;

/// One of the six coordination sites of an octahedron.
///
/// The discriminants are the site indices used by
/// [`SiteAssignment`](super::assignment::SiteAssignment) and by the symmetry
/// operation table, so their order is part of the data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Site {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Site {
    pub const COUNT: usize = 6;

    pub const ALL: [Site; Site::COUNT] = [
        Site::PosX,
        Site::NegX,
        Site::PosY,
        Site::NegY,
        Site::PosZ,
        Site::NegZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Unit vector from the central atom towards this site.
    pub fn direction(self) -> Vector3<f64> {
        match self {
            Site::PosX => Vector3::x(),
            Site::NegX => -Vector3::x(),
            Site::PosY => Vector3::y(),
            Site::NegY => -Vector3::y(),
            Site::PosZ => Vector3::z(),
            Site::NegZ => -Vector3::z(),
        }
    }

    /// Coordination vector for this site at the given metal–ligand distance.
    pub fn vector(self, bond_length: f64) -> Vector3<f64> {
        self.direction() * bond_length
    }

    pub fn opposite(self) -> Self {
        match self {
            Site::PosX => Site::NegX,
            Site::NegX => Site::PosX,
            Site::PosY => Site::NegY,
            Site::NegY => Site::PosY,
            Site::PosZ => Site::NegZ,
            Site::NegZ => Site::PosZ,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Site::PosX => "+x",
            Site::NegX => "-x",
            Site::PosY => "+y",
            Site::NegY => "-y",
            Site::PosZ => "+z",
            Site::NegZ => "-z",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
