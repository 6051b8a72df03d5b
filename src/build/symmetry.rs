//! The 48 operations of the octahedral point group `Oh`, acting on site indices.
//!
//! Each operation is stored as a site map: applying it to an assignment `a`
//! gives `b[k] = a[map[k]]`, i.e. the ligand sitting at site `map[k]` moves to
//! site `k`.

use crate::model::assignment::SiteAssignment;
use crate::model::site::Site;
use nalgebra::Matrix3;
use std::fmt;

/// Conjugacy class of an operation in `Oh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationClass {
    Identity,
    /// Quarter turn about a coordinate axis.
    C4,
    /// Half turn about a coordinate axis.
    C2,
    /// Third turn about a body diagonal.
    C3,
    /// Half turn about a face diagonal.
    C2Prime,
    Inversion,
    S4,
    /// Mirror plane perpendicular to a coordinate axis.
    SigmaH,
    S6,
    /// Mirror plane containing a coordinate axis and bisecting the other two.
    SigmaD,
}

impl OperationClass {
    /// Whether operations of this class are rotations (determinant +1).
    pub fn is_proper(self) -> bool {
        matches!(
            self,
            Self::Identity | Self::C4 | Self::C2 | Self::C3 | Self::C2Prime
        )
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Identity => "E",
            Self::C4 => "C4",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C2Prime => "C2'",
            Self::Inversion => "i",
            Self::S4 => "S4",
            Self::SigmaH => "σh",
            Self::S6 => "S6",
            Self::SigmaD => "σd",
        }
    }
}

impl fmt::Display for OperationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A symmetry operation of the octahedron, expressed on site indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymmetryOperation {
    class: OperationClass,
    map: [u8; Site::COUNT],
}

impl SymmetryOperation {
    const fn new(class: OperationClass, map: [u8; Site::COUNT]) -> Self {
        Self { class, map }
    }

    /// Builds an operation from a site map, or `None` if the map is not a
    /// permutation that keeps opposite sites opposite.
    pub fn from_map(map: [u8; Site::COUNT]) -> Option<Self> {
        let mut seen = [false; Site::COUNT];
        for &m in &map {
            let slot = seen.get_mut(m as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        if (0..Site::COUNT).any(|k| map[k ^ 1] != map[k] ^ 1) {
            return None;
        }
        Some(Self::new(classify(&map), map))
    }

    #[inline]
    pub fn map(&self) -> &[u8; Site::COUNT] {
        &self.map
    }

    #[inline]
    pub fn class(&self) -> OperationClass {
        self.class
    }

    #[inline]
    pub fn is_proper(&self) -> bool {
        self.class.is_proper()
    }

    /// Rearranges six per-site values: `out[k] = items[map[k]]`.
    pub fn apply<T: Clone>(&self, items: &[T; Site::COUNT]) -> [T; Site::COUNT] {
        std::array::from_fn(|k| items[self.map[k] as usize].clone())
    }

    /// The operation equivalent to applying `other` first and then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let map = std::array::from_fn(|k| other.map[self.map[k] as usize]);
        Self::new(classify(&map), map)
    }

    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; Site::COUNT];
        for (k, &m) in self.map.iter().enumerate() {
            inv[m as usize] = k as u8;
        }
        Self::new(self.class, inv)
    }

    /// The signed permutation matrix this operation realises on Cartesian
    /// space: it carries the direction of site `map[k]` onto that of site `k`.
    pub fn matrix(&self) -> Matrix3<i8> {
        signed_matrix(&self.map)
    }
}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.class, self.map)
    }
}

fn signed_matrix(map: &[u8; Site::COUNT]) -> Matrix3<i8> {
    let mut m = Matrix3::zeros();
    for (k, &source) in map.iter().enumerate() {
        if source % 2 == 0 {
            m[(k / 2, source as usize / 2)] = if k % 2 == 0 { 1 } else { -1 };
        }
    }
    m
}

fn classify(map: &[u8; Site::COUNT]) -> OperationClass {
    let m = signed_matrix(map);
    let trace = m.trace();
    let diagonal = (0..3).all(|i| m[(i, i)] != 0);
    let proper = m.map(f64::from).determinant() > 0.0;

    match (proper, trace) {
        (true, 3) => OperationClass::Identity,
        (true, 1) => OperationClass::C4,
        (true, 0) => OperationClass::C3,
        (true, _) if diagonal => OperationClass::C2,
        (true, _) => OperationClass::C2Prime,
        (false, -3) => OperationClass::Inversion,
        (false, -1) => OperationClass::S4,
        (false, 0) => OperationClass::S6,
        (false, _) if diagonal => OperationClass::SigmaH,
        (false, _) => OperationClass::SigmaD,
    }
}

use OperationClass::*;

/// The full octahedral group, proper rotations first.
pub const OCTAHEDRAL_GROUP: [SymmetryOperation; 48] = [
    SymmetryOperation::new(Identity, [0, 1, 2, 3, 4, 5]),
    // C4 about x, z, y
    SymmetryOperation::new(C4, [0, 1, 4, 5, 3, 2]),
    SymmetryOperation::new(C4, [0, 1, 5, 4, 2, 3]),
    SymmetryOperation::new(C4, [2, 3, 1, 0, 4, 5]),
    SymmetryOperation::new(C4, [3, 2, 0, 1, 4, 5]),
    SymmetryOperation::new(C4, [4, 5, 2, 3, 1, 0]),
    SymmetryOperation::new(C4, [5, 4, 2, 3, 0, 1]),
    // C2 about x, y, z
    SymmetryOperation::new(C2, [0, 1, 3, 2, 5, 4]),
    SymmetryOperation::new(C2, [1, 0, 2, 3, 5, 4]),
    SymmetryOperation::new(C2, [1, 0, 3, 2, 4, 5]),
    // C3 about the four body diagonals
    SymmetryOperation::new(C3, [2, 3, 4, 5, 0, 1]),
    SymmetryOperation::new(C3, [2, 3, 5, 4, 1, 0]),
    SymmetryOperation::new(C3, [3, 2, 4, 5, 1, 0]),
    SymmetryOperation::new(C3, [3, 2, 5, 4, 0, 1]),
    SymmetryOperation::new(C3, [4, 5, 0, 1, 2, 3]),
    SymmetryOperation::new(C3, [4, 5, 1, 0, 3, 2]),
    SymmetryOperation::new(C3, [5, 4, 0, 1, 3, 2]),
    SymmetryOperation::new(C3, [5, 4, 1, 0, 2, 3]),
    // C2' about y±z, x±y, x±z
    SymmetryOperation::new(C2Prime, [1, 0, 4, 5, 2, 3]),
    SymmetryOperation::new(C2Prime, [1, 0, 5, 4, 3, 2]),
    SymmetryOperation::new(C2Prime, [2, 3, 0, 1, 5, 4]),
    SymmetryOperation::new(C2Prime, [3, 2, 1, 0, 5, 4]),
    SymmetryOperation::new(C2Prime, [4, 5, 3, 2, 0, 1]),
    SymmetryOperation::new(C2Prime, [5, 4, 3, 2, 1, 0]),
    SymmetryOperation::new(Inversion, [1, 0, 3, 2, 5, 4]),
    // S4 about x, z, y
    SymmetryOperation::new(S4, [1, 0, 4, 5, 3, 2]),
    SymmetryOperation::new(S4, [1, 0, 5, 4, 2, 3]),
    SymmetryOperation::new(S4, [2, 3, 1, 0, 5, 4]),
    SymmetryOperation::new(S4, [3, 2, 0, 1, 5, 4]),
    SymmetryOperation::new(S4, [4, 5, 3, 2, 1, 0]),
    SymmetryOperation::new(S4, [5, 4, 3, 2, 0, 1]),
    // σh with normals z, y, x
    SymmetryOperation::new(SigmaH, [0, 1, 2, 3, 5, 4]),
    SymmetryOperation::new(SigmaH, [0, 1, 3, 2, 4, 5]),
    SymmetryOperation::new(SigmaH, [1, 0, 2, 3, 4, 5]),
    // S6 about the four body diagonals
    SymmetryOperation::new(S6, [2, 3, 4, 5, 1, 0]),
    SymmetryOperation::new(S6, [2, 3, 5, 4, 0, 1]),
    SymmetryOperation::new(S6, [3, 2, 4, 5, 0, 1]),
    SymmetryOperation::new(S6, [3, 2, 5, 4, 1, 0]),
    SymmetryOperation::new(S6, [4, 5, 0, 1, 3, 2]),
    SymmetryOperation::new(S6, [4, 5, 1, 0, 2, 3]),
    SymmetryOperation::new(S6, [5, 4, 0, 1, 2, 3]),
    SymmetryOperation::new(S6, [5, 4, 1, 0, 3, 2]),
    // σd with normals y∓z, x∓y, x∓z
    SymmetryOperation::new(SigmaD, [0, 1, 4, 5, 2, 3]),
    SymmetryOperation::new(SigmaD, [0, 1, 5, 4, 3, 2]),
    SymmetryOperation::new(SigmaD, [2, 3, 0, 1, 4, 5]),
    SymmetryOperation::new(SigmaD, [3, 2, 1, 0, 4, 5]),
    SymmetryOperation::new(SigmaD, [4, 5, 2, 3, 0, 1]),
    SymmetryOperation::new(SigmaD, [5, 4, 2, 3, 1, 0]),
];

/// Looks up the table entry with the given site map.
pub fn find_operation(map: &[u8; Site::COUNT]) -> Option<&'static SymmetryOperation> {
    OCTAHEDRAL_GROUP.iter().find(|op| op.map == *map)
}

/// The lexicographically smallest image of `items` under the whole group.
pub fn canonical_image<T: Ord + Clone>(items: &[T; Site::COUNT]) -> [T; Site::COUNT] {
    let mut best = items.clone();
    for op in &OCTAHEDRAL_GROUP[1..] {
        let image = op.apply(items);
        if image < best {
            best = image;
        }
    }
    best
}

/// Whether some operation carries `a` onto `b`.
pub fn are_equivalent<T: PartialEq + Clone>(a: &[T; Site::COUNT], b: &[T; Site::COUNT]) -> bool {
    OCTAHEDRAL_GROUP.iter().any(|op| op.apply(a) == *b)
}

impl SiteAssignment {
    /// The assignment obtained by moving every ligand with `op`.
    pub fn transformed(&self, op: &SymmetryOperation) -> Self {
        Self::new(op.apply(self.ligands()))
    }

    /// The lexicographically smallest member of this assignment's symmetry class.
    pub fn canonical(&self) -> Self {
        Self::new(canonical_image(self.ligands()))
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        are_equivalent(self.ligands(), other.ligands())
    }
}
