use nalgebra::Vector3;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub label: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(label: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }

    /// Position as a column vector, for use with the rotation routines.
    #[inline]
    pub fn coords(&self) -> Vector3<f64> {
        Vector3::from(self.position)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
    }
}
