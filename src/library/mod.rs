//! Named ligand geometries, stored as TOML.
//!
//! A library file is a list of `[[ligand]]` tables, each with a `name` and an
//! `atoms` array of `{ label, position }` records given in the ligand's local
//! frame (see [`LigandGeometry`]). A default library with common monodentate
//! ligands is compiled into the crate and available through
//! [`LigandLibrary::builtin`].

mod error;

pub use error::Error;

use crate::model::atom::Atom;
use crate::model::ligand::LigandGeometry;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_LIBRARY_TOML: &str = include_str!("../../resources/default.ligands.toml");

static BUILTIN_LIBRARY: OnceLock<LigandLibrary> = OnceLock::new();

/// Source of ligand geometries for complex assembly.
pub trait LigandStore {
    /// Returns the stored geometry for `name`, or [`Error::NotFound`].
    fn fetch_ligand_geometry(&self, name: &str) -> Result<LigandGeometry, Error>;

    fn store_ligand_geometry(
        &mut self,
        name: &str,
        geometry: LigandGeometry,
    ) -> Result<(), Error>;
}

/// An in-memory ligand library, ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LigandLibrary {
    ligands: BTreeMap<String, LigandGeometry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default, rename = "ligand")]
    ligands: Vec<LigandRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LigandRecord {
    name: String,
    atoms: Vec<AtomRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AtomRecord {
    label: String,
    position: [f64; 3],
}

impl LigandLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The library compiled into the crate.
    pub fn builtin() -> &'static LigandLibrary {
        BUILTIN_LIBRARY.get_or_init(|| {
            Self::from_toml_str(DEFAULT_LIBRARY_TOML)
                .expect("Failed to parse embedded ligand library. This is a library bug.")
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let file: LibraryFile = toml::from_str(text)?;
        let mut library = Self::new();
        for record in file.ligands {
            let atoms = record
                .atoms
                .into_iter()
                .map(|a| Atom::new(a.label, a.position))
                .collect::<Vec<_>>();
            library.insert(record.name, LigandGeometry::new(atoms))?;
        }
        Ok(library)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        let file = LibraryFile {
            ligands: self
                .ligands
                .iter()
                .map(|(name, geometry)| LigandRecord {
                    name: name.clone(),
                    atoms: geometry
                        .atoms
                        .iter()
                        .map(|a| AtomRecord {
                            label: a.label.clone(),
                            position: a.position,
                        })
                        .collect(),
                })
                .collect(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let library = Self::from_toml_str(&text)?;
        debug!("Loaded {} ligands from {}", library.len(), path.display());
        Ok(library)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|e| Error::io(path, e))?;
        debug!("Saved {} ligands to {}", self.len(), path.display());
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ligands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LigandGeometry)> {
        self.ligands.iter().map(|(name, g)| (name.as_str(), g))
    }

    pub fn get(&self, name: &str) -> Option<&LigandGeometry> {
        self.ligands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ligands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ligands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ligands.is_empty()
    }

    /// Adds a new ligand; fails with [`Error::Duplicate`] if the name is taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        geometry: LigandGeometry,
    ) -> Result<(), Error> {
        let name = validated_name(name.into())?;
        if self.ligands.contains_key(&name) {
            return Err(Error::Duplicate(name));
        }
        self.ligands.insert(name, geometry);
        Ok(())
    }

    /// Adds or overwrites a ligand, returning the previous geometry if any.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        geometry: LigandGeometry,
    ) -> Result<Option<LigandGeometry>, Error> {
        let name = validated_name(name.into())?;
        Ok(self.ligands.insert(name, geometry))
    }

    pub fn remove(&mut self, name: &str) -> Result<LigandGeometry, Error> {
        self.ligands
            .remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

fn validated_name(name: String) -> Result<String, Error> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(if trimmed.len() == name.len() {
        name
    } else {
        trimmed.to_string()
    })
}

impl LigandStore for LigandLibrary {
    fn fetch_ligand_geometry(&self, name: &str) -> Result<LigandGeometry, Error> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn store_ligand_geometry(
        &mut self,
        name: &str,
        geometry: LigandGeometry,
    ) -> Result<(), Error> {
        self.insert(name, geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{self, LIGAND_AXIS};

    fn carbonyl() -> LigandGeometry {
        LigandGeometry::new(vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("O", [0.0, 0.0, 1.13]),
        ])
    }

    #[test]
    fn builtin_library_has_common_ligands() {
        let lib = LigandLibrary::builtin();
        assert_eq!(lib.len(), 10);
        for name in ["Chloride", "Water", "Ammonia", "Carbonyl", "Cyanide"] {
            assert!(lib.contains(name), "{name}");
        }
        assert_eq!(lib.get("Water").map(|g| g.atom_count()), Some(3));
        assert_eq!(lib.names().next(), Some("Ammonia"));
    }

    #[test]
    fn builtin_ligands_are_in_canonical_frame() {
        for (name, ligand) in LigandLibrary::builtin().iter() {
            assert_eq!(ligand.anchor_index(), Some(0), "{name}");
            let aligned = geometry::align_ligand(&ligand.atoms, 0).unwrap();
            for (a, b) in aligned.atoms.iter().zip(&ligand.atoms) {
                for k in 0..3 {
                    assert!((a.position[k] - b.position[k]).abs() < 1e-3, "{name}");
                }
            }
            assert!(geometry::place_ligand(ligand, &LIGAND_AXIS.into()).is_ok(), "{name}");
        }
    }

    #[test]
    fn parses_library_text() {
        let text = r#"
            [[ligand]]
            name = "Carbonyl"
            atoms = [
                { label = "C", position = [0.0, 0.0, 0.0] },
                { label = "O", position = [0.0, 0.0, 1.13] },
            ]
        "#;
        let lib = LigandLibrary::from_toml_str(text).unwrap();
        assert_eq!(lib.get("Carbonyl"), Some(&carbonyl()));
        assert!(LigandLibrary::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_and_duplicate_entries() {
        assert!(matches!(
            LigandLibrary::from_toml_str("[[ligand]]\nname = 3"),
            Err(Error::Parse(_))
        ));

        let text = r#"
            [[ligand]]
            name = "X"
            atoms = [{ label = "X", position = [0.0, 0.0, 0.0] }]
            [[ligand]]
            name = "X"
            atoms = []
        "#;
        assert!(matches!(
            LigandLibrary::from_toml_str(text),
            Err(Error::Duplicate(name)) if name == "X"
        ));
    }

    #[test]
    fn insert_replace_and_remove() {
        let mut lib = LigandLibrary::new();
        lib.insert("Carbonyl", carbonyl()).unwrap();
        assert!(matches!(
            lib.insert("Carbonyl", carbonyl()),
            Err(Error::Duplicate(_))
        ));
        assert!(matches!(lib.insert("  ", carbonyl()), Err(Error::EmptyName)));

        let previous = lib.replace("Carbonyl", LigandGeometry::default()).unwrap();
        assert_eq!(previous, Some(carbonyl()));

        assert_eq!(lib.remove("Carbonyl").unwrap(), LigandGeometry::default());
        assert!(matches!(lib.remove("Carbonyl"), Err(Error::NotFound(_))));
        assert!(lib.is_empty());
    }

    #[test]
    fn store_trait_round_trip() {
        let mut lib = LigandLibrary::new();
        lib.store_ligand_geometry("CO", carbonyl()).unwrap();
        assert_eq!(lib.fetch_ligand_geometry("CO").unwrap(), carbonyl());
        assert!(matches!(
            lib.fetch_ligand_geometry("NO"),
            Err(Error::NotFound(name)) if name == "NO"
        ));
    }

    #[test]
    fn save_and_load_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ligands.toml");

        LigandLibrary::builtin().save(&path).unwrap();
        let loaded = LigandLibrary::load(&path).unwrap();
        assert_eq!(&loaded, LigandLibrary::builtin());

        let missing = LigandLibrary::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}
