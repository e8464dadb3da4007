use nalgebra::{Point3, Vector3};

/// A single particle entry from the `Atoms` section of a data file.
///
/// The layout follows the LAMMPS `full` atom style: identity, molecule tag,
/// type, partial charge, Cartesian position and the periodic image flags.
/// Only `id` is touched by renumbering; every other field is carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The atom ID; unique within a well-formed file.
    pub id: u32,
    /// The molecule this atom belongs to.
    pub molecule_id: u32,
    /// The numeric atom type.
    pub atom_type: u32,
    /// The partial charge in elementary charge units.
    pub charge: f64,
    /// The Cartesian coordinates of the atom.
    pub position: Point3<f64>,
    /// Periodic image flags `(m, n, k)`.
    pub image: [i32; 3],
}

impl AtomRecord {
    pub fn new(id: u32, molecule_id: u32, atom_type: u32, charge: f64, position: Point3<f64>) -> Self {
        Self {
            id,
            molecule_id,
            atom_type,
            charge,
            position,
            image: [0; 3],
        }
    }

    pub fn with_image(mut self, image: [i32; 3]) -> Self {
        self.image = image;
        self
    }
}

/// A velocity entry, keyed by the atom it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityRecord {
    /// Foreign key into [`AtomRecord::id`].
    pub atom_id: u32,
    pub velocity: Vector3<f64>,
}

impl VelocityRecord {
    pub fn new(atom_id: u32, velocity: Vector3<f64>) -> Self {
        Self { atom_id, velocity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_zero_image_flags() {
        let atom = AtomRecord::new(7, 1, 2, -0.5, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.id, 7);
        assert_eq!(atom.molecule_id, 1);
        assert_eq!(atom.atom_type, 2);
        assert_eq!(atom.charge, -0.5);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.image, [0, 0, 0]);
    }

    #[test]
    fn with_image_overrides_flags() {
        let atom = AtomRecord::new(1, 1, 1, 0.0, Point3::origin()).with_image([1, -1, 0]);
        assert_eq!(atom.image, [1, -1, 0]);
    }

    #[test]
    fn velocity_record_equality_and_clone_works() {
        let v1 = VelocityRecord::new(3, Vector3::new(0.1, -0.2, 0.3));
        let v2 = v1.clone();
        assert_eq!(v1, v2);
        assert_eq!(v2.atom_id, 3);
    }
}
