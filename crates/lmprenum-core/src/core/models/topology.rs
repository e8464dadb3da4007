/// A two-body connectivity entry from the `Bonds` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BondRecord {
    pub id: u32,
    pub bond_type: u32,
    /// The bonded atom IDs, in file order.
    pub atom_ids: [u32; 2],
}

impl BondRecord {
    pub fn new(id: u32, bond_type: u32, atom1: u32, atom2: u32) -> Self {
        Self {
            id,
            bond_type,
            atom_ids: [atom1, atom2],
        }
    }
}

/// A three-body connectivity entry from the `Angles` section.
///
/// `atom_ids[1]` is the vertex atom by LAMMPS convention; the order is kept
/// exactly as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AngleRecord {
    pub id: u32,
    pub angle_type: u32,
    pub atom_ids: [u32; 3],
}

impl AngleRecord {
    pub fn new(id: u32, angle_type: u32, atom1: u32, atom2: u32, atom3: u32) -> Self {
        Self {
            id,
            angle_type,
            atom_ids: [atom1, atom2, atom3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_new_initializes_fields_correctly() {
        let bond = BondRecord::new(4, 2, 10, 11);
        assert_eq!(bond.id, 4);
        assert_eq!(bond.bond_type, 2);
        assert_eq!(bond.atom_ids, [10, 11]);
    }

    #[test]
    fn angle_new_keeps_endpoint_order() {
        let angle = AngleRecord::new(1, 3, 9, 5, 2);
        assert_eq!(angle.atom_ids, [9, 5, 2]);
        assert_eq!(angle.angle_type, 3);
    }
}
