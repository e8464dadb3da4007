use super::config::{RenumberConfig, VelocityPolicy};
use super::mapping::IdMap;
use crate::core::models::atom::{AtomRecord, VelocityRecord};
use crate::core::models::document::Document;
use crate::core::models::topology::{AngleRecord, BondRecord};
use tracing::{debug, instrument};

/// Counts gathered while renumbering a document.
///
/// Dangling references are endpoints that named an atom ID absent from the
/// `Atoms` section; they were rewritten to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenumberReport {
    pub atoms: usize,
    pub velocities: usize,
    pub bonds: usize,
    pub angles: usize,
    pub dangling_references: usize,
    /// Velocities whose atom ID had no match; only counted under
    /// [`VelocityPolicy::FollowAtoms`].
    pub dangling_velocities: usize,
}

/// Renumbers `document` in place.
///
/// Atoms are sorted by ID and numbered `1..=N`; bond and angle endpoints are
/// rewritten through the resulting [`IdMap`]. Velocities are handled
/// according to `config.velocity_policy`.
#[instrument(skip_all, name = "renumber")]
pub fn renumber(document: &mut Document, config: &RenumberConfig) -> RenumberReport {
    let id_map = renumber_atoms(&mut document.atoms.records);

    let dangling_velocities = match config.velocity_policy {
        VelocityPolicy::Independent => {
            renumber_velocities(&mut document.velocities.records);
            0
        }
        VelocityPolicy::FollowAtoms => remap_velocities(&mut document.velocities.records, &id_map),
    };

    let dangling_references = remap_bonds(&mut document.bonds.records, &id_map)
        + remap_angles(&mut document.angles.records, &id_map);

    let report = RenumberReport {
        atoms: document.atoms.len(),
        velocities: document.velocities.len(),
        bonds: document.bonds.len(),
        angles: document.angles.len(),
        dangling_references,
        dangling_velocities,
    };

    if report.dangling_references > 0 || report.dangling_velocities > 0 {
        debug!(
            references = report.dangling_references,
            velocities = report.dangling_velocities,
            "Some atom references had no matching atom and were set to 0."
        );
    }
    debug!(?report, policy = %config.velocity_policy, "Renumbering finished.");
    report
}

/// Sorts atoms by ID and assigns `1..=N`, returning the old-to-new table.
///
/// The sort is stable, so atoms sharing an ID keep their file order; the
/// table then points such an ID at the last of them.
pub fn renumber_atoms(atoms: &mut [AtomRecord]) -> IdMap {
    atoms.sort_by_key(|atom| atom.id);
    let mut id_map = IdMap::with_capacity(atoms.len());
    for (new_id, atom) in (1u32..).zip(atoms.iter_mut()) {
        id_map.insert(atom.id, new_id);
        atom.id = new_id;
    }
    id_map
}

/// Sorts velocities by atom ID and assigns `1..=M` by position alone.
pub fn renumber_velocities(velocities: &mut [VelocityRecord]) {
    velocities.sort_by_key(|velocity| velocity.atom_id);
    for (new_id, velocity) in (1u32..).zip(velocities.iter_mut()) {
        velocity.atom_id = new_id;
    }
}

/// Sorts velocities by atom ID and rewrites each through `id_map`.
///
/// Returns the number of velocities whose atom was not found.
pub fn remap_velocities(velocities: &mut [VelocityRecord], id_map: &IdMap) -> usize {
    velocities.sort_by_key(|velocity| velocity.atom_id);
    remap_endpoints(velocities.iter_mut().map(|v| &mut v.atom_id), id_map)
}

/// Rewrites both endpoints of every bond. Returns the dangling endpoint count.
pub fn remap_bonds(bonds: &mut [BondRecord], id_map: &IdMap) -> usize {
    remap_endpoints(bonds.iter_mut().flat_map(|b| b.atom_ids.iter_mut()), id_map)
}

/// Rewrites all three endpoints of every angle. Returns the dangling endpoint count.
pub fn remap_angles(angles: &mut [AngleRecord], id_map: &IdMap) -> usize {
    remap_endpoints(angles.iter_mut().flat_map(|a| a.atom_ids.iter_mut()), id_map)
}

fn remap_endpoints<'a>(ids: impl Iterator<Item = &'a mut u32>, id_map: &IdMap) -> usize {
    let mut dangling = 0;
    for id in ids {
        match id_map.get(*id) {
            Some(new_id) => *id = new_id,
            None => {
                debug!(atom_id = *id, "Reference to unknown atom mapped to 0.");
                *id = 0;
                dangling += 1;
            }
        }
    }
    dangling
}
