use serde::Deserialize;
use std::fmt;

/// How velocity entries receive their new atom IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VelocityPolicy {
    /// Sort velocities by their own atom ID and number them `1..=M`,
    /// without consulting the atom mapping.
    ///
    /// This reproduces the output of the established renumbering tool. It is
    /// only correct when the velocity list covers exactly the same atoms as
    /// the `Atoms` section.
    #[default]
    Independent,
    /// Rewrite each velocity's atom ID through the same old-to-new table
    /// used for bonds and angles, so every velocity stays attached to its
    /// atom. IDs with no matching atom become 0.
    FollowAtoms,
}

impl fmt::Display for VelocityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VelocityPolicy::Independent => write!(f, "independent"),
            VelocityPolicy::FollowAtoms => write!(f, "follow-atoms"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenumberConfig {
    pub velocity_policy: VelocityPolicy,
}

impl RenumberConfig {
    pub fn new(velocity_policy: VelocityPolicy) -> Self {
        Self { velocity_policy }
    }
}
