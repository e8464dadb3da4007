//! Positional field tables for the four record types.
//!
//! Each record type declares its columns once in [`Record::SCHEMA`]. Both the
//! line parser and the serializer walk that table, so the token count, the
//! per-column conversion and the output layout cannot drift apart.

use super::format::format_general;
use super::tokens::coerce_token;
use crate::core::models::atom::{AtomRecord, VelocityRecord};
use crate::core::models::section::SectionKind;
use crate::core::models::topology::{AngleRecord, BondRecord};
use nalgebra::{Point3, Vector3};
use std::fmt;

/// The value type of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Unsigned,
    Signed,
    Float,
}

/// A named column in a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

/// A single converted column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Unsigned(u32),
    Signed(i32),
    Float(f64),
}

impl Field {
    /// Converts a token according to `kind`, zero-filling on failure.
    pub fn coerce(kind: FieldKind, token: &str) -> Self {
        match kind {
            FieldKind::Unsigned => Field::Unsigned(coerce_token(token)),
            FieldKind::Signed => Field::Signed(coerce_token(token)),
            FieldKind::Float => Field::Float(coerce_token(token)),
        }
    }

    pub fn unsigned(self) -> u32 {
        match self {
            Field::Unsigned(v) => v,
            _ => 0,
        }
    }

    pub fn signed(self) -> i32 {
        match self {
            Field::Signed(v) => v,
            _ => 0,
        }
    }

    pub fn float(self) -> f64 {
        match self {
            Field::Float(v) => v,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Unsigned(v) => write!(f, "{}", v),
            Field::Signed(v) => write!(f, "{}", v),
            Field::Float(v) => f.write_str(&format_general(*v)),
        }
    }
}

/// A record type that occupies one line of a data-file section.
pub trait Record: Sized {
    /// The section this record type lives in.
    const SECTION: SectionKind;

    /// The columns of one line, in order.
    const SCHEMA: &'static [FieldSpec];

    /// Builds a record from converted values laid out as in [`Self::SCHEMA`].
    fn from_fields(fields: &[Field]) -> Self;

    /// Returns the record's values laid out as in [`Self::SCHEMA`].
    fn to_fields(&self) -> Vec<Field>;

    /// Parses one single-space separated line.
    ///
    /// Returns `None` when the token count differs from the schema length;
    /// individual tokens that fail to convert are zero-filled.
    fn parse_line(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != Self::SCHEMA.len() {
            return None;
        }
        let fields: Vec<Field> = Self::SCHEMA
            .iter()
            .zip(tokens)
            .map(|(spec, token)| Field::coerce(spec.kind, token))
            .collect();
        Some(Self::from_fields(&fields))
    }

    /// Renders the record as one line without a trailing newline.
    fn render_line(&self) -> String {
        self.to_fields()
            .iter()
            .map(Field::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Record for AtomRecord {
    const SECTION: SectionKind = SectionKind::Atoms;
    const SCHEMA: &'static [FieldSpec] = &[
        field("id", FieldKind::Unsigned),
        field("molecule-id", FieldKind::Unsigned),
        field("atom-type", FieldKind::Unsigned),
        field("charge", FieldKind::Float),
        field("x", FieldKind::Float),
        field("y", FieldKind::Float),
        field("z", FieldKind::Float),
        field("m", FieldKind::Signed),
        field("n", FieldKind::Signed),
        field("k", FieldKind::Signed),
    ];

    fn from_fields(f: &[Field]) -> Self {
        AtomRecord {
            id: f[0].unsigned(),
            molecule_id: f[1].unsigned(),
            atom_type: f[2].unsigned(),
            charge: f[3].float(),
            position: Point3::new(f[4].float(), f[5].float(), f[6].float()),
            image: [f[7].signed(), f[8].signed(), f[9].signed()],
        }
    }

    fn to_fields(&self) -> Vec<Field> {
        vec![
            Field::Unsigned(self.id),
            Field::Unsigned(self.molecule_id),
            Field::Unsigned(self.atom_type),
            Field::Float(self.charge),
            Field::Float(self.position.x),
            Field::Float(self.position.y),
            Field::Float(self.position.z),
            Field::Signed(self.image[0]),
            Field::Signed(self.image[1]),
            Field::Signed(self.image[2]),
        ]
    }
}

impl Record for VelocityRecord {
    const SECTION: SectionKind = SectionKind::Velocities;
    const SCHEMA: &'static [FieldSpec] = &[
        field("atom-id", FieldKind::Unsigned),
        field("vx", FieldKind::Float),
        field("vy", FieldKind::Float),
        field("vz", FieldKind::Float),
    ];

    fn from_fields(f: &[Field]) -> Self {
        VelocityRecord {
            atom_id: f[0].unsigned(),
            velocity: Vector3::new(f[1].float(), f[2].float(), f[3].float()),
        }
    }

    fn to_fields(&self) -> Vec<Field> {
        vec![
            Field::Unsigned(self.atom_id),
            Field::Float(self.velocity.x),
            Field::Float(self.velocity.y),
            Field::Float(self.velocity.z),
        ]
    }
}

impl Record for BondRecord {
    const SECTION: SectionKind = SectionKind::Bonds;
    const SCHEMA: &'static [FieldSpec] = &[
        field("id", FieldKind::Unsigned),
        field("bond-type", FieldKind::Unsigned),
        field("atom1", FieldKind::Unsigned),
        field("atom2", FieldKind::Unsigned),
    ];

    fn from_fields(f: &[Field]) -> Self {
        BondRecord::new(f[0].unsigned(), f[1].unsigned(), f[2].unsigned(), f[3].unsigned())
    }

    fn to_fields(&self) -> Vec<Field> {
        let [a1, a2] = self.atom_ids;
        vec![
            Field::Unsigned(self.id),
            Field::Unsigned(self.bond_type),
            Field::Unsigned(a1),
            Field::Unsigned(a2),
        ]
    }
}

impl Record for AngleRecord {
    const SECTION: SectionKind = SectionKind::Angles;
    const SCHEMA: &'static [FieldSpec] = &[
        field("id", FieldKind::Unsigned),
        field("angle-type", FieldKind::Unsigned),
        field("atom1", FieldKind::Unsigned),
        field("atom2", FieldKind::Unsigned),
        field("atom3", FieldKind::Unsigned),
    ];

    fn from_fields(f: &[Field]) -> Self {
        AngleRecord::new(
            f[0].unsigned(),
            f[1].unsigned(),
            f[2].unsigned(),
            f[3].unsigned(),
            f[4].unsigned(),
        )
    }

    fn to_fields(&self) -> Vec<Field> {
        let [a1, a2, a3] = self.atom_ids;
        vec![
            Field::Unsigned(self.id),
            Field::Unsigned(self.angle_type),
            Field::Unsigned(a1),
            Field::Unsigned(a2),
            Field::Unsigned(a3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lengths_match_section_layouts() {
        assert_eq!(AtomRecord::SCHEMA.len(), 10);
        assert_eq!(VelocityRecord::SCHEMA.len(), 4);
        assert_eq!(BondRecord::SCHEMA.len(), 4);
        assert_eq!(AngleRecord::SCHEMA.len(), 5);
    }

    #[test]
    fn to_fields_follows_schema_kinds() {
        let atom = AtomRecord::new(1, 2, 3, 0.5, Point3::new(1.0, 2.0, 3.0)).with_image([0, 1, -1]);
        let fields = atom.to_fields();
        assert_eq!(fields.len(), AtomRecord::SCHEMA.len());
        for (field, spec) in fields.iter().zip(AtomRecord::SCHEMA) {
            let kind = match field {
                Field::Unsigned(_) => FieldKind::Unsigned,
                Field::Signed(_) => FieldKind::Signed,
                Field::Float(_) => FieldKind::Float,
            };
            assert_eq!(kind, spec.kind, "column {}", spec.name);
        }
    }

    #[test]
    fn parses_full_style_atom_line() {
        let atom = AtomRecord::parse_line("5 1 2 -0.8476 1.5 -2.25 3 0 1 -1").unwrap();
        assert_eq!(atom.id, 5);
        assert_eq!(atom.molecule_id, 1);
        assert_eq!(atom.atom_type, 2);
        assert_eq!(atom.charge, -0.8476);
        assert_eq!(atom.position, Point3::new(1.5, -2.25, 3.0));
        assert_eq!(atom.image, [0, 1, -1]);
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        assert!(VelocityRecord::parse_line("1 0.1 0.2").is_none());
        assert!(BondRecord::parse_line("1 1 2 3 4").is_none());
        assert!(AngleRecord::parse_line("").is_none());
    }

    #[test]
    fn repeated_spaces_change_token_count() {
        assert!(BondRecord::parse_line("1 1  2 3").is_none());
        assert!(BondRecord::parse_line("1\t1 2 3").is_none());
    }

    #[test]
    fn unparsable_tokens_are_zero_filled() {
        let velocity = VelocityRecord::parse_line("x 1.0 bad 3.0").unwrap();
        assert_eq!(velocity.atom_id, 0);
        assert_eq!(velocity.velocity, Vector3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn render_line_joins_fields_with_single_spaces() {
        let angle = AngleRecord::new(3, 1, 7, 8, 9);
        assert_eq!(angle.render_line(), "3 1 7 8 9");

        let velocity = VelocityRecord::new(2, Vector3::new(0.5, -1e-6, 1e6));
        assert_eq!(velocity.render_line(), "2 0.5 -1e-06 1e+06");
    }

    #[test]
    fn field_accessors_default_on_kind_mismatch() {
        assert_eq!(Field::Float(1.5).unsigned(), 0);
        assert_eq!(Field::Unsigned(3).signed(), 0);
        assert_eq!(Field::Signed(-2).float(), 0.0);
    }
}
