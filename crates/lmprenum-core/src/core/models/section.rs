use std::fmt;

/// The four data-file sections handled by the reader, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Atoms,
    Velocities,
    Bonds,
    Angles,
}

impl SectionKind {
    /// The keyword that marks the start of this section in a data file.
    pub fn keyword(self) -> &'static str {
        match self {
            SectionKind::Atoms => "Atoms",
            SectionKind::Velocities => "Velocities",
            SectionKind::Bonds => "Bonds",
            SectionKind::Angles => "Angles",
        }
    }

    /// The header line written for this section.
    ///
    /// Atoms carries the `full` atom-style hint expected by LAMMPS.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Atoms => "Atoms # full",
            other => other.keyword(),
        }
    }

    /// The section that follows this one, if any.
    pub fn next(self) -> Option<SectionKind> {
        match self {
            SectionKind::Atoms => Some(SectionKind::Velocities),
            SectionKind::Velocities => Some(SectionKind::Bonds),
            SectionKind::Bonds => Some(SectionKind::Angles),
            SectionKind::Angles => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An ordered run of records plus the free-text note found inside it.
///
/// The note is the raw bytes of the line carrying a `#` marker, without its
/// line ending; when several such lines appear only the last is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<R> {
    pub note: Vec<u8>,
    pub records: Vec<R>,
}

impl<R> Section<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for Section<R> {
    fn default() -> Self {
        Self {
            note: Vec::new(),
            records: Vec::new(),
        }
    }
}

impl<R> From<Vec<R>> for Section<R> {
    fn from(records: Vec<R>) -> Self {
        Self {
            note: Vec::new(),
            records,
        }
    }
}
