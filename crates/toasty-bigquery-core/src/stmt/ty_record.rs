use super::Type;

/// An explicit description of a host record.
///
/// Records stand in for host classes: the registry consults the member list
/// to build struct mappings, and the literal generator uses member names to
/// pull field values out of a [`ValueRecord`](super::ValueRecord).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRecord {
    pub name: String,

    /// Declared composite (owned) records are mapped to `STRUCT` columns
    /// even when no store type is supplied.
    pub composite: bool,

    pub members: Vec<RecordMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordMember {
    pub name: String,
    pub ty: Type,
    pub readable: bool,
    pub writable: bool,
}

impl TypeRecord {
    pub fn new(name: impl Into<String>) -> TypeRecord {
        TypeRecord {
            name: name.into(),
            composite: false,
            members: vec![],
        }
    }

    /// Marks the record as a declared composite.
    pub fn composite(mut self) -> TypeRecord {
        self.composite = true;
        self
    }

    /// Adds a readable and writable member.
    pub fn member(mut self, name: impl Into<String>, ty: impl Into<Type>) -> TypeRecord {
        self.members.push(RecordMember {
            name: name.into(),
            ty: ty.into(),
            readable: true,
            writable: true,
        });
        self
    }

    /// Adds a member that can be read but not assigned.
    pub fn read_only_member(mut self, name: impl Into<String>, ty: impl Into<Type>) -> TypeRecord {
        self.members.push(RecordMember {
            name: name.into(),
            ty: ty.into(),
            readable: true,
            writable: false,
        });
        self
    }

    /// Finds a member by name, ignoring ASCII case.
    ///
    /// An exact match wins. Otherwise the first case-insensitive match in
    /// declaration order is returned; if more than one member matches, the
    /// ambiguity is logged.
    pub fn find_member(&self, name: &str) -> Option<&RecordMember> {
        if let Some(member) = self.members.iter().find(|member| member.name == name) {
            return Some(member);
        }

        let mut matches = self
            .members
            .iter()
            .filter(|member| member.name.eq_ignore_ascii_case(name));

        let first = matches.next()?;

        if let Some(other) = matches.next() {
            tracing::warn!(
                record = %self.name,
                field = name,
                chosen = %first.name,
                ignored = %other.name,
                "ambiguous case-insensitive member match"
            );
        }

        Some(first)
    }

    /// Members that can be both read and written.
    pub fn mapped_members(&self) -> impl Iterator<Item = &RecordMember> {
        self.members
            .iter()
            .filter(|member| member.readable && member.writable)
    }
}
