//! Transaction family descriptors.

use std::fmt;

/// Name, version and namespace of a ledger transaction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub namespace: &'static str,
}

/// Grid Pike: agents and organizations.
pub static PIKE: FamilyDescriptor = FamilyDescriptor {
    name: "pike",
    version: "0.1",
    namespace: "cad11d",
};

/// Grid Track-and-Trace: records, properties, proposals.
pub static TRACK_AND_TRACE: FamilyDescriptor = FamilyDescriptor {
    name: "grid_track_and_trace",
    version: "1.0",
    namespace: "a43b46",
};

/// Grid Schema: record types.
pub static SCHEMA: FamilyDescriptor = FamilyDescriptor {
    name: "grid_schema",
    version: "1",
    namespace: "621dee",
};

/// Sabre, the smart-contract engine every contract family is dispatched through.
pub static SABRE: FamilyDescriptor = FamilyDescriptor {
    name: "sabre",
    version: "0.3",
    namespace: "00ec",
};

/// The contract families a transaction can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKey {
    Pike,
    TrackAndTrace,
    Schema,
}

impl FamilyKey {
    /// Resolve a short family key. Anything other than `pike` or `schema`
    /// resolves to Track-and-Trace.
    pub fn from_key(key: &str) -> Self {
        match key {
            "pike" => Self::Pike,
            "schema" => Self::Schema,
            _ => Self::TrackAndTrace,
        }
    }

    pub fn descriptor(self) -> &'static FamilyDescriptor {
        match self {
            Self::Pike => &PIKE,
            Self::TrackAndTrace => &TRACK_AND_TRACE,
            Self::Schema => &SCHEMA,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Pike => "pike",
            Self::TrackAndTrace => "tnt",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
