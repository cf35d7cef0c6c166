use super::*;

/// `ConditionKind` enumerates the node condition types maintained by the kubelet
///
/// At most one condition of each kind is expected on a node.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionKind {
    Ready,
    MemoryPressure,
    DiskPressure,
    PIDPressure,
}

impl ConditionKind {
    pub const ALL: [Self; 4] = [
        Self::Ready,
        Self::MemoryPressure,
        Self::DiskPressure,
        Self::PIDPressure,
    ];

    /// The `type` string as it appears in `NodeCondition`
    ///
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::MemoryPressure => "MemoryPressure",
            Self::DiskPressure => "DiskPressure",
            Self::PIDPressure => "PIDPressure",
        }
    }

    /// Classify a condition `type` string, `None` for anything not kubelet owned
    ///
    pub fn recognize(type_: &str) -> Option<Self> {
        type_.parse().ok()
    }
}

impl str::FromStr for ConditionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ConditionStatus` is the tri-state value of a `NodeCondition`
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl ConditionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
