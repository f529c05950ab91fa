//! Encode-support flags and the capability table.

use std::collections::HashMap;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::codec::CodecType;
use crate::location::ExecutionLocation;

/// One kind of encode support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeSupport {
    /// A hardware encoder can serve the codec.
    HardwareEncode,

    /// A software encoder can serve the codec.
    SoftwareEncode,
}

impl EncodeSupport {
    fn bit(self) -> u8 {
        match self {
            Self::HardwareEncode => 0b01,
            Self::SoftwareEncode => 0b10,
        }
    }
}

/// Set of encode-support flags for a codec or configuration.
///
/// May be empty (unsupported), or carry hardware support, software
/// support, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodeSupportSet(u8);

impl EncodeSupportSet {
    /// The empty set: no support at all.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Hardware support only.
    pub const fn hardware() -> Self {
        Self(0b01)
    }

    /// Software support only.
    pub const fn software() -> Self {
        Self(0b10)
    }

    /// Both hardware and software support.
    pub const fn both() -> Self {
        Self(0b11)
    }

    /// Returns true if no support flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the given support flag is set.
    pub fn contains(self, support: EncodeSupport) -> bool {
        self.0 & support.bit() != 0
    }

    /// Returns true if a hardware encoder is available.
    pub fn has_hardware(self) -> bool {
        self.contains(EncodeSupport::HardwareEncode)
    }

    /// Returns true if a software encoder is available.
    pub fn has_software(self) -> bool {
        self.contains(EncodeSupport::SoftwareEncode)
    }
}

impl BitOr for EncodeSupportSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EncodeSupportSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<EncodeSupport> for EncodeSupportSet {
    fn from(support: EncodeSupport) -> Self {
        Self(support.bit())
    }
}

/// Capability table mapping codec and execution location to support flags.
///
/// Location is part of the key: the same codec may be hardware-encodable
/// in the GPU process and entirely unsupported in a content process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportTable {
    entries: HashMap<(CodecType, ExecutionLocation), EncodeSupportSet>,
}

impl SupportTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records support flags for a codec at a location, replacing any
    /// previous entry.
    pub fn insert(
        &mut self,
        codec: CodecType,
        location: ExecutionLocation,
        support: EncodeSupportSet,
    ) {
        self.entries.insert((codec, location), support);
    }

    /// Pure lookup: support flags for a codec at a location, or the empty
    /// set when the pair is absent.
    pub fn support_for(&self, codec: CodecType, location: ExecutionLocation) -> EncodeSupportSet {
        self.entries
            .get(&(codec, location))
            .copied()
            .unwrap_or_default()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (codec, location) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_set_flags() {
        let set = EncodeSupportSet::hardware();
        assert!(set.has_hardware());
        assert!(!set.has_software());
        assert!(!set.is_empty());

        let set = set | EncodeSupportSet::software();
        assert_eq!(set, EncodeSupportSet::both());
        assert!(set.contains(EncodeSupport::SoftwareEncode));
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let set = EncodeSupportSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(EncodeSupport::HardwareEncode));
        assert!(!set.contains(EncodeSupport::SoftwareEncode));
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut set = EncodeSupportSet::software();
        set |= EncodeSupportSet::software();
        assert_eq!(set, EncodeSupportSet::software());
    }

    #[test]
    fn test_table_lookup_absent_is_empty() {
        let table = SupportTable::new();
        assert!(table
            .support_for(CodecType::H264, ExecutionLocation::GpuProcess)
            .is_empty());
    }

    #[test]
    fn test_table_keyed_by_codec_and_location() {
        let mut table = SupportTable::new();
        table.insert(
            CodecType::H264,
            ExecutionLocation::GpuProcess,
            EncodeSupportSet::hardware(),
        );

        assert_eq!(
            table.support_for(CodecType::H264, ExecutionLocation::GpuProcess),
            EncodeSupportSet::hardware()
        );
        // Same codec, different location: no conflation.
        assert!(table
            .support_for(CodecType::H264, ExecutionLocation::ContentProcess)
            .is_empty());
        assert!(table
            .support_for(CodecType::Vp9, ExecutionLocation::GpuProcess)
            .is_empty());
    }

    #[test]
    fn test_table_insert_replaces() {
        let mut table = SupportTable::new();
        table.insert(
            CodecType::Av1,
            ExecutionLocation::InProcess,
            EncodeSupportSet::software(),
        );
        table.insert(
            CodecType::Av1,
            ExecutionLocation::InProcess,
            EncodeSupportSet::both(),
        );
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.support_for(CodecType::Av1, ExecutionLocation::InProcess),
            EncodeSupportSet::both()
        );
    }
}
