//! Execution locations for backend modules.

use serde::{Deserialize, Serialize};

/// The process context a backend encoder module runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionLocation {
    /// GPU-accelerated process.
    GpuProcess,

    /// Dedicated media process.
    MediaProcess,

    /// Utility process.
    UtilityProcess,

    /// Content process.
    ContentProcess,

    /// In-process default, always available.
    InProcess,
}

impl ExecutionLocation {
    /// Fixed priority order in which locations are considered when the
    /// module registry is built. GPU-accelerated paths come first, the
    /// in-process default last.
    pub const PRIORITY: [ExecutionLocation; 5] = [
        ExecutionLocation::GpuProcess,
        ExecutionLocation::MediaProcess,
        ExecutionLocation::UtilityProcess,
        ExecutionLocation::ContentProcess,
        ExecutionLocation::InProcess,
    ];

    /// Returns the display name for this location.
    pub fn name(self) -> &'static str {
        match self {
            Self::GpuProcess => "gpu",
            Self::MediaProcess => "media",
            Self::UtilityProcess => "utility",
            Self::ContentProcess => "content",
            Self::InProcess => "in-process",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_starts_with_gpu_and_ends_in_process() {
        assert_eq!(ExecutionLocation::PRIORITY[0], ExecutionLocation::GpuProcess);
        assert_eq!(
            ExecutionLocation::PRIORITY[ExecutionLocation::PRIORITY.len() - 1],
            ExecutionLocation::InProcess
        );
    }

    #[test]
    fn test_priority_has_no_duplicates() {
        for (i, a) in ExecutionLocation::PRIORITY.iter().enumerate() {
            for b in &ExecutionLocation::PRIORITY[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
