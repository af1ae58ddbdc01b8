/// MaxRects packing of parts onto sheets, best short side fit
pub mod maxrects;

/// Pack-verify-retry loop over all parts of a job
pub mod orchestrator;

pub mod stats;

/// Exact bounds check of placements proposed by the packer
pub mod verify;
