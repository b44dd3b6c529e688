mod files;
pub use files::{LineError, LineOffsets, SourceFileId, SourceFiles};
