//! Marker pair location inside a line sequence.
//!
//! A managed block is delimited by two fixed whole-line markers. A
//! line matches a marker only when it equals the marker exactly after
//! trimming surrounding whitespace; a line that merely *contains* a
//! marker is treated as corruption, never as a match.

use std::ops::Range;
use std::path::Path;

use crate::error::{Error, Result};

/// Default start marker line.
pub const DEFAULT_BLOCK_START: &str =
    "############### >>> THIS BLOCK IS USED FOR vastai-ssh-config-tool ################";

/// Default end marker line.
pub const DEFAULT_BLOCK_END: &str =
    "############### THIS BLOCK IS USED FOR vastai-ssh-config-tool <<< ################";

/// The pair of whole-line markers delimiting a managed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_BLOCK_START.to_string(),
            end: DEFAULT_BLOCK_END.to_string(),
        }
    }
}

/// Half-open line range `[start, end)` covering both marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Index of the start marker line.
    pub start: usize,
    /// One past the index of the end marker line.
    pub end: usize,
}

impl Region {
    /// Range of the lines strictly between the two markers.
    pub fn interior(&self) -> Range<usize> {
        self.start + 1..self.end - 1
    }
}

/// Scan `lines` for exactly one well-formed marker pair.
///
/// Returns `Ok(None)` when neither marker appears anywhere. Any other
/// arrangement than exactly one start line strictly before exactly one
/// end line is reported as [`Error::CorruptedRegion`] with the 1-based
/// numbers of the offending lines. Corruption is never repaired here;
/// the user hand-edited the file and must untangle it themselves.
///
/// The scan is a pure function of `lines`; `path` is only used for
/// error reporting.
pub fn locate(lines: &[String], markers: &Markers, path: &Path) -> Result<Option<Region>> {
    let mut starts = Vec::new();
    let mut ends = Vec::new();

    for (ix, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        for (pattern, hits) in [(&markers.start, &mut starts), (&markers.end, &mut ends)] {
            if trimmed.contains(pattern.as_str()) {
                if trimmed != pattern.as_str() {
                    return Err(Error::CorruptedRegion {
                        path: path.to_path_buf(),
                        lines: vec![ix + 1],
                    });
                }
                hits.push(ix);
            }
        }
    }

    match (starts.as_slice(), ends.as_slice()) {
        ([], []) => Ok(None),
        ([start], [end]) if start < end => Ok(Some(Region {
            start: *start,
            end: end + 1,
        })),
        _ => {
            let mut offending: Vec<usize> =
                starts.iter().chain(ends.iter()).map(|ix| ix + 1).collect();
            offending.sort_unstable();
            Err(Error::CorruptedRegion {
                path: path.to_path_buf(),
                lines: offending,
            })
        }
    }
}
