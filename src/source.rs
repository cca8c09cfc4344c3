//! Landmark sources: where detection snapshots come from.
//!
//! Live hand tracking lives outside this crate. Recorded sessions are stored
//! as JSON lines, one [`TimedSnapshot`] per line:
//!
//! ```text
//! {"timestamp_ms": 0, "snapshot": {"hands": []}}
//! {"timestamp_ms": 33, "snapshot": {"hands": [{"handedness": "Left", "landmarks": [...]}]}}
//! ```

use crate::{landmarks::DetectionSnapshot, Error, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A detection snapshot stamped with a monotonic time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedSnapshot {
    /// Frame time in milliseconds
    pub timestamp_ms: u64,
    /// Hands seen in this frame
    pub snapshot: DetectionSnapshot,
}

impl TimedSnapshot {
    /// Stamp a snapshot
    #[must_use]
    pub fn new(timestamp_ms: u64, snapshot: DetectionSnapshot) -> Self {
        Self { timestamp_ms, snapshot }
    }
}

/// Anything that can deliver snapshots, one per frame tick
pub trait LandmarkSource {
    /// Next snapshot, or `None` once the source is exhausted or has failed
    fn next_snapshot(&mut self) -> Option<TimedSnapshot>;
}

/// Source replaying snapshots held in memory
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    frames: VecDeque<TimedSnapshot>,
}

impl ReplaySource {
    /// Replay the given frames in order
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = TimedSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet delivered
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LandmarkSource for ReplaySource {
    fn next_snapshot(&mut self) -> Option<TimedSnapshot> {
        self.frames.pop_front()
    }
}

/// Source reading a JSON-lines recording
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    failed: Option<Error>,
}

impl JsonLinesSource<BufReader<File>> {
    /// Open a recording file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    /// Read a recording from any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            failed: None,
        }
    }

    /// The error that ended the stream, if it ended abnormally
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.failed.as_ref()
    }

    /// Read and decode the next non-blank line
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on read failure or [`Error::Recording`] when a line
    /// is not a valid snapshot
    pub fn read_next(&mut self) -> Result<Option<TimedSnapshot>> {
        let mut buffer = String::new();
        loop {
            buffer.clear();
            if self.reader.read_line(&mut buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = buffer.trim();
            if text.is_empty() {
                continue;
            }
            return serde_json::from_str(text)
                .map(Some)
                .map_err(|e| Error::Recording {
                    line: self.line,
                    message: e.to_string(),
                });
        }
    }
}

impl<R: BufRead> LandmarkSource for JsonLinesSource<R> {
    fn next_snapshot(&mut self) -> Option<TimedSnapshot> {
        if self.failed.is_some() {
            return None;
        }
        match self.read_next() {
            Ok(Some(frame)) => Some(frame),
            Ok(None) => {
                debug!("Recording ended after {} lines", self.line);
                None
            }
            Err(e) => {
                warn!("Stopping replay: {}", e);
                self.failed = Some(e);
                None
            }
        }
    }
}

/// Read a whole recording into memory
///
/// # Errors
///
/// Returns the first read or decode error
pub fn load_recording<P: AsRef<Path>>(path: P) -> Result<Vec<TimedSnapshot>> {
    let mut source = JsonLinesSource::open(path)?;
    let mut frames = Vec::new();
    while let Some(frame) = source.read_next()? {
        frames.push(frame);
    }
    Ok(frames)
}
