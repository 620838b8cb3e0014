use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use uuid::Uuid;

use crate::media_kind::MediaKind;

#[derive(Clone, Debug, PartialEq)]
pub struct CaptureFile {
    pub id: Uuid,
    pub path: PathBuf,
}

/// External sink a capture can be copied to (e.g. a gallery directory).
pub trait MediaSink: Send + Sync {
    fn save(&self, file: &CaptureFile, kind: MediaKind) -> Result<()>;
}

/// Files captures under `<root>/<kind dir>/<original file name>`.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySink { root: root.into() }
    }
}

impl MediaSink for DirectorySink {
    fn save(&self, file: &CaptureFile, kind: MediaKind) -> Result<()> {
        let target_dir = self.root.join(kind.relative_dir());
        std::fs::create_dir_all(&target_dir)?;
        let name = file
            .path
            .file_name()
            .ok_or_else(|| anyhow!("capture file has no name: {}", file.path.display()))?;
        let mut source = File::open(&file.path)?;
        let mut target = File::create(target_dir.join(name))?;
        io::copy(&mut source, &mut target)?;
        Ok(())
    }
}

/* Bounded FIFO of captured media files. The newest capture goes to the tail;
once the queue is over capacity the oldest entry is popped and its file is
deleted from disk.

A single mutex guards every path that touches the deque, the capture loop's
inserts included; a flush never observes a half-applied insert/evict.
*/
pub struct CaptureQueue {
    max_files: usize,
    files: Mutex<VecDeque<CaptureFile>>,
}

impl CaptureQueue {
    pub fn new(max_files: usize) -> Self {
        assert!(max_files > 0);
        CaptureQueue {
            max_files,
            files: Mutex::new(VecDeque::new()),
        }
    }

    /// Appends a capture, evicting (and deleting) the oldest file once over
    /// capacity. At most one eviction per push.
    pub fn push(&self, path: PathBuf) -> CaptureFile {
        let file = CaptureFile {
            id: Uuid::new_v4(),
            path,
        };
        let mut files = self.files.lock().unwrap();
        files.push_back(file.clone());
        if files.len() > self.max_files {
            let oldest = files.pop_front().unwrap(); // len > max_files >= 1
            match std::fs::remove_file(&oldest.path) {
                Ok(()) => debug!("[capture] evicted {}", oldest.path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => (),
                Err(e) => warn!(
                    "[capture] failed to delete evicted file {}: {}",
                    oldest.path.display(),
                    e
                ),
            }
        }
        file
    }

    /// Copies every queued file to the sink, oldest first. A file that fails
    /// to copy is logged and skipped; the rest of the queue is still
    /// processed. Returns the number of files saved.
    pub fn flush_to(&self, sink: &dyn MediaSink, kind: MediaKind) -> usize {
        let files = self.files.lock().unwrap();
        let mut saved = 0;
        for file in files.iter() {
            match sink.save(file, kind) {
                Ok(()) => {
                    debug!("[capture] saved {} to sink", file.path.display());
                    saved += 1;
                }
                Err(e) => warn!("[capture] failed to save {}: {}", file.path.display(), e),
            }
        }
        saved
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> Vec<CaptureFile> {
        self.files.lock().unwrap().iter().cloned().collect()
    }
}
