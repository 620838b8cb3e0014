use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::capture_queue::{CaptureQueue, MediaSink};
use crate::config::CaptureConfig;
use crate::media_kind::MediaKind;
use crate::utils;

/// Produces one media file per call. The camera/screen/whatever lives behind
/// this seam.
pub trait Capturer: Send + Sync {
    fn capture(&self, dest: &Path) -> Result<()>;
}

struct LoggingTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/* Owns the capture loop and the bounded file queue behind it.

Two states: idle and logging. `start_logging` spawns a single background
task that captures once, pushes the file into the queue, then sleeps for the
configured interval; `stop_logging` cancels it cooperatively (the token is
checked between iterations, never mid-capture). Both are no-ops when called
in the state they would transition to, and the loop is sequential, so there
is never more than one capture in flight.
*/
pub struct CaptureService {
    config: CaptureConfig,
    queue: Arc<CaptureQueue>,
    capturer: Arc<dyn Capturer>,
    sink: Arc<dyn MediaSink>,
    logging_task: Mutex<Option<LoggingTask>>,
}

impl CaptureService {
    pub fn new(
        config: CaptureConfig,
        capturer: Arc<dyn Capturer>,
        sink: Arc<dyn MediaSink>,
    ) -> Self {
        let queue = Arc::new(CaptureQueue::new(config.max_files()));
        CaptureService {
            config,
            queue,
            capturer,
            sink,
            logging_task: Mutex::new(None),
        }
    }

    pub fn queue(&self) -> &CaptureQueue {
        &self.queue
    }

    pub fn is_logging(&self) -> bool {
        let logging_task = self.logging_task.lock().unwrap();
        match &*logging_task {
            Some(task) => !task.handle.is_finished(),
            None => false,
        }
    }

    /// Spawns the capture loop. A no-op while one is already running.
    pub fn start_logging(&self) {
        let mut logging_task = self.logging_task.lock().unwrap();
        if let Some(task) = &*logging_task {
            if !task.handle.is_finished() {
                debug!("[capture] start_logging while already logging");
                return;
            }
        }

        let cancel = CancellationToken::new();
        let loop_cancel = cancel.clone();
        let capturer = self.capturer.clone();
        let queue = self.queue.clone();
        let media_dir = self.config.media_dir.clone();
        let kind = self.config.kind;
        let interval = self.config.capture_interval();
        let handle = tokio::spawn(async move {
            info!("[capture] logging started");
            loop {
                if let Err(e) =
                    capture_once(capturer.clone(), queue.clone(), media_dir.clone(), kind).await
                {
                    warn!("[capture] capture failed: {}", e);
                }
                tokio::select! {
                    _ = loop_cancel.cancelled() => break,
                    _ = tokio::time::sleep(interval) => (),
                }
            }
            info!("[capture] logging stopped");
        });
        *logging_task = Some(LoggingTask { cancel, handle });
    }

    /// Cancels the capture loop and waits for it to wind down. A no-op while
    /// idle.
    pub async fn stop_logging(&self) {
        let task = self.logging_task.lock().unwrap().take();
        if let Some(task) = task {
            task.cancel.cancel();
            if let Err(e) = task.handle.await {
                warn!("[capture] logging task did not shut down cleanly: {}", e);
            }
        }
    }

    /// Copies everything currently queued to the sink. Per-file failures are
    /// logged and skipped. Returns the number of files saved.
    pub async fn save_captures(&self) -> usize {
        let queue = self.queue.clone();
        let sink = self.sink.clone();
        let kind = self.config.kind;
        match tokio::task::spawn_blocking(move || queue.flush_to(sink.as_ref(), kind)).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!("[capture] save task failed: {}", e);
                0
            }
        }
    }
}

// File I/O stays off the async scheduler.
async fn capture_once(
    capturer: Arc<dyn Capturer>,
    queue: Arc<CaptureQueue>,
    media_dir: PathBuf,
    kind: MediaKind,
) -> Result<()> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        std::fs::create_dir_all(&media_dir)?;
        let dest = utils::unique_media_filename(&media_dir, kind.file_prefix(), kind.extension());
        capturer.capture(&dest)?;
        let file = queue.push(dest);
        debug!("[capture] recorded {} ({})", file.path.display(), file.id);
        Ok(())
    })
    .await?
}
