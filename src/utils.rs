use std::path::{Path, PathBuf};

use chrono::Local;

// Timestamped capture file name, e.g. `VID_20240131_120000.mp4`. Probes for
// an unused name so two captures within the same second don't collide.
pub fn unique_media_filename(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut i = 0;
    loop {
        let filename = if i == 0 {
            dir.join(format!("{}_{}.{}", prefix, timestamp, extension))
        } else {
            dir.join(format!("{}_{}-{}.{}", prefix, timestamp, i, extension))
        };
        if std::fs::metadata(&filename).is_err() {
            break filename;
        }
        i += 1;
    }
}
