use tempdir::TempDir;
use voicecam_core::logs;

#[test]
fn init_writes_and_export_bundles_logs() {
    let temp_dir = TempDir::new("logs").unwrap();
    let dir = temp_dir.path().to_str().unwrap().to_string();

    logs::init(&dir).unwrap();
    log::info!("capture core started");
    log::logger().flush();

    let log_path = temp_dir.path().join("logs/main.log");
    assert!(log_path.exists());
    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("capture core started"));

    let target = temp_dir.path().join("logs_export.zip");
    logs::export(&dir, target.to_str().unwrap()).unwrap();
    let archive = zip::ZipArchive::new(std::fs::File::open(&target).unwrap()).unwrap();
    assert!(archive.len() >= 1);
}
