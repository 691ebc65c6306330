use std::fs::File;
use std::time::{Duration, SystemTime};

use orthoform_cli::host::{LocalHost, STAGED_MAX_AGE};
use orthoform_core::models::record::FormRecord;
use orthoform_export::delivery::{deliver, Artifact, DeliveryOutcome, Host};
use orthoform_export::export::{export_report, ExportFormat, ExportOptions};
use orthoform_export::styles::DocumentStyles;
use orthoform_scenarios::get_scenario;

fn artifact() -> Artifact {
    Artifact {
        filename: "native-knee-follow-up-report.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.5 test".to_vec(),
    }
}

#[test]
fn disabled_viewer_downloads_into_output_dir() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), false);

    let outcome = deliver(&mut host, &artifact(), Duration::ZERO).unwrap();
    assert_eq!(outcome, DeliveryOutcome::Downloaded);

    let saved = out.path().join("native-knee-follow-up-report.pdf");
    assert_eq!(std::fs::read(saved).unwrap(), b"%PDF-1.5 test");
}

#[test]
fn staged_copies_are_released() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), false);

    deliver(&mut host, &artifact(), Duration::ZERO).unwrap();
    host.wait_for_releases();

    let leftover = std::fs::read_dir(staging.path()).unwrap().count();
    assert_eq!(leftover, 0);
}

#[test]
fn handle_is_a_staged_file_with_the_artifact_bytes() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), false);

    let handle = host.create_handle(&artifact()).unwrap();
    assert!(handle.0.ends_with("native-knee-follow-up-report.pdf"));
    assert_eq!(std::fs::read(&handle.0).unwrap(), b"%PDF-1.5 test");
}

#[test]
fn full_export_writes_a_pdf() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), false);

    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let record: FormRecord = [("kneeSide", "left"), ("hasQuestions", "no")]
        .into_iter()
        .collect();
    let options = ExportOptions {
        format: ExportFormat::Pdf,
        styles: DocumentStyles::default(),
        generated_on: jiff::civil::date(2026, 10, 19),
        release_delay: Duration::ZERO,
    };

    export_report(scenario.as_ref(), &record, &options, &mut host).unwrap();
    host.wait_for_releases();

    let bytes = std::fs::read(out.path().join("native-knee-follow-up-report.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[cfg(unix)]
#[test]
fn failing_viewer_falls_back_to_download() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), true).with_viewer("false");

    let outcome = deliver(&mut host, &artifact(), Duration::ZERO).unwrap();
    host.wait_for_releases();

    assert_eq!(outcome, DeliveryOutcome::Downloaded);
    assert!(out.path().join("native-knee-follow-up-report.pdf").exists());
}

#[cfg(unix)]
#[test]
fn missing_viewer_falls_back_to_download() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), true)
        .with_viewer(staging.path().join("no-such-viewer"));

    let outcome = deliver(&mut host, &artifact(), Duration::ZERO).unwrap();
    assert_eq!(outcome, DeliveryOutcome::Downloaded);
    assert!(out.path().join("native-knee-follow-up-report.pdf").exists());
}

#[cfg(unix)]
#[test]
fn working_viewer_skips_the_download() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), true).with_viewer("true");

    let outcome = deliver(&mut host, &artifact(), Duration::ZERO).unwrap();
    host.wait_for_releases();

    assert_eq!(outcome, DeliveryOutcome::Viewed);
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn staging_sweeps_copies_older_than_the_max_age() {
    let out = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();

    let stale = staging.path().join("stale-report.pdf");
    let fresh = staging.path().join("fresh-report.pdf");
    std::fs::write(&stale, b"old").unwrap();
    std::fs::write(&fresh, b"new").unwrap();
    File::options()
        .write(true)
        .open(&stale)
        .unwrap()
        .set_modified(SystemTime::now() - STAGED_MAX_AGE * 2)
        .unwrap();

    let mut host = LocalHost::with_staging_dir(out.path(), staging.path(), false);
    let handle = host.create_handle(&artifact()).unwrap();

    assert!(!stale.exists());
    assert!(fresh.exists());
    assert!(std::path::Path::new(&handle.0).exists());
}
