use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "genusrush-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn bin_path() -> String {
    std::env::var("CARGO_BIN_EXE_genusrush").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("genusrush.exe");
        } else {
            path.push("genusrush");
        }
        path.to_string_lossy().into_owned()
    })
}

/// Run with HOME pointed at `root` so no user config or cache leaks in
fn run_genusrush(root: &Path, args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(bin_path())
        .args(args)
        .env("HOME", root)
        .env("XDG_CONFIG_HOME", root.join(".config"))
        .env("XDG_DATA_HOME", root.join(".local").join("share"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("run genusrush");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait genusrush");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn seed_cache(cache_dir: &Path, family: &str, genera: &[&str]) {
    let genera: Vec<String> = genera.iter().map(|g| format!("\"{g}\"")).collect();
    write_file(
        &cache_dir.join(format!("{family}.json")),
        &format!(r#"{{"family":"{family}","genera":[{}]}}"#, genera.join(",")),
    );
}

#[test]
fn offline_round_scores_and_records_new_best() {
    let root = unique_temp_dir("play");
    let cache_dir = root.join("cache");
    let records_dir = root.join("records");
    seed_cache(&cache_dir, "Araneidae", &["Latrodectus", "Argiope", "Araneus"]);

    let (ok, stdout, stderr) = run_genusrush(
        &root,
        &[
            "play",
            "--category",
            "araneidae",
            "--offline",
            "--no-banner",
            "--cache-dir",
            cache_dir.to_str().unwrap(),
            "--records-dir",
            records_dir.to_str().unwrap(),
        ],
        "Argiope\nargiope\nNephila\n",
    );
    assert!(ok, "stderr: {stderr}");

    assert!(stdout.contains("3 found."));
    assert!(stdout.contains("*** Already listed - entry number 1 ***"));
    assert!(stdout.contains("*** Not a genus in Araneidae - check your spelling? ***"));
    assert!(stdout.contains("You named a total of 1 genus"));
    assert!(stdout.contains("33.33%"));
    assert!(stdout.contains("congratulations on setting a new personal best!"));

    let record = fs::read_to_string(records_dir.join("pb_for_Araneidae.txt")).expect("record");
    assert_eq!(record, "1\n");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn offline_unknown_family_reprompts() {
    let root = unique_temp_dir("reprompt");
    let cache_dir = root.join("cache");
    seed_cache(&cache_dir, "Theridiidae", &["Latrodectus", "Steatoda"]);

    let (ok, stdout, stderr) = run_genusrush(
        &root,
        &[
            "--offline",
            "--no-banner",
            "--cache-dir",
            cache_dir.to_str().unwrap(),
            "--records-dir",
            root.join("records").to_str().unwrap(),
        ],
        "Lycosidae\ntheridiidae\n",
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("*** ERROR! No cached genus list for Lycosidae (offline mode) ***"));
    assert!(stdout.contains("2 found."));
    assert!(stdout.contains("*** Thanks for playing! ***"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn records_lists_personal_bests() {
    let root = unique_temp_dir("records");
    let records_dir = root.join("records");
    write_file(&records_dir.join("pb_for_Araneidae.txt"), "3\n7\n");
    write_file(&records_dir.join("pb_for_Salticidae.txt"), "4\n");

    let (ok, stdout, stderr) = run_genusrush(
        &root,
        &[
            "records",
            "--no-color",
            "--records-dir",
            records_dir.to_str().unwrap(),
        ],
        "",
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Araneidae"));
    assert!(stdout.contains("Salticidae"));
    assert!(stdout.contains("11 genera total"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn records_empty_directory() {
    let root = unique_temp_dir("records-empty");
    let records_dir = root.join("nothing-here");

    let (ok, stdout, _) = run_genusrush(
        &root,
        &["records", "--records-dir", records_dir.to_str().unwrap()],
        "",
    );
    assert!(ok);
    assert!(stdout.contains("No personal records yet"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn offline_families_lists_cached_families() {
    let root = unique_temp_dir("families");
    let cache_dir = root.join("cache");
    seed_cache(&cache_dir, "Theridiidae", &["Latrodectus"]);
    seed_cache(&cache_dir, "Araneidae", &["Argiope"]);

    let (ok, stdout, stderr) = run_genusrush(
        &root,
        &["families", "-O", "--cache-dir", cache_dir.to_str().unwrap()],
        "",
    );
    assert!(ok, "stderr: {stderr}");
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["Araneidae", "Theridiidae"]);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn zero_interval_is_an_error() {
    let root = unique_temp_dir("interval");

    let (ok, _, stderr) = run_genusrush(&root, &["play", "--interval", "0"], "");
    assert!(!ok);
    assert!(stderr.contains("Interval must be at least 1 second"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn config_file_supplies_defaults() {
    let root = unique_temp_dir("config");
    let records_dir = root.join("from-config");
    write_file(&records_dir.join("pb_for_Lycosidae.txt"), "9\n");
    write_file(
        &root.join(".config").join("genusrush").join("config.toml"),
        &format!("records_dir = {:?}\nno_color = true\n", records_dir.to_str().unwrap()),
    );

    let (ok, stdout, stderr) = run_genusrush(&root, &["records"], "");
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Lycosidae"));
    assert!(stdout.contains("9 genera total"));

    let _ = fs::remove_dir_all(root);
}
