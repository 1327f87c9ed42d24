use projtxt::wrap::{WRAP_WIDTH, split_lines, wrap_line};
use projtxt::{
    BinaryDetection, Decoded, ExportBuilder, LoadOutcome, SkipReason, decode, load_file,
    should_include, split_list,
};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;
fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
#[test]
fn test_include_replaces_defaults() {
    let options = ExportBuilder::new("/r", "/o.txt")
        .include_extensions(split_list(" .PY, js ,, "))
        .build();
    assert_eq!(options.include_extensions, set(&["py", "js"]));
}
#[test]
fn test_empty_include_keeps_defaults() {
    let options = ExportBuilder::new("/r", "/o.txt")
        .include_extensions(split_list(""))
        .build();
    assert!(options.include_extensions.contains("md"));
    assert!(options.include_extensions.contains("dockerfile"));
}
#[test]
fn test_exclude_unions_defaults() {
    let options = ExportBuilder::new("/r", "/o.txt")
        .exclude_dirs(split_list("custom, vendor"))
        .build();
    assert!(options.exclude_dirs.contains("custom"));
    assert!(options.exclude_dirs.contains("vendor"));
    assert!(options.exclude_dirs.contains("node_modules"));
    assert!(options.exclude_dirs.contains(".git"));
}
#[test]
fn test_should_include() {
    let defaults = ExportBuilder::new("/r", "/o.txt").build().include_extensions;
    assert!(should_include("main.PY", &defaults));
    assert!(should_include("Dockerfile", &defaults));
    assert!(should_include("JENKINSFILE", &defaults));
    assert!(should_include("archive.tar.sh", &defaults));
    assert!(!should_include("Makefile", &defaults));
    assert!(!should_include("image.png", &defaults));
    let only_py = set(&["py"]);
    assert!(should_include("a.py", &only_py));
    assert!(!should_include("Dockerfile", &only_py));
    assert!(should_include("Dockerfile", &set(&["py", "dockerfile"])));
}
#[test]
fn test_split_lines_terminators() {
    assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    assert_eq!(split_lines("x\u{2028}y\u{0c}z"), vec!["x", "y", "z"]);
    assert!(split_lines("").is_empty());
}
#[test]
fn test_wrap_short_and_empty_lines() {
    assert_eq!(wrap_line("  keep   spacing\t", WRAP_WIDTH), vec!["  keep   spacing\t"]);
    assert!(wrap_line("", WRAP_WIDTH).is_empty());
    assert_eq!(wrap_line("   ", WRAP_WIDTH), vec!["   "]);
}
#[test]
fn test_wrap_packs_words_greedily() {
    assert_eq!(wrap_line("aaa bbb ccc", 7), vec!["aaa bbb", " ccc"]);
    assert_eq!(wrap_line("pre-fix post-fix", 10), vec!["pre-fix ", "post-fix"]);
}
#[test]
fn test_wrap_breaks_long_words() {
    assert_eq!(wrap_line("ab cdefghij", 5), vec!["ab cd", "efghi", "j"]);
    let long = "x".repeat(1200);
    let pieces = wrap_line(&long, WRAP_WIDTH);
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces[0].len(), 500);
    assert_eq!(pieces[2].len(), 200);
}
#[test]
fn test_wrap_counts_characters() {
    let line = "é".repeat(7);
    assert_eq!(wrap_line(&line, 5), vec!["ééééé", "éé"]);
}
#[test]
fn test_wrap_preserves_content() {
    let line = format!("{}  {}\t{} tail", "w".repeat(480), "-".repeat(30), "z".repeat(900));
    let pieces = wrap_line(&line, WRAP_WIDTH);
    assert!(pieces.iter().all(|p| p.chars().count() <= WRAP_WIDTH));
    assert_eq!(pieces.concat(), line);
}
#[test]
fn test_decode_fallback() {
    assert_eq!(decode(b"plain".to_vec()), Decoded::Utf8("plain".into()));
    let decoded = decode(vec![b'c', b'a', b'f', 0xE9]);
    assert_eq!(decoded, Decoded::Latin1("café".into()));
    assert!(decoded.note().is_some());
}
#[test]
fn test_load_size_limit() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("big.txt");
    let mut f = File::create(&file_path).unwrap();
    write!(f, "{}", "A".repeat(5000)).unwrap();
    let outcome = load_file(&file_path, 100, BinaryDetection::Simple);
    assert_eq!(
        outcome,
        LoadOutcome::Skipped(SkipReason::TooLarge {
            size: 5000,
            limit: 100
        })
    );
    if let LoadOutcome::Skipped(reason) = outcome {
        assert_eq!(reason.to_string(), "IGNORED (size 5000 > 100 bytes)");
    }
}
#[cfg(unix)]
#[test]
fn test_oversized_file_is_not_opened() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("locked.txt");
    fs::write(&file_path, "0123456789").unwrap();
    fs::set_permissions(&file_path, fs::Permissions::from_mode(0o000)).unwrap();
    let outcome = load_file(&file_path, 5, BinaryDetection::Simple);
    assert!(matches!(
        outcome,
        LoadOutcome::Skipped(SkipReason::TooLarge { size: 10, .. })
    ));
}
#[test]
fn test_binary_detection_simple() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("data.txt");
    fs::write(&file_path, vec![b'a', 0, b'b']).unwrap();
    let outcome = load_file(&file_path, 1_000_000, BinaryDetection::Simple);
    assert_eq!(outcome, LoadOutcome::Skipped(SkipReason::Binary));
}
#[test]
fn test_nul_past_sample_is_text() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("late.txt");
    let mut bytes = vec![b'a'; 3000];
    bytes[2500] = 0;
    fs::write(&file_path, &bytes).unwrap();
    let outcome = load_file(&file_path, 1_000_000, BinaryDetection::Simple);
    assert!(outcome.is_loaded());
}
#[test]
fn test_binary_detection_none() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("nul.txt");
    fs::write(&file_path, vec![b'a', 0, b'b']).unwrap();
    let outcome = load_file(&file_path, 1_000_000, BinaryDetection::None);
    assert_eq!(outcome, LoadOutcome::Loaded(Decoded::Utf8("a\0b".into())));
}
#[test]
fn test_missing_file_is_read_error() {
    let dir = tempdir().unwrap();
    let outcome = load_file(&dir.path().join("gone.txt"), 100, BinaryDetection::Simple);
    match outcome {
        LoadOutcome::Skipped(reason @ SkipReason::Read(_)) => {
            assert!(reason.to_string().starts_with("IGNORED (error reading: "));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
#[test]
fn test_options_serde_round_trip() {
    let options = ExportBuilder::new("/r", "/o.txt")
        .include_extensions(["rs"])
        .binary_detection(BinaryDetection::Accurate)
        .max_bytes(42)
        .build();
    let json = serde_json::to_string(&options).unwrap();
    let back: projtxt::ExportOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.include_extensions, set(&["rs"]));
    assert_eq!(back.binary_detection, BinaryDetection::Accurate);
    assert_eq!(back.max_bytes, 42);
    assert_eq!(back.exclude_dirs, options.exclude_dirs);
}
#[test]
fn test_load_file_larger_than_initial_buffer() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("large.txt");
    let content = "0123456789abcdef\n".repeat(20_000);
    fs::write(&file_path, &content).unwrap();
    let outcome = load_file(&file_path, u64::MAX, BinaryDetection::Simple);
    assert_eq!(outcome, LoadOutcome::Loaded(Decoded::Utf8(content)));
}
