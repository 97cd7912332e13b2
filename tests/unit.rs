use std::fs;
use std::path::Path;
use tempfile::tempdir;
use typecat::{
    Decoded, OUTPUT_FILE_NAME, OutputDocument, ScriptedConsole, TypecatBuilder, decode_bytes,
    extension_of, scan_extensions, select,
};
#[test]
fn test_extension_of() {
    assert_eq!(extension_of(Path::new("a.txt")), Some(".txt".to_string()));
    assert_eq!(
        extension_of(Path::new("archive.tar.gz")),
        Some(".gz".to_string())
    );
    assert_eq!(extension_of(Path::new("Makefile")), None);
    assert_eq!(extension_of(Path::new(".bashrc")), None);
}
#[test]
fn test_scan_collects_distinct_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.md"), "b").unwrap();
    fs::write(dir.path().join("Makefile"), "all:").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "c").unwrap();
    let options = TypecatBuilder::new(dir.path()).build();
    let extensions = scan_extensions(&options).unwrap();
    let found: Vec<_> = extensions.into_iter().collect();
    assert_eq!(found, vec![".md".to_string(), ".txt".to_string()]);
}
#[test]
fn test_scan_nonexistent_root_is_empty() {
    let dir = tempdir().unwrap();
    let options = TypecatBuilder::new(dir.path().join("missing")).build();
    let extensions = scan_extensions(&options).unwrap();
    assert!(extensions.is_empty());
}
#[test]
fn test_select_skips_invalid_and_keeps_duplicates() {
    let options = vec![".txt".to_string(), ".md".to_string()];
    let mut console = ScriptedConsole::new(["1,abc,1"]);
    let selected = select(&mut console, "Select file types to include:", &options).unwrap();
    assert_eq!(selected, vec![".txt".to_string(), ".txt".to_string()]);
    assert!(
        console
            .transcript
            .iter()
            .any(|l| l == "Invalid selection: abc")
    );
}
#[test]
fn test_select_blank_input_is_empty() {
    let options = vec![".txt".to_string()];
    let mut console = ScriptedConsole::new(["   "]);
    let selected = select(&mut console, "Select file types to include:", &options).unwrap();
    assert!(selected.is_empty());
    assert!(
        !console
            .transcript
            .iter()
            .any(|l| l.starts_with("Invalid selection"))
    );
}
#[test]
fn test_select_out_of_range_is_skipped() {
    let options = vec![".txt".to_string(), ".md".to_string()];
    let mut console = ScriptedConsole::new(["3, 2, 0"]);
    let selected = select(&mut console, "Select file types to include:", &options).unwrap();
    assert_eq!(selected, vec![".md".to_string()]);
    assert!(
        console
            .transcript
            .iter()
            .any(|l| l.starts_with("Invalid selection: 3"))
    );
}
#[test]
fn test_select_renders_numbered_options() {
    let options = vec![".md".to_string(), ".txt".to_string()];
    let mut console = ScriptedConsole::new(["2"]);
    select(&mut console, "Select file types to include:", &options).unwrap();
    assert!(console.transcript.iter().any(|l| l == "1. .md"));
    assert!(console.transcript.iter().any(|l| l == "2. .txt"));
}
#[test]
fn test_decode_utf8_round_trips() {
    let text = "héllo wörld, ça va?";
    let decoded = decode_bytes(text.as_bytes());
    assert!(!decoded.is_lossy());
    assert_eq!(decoded.text(), text);
    assert_eq!(decoded.encoding(), Some("UTF-8"));
}
#[test]
fn test_decode_windows_1252() {
    let raw = b"Le caf\xe9 est d\xe9j\xe0 pr\xeat, tr\xe8s bien.";
    let decoded = decode_bytes(raw);
    assert!(!decoded.is_lossy());
    assert!(decoded.text().contains("café"));
    assert!(decoded.text().contains("déjà"));
}
#[test]
fn test_decode_malformed_falls_back_to_lossy() {
    // UTF-16LE BOM followed by a lone half of a code unit.
    let raw = [0xFF, 0xFE, 0x41];
    let decoded = decode_bytes(&raw);
    assert!(decoded.is_lossy());
    assert_eq!(decoded.encoding(), None);
    assert!(decoded.text().contains('A'));
    assert!(matches!(decoded, Decoded::Lossy { .. }));
}
#[test]
fn test_decode_empty_input() {
    let decoded = decode_bytes(b"");
    assert!(!decoded.is_lossy());
    assert_eq!(decoded.text(), "");
}
#[test]
fn test_output_block_format() {
    let dir = tempdir().unwrap();
    let mut document = OutputDocument::create(dir.path()).unwrap();
    document.append_block("a.txt", "hello").unwrap();
    let path = document.finish().unwrap();
    assert_eq!(path, dir.path().join(OUTPUT_FILE_NAME));
    assert_eq!(fs::read_to_string(path).unwrap(), "--- a.txt ---\nhello\n");
}
#[test]
fn test_output_creates_directory_and_truncates() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("OutputFiles");
    let mut document = OutputDocument::create(&out_dir).unwrap();
    document.append_block("a.txt", "first run").unwrap();
    document.finish().unwrap();
    let mut document = OutputDocument::create(&out_dir).unwrap();
    document.append_block("b.txt", "second").unwrap();
    let path = document.finish().unwrap();
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "--- b.txt ---\nsecond\n"
    );
}
