//! Integration tests for the aslgloss CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn aslgloss() -> Command {
    let mut cmd = Command::cargo_bin("aslgloss").unwrap();
    cmd.env_remove("ASLGLOSS_CONFIG");
    cmd
}

/// Videos directory holding the clips listed in the sample metadata
fn videos_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["24946.mp4", "55014.mp4", "00012.mp4"] {
        File::create(dir.path().join(name)).unwrap();
    }
    dir
}

#[test]
fn test_convert_single_sentence() {
    aslgloss()
        .args(["convert", "Where did you go yesterday?"])
        .assert()
        .success()
        .stdout("WHERE YESTERDAY WHERE DID YOU GO WHERE\n");
}

#[test]
fn test_convert_topic_markers() {
    aslgloss()
        .args(["convert", "he walked", "--topic-markers"])
        .assert()
        .success()
        .stdout("HE-t HE WALK FINISH\n");
}

#[test]
fn test_convert_file() {
    aslgloss()
        .arg("convert")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("I TOMORROW I GO STORE\n"))
        .stdout(predicate::str::contains("THE BOOK MANY TABLE\n"))
        .stdout(predicate::str::contains("SHE SHE DOE MANY LIKE COFFEE NOT\n"));
}

#[test]
fn test_json_output() {
    aslgloss()
        .args(["convert", "-q", "-f", "json", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\""))
        .stdout(predicate::str::contains("\"gloss\""))
        .stdout(predicate::str::contains("\"sentence_type\": \"interrogative\""));
}

#[test]
fn test_markdown_output() {
    aslgloss()
        .args(["convert", "-q", "-f", "markdown", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. `I TOMORROW I GO STORE`"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 4*"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("gloss.txt");

    aslgloss()
        .args(["convert", "two books", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "TWO 2 BOOK MANY\n");
}

#[test]
fn test_glob_pattern_and_parallel() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "he walked\n").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "two books\n").unwrap();

    aslgloss()
        .args(["convert", "-q", "-p", "-i"])
        .arg(temp_dir.path().join("*.txt"))
        .assert()
        .success()
        .stdout("HE HE WALK FINISH\nTWO 2 BOOK MANY\n");
}

#[test]
fn test_no_matching_files() {
    aslgloss()
        .args(["convert", "-q", "-i", "nonexistent/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("aslgloss.toml");
    fs::write(
        &config,
        "[conversion]\ndetailed_markers = true\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    aslgloss()
        .args(["convert", "he walked", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gloss\":[\"HE-t\",\"HE\",\"WALK\",\"FINISH\"]"));
}

#[test]
fn test_custom_lexicon() {
    aslgloss()
        .args(["convert", "the man went", "--lexicon"])
        .arg(fixture_path("custom-lexicon.toml"))
        .assert()
        .success()
        .stdout("THE MAN GO FINISH\n");
}

#[test]
fn test_list_formats() {
    aslgloss()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_categories() {
    aslgloss()
        .args(["list", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("irregular_verbs"))
        .stdout(predicate::str::contains("suffixes"));
}

#[test]
fn test_list_markers() {
    aslgloss()
        .args(["list", "markers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("question"))
        .stdout(predicate::str::contains("rh"));
}

#[test]
fn test_validate() {
    aslgloss()
        .args(["validate", "--lexicon"])
        .arg(fixture_path("custom-lexicon.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexicon is valid"))
        .stdout(predicate::str::contains("Code: mini"));
}

#[test]
fn test_validate_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("broken.toml");
    fs::write(&lexicon, "[metadata]\ncode = \"x\"\n").unwrap();

    aslgloss()
        .args(["validate", "--lexicon"])
        .arg(&lexicon)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Lexicon is invalid"));
}

#[test]
fn test_generate_config_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("lexicon.toml");

    aslgloss()
        .args(["generate-config", "-o"])
        .arg(&output)
        .assert()
        .success();

    aslgloss()
        .args(["validate", "--lexicon"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: en-asl"));
}

#[test]
fn test_lookup() {
    let videos = videos_dir();

    aslgloss()
        .args(["lookup", "Book", "zebra", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("00012.mp4"))
        .stdout(predicate::str::contains("zebra: not found"));
}

#[test]
fn test_lookup_copies_clip_to_output() {
    let videos = videos_dir();
    fs::write(videos.path().join("00012.mp4"), b"book clip").unwrap();
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("clips").join("book.mp4");

    aslgloss()
        .args(["lookup", "book", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("book (entry 2):"))
        .stdout(predicate::str::contains("Copied"));

    assert_eq!(fs::read(&output).unwrap(), b"book clip");
}

#[test]
fn test_lookup_output_needs_single_word() {
    let videos = videos_dir();
    let temp_dir = TempDir::new().unwrap();

    aslgloss()
        .args(["lookup", "book", "go", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .arg("--output")
        .arg(temp_dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output takes a single word"));
}

#[test]
fn test_words() {
    let videos = videos_dir();

    aslgloss()
        .args(["words", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 word(s) with clips:"))
        .stdout(predicate::str::contains("book   go     store"));
}

#[test]
fn test_words_all_with_limit() {
    let videos = videos_dir();

    aslgloss()
        .args(["words", "--all", "--limit", "2", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 metadata entries:"))
        .stdout(predicate::str::contains("store"))
        .stdout(predicate::str::contains("book").not());
}

#[test]
fn test_plan_with_manifest() {
    let videos = videos_dir();
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("sentence.ffconcat");

    aslgloss()
        .args(["plan", "I am going to the store tomorrow", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gloss: I TOMORROW I GO STORE"))
        .stdout(predicate::str::contains("Missing: i, tomorrow, i"))
        .stdout(predicate::str::contains("Manifest written"));

    let text = fs::read_to_string(&manifest).unwrap();
    assert!(text.contains("24946.mp4"));
    assert!(text.contains("55014.mp4"));
}

#[test]
fn test_plan_nothing_found_with_manifest_fails() {
    let videos = videos_dir();
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("empty.ffconcat");

    aslgloss()
        .args(["plan", "zebra", "--simple", "--json"])
        .arg(fixture_path("wlasl-sample.json"))
        .arg("--videos")
        .arg(videos.path())
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing: zebra"));

    assert!(!Path::new(&manifest).exists());
}

#[test]
fn test_plan_without_dataset() {
    aslgloss()
        .args(["plan", "he walked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not configured"));
}
