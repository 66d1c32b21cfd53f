//! Gloss to clip planning against an on-disk dataset

use aslgloss_core::{
    convert_to_gloss, simple_gloss, ConcatManifest, DatasetError, GlossError, SignLookup,
    SignPlanner, StitchOptions, VideoStitcher, WlaslIndex,
};
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

const METADATA: &str = r#"[
    {"gloss": "book", "instances": [{"video_id": "00100", "instance_id": 0}]},
    {"gloss": "cat", "instances": [{"instance_id": 7}]},
    {"gloss": "go", "instances": [{"video_id": "00300"}]},
    {"gloss": "store", "instances": [{"video_id": "00400"}]},
    {"gloss": "mat", "instances": [{"video_id": "00500"}]}
]"#;

struct Dataset {
    dir: TempDir,
}

impl Dataset {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let videos = dir.path().join("videos");
        fs::create_dir(&videos).unwrap();
        // "mat" is listed but its clip was never downloaded
        for name in ["00100.mp4", "00007.mp4", "00300.mp4", "00400.mp4"] {
            File::create(videos.join(name)).unwrap();
        }
        fs::write(dir.path().join("WLASL_v0.3.json"), METADATA).unwrap();
        Self { dir }
    }

    fn json(&self) -> std::path::PathBuf {
        self.dir.path().join("WLASL_v0.3.json")
    }

    fn videos(&self) -> std::path::PathBuf {
        self.dir.path().join("videos")
    }

    fn index(&self) -> WlaslIndex {
        WlaslIndex::open(self.json(), self.videos()).unwrap()
    }
}

#[test]
fn test_open_dataset() {
    let dataset = Dataset::new();
    let index = dataset.index();
    assert_eq!(index.available_words(), vec!["book", "cat", "go", "store"]);
    assert_eq!(index.clip("cat"), Some(dataset.videos().join("00007.mp4").as_path()));
    assert!(index.clip("mat").is_none());
    assert_eq!(index.id_for_gloss("mat"), Some(4));
}

#[test]
fn test_plan_from_converted_gloss() {
    let dataset = Dataset::new();
    let index = dataset.index();

    let gloss = convert_to_gloss("I am going to the store tomorrow");
    let plan = SignPlanner::new().plan(&gloss, &index);

    let words: Vec<&str> = plan.clips.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, vec!["go", "store"]);
    assert_eq!(plan.missing, vec!["i", "tomorrow", "i"]);
}

#[test]
fn test_plan_from_simple_gloss() {
    let dataset = Dataset::new();
    let index = dataset.index();

    let gloss = simple_gloss("The cat is on the mat.");
    assert_eq!(gloss, vec!["cat", "on", "mat"]);

    let plan = SignPlanner::new().plan(&gloss, &index);
    assert_eq!(plan.clips.len(), 1);
    assert_eq!(plan.missing, vec!["on", "mat"]);
}

#[test]
fn test_manifest_for_plan() {
    let dataset = Dataset::new();
    let index = dataset.index();
    let plan = SignPlanner::new().plan(&["CAT", "GO:CL:1", "BOOK"], &index);
    assert!(plan.is_complete());

    let output = dataset.dir.path().join("sentence.ffconcat");
    let written = ConcatManifest::new()
        .stitch(&plan.paths(), &StitchOptions::default(), &output)
        .unwrap();

    let manifest = fs::read_to_string(written).unwrap();
    let files: Vec<&str> = manifest.lines().filter(|l| l.starts_with("file ")).collect();
    assert_eq!(files.len(), 3);
    assert!(files[0].ends_with("00007.mp4'"));
    assert!(files[2].ends_with("00100.mp4'"));
}

#[test]
fn test_nothing_found_is_not_stitched() {
    let dataset = Dataset::new();
    let plan = SignPlanner::new().plan(&["ZEBRA"], &dataset.index());
    assert!(plan.is_empty());

    let output = dataset.dir.path().join("empty.ffconcat");
    let result = ConcatManifest::new().stitch(&plan.paths(), &StitchOptions::default(), &output);
    assert!(matches!(result, Err(GlossError::NothingToStitch)));
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_missing_metadata_file() {
    let dataset = Dataset::new();
    let result = WlaslIndex::open(dataset.dir.path().join("missing.json"), dataset.videos());
    match result {
        Err(DatasetError::Io { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
