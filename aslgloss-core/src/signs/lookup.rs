//! Word to sign-clip lookup

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DatasetError, DatasetResult};

/// Lookup from a lowercase word to its sign clips
pub trait SignLookup: Send + Sync {
    /// All clips for a word, or `None` when the word has no sign
    fn clips(&self, word: &str) -> Option<&[PathBuf]>;

    /// The clip used for a word; always the first one
    fn clip(&self, word: &str) -> Option<&Path> {
        self.clips(word)
            .and_then(|clips| clips.first())
            .map(PathBuf::as_path)
    }
}

impl SignLookup for HashMap<String, Vec<PathBuf>> {
    fn clips(&self, word: &str) -> Option<&[PathBuf]> {
        self.get(word)
            .map(Vec::as_slice)
            .filter(|clips| !clips.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct WlaslEntry {
    gloss: String,
    #[serde(default)]
    instances: Vec<WlaslInstance>,
}

#[derive(Debug, Deserialize)]
struct WlaslInstance {
    video_id: Option<String>,
    instance_id: Option<u64>,
}

impl WlaslInstance {
    fn filename(&self) -> Option<String> {
        match (&self.video_id, self.instance_id) {
            (Some(video_id), _) => Some(format!("{video_id}.mp4")),
            (None, Some(instance_id)) => Some(format!("{instance_id:05}.mp4")),
            (None, None) => None,
        }
    }
}

/// Sign index over the WLASL metadata file and its videos directory
///
/// Only clips that exist on disk are indexed. Words without a single
/// existing clip are left out entirely. When a gloss appears in several
/// entries, the last entry with clips replaces the earlier ones.
#[derive(Debug, Clone)]
pub struct WlaslIndex {
    videos_dir: PathBuf,
    clips: HashMap<String, Vec<PathBuf>>,
    /// Lowercased gloss per metadata entry, in file order
    glosses: Vec<String>,
}

impl WlaslIndex {
    /// Load the index from a metadata file
    pub fn open<P, Q>(json_path: P, videos_dir: Q) -> DatasetResult<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let json_path = json_path.as_ref();
        let videos_dir = videos_dir.as_ref();

        if !videos_dir.is_dir() {
            return Err(DatasetError::MissingVideosDir(videos_dir.to_path_buf()));
        }

        let json = fs::read_to_string(json_path).map_err(|source| DatasetError::Io {
            path: json_path.to_path_buf(),
            source,
        })?;

        let index = Self::from_json_str(&json, videos_dir)?;
        tracing::debug!(
            path = %json_path.display(),
            entries = index.glosses.len(),
            words = index.clips.len(),
            "loaded sign index"
        );
        Ok(index)
    }

    /// Build the index from metadata JSON already in memory
    pub fn from_json_str<P: AsRef<Path>>(json: &str, videos_dir: P) -> DatasetResult<Self> {
        let entries: Vec<WlaslEntry> = serde_json::from_str(json)?;
        let videos_dir = videos_dir.as_ref().to_path_buf();

        let mut clips: HashMap<String, Vec<PathBuf>> = HashMap::new();
        let mut glosses = Vec::with_capacity(entries.len());

        for entry in entries {
            let gloss = entry.gloss.to_lowercase();

            let found: Vec<PathBuf> = entry
                .instances
                .iter()
                .filter_map(WlaslInstance::filename)
                .map(|filename| videos_dir.join(filename))
                .filter(|path| path.is_file())
                .collect();

            if !found.is_empty() {
                clips.insert(gloss.clone(), found);
            }
            glosses.push(gloss);
        }

        Ok(Self {
            videos_dir,
            clips,
            glosses,
        })
    }

    /// Clip at `index` for a word
    pub fn specific_clip(&self, word: &str, index: usize) -> Option<&Path> {
        self.clips
            .get(&word.to_lowercase())
            .and_then(|clips| clips.get(index))
            .map(PathBuf::as_path)
    }

    /// Words with at least one clip, sorted
    pub fn available_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.clips.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Gloss of the metadata entry at position `id`
    pub fn gloss_for_id(&self, id: usize) -> Option<&str> {
        self.glosses.get(id).map(String::as_str)
    }

    /// Position of the metadata entry for a word; the last entry wins on duplicates
    pub fn id_for_gloss(&self, word: &str) -> Option<usize> {
        let word = word.to_lowercase();
        self.glosses.iter().rposition(|gloss| *gloss == word)
    }

    /// Number of metadata entries, with or without clips
    pub fn entry_count(&self) -> usize {
        self.glosses.len()
    }

    pub fn videos_dir(&self) -> &Path {
        &self.videos_dir
    }

    /// Number of words with clips
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl SignLookup for WlaslIndex {
    fn clips(&self, word: &str) -> Option<&[PathBuf]> {
        self.clips.get(&word.to_lowercase()).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    const METADATA: &str = r#"[
        {"gloss": "Book", "instances": [
            {"video_id": "07069", "instance_id": 0},
            {"video_id": "07070", "instance_id": 1},
            {"video_id": "99999", "instance_id": 2}
        ]},
        {"gloss": "drink", "instances": [
            {"instance_id": 12}
        ]},
        {"gloss": "computer", "instances": [
            {"video_id": "12345"}
        ]},
        {"gloss": "empty", "instances": [{}]},
        {"gloss": "book", "instances": []}
    ]"#;

    fn videos_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["07069.mp4", "07070.mp4", "00012.mp4"] {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn test_only_existing_clips_are_indexed() {
        let dir = videos_dir();
        let index = WlaslIndex::from_json_str(METADATA, dir.path()).unwrap();

        let clips = index.clips("book").unwrap();
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[0], dir.path().join("07069.mp4"));
        assert!(index.clips("computer").is_none());
        assert!(index.clips("empty").is_none());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_instance_id_is_zero_padded() {
        let dir = videos_dir();
        let index = WlaslIndex::from_json_str(METADATA, dir.path()).unwrap();
        assert_eq!(index.clip("drink"), Some(dir.path().join("00012.mp4").as_path()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dir = videos_dir();
        let index = WlaslIndex::from_json_str(METADATA, dir.path()).unwrap();
        assert!(index.clips("BOOK").is_some());
        assert_eq!(
            index.specific_clip("Book", 1),
            Some(dir.path().join("07070.mp4").as_path())
        );
        assert!(index.specific_clip("book", 2).is_none());
    }

    #[test]
    fn test_ids_follow_entry_order() {
        let dir = videos_dir();
        let index = WlaslIndex::from_json_str(METADATA, dir.path()).unwrap();
        assert_eq!(index.gloss_for_id(0), Some("book"));
        assert_eq!(index.gloss_for_id(2), Some("computer"));
        assert_eq!(index.gloss_for_id(10), None);
        assert_eq!(index.id_for_gloss("book"), Some(4));
        assert_eq!(index.id_for_gloss("drink"), Some(1));
        assert_eq!(index.id_for_gloss("zebra"), None);
    }

    #[test]
    fn test_available_words_sorted() {
        let dir = videos_dir();
        let index = WlaslIndex::from_json_str(METADATA, dir.path()).unwrap();
        assert_eq!(index.available_words(), vec!["book", "drink"]);
        assert_eq!(index.entry_count(), 5);
    }

    #[test]
    fn test_later_entry_replaces_clips_of_same_gloss() {
        let dir = videos_dir();
        let metadata = r#"[
            {"gloss": "book", "instances": [{"video_id": "07069"}]},
            {"gloss": "BOOK", "instances": [{"video_id": "07070"}, {"instance_id": 12}]},
            {"gloss": "book", "instances": [{"video_id": "99999"}]}
        ]"#;
        let index = WlaslIndex::from_json_str(metadata, dir.path()).unwrap();

        // The last entry has no clip on disk and leaves the second one in place
        assert_eq!(
            index.clips("book").unwrap(),
            &[dir.path().join("07070.mp4"), dir.path().join("00012.mp4")]
        );
        assert_eq!(index.id_for_gloss("book"), Some(2));
    }

    #[test]
    fn test_open_reports_missing_videos_dir() {
        let dir = TempDir::new().unwrap();
        let result = WlaslIndex::open(dir.path().join("meta.json"), dir.path().join("nope"));
        assert!(matches!(result, Err(DatasetError::MissingVideosDir(_))));
    }

    #[test]
    fn test_open_reports_missing_metadata() {
        let dir = TempDir::new().unwrap();
        let result = WlaslIndex::open(dir.path().join("meta.json"), dir.path());
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_malformed_metadata() {
        let dir = TempDir::new().unwrap();
        let result = WlaslIndex::from_json_str("{not json", dir.path());
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_map_lookup_treats_empty_as_missing() {
        let mut map: HashMap<String, Vec<PathBuf>> = HashMap::new();
        map.insert("cat".to_string(), vec![PathBuf::from("cat.mp4")]);
        map.insert("dog".to_string(), Vec::new());
        assert_eq!(map.clip("cat"), Some(Path::new("cat.mp4")));
        assert!(map.clips("dog").is_none());
        assert!(map.clips("bird").is_none());
    }
}
