use std::collections::BTreeMap;
use std::path::PathBuf;

// One annotated object line of a label file, tied to its image/label pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub class_id: String,
    pub label_file: String,
    pub image_file: String,
    pub source_index: usize,
}

// Records grouped by class id, iterated in class id order
pub type ClassBuckets = BTreeMap<String, Vec<AnnotationRecord>>;

// The train/valid partition of a single class bucket
#[derive(Debug, Clone)]
pub struct ClassSplit {
    pub class_id: String,
    pub train: Vec<AnnotationRecord>,
    pub valid: Vec<AnnotationRecord>,
}

// Struct to hold the paths to the output directories for the train/valid splits
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub train_images_dir: PathBuf,
    pub train_labels_dir: PathBuf,
    pub valid_images_dir: PathBuf,
    pub valid_labels_dir: PathBuf,
}

/// Layout description written to `data.yaml` for downstream training tools.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitManifest {
    pub train_ratio: f64,
    pub train: String,
    pub val: String,
    /// Number of distinct class ids seen in the labels. May differ from `names.len()`.
    pub nc: usize,
    pub names: Vec<String>,
}

impl SplitManifest {
    pub fn new(train_ratio: f64, nc: usize, names: Vec<String>) -> Self {
        Self {
            train_ratio,
            train: "./train/images/".to_string(),
            val: "./valid/images/".to_string(),
            nc,
            names,
        }
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_records: usize,
    pub train_records_copied: usize,
    pub valid_records_copied: usize,
    pub skipped_missing_pair: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        log::info!("=== Split Summary ===");
        log::info!("Annotation records: {}", self.total_records);
        log::info!("Train records copied: {}", self.train_records_copied);
        log::info!("Valid records copied: {}", self.valid_records_copied);
        if self.skipped_missing_pair > 0 {
            log::warn!(
                "Skipped {} records whose image or label file is missing",
                self.skipped_missing_pair
            );
        }
    }
}
