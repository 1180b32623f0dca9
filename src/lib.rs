//! Per-class train/validation splitter for YOLO datasets
//!
//! This library groups YOLO label lines by class id, splits every class independently
//! and lays the result out the way YOLO training tools expect it.

pub mod config;
pub mod dataset;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use dataset::{collect_class_buckets, process_dataset, split_bucket, split_buckets};
pub use io::{create_data_yaml, setup_output_directories};
pub use types::{AnnotationRecord, ClassBuckets, ClassSplit, OutputDirs, SplitManifest};
