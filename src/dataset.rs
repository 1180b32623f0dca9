use indicatif::{MultiProgress, ProgressBar};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::fs::{self, copy};
use std::io::{Error, ErrorKind};
use std::path::Path;

use crate::config::Args;
use crate::io::{
    create_data_yaml, list_sorted_files, read_class_names, setup_output_directories,
    write_class_names,
};
use crate::types::{AnnotationRecord, ClassBuckets, ClassSplit, ProcessingStats, SplitManifest};
use crate::utils::create_progress_bar;

/// Group the annotation lines of every label file by class id.
///
/// The n-th regular label file is paired with the n-th entry of `image_files`. The pairing
/// is not checked beyond the image existing at that position.
pub fn collect_class_buckets(
    label_dir: &Path,
    label_files: &[String],
    image_files: &[String],
) -> std::io::Result<ClassBuckets> {
    let mut buckets = ClassBuckets::new();
    let mut index = 0;

    for label_file in label_files {
        let label_path = label_dir.join(label_file);
        if !label_path.is_file() {
            continue;
        }

        let image_file = image_files.get(index).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!(
                    "no image at position {} to pair with label {}",
                    index,
                    label_path.display()
                ),
            )
        })?;

        let content = fs::read_to_string(&label_path)?;
        for class_id in content.lines().filter_map(|line| line.split_whitespace().next()) {
            buckets
                .entry(class_id.to_string())
                .or_default()
                .push(AnnotationRecord {
                    class_id: class_id.to_string(),
                    label_file: label_file.clone(),
                    image_file: image_file.clone(),
                    source_index: index,
                });
        }
        index += 1;
    }

    Ok(buckets)
}

/// Number of records of a bucket that go to the training split
pub fn train_count(len: usize, train_ratio: f64) -> usize {
    (len as f64 * train_ratio).floor() as usize
}

/// Shuffle one class bucket and split it into train and valid records
pub fn split_bucket<R: Rng + ?Sized>(
    mut records: Vec<AnnotationRecord>,
    train_ratio: f64,
    rng: &mut R,
) -> (Vec<AnnotationRecord>, Vec<AnnotationRecord>) {
    let num_train = train_count(records.len(), train_ratio).min(records.len());
    records.shuffle(rng);
    let valid = records.split_off(num_train);
    (records, valid)
}

/// Split every class bucket independently
pub fn split_buckets<R: Rng + ?Sized>(
    buckets: ClassBuckets,
    train_ratio: f64,
    rng: &mut R,
) -> Vec<ClassSplit> {
    buckets
        .into_iter()
        .map(|(class_id, records)| {
            let (train, valid) = split_bucket(records, train_ratio, &mut *rng);
            ClassSplit {
                class_id,
                train,
                valid,
            }
        })
        .collect()
}

/// Copy an image/label pair into the target directories, keeping file names.
///
/// Returns `Ok(false)` without copying anything when either source file is missing.
pub fn copy_pair(
    image_dir: &Path,
    image_file: &str,
    image_target: &Path,
    label_dir: &Path,
    label_file: &str,
    label_target: &Path,
) -> std::io::Result<bool> {
    let image_path = image_dir.join(image_file);
    let label_path = label_dir.join(label_file);
    if !(image_path.is_file() && label_path.is_file()) {
        return Ok(false);
    }

    copy(&image_path, image_target.join(image_file))?;
    copy(&label_path, label_target.join(label_file))?;
    Ok(true)
}

/// Copy all records of one split, returning (copied, skipped)
pub fn copy_split(
    records: &[AnnotationRecord],
    image_dir: &Path,
    label_dir: &Path,
    images_target: &Path,
    labels_target: &Path,
    pb: &ProgressBar,
) -> std::io::Result<(usize, usize)> {
    let mut copied = 0;
    let mut skipped = 0;

    for record in records {
        if copy_pair(
            image_dir,
            &record.image_file,
            images_target,
            label_dir,
            &record.label_file,
            labels_target,
        )? {
            copied += 1;
        } else {
            warn!(
                "Skipping class {} pair {} / {}: file missing",
                record.class_id, record.image_file, record.label_file
            );
            skipped += 1;
        }
        pb.inc(1);
    }

    Ok((copied, skipped))
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

/// Main dataset splitting pipeline
pub fn process_dataset(args: &Args) -> Result<ProcessingStats, Box<dyn std::error::Error>> {
    let image_files = list_sorted_files(&args.image_dir)?;
    let label_files = list_sorted_files(&args.label_dir)?;
    info!(
        "Found {} image entries and {} label entries.",
        image_files.len(),
        label_files.len()
    );
    if image_files.len() != label_files.len() {
        warn!("Image and label counts differ; positional pairing may be wrong.");
    }

    let output_dirs = setup_output_directories(&args.output_dir)?;
    let buckets = collect_class_buckets(&args.label_dir, &label_files, &image_files)?;
    let num_classes = buckets.len();

    let mut stats = ProcessingStats::new();
    stats.total_records = buckets.values().map(Vec::len).sum();
    info!(
        "Collected {} annotation records across {} classes.",
        stats.total_records, num_classes
    );

    let class_names = read_class_names(&args.classes)?;
    write_class_names(&args.output_dir, &class_names)?;

    let mut rng = make_rng(args.seed);
    let splits = split_buckets(buckets, args.train_ratio, &mut *rng);

    let train_total = splits.iter().map(|s| s.train.len()).sum::<usize>();
    let valid_total = splits.iter().map(|s| s.valid.len()).sum::<usize>();
    let bars = MultiProgress::new();
    let train_pb = bars.add(create_progress_bar(train_total as u64, "Train"));
    let valid_pb = bars.add(create_progress_bar(valid_total as u64, "Valid"));

    for split in &splits {
        info!(
            "Class {}: {} train, {} valid",
            split.class_id,
            split.train.len(),
            split.valid.len()
        );
        let (copied, skipped) = copy_split(
            &split.train,
            &args.image_dir,
            &args.label_dir,
            &output_dirs.train_images_dir,
            &output_dirs.train_labels_dir,
            &train_pb,
        )?;
        stats.train_records_copied += copied;
        stats.skipped_missing_pair += skipped;

        let (copied, skipped) = copy_split(
            &split.valid,
            &args.image_dir,
            &args.label_dir,
            &output_dirs.valid_images_dir,
            &output_dirs.valid_labels_dir,
            &valid_pb,
        )?;
        stats.valid_records_copied += copied;
        stats.skipped_missing_pair += skipped;
    }
    train_pb.finish_with_message("Train copy complete");
    valid_pb.finish_with_message("Valid copy complete");

    info!("Creating data.yaml file...");
    let manifest = SplitManifest::new(args.train_ratio, num_classes, class_names);
    if let Err(e) = create_data_yaml(&args.output_dir, &manifest) {
        return Err(format!("Failed to create data.yaml: {}", e).into());
    }

    stats.print_summary();
    info!("Dataset split completed successfully.");
    Ok(stats)
}
