use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line arguments for splitting a YOLO dataset into train and validation sets.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Split dataset for YOLO training", long_about = None)]
pub struct Args {
    /// Directory containing images
    #[arg(short = 'i', long = "image_dir")]
    pub image_dir: PathBuf,

    /// Directory containing labels, one file per image
    #[arg(short = 'l', long = "label_dir")]
    pub label_dir: PathBuf,

    /// Path of the classes.txt file, one class name per line
    #[arg(short = 'c', long = "classes")]
    pub classes: PathBuf,

    /// Output directory
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: PathBuf,

    /// Proportion of each class to use for training
    #[arg(short = 'r', long = "train_ratio", default_value_t = 0.8, value_parser = validate_ratio)]
    pub train_ratio: f64,

    /// Seed for reproducible shuffling; random when omitted
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

// Validate that the ratio is between 0.0 and 1.0
pub fn validate_ratio(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("RATIO must be between 0.0 and 1.0".to_string()),
    }
}
