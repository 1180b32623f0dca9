use std::fs::{self, File};
use std::io::{BufWriter, Error, ErrorKind, Write};
use std::path::Path;

use crate::types::{OutputDirs, SplitManifest};
use crate::utils::{create_output_directory, yaml_single_quoted};

/// Set up the `datasets/{train,valid}/{images,labels}` tree under the output directory
pub fn setup_output_directories(output_dir: &Path) -> std::io::Result<OutputDirs> {
    let datasets_dir = output_dir.join("datasets");

    Ok(OutputDirs {
        train_images_dir: create_output_directory(&datasets_dir.join("train").join("images"))?,
        train_labels_dir: create_output_directory(&datasets_dir.join("train").join("labels"))?,
        valid_images_dir: create_output_directory(&datasets_dir.join("valid").join("images"))?,
        valid_labels_dir: create_output_directory(&datasets_dir.join("valid").join("labels"))?,
    })
}

/// List the entry names of a directory in byte-wise sorted order.
///
/// Entries of every kind are listed: pairing between the image and label listings is
/// positional, so filtering one side would shift the other. A name that is not valid
/// UTF-8 is an `InvalidData` error.
pub fn list_sorted_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let file_name = entry?.file_name();
        let name = file_name.into_string().map_err(|raw| {
            Error::new(
                ErrorKind::InvalidData,
                format!("non UTF-8 file name {:?} in {}", raw, dir.display()),
            )
        })?;
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Read the class names file, one trimmed name per line
pub fn read_class_names(path: &Path) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Write the class names to `classes.txt` in the output directory
pub fn write_class_names(output_dir: &Path, class_names: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(output_dir.join("classes.txt"))?);
    for class_name in class_names {
        writeln!(writer, "{}", class_name)?;
    }
    writer.flush()
}

/// Create the data.yaml file for YOLO training
pub fn create_data_yaml(output_dir: &Path, manifest: &SplitManifest) -> std::io::Result<()> {
    let mut data_yaml = BufWriter::new(File::create(output_dir.join("data.yaml"))?);

    let mut yaml_content = String::new();
    if manifest.names.is_empty() {
        yaml_content.push_str("names: []\n");
    } else {
        yaml_content.push_str("names:\n");
        for name in &manifest.names {
            yaml_content.push_str(&format!("- {}\n", yaml_single_quoted(name)));
        }
    }
    yaml_content.push_str(&format!("nc: {}\n", manifest.nc));
    yaml_content.push_str(&format!("train: {}\n", manifest.train));
    yaml_content.push_str(&format!("val: {}\n", manifest.val));

    data_yaml.write_all(yaml_content.as_bytes())?;
    data_yaml.flush()
}
