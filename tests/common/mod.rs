//! Common test utilities

use std::path::{Path, PathBuf};

/// Path to a file under the crate's demos directory
pub fn demo_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

/// A minimal two-stop-per-phase dataset with the given retreat strength at
/// the western end
pub fn small_dataset(west_retreat_troops: u32) -> String {
    format!(
        r#"
[[advance]]
label = "West"
position = 0.0
magnitude = 1000
timestamp = "Jun"

[[advance]]
label = "East"
position = 1.0
magnitude = 800
timestamp = "Sep"

[[retreat]]
label = "West"
position = 0.0
magnitude = {west_retreat_troops}
timestamp = "Dec"

[[retreat]]
label = "East"
position = 1.0
magnitude = 800
timestamp = "Oct"

[[temperature]]
at = "West"
reaumur = -20

[[temperature]]
at = "East"
reaumur = 0
"#
    )
}

/// Write text to a file in the given directory and return its path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}
