//! CLI mode implementations

mod compare;
mod hover;
mod inspect;

pub use compare::run_compare;
pub use hover::run_hover;
pub use inspect::run_inspect;

use minard::data::{Campaign, load_campaign, minard_1812};

use crate::output::get_display_name;

/// Name shown for the built-in dataset
pub const BUILTIN_NAME: &str = "built-in (Minard, 1812)";

/// A loaded dataset and the name to show for it
pub struct Dataset {
    pub name: String,
    pub campaign: Campaign,
}

/// Load a dataset file, or the built-in campaign when no path is given
pub fn load_dataset(path: Option<&str>) -> Result<Dataset, String> {
    match path {
        Some(path) => Ok(Dataset {
            name: get_display_name(path).to_string(),
            campaign: load_campaign(std::path::Path::new(path)).map_err(|e| e.to_string())?,
        }),
        None => Ok(Dataset {
            name: BUILTIN_NAME.to_string(),
            campaign: minard_1812().map_err(|e| e.to_string())?,
        }),
    }
}
