//! Static Path-Fast content shown around the player.
//!
//! - `package_manager`: install commands and the scoped selection state
//! - `site`: project links, feature list, installation steps, code examples

mod package_manager;
mod site;

pub use package_manager::{PackageManager, PackageManagerSelection};
pub use site::{
    code_example, Contribution, Feature, InstallChecklist, InstallStep, SiteInfo, CODE_EXAMPLES,
    CONTRIBUTIONS, FEATURES, INSTALLATION_STEPS, SITE,
};
