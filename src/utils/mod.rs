pub mod dotnet;
pub mod fs;
pub mod git;
pub mod version;

pub use dotnet::check_dotnet_available;
pub use fs::{find_nupkgs, find_version_files};
pub use git::get_repo_root;
pub use version::{collect_versions, export_versions, package_version_var};
