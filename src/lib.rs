//! Deployment helper for the NuGet packages of this repository.
//!
//! The `deploy` binary reads per-project `.version` sidecar files,
//! exports `<ProjectName>_PACKAGE_VERSION` environment variables, runs
//! the release build, and pushes the resulting `.nupkg` artifacts to
//! the package registry. Push failures never fail the pipeline.
//!
//! # Examples
//!
//! ## Deriving the version variable name
//!
//! ```
//! use deploy::utils::version::package_version_var;
//!
//! assert_eq!(package_version_var("KzBsv"), "KzBsv_PACKAGE_VERSION");
//! assert_eq!(package_version_var("Kz.Bsv"), "Kz_Bsv_PACKAGE_VERSION");
//! ```
//!
//! ## Running the build step
//!
//! ```no_run
//! use deploy::utils::dotnet;
//!
//! let root = std::path::Path::new(".");
//! dotnet::build(root, "Release").unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod types;
pub mod utils;

pub use semver::Version;

pub type Result<T> = anyhow::Result<T>;
