//! # Blekit
//!
//! A cross-platform capability kit for the BLE Manager app.
//!
//! Blekit provides a unified API for the system capabilities the app touches,
//! across macOS, iOS, Android, Windows, and Linux.
//!
//! ## Features
//!
//! Blekit is modular. Enable only the features you need to keep your
//! dependencies minimal.
//!
//! - `permission`: Authorization status inspection and permission requests.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! blekit = { version = "0.1", features = ["permission"] }
//! ```
//!
//! ```rust,ignore
//! use blekit::permission::{self, Permission};
//!
//! let report = permission::check_all();
//! println!("{report}");
//! if report.status_of(Permission::Bluetooth) != Some(permission::PermissionStatus::Authorized) {
//!     let _ = permission::request(Permission::Bluetooth);
//! }
//! ```

#[cfg(feature = "permission")]
pub use blekit_permission as permission;
