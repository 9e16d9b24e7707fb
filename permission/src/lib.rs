//! Cross-platform authorization status inspection.
//!
//! This crate provides a unified API for checking and requesting the
//! permissions the BLE Manager app depends on (Bluetooth, location, camera,
//! photo library, microphone) across iOS, macOS, Android, Windows, and Linux.
//!
//! Checks are synchronous, non-blocking reads of the authorization state the
//! OS already holds; they never show a prompt. [`request`] triggers the
//! platform's interactive flow and returns immediately. The outcome of a
//! request is only observable by calling [`check`] again later, typically when
//! the app returns to the foreground.

#![warn(missing_docs)]

mod report;
/// Platform-specific implementations.
pub mod sys;

pub use report::PermissionReport;

/// A protected capability whose authorization status can be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Permission {
    /// Access to Bluetooth radios and peripherals.
    Bluetooth,
    /// Access to device location.
    Location,
    /// Access to device camera.
    Camera,
    /// Access to the photo library.
    PhotoLibrary,
    /// Access to the microphone.
    Microphone,
}

impl Permission {
    /// Every supported permission, in the canonical inspection order.
    ///
    /// [`check_all`] walks this list, so reports always carry their entries
    /// in this order.
    pub const ALL: [Self; 5] = [
        Self::Bluetooth,
        Self::Location,
        Self::Camera,
        Self::PhotoLibrary,
        Self::Microphone,
    ];

    /// Stable lowercase name, used in rendered reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bluetooth => "bluetooth",
            Self::Location => "location",
            Self::Camera => "camera",
            Self::PhotoLibrary => "photo-library",
            Self::Microphone => "microphone",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current authorization status of a permission.
///
/// Platform values are normalized into this closed set. Values a platform
/// does not support for a given domain simply never occur for it (e.g. the
/// microphone has no "when in use" granularity), and values this crate does
/// not recognize collapse to [`Unknown`](Self::Unknown) rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// The user has not been asked yet.
    NotDetermined,
    /// Access is restricted (e.g. parental controls on iOS).
    Restricted,
    /// The user has denied access.
    Denied,
    /// Access is authorized at all times, including in the background.
    AuthorizedAlways,
    /// Access is authorized only while the app is in use.
    AuthorizedWhenInUse,
    /// Access is authorized, for domains without always/when-in-use
    /// granularity.
    Authorized,
    /// The platform reported a value this crate does not recognize, or the
    /// authorization API is unavailable on the running OS version.
    Unknown,
}

impl PermissionStatus {
    /// Maps a raw status code from a platform backend to a status.
    ///
    /// The codes are the wire contract shared with the Swift bridge and the
    /// Android `PermissionHelper`; anything outside the known range maps to
    /// [`Unknown`](Self::Unknown) so that future platform values degrade
    /// safely instead of failing.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::NotDetermined,
            1 => Self::Restricted,
            2 => Self::Denied,
            3 => Self::AuthorizedAlways,
            4 => Self::AuthorizedWhenInUse,
            5 => Self::Authorized,
            _ => Self::Unknown,
        }
    }

    /// Whether this status allows the capability to be used right now.
    #[must_use]
    pub const fn is_authorized(self) -> bool {
        matches!(
            self,
            Self::AuthorizedAlways | Self::AuthorizedWhenInUse | Self::Authorized
        )
    }

    /// Stable lowercase name, used in rendered reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotDetermined => "not determined",
            Self::Restricted => "restricted",
            Self::Denied => "denied",
            Self::AuthorizedAlways => "authorized always",
            Self::AuthorizedWhenInUse => "authorized when in use",
            Self::Authorized => "authorized",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when requesting a permission.
#[derive(Debug, Clone)]
pub enum PermissionError {
    /// The platform has no programmatic request flow for this permission.
    NotSupported,
    /// An unknown error occurred.
    Unknown(String),
}

impl std::fmt::Display for PermissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSupported => write!(f, "permission request not supported on this platform"),
            Self::Unknown(msg) => write!(f, "unknown error: {msg}"),
        }
    }
}

impl std::error::Error for PermissionError {}

/// Check the current status of a permission without requesting it.
///
/// This never blocks on user interaction and never fails: if the platform
/// API is unavailable or reports something unrecognized, the result is
/// [`PermissionStatus::Unknown`].
#[must_use]
pub fn check(permission: Permission) -> PermissionStatus {
    sys::check(permission)
}

/// Check every permission and collect the results into a report.
///
/// Entries appear in [`Permission::ALL`] order, one per permission, so
/// repeated calls over unchanged OS state produce identical reports.
#[must_use]
pub fn check_all() -> PermissionReport {
    PermissionReport::collect(check)
}

/// Trigger the platform's interactive request flow for a permission.
///
/// Fire-and-forget: this returns as soon as the request is handed to the
/// platform, without waiting for the user to respond. Observe the outcome by
/// calling [`check`] again later.
///
/// # Errors
/// Returns [`PermissionError::NotSupported`] if the platform has no
/// programmatic request flow for this permission.
pub fn request(permission: Permission) -> Result<(), PermissionError> {
    sys::request(permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_stable() {
        assert_eq!(
            Permission::ALL,
            [
                Permission::Bluetooth,
                Permission::Location,
                Permission::Camera,
                Permission::PhotoLibrary,
                Permission::Microphone,
            ]
        );
    }

    #[test]
    fn raw_codes_map_to_statuses() {
        assert_eq!(PermissionStatus::from_raw(0), PermissionStatus::NotDetermined);
        assert_eq!(PermissionStatus::from_raw(1), PermissionStatus::Restricted);
        assert_eq!(PermissionStatus::from_raw(2), PermissionStatus::Denied);
        assert_eq!(PermissionStatus::from_raw(3), PermissionStatus::AuthorizedAlways);
        assert_eq!(PermissionStatus::from_raw(4), PermissionStatus::AuthorizedWhenInUse);
        assert_eq!(PermissionStatus::from_raw(5), PermissionStatus::Authorized);
    }

    #[test]
    fn unrecognized_raw_codes_degrade_to_unknown() {
        for code in [-1, 6, 7, 42, i32::MAX, i32::MIN] {
            assert_eq!(PermissionStatus::from_raw(code), PermissionStatus::Unknown);
        }
    }

    #[test]
    fn authorized_variants_collapse() {
        assert!(PermissionStatus::Authorized.is_authorized());
        assert!(PermissionStatus::AuthorizedAlways.is_authorized());
        assert!(PermissionStatus::AuthorizedWhenInUse.is_authorized());
        assert!(!PermissionStatus::Denied.is_authorized());
        assert!(!PermissionStatus::NotDetermined.is_authorized());
        assert!(!PermissionStatus::Unknown.is_authorized());
    }

    #[test]
    fn check_all_is_idempotent() {
        // No permission change can happen between two immediate calls.
        assert_eq!(check_all(), check_all());
    }

    #[test]
    fn check_never_leaves_the_closed_status_set() {
        for permission in Permission::ALL {
            // The match is the assertion: a non-enum value cannot exist.
            let _status: PermissionStatus = check(permission);
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn request_returns_without_prompting() {
        assert!(request(Permission::Location).is_ok());
    }
}
