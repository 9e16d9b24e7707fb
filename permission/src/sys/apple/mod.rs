//! Apple platform (iOS/macOS) permission implementation using swift-bridge.

use crate::{Permission, PermissionError, PermissionStatus};

#[swift_bridge::bridge]
mod ffi {
    // Shared enum bridged between Rust and Swift
    enum PermissionDomain {
        Bluetooth,
        Location,
        Camera,
        PhotoLibrary,
        Microphone,
    }

    extern "Swift" {
        // Returns the canonical status code for `PermissionStatus::from_raw`.
        // Swift reports codes this crate has never heard of (newer OS values,
        // `@unknown default` arms) as-is; `from_raw` turns them into Unknown.
        fn authorization_status(domain: PermissionDomain) -> i32;

        // Kicks off the system prompt flow and returns whether the domain
        // has one. Never waits for the user.
        fn trigger_authorization_request(domain: PermissionDomain) -> bool;
    }
}

const fn domain_to_ffi(permission: Permission) -> ffi::PermissionDomain {
    match permission {
        Permission::Bluetooth => ffi::PermissionDomain::Bluetooth,
        Permission::Location => ffi::PermissionDomain::Location,
        Permission::Camera => ffi::PermissionDomain::Camera,
        Permission::PhotoLibrary => ffi::PermissionDomain::PhotoLibrary,
        Permission::Microphone => ffi::PermissionDomain::Microphone,
    }
}

/// Check the status of a permission on Apple platforms.
pub(crate) fn check(permission: Permission) -> PermissionStatus {
    PermissionStatus::from_raw(ffi::authorization_status(domain_to_ffi(permission)))
}

/// Trigger the system prompt for a permission on Apple platforms.
///
/// Only location (`requestWhenInUseAuthorization`) and Bluetooth (central
/// manager activation) have a request flow on the Swift side; the other
/// domains report `NotSupported`.
pub(crate) fn request(permission: Permission) -> Result<(), PermissionError> {
    if ffi::trigger_authorization_request(domain_to_ffi(permission)) {
        Ok(())
    } else {
        Err(PermissionError::NotSupported)
    }
}
