//! Windows permission implementation using WinRT.

use crate::{Permission, PermissionError, PermissionStatus};

pub(crate) fn check(permission: Permission) -> PermissionStatus {
    match permission {
        Permission::Location => check_location(),
        // Most capabilities are implicit for desktop apps on Windows
        _ => PermissionStatus::Authorized,
    }
}

pub(crate) fn request(permission: Permission) -> Result<(), PermissionError> {
    match permission {
        Permission::Location => request_location(),
        _ => Err(PermissionError::NotSupported),
    }
}

fn check_location() -> PermissionStatus {
    use windows::Devices::Geolocation::{Geolocator, PositionStatus};

    // LocationStatus is a cached read; it never prompts the user.
    let Ok(geolocator) = Geolocator::new() else {
        return PermissionStatus::Unknown;
    };
    match geolocator.LocationStatus() {
        Ok(status) => match status {
            PositionStatus::Ready | PositionStatus::Initializing => PermissionStatus::Authorized,
            PositionStatus::Disabled => PermissionStatus::Denied,
            PositionStatus::NotInitialized => PermissionStatus::NotDetermined,
            _ => PermissionStatus::Unknown,
        },
        Err(_) => PermissionStatus::Unknown,
    }
}

fn request_location() -> Result<(), PermissionError> {
    use windows::Devices::Geolocation::Geolocator;

    // RequestAccessAsync surfaces the consent dialog if needed. Dropping the
    // async operation without polling keeps this fire-and-forget.
    match Geolocator::RequestAccessAsync() {
        Ok(_operation) => Ok(()),
        Err(e) => Err(PermissionError::Unknown(e.to_string())),
    }
}
