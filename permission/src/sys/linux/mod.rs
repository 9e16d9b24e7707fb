//! Linux permission implementation.
//!
//! On Linux, most permissions are handled at the system level via:
//! - File permissions (camera/microphone devices in /dev)
//! - Desktop portal systems (Flatpak/Snap sandboxing)
//! - User groups (e.g., 'video' group for camera access)
//!
//! Bluetooth goes through BlueZ on D-Bus, which any session user may talk to.

use crate::{Permission, PermissionError, PermissionStatus};

pub(crate) fn check(_permission: Permission) -> PermissionStatus {
    // Linux permissions are generally handled at the OS/container level
    // Applications typically have access unless sandboxed
    PermissionStatus::Authorized
}

pub(crate) fn request(_permission: Permission) -> Result<(), PermissionError> {
    // No runtime permission prompts on traditional Linux
    // Sandboxed apps (Flatpak/Snap) use portals which handle this differently
    Ok(())
}
