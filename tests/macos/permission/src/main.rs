//! macOS test binary for blekit-permission.
//!
//! Run with: cargo run -p blekit-permission-test

use blekit_permission::{Permission, PermissionStatus};

fn main() {
    println!("=== Blekit Permission Test (macOS) ===\n");

    println!("Checking all permissions...");
    let report = blekit_permission::check_all();
    print!("{report}");
    println!();

    if report.all_authorized() {
        println!("✓ Everything is authorized, nothing to request.");
        return;
    }

    // Only location and Bluetooth have a request flow here
    for permission in [Permission::Location, Permission::Bluetooth] {
        let status = report.status_of(permission).unwrap_or(PermissionStatus::Unknown);
        if status.is_authorized() {
            continue;
        }
        println!("Requesting {permission} permission...");
        match blekit_permission::request(permission) {
            Ok(()) => println!("✓ Request handed to the system, poll again for the outcome."),
            Err(e) => println!("✗ Request failed: {e}"),
        }
    }

    println!("\nRe-checking after requests:");
    print!("{}", blekit_permission::check_all());
}
