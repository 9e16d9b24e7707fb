//! Point-in-time snapshots of authorization state.

use crate::{Permission, PermissionStatus};

/// An immutable snapshot of the authorization status of every permission.
///
/// Reports carry exactly one entry per permission, in [`Permission::ALL`]
/// order. A report captures one moment in time; it never updates itself, so
/// take a fresh one (via [`check_all`](crate::check_all)) when the state may
/// have changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionReport {
    entries: Vec<(Permission, PermissionStatus)>,
}

impl PermissionReport {
    /// Builds a report by querying `status` for each permission in canonical
    /// order.
    pub fn collect(mut status: impl FnMut(Permission) -> PermissionStatus) -> Self {
        Self {
            entries: Permission::ALL
                .into_iter()
                .map(|permission| (permission, status(permission)))
                .collect(),
        }
    }

    /// The status recorded for `permission`, if it was part of the snapshot.
    #[must_use]
    pub fn status_of(&self, permission: Permission) -> Option<PermissionStatus> {
        self.entries
            .iter()
            .find(|(p, _)| *p == permission)
            .map(|(_, status)| *status)
    }

    /// Iterates the entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Permission, PermissionStatus)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every recorded status allows use of its capability.
    #[must_use]
    pub fn all_authorized(&self) -> bool {
        self.entries.iter().all(|(_, status)| status.is_authorized())
    }
}

impl std::fmt::Display for PermissionReport {
    /// Renders one `permission: status` line per entry, in canonical order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (permission, status) in &self.entries {
            writeln!(f, "{permission}: {status}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_statuses(permission: Permission) -> PermissionStatus {
        match permission {
            Permission::Bluetooth | Permission::Microphone => PermissionStatus::Denied,
            Permission::Location => PermissionStatus::AuthorizedWhenInUse,
            Permission::Camera => PermissionStatus::NotDetermined,
            Permission::PhotoLibrary => PermissionStatus::Authorized,
        }
    }

    #[test]
    fn one_entry_per_permission_in_canonical_order() {
        let report = PermissionReport::collect(mixed_statuses);
        let entries: Vec<_> = report.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Permission::Bluetooth, PermissionStatus::Denied),
                (Permission::Location, PermissionStatus::AuthorizedWhenInUse),
                (Permission::Camera, PermissionStatus::NotDetermined),
                (Permission::PhotoLibrary, PermissionStatus::Authorized),
                (Permission::Microphone, PermissionStatus::Denied),
            ]
        );
    }

    #[test]
    fn collect_is_deterministic() {
        let first = PermissionReport::collect(mixed_statuses);
        let second = PermissionReport::collect(mixed_statuses);
        assert_eq!(first, second);
        assert_eq!(first.len(), Permission::ALL.len());
        assert!(!first.is_empty());
    }

    #[test]
    fn status_lookup_matches_entries() {
        let report = PermissionReport::collect(mixed_statuses);
        assert_eq!(
            report.status_of(Permission::Location),
            Some(PermissionStatus::AuthorizedWhenInUse)
        );
        assert_eq!(
            report.status_of(Permission::Camera),
            Some(PermissionStatus::NotDetermined)
        );
    }

    #[test]
    fn unknown_statuses_still_produce_entries() {
        let report = PermissionReport::collect(|_| PermissionStatus::Unknown);
        assert_eq!(report.len(), Permission::ALL.len());
        assert!(report.iter().all(|(_, status)| status == PermissionStatus::Unknown));
    }

    #[test]
    fn all_authorized_requires_every_entry() {
        let granted = PermissionReport::collect(|_| PermissionStatus::Authorized);
        assert!(granted.all_authorized());

        let mixed = PermissionReport::collect(mixed_statuses);
        assert!(!mixed.all_authorized());
    }

    #[test]
    fn renders_one_line_per_entry() {
        let report = PermissionReport::collect(mixed_statuses);
        let rendered = report.to_string();
        assert_eq!(
            rendered,
            "bluetooth: denied\n\
             location: authorized when in use\n\
             camera: not determined\n\
             photo-library: authorized\n\
             microphone: denied\n"
        );
    }
}
