//! Zone detection
//!
//! A zone is a logical package grouping inside a monorepo (`packages/*`,
//! `apps/*`). Projects without those directories form a single zone named
//! after the project.

use std::collections::BTreeMap;

/// Directory prefixes that delimit monorepo zones
const ZONE_ROOTS: [&str; 2] = ["packages", "apps"];

/// Group relative file paths into zones
pub fn detect_zones(
    project_name: &str,
    files: impl IntoIterator<Item = String>,
) -> BTreeMap<String, Vec<String>> {
    let mut zones: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for file in files {
        let zone = zone_for(project_name, &file);
        zones.entry(zone).or_default().push(file);
    }

    zones
}

fn zone_for(project_name: &str, file: &str) -> String {
    let mut parts = file.split('/');

    if let (Some(first), Some(second)) = (parts.next(), parts.next()) {
        // Require a path *below* the zone directory, not a file directly in it.
        if ZONE_ROOTS.contains(&first) && parts.next().is_some() {
            return format!("{first}/{second}");
        }
    }

    project_name.to_string()
}
