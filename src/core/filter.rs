use crate::core::{LaunchRecord, LaunchTable, PayloadRange, SiteSelection};

/// Rows launched from `site` (any site for `All`) whose payload falls inside
/// `range`, both bounds inclusive. Table order is preserved.
pub fn filter_records<'a>(
    table: &'a LaunchTable,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    table
        .records()
        .iter()
        .filter(|r| site.matches(&r.launch_site) && range.contains(r.payload_mass_kg))
        .collect()
}

pub fn filter_by_site<'a>(table: &'a LaunchTable, site: &SiteSelection) -> Vec<&'a LaunchRecord> {
    filter_records(table, site, &PayloadRange::unbounded())
}
