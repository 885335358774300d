//! Farmer roster aggregates and list views
//!
//! Stateless transforms over a roster snapshot: the overview page figures,
//! the search/region filter of the farmer table and page slicing.

use std::collections::HashMap;

use crate::models::{Farmer, NewestFarmer, RegionCount, RegionFilter, RosterSummary};
use crate::types::{LoadMoreWindow, PaginatedResponse, Pagination, PaginationMeta};

/// Label for farmers without a region
pub const UNKNOWN_REGION: &str = "Unknown";

/// Default "show more" step for SMS logs
pub const SMS_PAGE_SIZE: usize = 8;

/// Farmer with the latest `created_at`.
///
/// Missing or malformed timestamps are left out of the comparison; on a tie
/// the earlier entry wins.
pub fn newest(farmers: &[Farmer]) -> Option<&Farmer> {
    farmers
        .iter()
        .filter_map(|farmer| farmer.created().map(|created| (created, farmer)))
        .fold(None, |latest, (created, farmer)| match latest {
            Some((latest_created, _)) if created <= latest_created => latest,
            _ => Some((created, farmer)),
        })
        .map(|(_, farmer)| farmer)
}

/// Farmer counts per region, largest first, ties alphabetical ignoring case
pub fn by_region(farmers: &[Farmer]) -> Vec<RegionCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for farmer in farmers {
        let region = farmer
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(UNKNOWN_REGION);
        *counts.entry(region.to_string()).or_insert(0) += 1;
    }

    let mut rows: Vec<RegionCount> = counts
        .into_iter()
        .map(|(region, count)| RegionCount { region, count })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| region_order(&a.region, &b.region))
    });
    rows
}

/// Alphabetical region order: case-insensitive, byte order only between
/// names that differ in case alone
pub fn region_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Apply the farmer table's search box and region selector.
///
/// Name matching ignores case, phone matching does not. A blank search
/// matches everyone. Input order is kept.
pub fn filter<'a>(farmers: &'a [Farmer], search: &str, region: &RegionFilter) -> Vec<&'a Farmer> {
    let blank = search.trim().is_empty();
    let needle = search.to_lowercase();

    farmers
        .iter()
        .filter(|farmer| {
            let matches_search = blank
                || farmer.name.to_lowercase().contains(&needle)
                || farmer.phone_number.contains(search);
            matches_search && region.matches(farmer)
        })
        .collect()
}

/// Distinct non-empty regions in first-seen order
pub fn regions(farmers: &[Farmer]) -> Vec<String> {
    let mut seen = Vec::new();
    for region in farmers.iter().filter_map(|f| f.region.as_deref()) {
        if !region.is_empty() && !seen.iter().any(|r: &String| r == region) {
            seen.push(region.to_string());
        }
    }
    seen
}

/// Overview page figures
pub fn summarize(farmers: &[Farmer]) -> RosterSummary {
    let farmers_by_region = by_region(farmers);
    let newest_farmer = newest(farmers).and_then(|farmer| {
        farmer.created().map(|created_at| NewestFarmer {
            id: farmer.id.clone(),
            name: farmer.name.clone(),
            created_at,
        })
    });

    RosterSummary {
        total_farmers: farmers.len(),
        newest_farmer,
        regions_active: farmers_by_region.len(),
        farmers_by_region,
    }
}

/// Slice one page out of a list
pub fn paginate<T: Clone>(items: &[T], pagination: &Pagination) -> PaginatedResponse<T> {
    let page = pagination.page.max(1);
    let per_page = pagination.per_page.max(1);
    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(per_page as u64) as u32;

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let data = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    PaginatedResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total_items,
            total_pages,
        },
    }
}

/// The first `pages * page_size` items
pub fn load_more<T: Clone>(items: &[T], pages: usize, page_size: usize) -> LoadMoreWindow<T> {
    let visible = pages.max(1).saturating_mul(page_size.max(1));
    let items_shown: Vec<T> = items.iter().take(visible).cloned().collect();

    LoadMoreWindow {
        has_more: items_shown.len() < items.len(),
        items: items_shown,
        total: items.len(),
    }
}
