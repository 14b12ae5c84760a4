//! Duplicate record detection.

use std::collections::HashMap;

use crate::config::{DUPLICATE_CHECKED_TAGS, IGNORED_DUPLICATE_KEYS};
use crate::models::MetaItem;

/// Finds records sharing an identity with another record.
///
/// Only `meta`, `base` and `title` records are considered, and keys known to
/// repeat legitimately are ignored. Every record of a repeated identity is
/// returned, including the first occurrence.
///
/// # Arguments
///
/// * `items` - Extracted records in document order
///
/// # Returns
///
/// The duplicated records in their original order.
pub fn find_duplicates(items: &[MetaItem]) -> Vec<&MetaItem> {
    let mut first_seen: HashMap<(&str, &str), usize> = HashMap::new();
    let mut duplicated = vec![false; items.len()];

    for (position, item) in items.iter().enumerate() {
        if !DUPLICATE_CHECKED_TAGS.contains(&item.tag.as_str())
            || IGNORED_DUPLICATE_KEYS.contains(&item.key.as_str())
        {
            continue;
        }

        match first_seen.get(&(item.tag.as_str(), item.key.as_str())) {
            Some(&first) => {
                duplicated[first] = true;
                duplicated[position] = true;
            }
            None => {
                first_seen.insert((item.tag.as_str(), item.key.as_str()), position);
            }
        }
    }

    let duplicates: Vec<&MetaItem> = items
        .iter()
        .zip(duplicated)
        .filter_map(|(item, is_duplicate)| is_duplicate.then_some(item))
        .collect();

    log::debug!("Found {} duplicate records", duplicates.len());
    duplicates
}
