use std::collections::HashMap;

use crate::estimate::computed::{CategoryAggregate, ComputedLine};
use crate::ids::CategoryId;

/// Groups computed lines by category, preserving first-seen category order
/// (the order line items were added, not alphabetical) with the synthetic
/// uncategorized bucket always last. Pure function; empty in, empty out.
pub fn aggregate_by_category(lines: &[ComputedLine]) -> Vec<CategoryAggregate> {
    let mut order: Vec<Option<CategoryId>> = Vec::new();
    let mut buckets: HashMap<Option<CategoryId>, CategoryAggregate> = HashMap::new();

    for line in lines {
        let key = line.category.category_id;
        buckets
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                CategoryAggregate::empty(line.category.clone())
            })
            .push(line.clone());
    }

    // Stable: known categories keep first-seen order, None sorts last.
    order.sort_by_key(|key| key.is_none());

    order
        .into_iter()
        .filter_map(|key| buckets.remove(&key))
        .collect()
}
