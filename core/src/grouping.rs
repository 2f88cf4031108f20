//! Category grouping for option display.
//!
//! Group order is first-seen order in the catalog, and options keep
//! their catalog order inside a group. The page renders cards in
//! exactly this order.

use crate::catalog::VehicleOption;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub options:  Vec<&'a VehicleOption>,
}

pub fn group_by_category(options: &[VehicleOption]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

    for option in options {
        let category = option.category_or_other();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.options.push(option),
            None => groups.push(CategoryGroup {
                category,
                options: vec![option],
            }),
        }
    }

    groups
}
