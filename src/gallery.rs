//! Gallery Layout
//!
//! Category filtering and round-robin masonry distribution.

use crate::models::{Category, Project};

/// Viewport width at which the gallery switches to two columns
pub const TWO_COLUMN_MIN_WIDTH: f64 = 768.0;
/// Viewport width at which the gallery switches to three columns
pub const THREE_COLUMN_MIN_WIDTH: f64 = 1024.0;
/// Column count before the first width observation
pub const DEFAULT_COLUMNS: usize = 3;

/// Gallery filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons in display order
    pub const CHOICES: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Graphical),
        Filter::Only(Category::Coding),
        Filter::Only(Category::Website),
    ];

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(Category::Graphical) => "Graphical",
            Filter::Only(Category::Coding) => "Coding",
            Filter::Only(Category::Website) => "Website",
        }
    }
}

/// Visible subset of the catalog, in catalog order
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Column count for a viewport width; non-finite widths count as narrow
pub fn columns_for_width(width: f64) -> usize {
    if !(width >= TWO_COLUMN_MIN_WIDTH) {
        1
    } else if width < THREE_COLUMN_MIN_WIDTH {
        2
    } else {
        3
    }
}

/// Assign `items[i]` to bucket `i % columns`, keeping relative order.
///
/// Always returns exactly `columns` buckets (a count of 0 is treated as 1),
/// empty ones included.
pub fn distribute<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut buckets: Vec<Vec<T>> = (0..columns)
        .map(|_| Vec::with_capacity(items.len() / columns + 1))
        .collect();
    for (i, item) in items.iter().enumerate() {
        buckets[i % columns].push(item.clone());
    }
    buckets
}

/// Full recompute of the gallery columns for the current filter and width
pub fn layout(projects: &[Project], filter: Filter, columns: usize) -> Vec<Vec<Project>> {
    distribute(&filter_projects(projects, filter), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_project(id: u32, category: Category) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            description: String::new(),
            category,
            discipline: None,
            tech: Vec::new(),
            links: Default::default(),
            image: None,
        }
    }

    fn mixed_catalog() -> Vec<Project> {
        // 3 graphical, 3 coding, 2 website, interleaved
        vec![
            make_project(1, Category::Graphical),
            make_project(2, Category::Coding),
            make_project(3, Category::Website),
            make_project(4, Category::Graphical),
            make_project(5, Category::Coding),
            make_project(6, Category::Graphical),
            make_project(7, Category::Website),
            make_project(8, Category::Coding),
        ]
    }

    fn ids(projects: &[Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_coding() {
        let visible = filter_projects(&mixed_catalog(), Filter::Only(Category::Coding));
        assert_eq!(ids(&visible), vec![2, 5, 8]);
        assert!(visible.iter().all(|p| p.category == Category::Coding));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let catalog = mixed_catalog();
        assert_eq!(filter_projects(&catalog, Filter::All), catalog);
    }

    #[test]
    fn test_filter_unmatched_and_empty() {
        let graphical_only = vec![make_project(1, Category::Graphical)];
        assert!(filter_projects(&graphical_only, Filter::Only(Category::Website)).is_empty());
        assert!(filter_projects(&[], Filter::All).is_empty());
    }

    #[test]
    fn test_filter_labels_and_order() {
        let labels: Vec<&str> = Filter::CHOICES.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Graphical", "Coding", "Website"]);
        assert_eq!(Filter::default(), Filter::All);
        assert_eq!(Filter::Only(Category::Coding).key(), "coding");
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(767.9), 1);
        assert_eq!(columns_for_width(768.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(2560.0), 3);
        assert_eq!(columns_for_width(f64::NAN), 1);
    }

    #[test]
    fn test_distribute_seven_into_three() {
        let items: Vec<usize> = (0..7).collect();
        let buckets = distribute(&items, 3);
        assert_eq!(buckets, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn test_distribute_empty_and_zero_columns() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(distribute(&empty, 3), vec![Vec::<u8>::new(); 3]);
        assert_eq!(distribute(&[1, 2], 0), vec![vec![1, 2]]);
    }

    #[test]
    fn test_layout_after_resize_to_narrow() {
        let catalog = mixed_catalog();
        let wide = layout(&catalog, Filter::All, columns_for_width(1200.0));
        assert_eq!(wide.len(), 3);

        let narrow = layout(&catalog, Filter::All, columns_for_width(500.0));
        assert_eq!(narrow.len(), 1);
        assert_eq!(ids(&narrow[0]), ids(&catalog));
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subsequence(
            cats in proptest::collection::vec(0usize..3, 0..40),
            pick in 0usize..4,
        ) {
            let catalog: Vec<Project> = cats.iter().enumerate()
                .map(|(i, c)| make_project(i as u32, Category::ALL[*c]))
                .collect();
            let filter = Filter::CHOICES[pick];
            let visible = filter_projects(&catalog, filter);

            prop_assert!(visible.iter().all(|p| filter.matches(p)));
            let expected: Vec<u32> = catalog.iter().filter(|p| filter.matches(p)).map(|p| p.id).collect();
            prop_assert_eq!(ids(&visible), expected);
            // ids are increasing, so order is preserved
            prop_assert!(visible.windows(2).all(|w| w[0].id < w[1].id));
        }

        #[test]
        fn prop_distribute_partitions_by_index(len in 0usize..60, columns in 1usize..8) {
            let items: Vec<usize> = (0..len).collect();
            let buckets = distribute(&items, columns);

            prop_assert_eq!(buckets.len(), columns);
            for (k, bucket) in buckets.iter().enumerate() {
                let expected: Vec<usize> = (0..len).filter(|i| i % columns == k).collect();
                prop_assert_eq!(bucket, &expected);
            }
            let mut all: Vec<usize> = buckets.concat();
            all.sort_unstable();
            prop_assert_eq!(all, items);
        }
    }
}
