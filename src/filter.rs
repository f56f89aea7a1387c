//! Record Filtering
//!
//! Category match AND case-insensitive substring search, recomputed on
//! every change. No indexing; collections are tens of rows.

use crate::models::{Customer, Engagement, Order, OrderStatus};

/// Records that can be narrowed by category and free-text query
pub trait Filterable {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
    /// Fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// Category selector; `All` disables the category predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Case-insensitive substring over any of the record's search fields
pub fn matches_query<R: Filterable>(record: &R, query: &str) -> bool {
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing both predicates, in original order
pub fn apply<R>(records: &[R], category: CategoryFilter<R::Category>, query: &str) -> Vec<R>
where
    R: Filterable + Clone,
{
    records
        .iter()
        .filter(|r| category.matches(r.category()) && matches_query(*r, query))
        .cloned()
        .collect()
}

impl Filterable for Order {
    type Category = OrderStatus;

    fn category(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str(), self.product.as_str()]
    }
}

impl Filterable for Customer {
    type Category = Engagement;

    fn category(&self) -> Engagement {
        self.engagement
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.language.as_str()]
    }
}

// ========================
// Select Values
// ========================

/// `<select>` value for "no category filter"
pub const ALL_VALUE: &str = "all";

pub fn order_status_value(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::New => "new",
        OrderStatus::InProgress => "in-progress",
        OrderStatus::Delivered => "delivered",
    }
}

pub fn parse_order_filter(value: &str) -> CategoryFilter<OrderStatus> {
    OrderStatus::ALL
        .into_iter()
        .find(|s| order_status_value(*s) == value)
        .map_or(CategoryFilter::All, CategoryFilter::Only)
}

pub fn engagement_value(engagement: Engagement) -> &'static str {
    match engagement {
        Engagement::High => "high",
        Engagement::Low => "low",
    }
}

pub fn parse_engagement_filter(value: &str) -> CategoryFilter<Engagement> {
    Engagement::ALL
        .into_iter()
        .find(|e| engagement_value(*e) == value)
        .map_or(CategoryFilter::All, CategoryFilter::Only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn names(customers: &[Customer]) -> Vec<&str> {
        customers.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_and_all_returns_everything() {
        let customers = fixtures::customers();
        assert_eq!(apply(&customers, CategoryFilter::All, "").len(), customers.len());
    }

    #[test]
    fn test_customer_engagement_and_query() {
        let customers = fixtures::customers();

        let high = apply(&customers, CategoryFilter::Only(Engagement::High), "");
        assert_eq!(names(&high), vec!["John Doe", "Mike Johnson"]);

        // Both predicates must hold
        let high_john = apply(&customers, CategoryFilter::Only(Engagement::High), "JOHN");
        assert_eq!(names(&high_john), vec!["John Doe", "Mike Johnson"]);

        let low_john = apply(&customers, CategoryFilter::Only(Engagement::Low), "john");
        assert!(low_john.is_empty());

        // Language is searched too
        let urdu = apply(&customers, CategoryFilter::All, "urd");
        assert_eq!(names(&urdu), vec!["Mike Johnson"]);
    }

    #[test]
    fn test_filter_matches_brute_force() {
        let customers = fixtures::customers();
        for filter in [CategoryFilter::All, CategoryFilter::Only(Engagement::High), CategoryFilter::Only(Engagement::Low)] {
            for query in ["", "j", "Doe", "hindi", "xyz"] {
                let got = apply(&customers, filter, query);
                let expected: Vec<Customer> = customers
                    .iter()
                    .filter(|c| {
                        let q = query.to_lowercase();
                        filter.matches(c.engagement)
                            && (c.name.to_lowercase().contains(&q) || c.language.to_lowercase().contains(&q))
                    })
                    .cloned()
                    .collect();
                assert_eq!(got, expected, "filter={:?} query={:?}", filter, query);
            }
        }
    }

    #[test]
    fn test_order_search_fields() {
        let orders = fixtures::orders();

        let by_id = apply(&orders, CategoryFilter::All, "ord-002");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].customer, "Jane Smith");

        let by_product = apply(&orders, CategoryFilter::All, "pasta");
        assert_eq!(by_product[0].id, "ORD-003");

        // Phone numbers are not searched
        assert!(apply(&orders, CategoryFilter::All, "8900").is_empty());

        let delivered = apply(&orders, CategoryFilter::Only(OrderStatus::Delivered), "");
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].status, OrderStatus::Delivered);
    }

    #[test]
    fn test_parse_select_values() {
        assert_eq!(parse_order_filter(ALL_VALUE), CategoryFilter::All);
        assert_eq!(parse_order_filter("in-progress"), CategoryFilter::Only(OrderStatus::InProgress));
        assert_eq!(parse_engagement_filter("low"), CategoryFilter::Only(Engagement::Low));
        assert_eq!(parse_engagement_filter("bogus"), CategoryFilter::All);
    }
}
