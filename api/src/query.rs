//! Read queries against the four top-level collections.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profile,
    Projects,
    Courses,
    Competitions,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Profile => "profile",
            Collection::Projects => "projects",
            Collection::Courses => "courses",
            Collection::Competitions => "competitions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub descending: bool,
}

/// An unfiltered `select *` over one collection, optionally ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub collection: Collection,
    pub order: Option<Order>,
}

impl Query {
    pub fn all(collection: Collection) -> Self {
        Self {
            collection,
            order: None,
        }
    }

    pub fn order_desc(mut self, column: &'static str) -> Self {
        self.order = Some(Order {
            column,
            descending: true,
        });
        self
    }

    /// PostgREST query string, e.g. `select=*&order=date.desc`.
    pub fn query_string(&self) -> String {
        let mut qs = String::from("select=*");
        if let Some(order) = self.order {
            let direction = if order.descending { "desc" } else { "asc" };
            qs.push_str(&format!("&order={}.{direction}", order.column));
        }
        qs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_query_selects_everything() {
        assert_eq!(Query::all(Collection::Projects).query_string(), "select=*");
    }

    #[test]
    fn ordered_query_appends_direction() {
        let query = Query::all(Collection::Courses).order_desc("date");
        assert_eq!(query.query_string(), "select=*&order=date.desc");
    }

    #[test]
    fn table_names_match_store() {
        let tables: Vec<_> = [
            Collection::Profile,
            Collection::Projects,
            Collection::Courses,
            Collection::Competitions,
        ]
        .iter()
        .map(|c| c.table())
        .collect();
        assert_eq!(tables, ["profile", "projects", "courses", "competitions"]);
    }
}
