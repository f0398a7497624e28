use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::session::Session;
use super::errors::OrderError;
use super::value_objects::Order;

// ============================================================================
// Order Source - the query layer that owns order snapshots
// ============================================================================
//
// The presentation core only reads from it. Every fetch yields a fresh
// snapshot that gets its own independent derivation.
//
// ============================================================================

pub trait OrderSource {
    /// Most recently placed order for the signed-in customer, if any.
    fn latest_order(&self, session: &Session) -> Result<Option<Order>, OrderError>;

    fn order_history(&self, session: &Session) -> Result<Vec<Order>, OrderError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderSource {
    orders: HashMap<Uuid, Vec<Order>>,
}

impl InMemoryOrderSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: Uuid, order: Order) {
        self.orders.entry(user_id).or_default().push(order);
    }
}

impl OrderSource for InMemoryOrderSource {
    fn latest_order(&self, session: &Session) -> Result<Option<Order>, OrderError> {
        Ok(self
            .orders
            .get(&session.user_id)
            .and_then(|orders| orders.iter().max_by_key(|order| order.placed_at))
            .cloned())
    }

    fn order_history(&self, session: &Session) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .orders
            .get(&session.user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_unknown_customer_has_nothing() {
        let source = InMemoryOrderSource::new();
        let session = Session::new(Uuid::new_v4(), "Nobody");

        assert!(source.latest_order(&session).unwrap().is_none());
        assert!(source.order_history(&session).unwrap().is_empty());
    }

    #[test]
    fn test_latest_is_most_recently_placed() {
        let user_id = Uuid::new_v4();
        let session = Session::new(user_id, "Meera");
        let now = Utc::now();

        let mut source = InMemoryOrderSource::new();
        source.insert(user_id, Order::with_canonical_flow("b", now, "", ""));
        source.insert(user_id, Order::with_canonical_flow("a", now - Duration::hours(5), "", ""));

        let latest = source.latest_order(&session).unwrap().unwrap();
        assert_eq!(latest.id, "b");
        assert_eq!(source.order_history(&session).unwrap().len(), 2);
    }

    #[test]
    fn test_orders_are_scoped_per_customer() {
        let mut source = InMemoryOrderSource::new();
        let alice = Session::new(Uuid::new_v4(), "Alice");
        let bob = Session::new(Uuid::new_v4(), "Bob");
        source.insert(alice.user_id, Order::with_canonical_flow("x", Utc::now(), "", ""));

        assert_eq!(source.order_history(&alice).unwrap().len(), 1);
        assert!(source.order_history(&bob).unwrap().is_empty());
    }
}
