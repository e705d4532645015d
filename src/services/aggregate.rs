//! Group-by helpers shared by the ledgers and reports

use std::collections::BTreeMap;

use crate::models::Money;

/// Summed rows sharing one key
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    pub quantity: f64,
    pub cost: Money,
    pub count: usize,
}

/// Group `rows` by `key`, summing the `(quantity, cost)` from `value`
///
/// Groups come back ordered by key.
pub fn group_by<T, K, V>(rows: &[T], key: K, value: V) -> Vec<Group>
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> (f64, Money),
{
    let mut groups: BTreeMap<String, Group> = BTreeMap::new();

    for row in rows {
        let key = key(row);
        let (quantity, cost) = value(row);
        let group = groups.entry(key.clone()).or_insert_with(|| Group {
            key,
            quantity: 0.0,
            cost: Money::zero(),
            count: 0,
        });
        group.quantity += quantity;
        group.cost += cost;
        group.count += 1;
    }

    groups.into_values().collect()
}

/// Sort groups by cost, largest first; equal costs keep key order
pub fn sort_by_cost_desc(groups: &mut [Group]) {
    groups.sort_by(|a, b| b.cost.cmp(&a.cost));
}

/// `part` as a percentage of `whole`, 0 when `whole` is zero
pub fn percentage(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}
