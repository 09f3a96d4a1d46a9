use crate::event::Event;
use crate::identity::{EntityIdentity, resolve};
use crate::stats::{Counter, EntityStats, StatsAggregator};
use pretty_assertions::assert_eq;

fn event(outer: EntityIdentity, inner: EntityIdentity, duration_ns: u64, result: bool) -> Event {
    Event {
        function: "f".to_string(),
        part: "p".to_string(),
        check: "c".to_string(),
        outer,
        inner,
        duration_ns,
        result,
    }
}

#[test]
fn positive_event_touches_only_positive_role_slots() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let outer = EntityIdentity::way(1);
    let inner = EntityIdentity::relation(2);

    // Act
    agg.offer(&event(outer.clone(), inner.clone(), 100, true));

    // Assert
    assert_eq!(
        agg.get(&outer),
        Some(&EntityStats {
            outer_positive: Counter::new(1, 100),
            ..Default::default()
        })
    );
    assert_eq!(
        agg.get(&inner),
        Some(&EntityStats {
            inner_positive: Counter::new(1, 100),
            ..Default::default()
        })
    );
    assert_eq!(agg.len(), 2);
}

#[test]
fn negative_event_touches_only_negative_role_slots() {
    let mut agg = StatsAggregator::new();
    let outer = EntityIdentity::way(1);
    let inner = EntityIdentity::way(2);

    agg.offer(&event(outer.clone(), inner.clone(), 9, false));

    assert_eq!(agg.get(&outer).unwrap().outer_negative, Counter::new(1, 9));
    assert_eq!(agg.get(&inner).unwrap().inner_negative, Counter::new(1, 9));
    assert_eq!(agg.get(&outer).unwrap().outer_positive, Counter::default());
}

#[test]
fn other_entities_are_left_untouched() {
    let mut agg = StatsAggregator::new();
    let bystander = EntityIdentity::way(50);
    agg.offer(&event(bystander.clone(), EntityIdentity::way(51), 3, true));
    let before = *agg.get(&bystander).unwrap();

    agg.offer(&event(EntityIdentity::way(1), EntityIdentity::way(2), 100, true));

    assert_eq!(agg.get(&bystander), Some(&before));
}

#[test]
fn same_entity_as_outer_and_inner_updates_both_slots() {
    let mut agg = StatsAggregator::new();
    let id = EntityIdentity::relation(8);

    agg.offer(&event(id.clone(), id.clone(), 12, true));

    let stats = agg.get(&id).unwrap();
    assert_eq!(stats.outer_positive, Counter::new(1, 12));
    assert_eq!(stats.inner_positive, Counter::new(1, 12));
    assert_eq!(agg.len(), 1);
}

#[test]
fn area_aliases_share_one_record() {
    let mut agg = StatsAggregator::new();

    agg.offer(&event(resolve(20, "area"), resolve(3, "way"), 5, true));
    agg.offer(&event(resolve(10, "way"), resolve(7, "area"), 6, false));
    agg.offer(&event(resolve(1, "way"), resolve(3, "relation"), 7, true));

    let way_10 = agg.get(&EntityIdentity::way(10)).unwrap();
    assert_eq!(way_10.outer_positive, Counter::new(1, 5));
    assert_eq!(way_10.outer_negative, Counter::new(1, 6));

    let relation_3 = agg.get(&EntityIdentity::relation(3)).unwrap();
    assert_eq!(relation_3.inner_negative, Counter::new(1, 6));
    assert_eq!(relation_3.inner_positive, Counter::new(1, 7));
}

#[test]
fn aggregation_is_order_independent() {
    let events = vec![
        event(EntityIdentity::way(1), EntityIdentity::relation(2), 50, true),
        event(EntityIdentity::way(1), EntityIdentity::relation(3), 200, false),
        event(EntityIdentity::way(4), EntityIdentity::relation(2), 10, true),
        event(EntityIdentity::relation(2), EntityIdentity::way(1), 7, false),
    ];

    let mut forward = StatsAggregator::new();
    events.iter().for_each(|e| forward.offer(e));

    let mut backward = StatsAggregator::new();
    events.iter().rev().for_each(|e| backward.offer(e));

    assert_eq!(forward.snapshot(), backward.snapshot());
}

#[test]
fn snapshot_hands_over_the_table() {
    let mut agg = StatsAggregator::new();
    agg.offer(&event(EntityIdentity::way(1), EntityIdentity::way(2), 1, true));

    let table = agg.snapshot();

    assert_eq!(table.len(), 2);
    assert!(agg.is_empty());
}
