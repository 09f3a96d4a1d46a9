use super::analysis;
use crate::identity::DEFAULT_BASE_URL;
use crate::report::{Metric, RankedEntity, Ranking, bottom, top};
use pretty_assertions::assert_eq;

fn ranked(key: &str, value: u64) -> RankedEntity {
    RankedEntity {
        key: format!("https://www.openstreetmap.org/{key}"),
        value,
    }
}

#[test]
fn rank_sorts_descending_with_key_tiebreak() {
    // Arrange
    let ranking = Ranking::new(&analysis(10).stats, DEFAULT_BASE_URL);

    // Act
    let by_outer = ranking.rank(Metric::OuterCount);

    // Assert
    assert_eq!(
        by_outer,
        vec![
            ranked("way/1", 2),
            ranked("way/4", 1),
            ranked("relation/2", 0),
            ranked("relation/3", 0),
        ]
    );
}

#[test]
fn every_metric_reads_the_right_counter() {
    let ranking = Ranking::new(&analysis(10).stats, DEFAULT_BASE_URL);
    let head = |m: Metric| ranking.rank(m).into_iter().next().unwrap();

    assert_eq!(head(Metric::OuterTime), ranked("way/1", 250));
    assert_eq!(head(Metric::OuterPositive), ranked("way/1", 1));
    assert_eq!(head(Metric::OuterNegative), ranked("way/1", 1));
    assert_eq!(head(Metric::InnerCount), ranked("relation/2", 2));
    assert_eq!(head(Metric::InnerTime), ranked("relation/3", 200));
    assert_eq!(head(Metric::InnerPositive), ranked("relation/2", 2));
    assert_eq!(head(Metric::InnerNegative), ranked("relation/3", 1));
    assert_eq!(head(Metric::TotalCount), ranked("relation/2", 2));
    assert_eq!(head(Metric::TotalTime), ranked("way/1", 250));
    assert_eq!(head(Metric::TotalPositive), ranked("relation/2", 2));
    assert_eq!(head(Metric::TotalNegative), ranked("relation/3", 1));
}

#[test]
fn top_and_bottom_slice_the_ranking() {
    let ranked_list = vec![ranked("a", 9), ranked("b", 5), ranked("c", 2), ranked("d", 0)];

    assert_eq!(top(&ranked_list, 2), vec![ranked("a", 9), ranked("b", 5)]);
    assert_eq!(bottom(&ranked_list, 2), vec![ranked("d", 0), ranked("c", 2)]);
    assert_eq!(top(&ranked_list, 10).len(), 4);
    assert_eq!(bottom(&ranked_list, 0), Vec::new());
}

#[test]
fn only_outcome_counts_show_fewest() {
    let with_bottom: Vec<_> = Metric::ALL
        .iter()
        .filter(|m| m.shows_bottom())
        .copied()
        .collect();

    assert_eq!(
        with_bottom,
        vec![
            Metric::OuterPositive,
            Metric::OuterNegative,
            Metric::InnerPositive,
            Metric::InnerNegative,
            Metric::TotalPositive,
            Metric::TotalNegative,
        ]
    );
    assert_eq!(Metric::TotalTime.unit(), "ns");
    assert_eq!(Metric::TotalCount.unit(), "");
}
