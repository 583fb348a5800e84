//! Tests for ranking order, prevalence and run summaries

#[cfg(test)]
mod tests {
    use minecluster::analysis::patterns::PatternTable;
    use minecluster::analysis::shape::Shape;
    use minecluster::analysis::statistics::{RankedPatterns, SimulationSummary, prevalence};
    use minecluster::spatial::Coordinate;

    fn line(length: i32) -> Shape {
        Shape::from_offsets((0..length).map(|x| Coordinate::new(x, 0)).collect())
    }

    fn ranked_lengths(ranked: &RankedPatterns) -> Vec<(usize, u64)> {
        ranked
            .entries()
            .iter()
            .map(|entry| (entry.shape.len(), entry.count))
            .collect()
    }

    // Tests ranking sorts by descending count and keeps first-seen order on ties
    // Verified by using an unstable sort
    #[test]
    fn test_ranking_is_descending_and_stable() {
        let mut table = PatternTable::new();
        table.observe_many(line(1), 1);
        table.observe_many(line(2), 2);
        table.observe_many(line(3), 1);
        table.observe_many(line(4), 2);
        table.observe_many(line(5), 3);

        let ranked = RankedPatterns::from_table(&table, 10);

        assert_eq!(
            ranked_lengths(&ranked),
            vec![(5, 3), (2, 2), (4, 2), (1, 1), (3, 1)]
        );
        assert_eq!(ranked.total_trials(), 10);
    }

    // Tests ranking leaves the table untouched
    // Verified by sorting the table's entries in place
    #[test]
    fn test_ranking_does_not_mutate_table() {
        let mut table = PatternTable::new();
        table.observe(line(1));
        table.observe_many(line(2), 4);
        let before = table.entries().to_vec();

        let _ranked = RankedPatterns::from_table(&table, 5);

        assert_eq!(table.entries(), before.as_slice());
    }

    // Tests truncation keeps the most frequent entries
    // Verified by truncating before sorting
    #[test]
    fn test_truncated_keeps_top_entries() {
        let mut table = PatternTable::new();
        table.observe_many(line(1), 1);
        table.observe_many(line(2), 5);
        table.observe_many(line(3), 3);

        let ranked = RankedPatterns::from_table(&table, 9).truncated(2);

        assert_eq!(ranked_lengths(&ranked), vec![(2, 5), (3, 3)]);
        assert_eq!(ranked.total_trials(), 9);
    }

    // Tests prevalence divides by trials and handles zero trials
    // Verified by dividing by total observations
    #[test]
    fn test_prevalence() {
        assert!((prevalence(5, 10) - 0.5).abs() < f64::EPSILON);
        assert!((prevalence(30, 10) - 3.0).abs() < f64::EPSILON);
        assert!(prevalence(5, 0).abs() < f64::EPSILON);

        let mut table = PatternTable::new();
        table.observe_many(line(1), 4);
        let ranked = RankedPatterns::from_table(&table, 4);
        let Some(entry) = ranked.entries().first() else {
            unreachable!("One entry expected");
        };
        assert!((ranked.prevalence_of(entry) - 1.0).abs() < f64::EPSILON);
    }

    // Tests summary totals weight shape sizes by their counts
    // Verified by ignoring counts when summing cells
    #[test]
    fn test_summary_from_table() {
        let mut table = PatternTable::new();
        table.observe_many(line(1), 6);
        table.observe_many(line(3), 2);

        let summary = SimulationSummary::from_table(&table, 4);

        assert_eq!(summary.trials, 4);
        assert_eq!(summary.clusters, 8);
        assert_eq!(summary.distinct_patterns, 2);
        assert_eq!(summary.clustered_cells, 12);
        assert_eq!(summary.largest_cluster, 3);
        assert!((summary.mean_cluster_size() - 1.5).abs() < f64::EPSILON);
        assert!((summary.clusters_per_trial() - 2.0).abs() < f64::EPSILON);
    }

    // Tests an empty run summarizes to zeros
    // Verified by dividing without the zero guard
    #[test]
    fn test_empty_summary() {
        let summary = SimulationSummary::from_table(&PatternTable::new(), 0);

        assert_eq!(summary, SimulationSummary::default());
        assert!(summary.mean_cluster_size().abs() < f64::EPSILON);
        assert!(summary.to_string().contains("0 trials"));
    }
}
