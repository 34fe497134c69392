//! Tests for the bounded retry loop

#[cfg(test)]
mod tests {
    use edgetile::TilingError;
    use edgetile::algorithm::collapse::satisfies_adjacency;
    use edgetile::algorithm::driver::Driver;
    use edgetile::spatial::tiles::{Catalog, Edge, Tile};
    use ndarray::Array2;

    fn binary_catalog() -> Catalog {
        let payload = Array2::from_elem((1, 1), [0, 0, 0, 255]);
        Catalog::from_tiles((0..16_u32).map(|bits| {
            let edges = [0, 1, 2, 3]
                .map(|side| Edge::from(if bits >> side & 1 == 1 { "b" } else { "a" }));
            Tile::new(format!("t{bits}"), edges, payload.clone()).expect("tile")
        }))
        .expect("catalog")
    }

    fn never_matching() -> Catalog {
        let payload = Array2::from_elem((1, 1), [0, 0, 0, 255]);
        Catalog::from_tiles([
            Tile::new("x", ["xy"; 4].map(Edge::from), payload.clone()).expect("tile"),
            Tile::new("p", ["pq"; 4].map(Edge::from), payload).expect("tile"),
        ])
        .expect("catalog")
    }

    // Tests a catalog that cannot dead-end solves on the first attempt
    // Verified by discarding successful boards
    #[test]
    fn test_run_solves_first_attempt() {
        let catalog = binary_catalog();
        let mut failures = 0;

        let solution = Driver::new(&catalog, 8, 8, 42)
            .with_max_attempts(Some(3))
            .run(|_, _| failures += 1)
            .expect("solvable catalog");

        assert_eq!(solution.attempts, 1);
        assert_eq!(failures, 0);
        assert!(solution.board.is_complete());
        assert!(satisfies_adjacency(&solution.board, &catalog));
    }

    // Tests the attempt limit is honoured and every failure is reported
    // Verified by counting attempts from zero in the observer
    #[test]
    fn test_run_exhausts_attempts() {
        let catalog = never_matching();
        let mut seen = Vec::new();

        let result = Driver::new(&catalog, 2, 2, 7)
            .with_max_attempts(Some(5))
            .run(|attempt, failure| seen.push((attempt, failure.placed)));

        assert!(matches!(
            result,
            Err(TilingError::AttemptsExhausted { attempts: 5 })
        ));
        assert_eq!(seen, vec![(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
    }

    // Tests a zero limit makes no attempt at all
    // Verified by checking the limit after the first attempt
    #[test]
    fn test_zero_attempt_limit() {
        let catalog = binary_catalog();
        let mut driver = Driver::new(&catalog, 2, 2, 1).with_max_attempts(Some(0));

        assert_eq!(driver.max_attempts(), Some(0));
        assert!(matches!(
            driver.run(|_, _| {}),
            Err(TilingError::AttemptsExhausted { attempts: 0 })
        ));
    }

    // Tests precondition failures stop the loop immediately
    // Verified by treating engine errors as failed attempts
    #[test]
    fn test_preconditions_are_fatal() {
        let empty = Catalog::new();
        let mut calls = 0;

        let result = Driver::new(&empty, 2, 2, 1).run(|_, _| calls += 1);

        assert!(matches!(result, Err(TilingError::EmptyCatalog)));
        assert_eq!(calls, 0);
    }

    // Tests equal seeds reproduce the same board while attempts differ
    // Verified by reusing one selector seed for every attempt
    #[test]
    fn test_runs_are_reproducible() {
        let catalog = binary_catalog();

        let first = Driver::new(&catalog, 6, 6, 99).run(|_, _| {}).expect("solvable");
        let second = Driver::new(&catalog, 6, 6, 99).run(|_, _| {}).expect("solvable");
        assert_eq!(first.board, second.board);

        let mut driver = Driver::new(&catalog, 6, 6, 99);
        let a = driver.attempt().expect("valid inputs").expect("solvable");
        let b = driver.attempt().expect("valid inputs").expect("solvable");
        assert_eq!(a, first.board);
        assert_ne!(a, b, "Consecutive attempts should use fresh randomness");
    }
}
