use std::collections::HashSet;
use std::sync::Arc;

use conway::evolve::candidates;
use conway::{Cell, Population, evolve, evolve_parallel, neighbors, run};
use proptest::prelude::*;

fn population() -> impl Strategy<Value = Population> {
    prop::collection::vec((-12i64..12, -12i64..12), 0..60)
        .prop_map(|cells| cells.into_iter().collect())
}

proptest! {
    #[test]
    fn neighbors_never_include_self(x in -1_000_000i64..1_000_000, y in -1_000_000i64..1_000_000) {
        let cell = Cell::new(x, y);
        let set: HashSet<Cell> = neighbors(cell).into_iter().collect();
        prop_assert_eq!(set.len(), 8);
        prop_assert!(!set.contains(&cell));
    }

    #[test]
    fn zero_generations_return_seed(seed in population()) {
        prop_assert_eq!(run(&seed, 0), seed);
    }

    #[test]
    fn next_generation_stays_local(pop in population()) {
        let cands = candidates(&pop);
        for cell in &evolve(&pop) {
            prop_assert!(cands.contains(cell));
        }
    }

    #[test]
    fn evolution_commutes_with_translation(pop in population(), dx in -50i64..50, dy in -50i64..50) {
        prop_assert_eq!(evolve(&pop.translated(dx, dy)), evolve(&pop).translated(dx, dy));
    }

    #[test]
    fn evolution_commutes_with_transposition(pop in population()) {
        let transpose = |p: &Population| -> Population { p.iter().map(|c| Cell::new(c.y, c.x)).collect() };
        prop_assert_eq!(evolve(&transpose(&pop)), transpose(&evolve(&pop)));
    }

    #[test]
    fn still_lifes_keep_their_cells(x in -100i64..100, y in -100i64..100) {
        let block: Population = [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().collect();
        let block = block.translated(x, y);
        let next = evolve(&block);
        prop_assert_eq!(next.len(), block.len());
        prop_assert_eq!(next, block);
    }

    #[test]
    fn run_composes(pop in population(), a in 0u64..4, b in 0u64..4) {
        prop_assert_eq!(run(&run(&pop, a), b), run(&pop, a + b));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_agrees_with_sequential(pop in population(), workers in 1usize..6) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .build()
            .unwrap();
        let par = runtime.block_on(evolve_parallel(Arc::new(pop.clone()), workers)).unwrap();
        prop_assert_eq!(par, evolve(&pop));
    }
}
