use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use clique_restart::dimacs::{read_from_file, read_instances_dir};
use clique_restart::report::build_rows;
use clique_restart::{Graph, ReferenceTable, SearchParams, StopReason, run_trial, solve_all, solve_instance};


fn instance_graph(name:&str) -> Graph {
    read_from_file(&Path::new("insts").join(name)).unwrap().graph().unwrap()
}

/// G(n,p) with a planted clique on the first `k` vertices
fn random_graph(n:usize, p:f64, k:usize, seed:u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u+1..n {
            if v < k || rng.gen_bool(p) { edges.push((u,v)); }
        }
    }
    Graph::from_edges(n, &edges).unwrap()
}

#[test]
fn triangle_always_complete() {
    let g = instance_graph("triangle.clq");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..200 {
        let res = run_trial(&g, &mut rng).unwrap();
        assert_eq!(res.size(), 3);
        assert!(g.is_clique(&res.clique));
    }
}

#[test]
fn path_never_reaches_three() {
    let g = instance_graph("path.clq");
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..200 {
        let res = run_trial(&g, &mut rng).unwrap();
        assert!(res.size() <= 2);
        assert!(g.is_clique(&res.clique));
    }
    let out = solve_instance(&g, None, &SearchParams { max_trials: 100, time_limit: None }, &mut rng).unwrap();
    assert_eq!(out.best_size(), 2);
    assert_eq!(out.nb_trials, 100);
}

#[test]
fn isolated_vertex_stays_alone() {
    let g = instance_graph("isolated.clq");
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
        let res = run_trial(&g, &mut rng).unwrap();
        assert!(res.size() == 1 || res.size() == 2);
        if res.size() > 1 { assert!(!res.clique.contains(&2)); }
    }
}

#[test]
fn random_graphs_yield_cliques() {
    for seed in 0..5 {
        let g = random_graph(60, 0.3, 10, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..100 {
            let res = run_trial(&g, &mut rng).unwrap();
            assert!(g.is_clique(&res.clique));
            assert!(res.size() >= 1);
            let mut sorted = res.clique.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), res.size(), "clique vertices are distinct");
        }
        let out = solve_instance(&g, None, &SearchParams { max_trials: 300, time_limit: None }, &mut rng).unwrap();
        assert!(g.is_clique(&out.best));
        assert!(out.improvements.windows(2).all(|w| w[0].1 < w[1].1));
    }
}

#[test]
fn same_seed_same_outcome() {
    let g = random_graph(50, 0.4, 8, 9);
    let params = SearchParams { max_trials: 200, time_limit: None };
    let mut rng1 = ChaCha8Rng::seed_from_u64(1234);
    let mut rng2 = ChaCha8Rng::seed_from_u64(1234);
    for _ in 0..20 {
        assert_eq!(run_trial(&g, &mut rng1).unwrap(), run_trial(&g, &mut rng2).unwrap());
    }
    let out1 = solve_instance(&g, None, &params, &mut rng1).unwrap();
    let out2 = solve_instance(&g, None, &params, &mut rng2).unwrap();
    assert_eq!(out1.best, out2.best);
    assert_eq!(out1.improvements, out2.improvements);
}

#[test]
fn directory_run_with_reference() {
    let instances = read_instances_dir(Path::new("insts")).unwrap();
    let reference = ReferenceTable::from_json_str(r#"{"triangle.clq": 3, "path.clq": 2}"#).unwrap();
    let params = SearchParams { max_trials: 50, time_limit: None };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let outcomes = solve_all(&instances, &reference, &params, &mut rng).unwrap();
    let rows = build_rows(&outcomes, &reference);
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].instance, "isolated.clq");
    assert_eq!(rows[0].max_clique, 2);
    assert_eq!(rows[0].solved, None);
    assert_eq!(rows[0].nb_trials, 50);
    assert_eq!(rows[0].stop_reason, StopReason::TrialLimit);

    assert_eq!(rows[1].instance, "path.clq");
    assert_eq!(rows[1].solved, Some(true));
    assert_eq!(rows[1].nb_trials, 1);
    assert_eq!(rows[1].stop_reason, StopReason::OptimumReached);

    assert_eq!(rows[2].instance, "triangle.clq");
    assert_eq!(rows[2].max_clique, 3);
    assert_eq!(rows[2].clique.iter().copied().max(), Some(3), "vertices are reported 1-based");
    assert_eq!(rows[2].stop_reason, StopReason::OptimumReached);
}
