use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use segugio::csp::engine::Csp;
use segugio::problems::maze::Maze;
use segugio::problems::word_search::{
    generate_domain, generate_grid, GridLocation, WordSearchConstraint,
};
use segugio::search::engine::{astar, bfs};

fn maze_search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maze Search");
    let maze = Maze::standard(0.2, 42);

    group.bench_function("10x10, bfs", |b| {
        b.iter(|| {
            let result = bfs(
                black_box(maze.start),
                |ml| maze.successors(ml),
                |ml| maze.goal_test(ml),
            );
            black_box(result)
        })
    });

    group.bench_function("10x10, astar manhattan", |b| {
        b.iter(|| {
            let result = astar(
                black_box(maze.start),
                |ml| maze.goal_test(ml),
                |ml| maze.successors(ml),
                Maze::manhattan_distance(maze.goal),
            );
            black_box(result)
        })
    });

    group.finish();
}

fn word_search_setup(words: &[&str]) -> Csp<String, Vec<GridLocation>> {
    let grid = generate_grid(9, 9, 7);
    let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    let mut domains = HashMap::new();
    for word in &words {
        domains.insert(word.clone(), generate_domain(word, &grid));
    }
    let mut csp = Csp::new(words.clone(), domains).unwrap();
    csp.add_constraint(Box::new(WordSearchConstraint::new(words)))
        .unwrap();
    csp
}

fn word_search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Word Search CSP");

    for word_count in [3usize, 5] {
        let all_words = ["MATTHEW", "JOE", "MARY", "SARAH", "SALLY"];
        group.bench_with_input(
            BenchmarkId::from_parameter(word_count),
            &word_count,
            |b, &word_count| {
                let csp = word_search_setup(&all_words[..word_count]);
                b.iter(|| {
                    let solution = csp.backtracking_search();
                    assert!(solution.is_some());
                    black_box(solution)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, maze_search_benchmarks, word_search_benchmarks);
criterion_main!(benches);
