// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use heatmapx::{
    Attributes, Graph, GraphKind, HeatOptions, Palette, parse_graph, temperature_graph, to_dot,
};

fn grid(side: usize,) -> Graph
{
    let mut graph = Graph::with_capacity(GraphKind::undirected(), side * side, 2 * side * side,);
    for row in 0..side {
        for column in 0..side {
            let id = format!("{row}-{column}");
            if column + 1 < side {
                graph.add_edge(&id, format!("{row}-{}", column + 1), Attributes::new(),);
            }
            if row + 1 < side {
                graph.add_edge(&id, format!("{}-{column}", row + 1), Attributes::new(),);
            }
        }
    }
    graph
}

fn benchmark_single_source(c: &mut Criterion,)
{
    let graph = grid(32,);
    let options = HeatOptions::default();

    c.bench_function("heat_grid_32_single_source", |b| {
        b.iter(|| temperature_graph(black_box(&graph,), ["0-0"], &options,).expect("heat failed",),)
    },);
}

fn benchmark_many_sources(c: &mut Criterion,)
{
    let graph = grid(32,);
    let options = HeatOptions::default().increments(vec![5.0, 4.0, 3.0, 2.0, 1.0],);
    let sources: Vec<String,> = (0..32).map(|index| format!("{index}-{index}"),).collect();

    c.bench_function("heat_grid_32_diagonal_sources", |b| {
        b.iter(|| temperature_graph(black_box(&graph,), &sources, &options,).expect("heat failed",),)
    },);
}

fn benchmark_depth_limited(c: &mut Criterion,)
{
    let graph = grid(64,);
    let options = HeatOptions::default().max_depth(3,);

    c.bench_function("heat_grid_64_depth_3", |b| {
        b.iter(|| temperature_graph(black_box(&graph,), ["32-32"], &options,).expect("heat failed",),)
    },);
}

fn benchmark_document_parsing(c: &mut Criterion,)
{
    let mut yaml = String::from("links:\n",);
    for index in 0..200 {
        yaml.push_str(&format!("  - {{source: n{index}, target: n{}, weight: 1.5}}\n", index + 1),);
    }

    c.bench_function("parse_200_links", |b| {
        b.iter(|| parse_graph(black_box(&yaml,),).expect("parse failed",),)
    },);
}

fn benchmark_rendering(c: &mut Criterion,)
{
    let heated =
        temperature_graph(&grid(16,), ["0-0"], &HeatOptions::default(),).expect("heat failed",);

    c.bench_function("render_grid_16_dot", |b| {
        b.iter(|| to_dot(black_box(&heated,), "heat", Palette::Thermal,),)
    },);
}

criterion_group!(
    benches,
    benchmark_single_source,
    benchmark_many_sources,
    benchmark_depth_limited,
    benchmark_document_parsing,
    benchmark_rendering
);
criterion_main!(benches);
