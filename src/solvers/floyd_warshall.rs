use std::collections::HashMap;

use super::{Trace, history::Visits};
use crate::maze::{Coord, Grid};

const INF: u32 = u32::MAX;
const NO_HOP: u32 = u32::MAX;

/// All-pairs shortest paths over every walkable cell, then reconstruction of the
/// start-to-end route.
///
/// Time is cubic and memory quadratic in the walkable-cell count; keep it to
/// small grids (see [`super::DENSE_CELL_LIMIT`]). The relaxation phase has no
/// notion of a visited cell, so visited cells and history come purely from
/// reconstruction: one step per path cell, in path order.
pub fn solve_floyd_warshall(grid: &Grid) -> Trace {
    let nodes = grid.walkable_cells().collect::<Vec<_>>();
    let index = nodes
        .iter()
        .enumerate()
        .map(|(i, &cell)| (cell, i))
        .collect::<HashMap<Coord, usize>>();
    let n = nodes.len();

    let mut dist = vec![INF; n * n];
    let mut next = vec![NO_HOP; n * n];
    for (i, &cell) in nodes.iter().enumerate() {
        dist[i * n + i] = 0;
        next[i * n + i] = i as u32;
        for neighbor in grid.neighbors(cell) {
            if let Some(&j) = index.get(&neighbor) {
                dist[i * n + j] = 1;
                next[i * n + j] = j as u32;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let via = dist[i * n + k];
            if via == INF {
                continue;
            }
            for j in 0..n {
                let rest = dist[k * n + j];
                if rest == INF {
                    continue;
                }
                if via + rest < dist[i * n + j] {
                    dist[i * n + j] = via + rest;
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    let mut visits = Visits::default();
    let (Some(&from), Some(&to)) = (index.get(&grid.start()), index.get(&grid.end())) else {
        return Trace::from_visits(visits, Vec::new());
    };
    if next[from * n + to] == NO_HOP {
        return Trace::from_visits(visits, Vec::new());
    }

    let mut path = Vec::new();
    let mut u = from;
    loop {
        visits.visit(nodes[u]);
        path.push(nodes[u]);
        if u == to {
            break;
        }
        u = next[u * n + to] as usize;
        // A broken hop chain would otherwise loop forever
        if u == NO_HOP as usize || path.len() > n {
            return Trace::from_visits(visits, Vec::new());
        }
    }
    Trace::from_visits(visits, path)
}
