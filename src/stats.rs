use std::{collections::HashSet, fmt};

use unicode_truncate::{Alignment, UnicodeTruncateStr};

use crate::{
    error::MazeError,
    maze::{Coord, Grid},
    solvers::{AlgorithmKind, SearchResult, solve_within},
};

/// Summary numbers of one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub visited_count: usize,
    pub time_taken_ms: f64,
    /// Number of cells on the path, both ends included. Zero when no path exists.
    pub path_length: usize,
}

impl Statistics {
    pub fn new(path: &[Coord], visited: &HashSet<Coord>, time_taken_ms: f64) -> Self {
        Statistics {
            visited_count: visited.len(),
            time_taken_ms,
            path_length: path.len(),
        }
    }
}

pub fn compute_statistics(result: &SearchResult) -> Statistics {
    Statistics::new(&result.path, &result.visited, result.elapsed_ms)
}

/// One line of a [`Report`]: statistics, or the reason the algorithm was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub algorithm: AlgorithmKind,
    pub outcome: Result<Statistics, MazeError>,
}

/// Every requested algorithm run on the same grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub width: u16,
    pub height: u16,
    pub rows: Vec<ReportRow>,
}

impl Report {
    const NAME_COLUMN: usize = 28;
    const NUMBER_COLUMN: usize = 12;

    /// Solves `grid` with each algorithm in turn. All-pairs algorithms are
    /// recorded as skipped instead of run when the grid has more than
    /// `cell_limit` walkable cells.
    pub fn run(grid: &Grid, algorithms: &[AlgorithmKind], cell_limit: usize) -> Self {
        let rows = algorithms
            .iter()
            .map(|&algorithm| ReportRow {
                algorithm,
                outcome: solve_within(algorithm, grid, cell_limit).map(|result| compute_statistics(&result)),
            })
            .collect();
        Report {
            width: grid.width(),
            height: grid.height(),
            rows,
        }
    }

    fn cell(text: &str, width: usize, align: Alignment) -> String {
        text.unicode_pad(width, align, true).into_owned()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |s: &str| Report::cell(s, Report::NAME_COLUMN, Alignment::Left);
        let number = |s: &str| Report::cell(s, Report::NUMBER_COLUMN, Alignment::Right);

        writeln!(f, "Maze {}x{}", self.width, self.height)?;
        writeln!(
            f,
            "{} {} {} {}",
            name("Algorithm"),
            number("Visited"),
            number("Path"),
            number("Time (ms)")
        )?;
        writeln!(
            f,
            "{}",
            "-".repeat(Report::NAME_COLUMN + 3 * (Report::NUMBER_COLUMN + 1))
        )?;
        for row in &self.rows {
            let algorithm = row.algorithm.to_string();
            match &row.outcome {
                Ok(stats) => writeln!(
                    f,
                    "{} {} {} {}",
                    name(&algorithm),
                    number(&stats.visited_count.to_string()),
                    number(&stats.path_length.to_string()),
                    number(&format!("{:.3}", stats.time_taken_ms))
                )?,
                Err(err) => writeln!(f, "{} skipped: {}", name(&algorithm), err)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MazeOptions, generate_maze_with, get_rng};
    use crate::solvers::{DENSE_CELL_LIMIT, solve};

    #[test]
    fn test_statistics_from_result() {
        let grid = Grid::from_rows(&["S..", "#.#", "#.E"]).unwrap();
        let result = solve(AlgorithmKind::Bfs, &grid);
        let stats = compute_statistics(&result);
        assert_eq!(stats.path_length, 5);
        assert_eq!(stats.visited_count, result.visited.len());
        assert_eq!(stats.time_taken_ms, result.elapsed_ms);
    }

    #[test]
    fn test_unreachable_has_zero_length() {
        let visited = HashSet::from([(0, 0), (1, 0), (0, 1), (1, 1)]);
        let stats = Statistics::new(&[], &visited, 0.5);
        assert_eq!(stats.path_length, 0);
        assert_eq!(stats.visited_count, 4);
        assert_eq!(stats.time_taken_ms, 0.5);
    }

    #[test]
    fn test_ten_by_ten_lengths_agree() {
        let grid = generate_maze_with(10, 10, &MazeOptions::default(), &mut get_rng(Some(10))).unwrap();
        let report = Report::run(&grid, &AlgorithmKind::ALL, DENSE_CELL_LIMIT);
        let length_of = |kind| {
            report
                .rows
                .iter()
                .find(|row| row.algorithm == kind)
                .and_then(|row| row.outcome.as_ref().ok())
                .map(|stats| stats.path_length)
        };
        let bfs = length_of(AlgorithmKind::Bfs);
        assert!(bfs.is_some_and(|len| len > 0));
        assert_eq!(length_of(AlgorithmKind::Dijkstra), bfs);
        assert_eq!(length_of(AlgorithmKind::FloydWarshall), bfs);
    }

    #[test]
    fn test_report_marks_skipped_rows() {
        let grid = generate_maze_with(120, 120, &MazeOptions::default(), &mut get_rng(Some(2))).unwrap();
        let report = Report::run(&grid, &[AlgorithmKind::Bfs, AlgorithmKind::Johnson], DENSE_CELL_LIMIT);
        assert!(report.rows[0].outcome.is_ok());
        assert!(matches!(
            report.rows[1].outcome,
            Err(MazeError::TooManyCells { .. })
        ));
        let table = report.to_string();
        assert!(table.starts_with("Maze 120x120\n"));
        assert!(table.contains("skipped"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let grid = Grid::from_rows(&["S.E"]).unwrap();
        let table = Report::run(&grid, &[AlgorithmKind::Bfs, AlgorithmKind::AStarManhattan], DENSE_CELL_LIMIT)
            .to_string();
        let widths = table
            .lines()
            .skip(1)
            .filter(|line| !line.starts_with('-'))
            .map(|line| line.chars().count())
            .collect::<Vec<_>>();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}
