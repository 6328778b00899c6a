use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{graph::Graph, Position, Weight};
use crate::error::{Error, Result};

pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_fmi_file(path: &Path) -> Result<Graph<u32>> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_fmi_reader(reader)
    }

    /// Reads a graph in FMI text format.
    ///
    /// Comment lines start with `#`. After the comments follow the number of
    /// vertices, the number of edges, one line per vertex
    /// (`id id2 latitude longitude elevation`) and one line per edge
    /// (`tail head cost type maxspeed`). Trailing columns are ignored.
    pub fn from_fmi_reader<R: BufRead>(reader: R) -> Result<Graph<u32>> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|line| (index + 1, line)))
            .filter(|line| match line {
                Ok((_, line)) => !line.starts_with('#') && !line.trim().is_empty(),
                Err(_) => true,
            });

        let mut next_line = |what: &str| -> Result<(usize, String)> {
            match lines.next() {
                Some(line) => Ok(line?),
                None => Err(Error::Parse {
                    line: 0,
                    reason: format!("unexpected end of input, expected {}", what),
                }),
            }
        };

        let (line, number_of_vertices) = next_line("number of vertices")?;
        let number_of_vertices: usize = parse_value(line, number_of_vertices.trim(), "vertex count")?;
        let (line, number_of_edges) = next_line("number of edges")?;
        let number_of_edges: usize = parse_value(line, number_of_edges.trim(), "edge count")?;

        let mut graph = Graph::new();

        for _ in 0..number_of_vertices {
            let (line, content) = next_line("vertex line")?;
            let mut values = content.split_whitespace();
            let id: u32 = parse_column(line, values.next(), "vertex id")?;
            let _id2 = values.next();
            let latitude: f64 = parse_column(line, values.next(), "latitude")?;
            let longitude: f64 = parse_column(line, values.next(), "longitude")?;
            graph.add_vertex_with_position(
                id,
                Position {
                    latitude,
                    longitude,
                },
            );
        }

        for _ in 0..number_of_edges {
            let (line, content) = next_line("edge line")?;
            let mut values = content.split_whitespace();
            let tail: u32 = parse_column(line, values.next(), "tail")?;
            let head: u32 = parse_column(line, values.next(), "head")?;
            let weight: Weight = parse_column(line, values.next(), "cost")?;
            graph
                .add_edge(&tail, &head, weight)
                .map_err(|error| Error::Parse {
                    line,
                    reason: error.to_string(),
                })?;
        }

        Ok(graph)
    }

    /// Bidirectional `size x size` grid with vertex ids `1..=size*size`.
    /// Horizontal and vertical edges weigh `[0.5, 1.5)`, roughly every third
    /// cell gets a diagonal of weight `[1.0, 2.0)`.
    pub fn grid(size: u32, seed: u64) -> Graph<u32> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = Graph::new();
        let id = |row: u32, column: u32| row * size + column + 1;

        for row in 0..size {
            for column in 0..size {
                graph.add_vertex_with_position(
                    id(row, column),
                    Position {
                        latitude: row as f64,
                        longitude: column as f64,
                    },
                );
            }
        }

        let connect = |graph: &mut Graph<u32>, a: u32, b: u32, weight: Weight| {
            // Both endpoints were inserted above.
            let _ = graph.add_edge_bidirectional(&a, &b, weight);
        };

        for row in 0..size {
            for column in 0..size {
                if column + 1 < size {
                    let weight = rng.gen_range(0.5..1.5);
                    connect(&mut graph, id(row, column), id(row, column + 1), weight);
                }
                if row + 1 < size {
                    let weight = rng.gen_range(0.5..1.5);
                    connect(&mut graph, id(row, column), id(row + 1, column), weight);
                }
                if rng.gen_bool(0.3) && row + 1 < size && column + 1 < size {
                    let weight = rng.gen_range(1.0..2.0);
                    connect(&mut graph, id(row, column), id(row + 1, column + 1), weight);
                }
            }
        }

        graph
    }

    /// Random directed graph with vertex ids `0..number_of_vertices` and
    /// `number_of_edges` edges of weight `[0, 10)`. Self loops and parallel
    /// edges may occur.
    pub fn random(number_of_vertices: u32, number_of_edges: usize, seed: u64) -> Graph<u32> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = Graph::new();

        for id in 0..number_of_vertices {
            graph.add_vertex(id);
        }

        if number_of_vertices == 0 {
            return graph;
        }

        for _ in 0..number_of_edges {
            let tail = rng.gen_range(0..number_of_vertices);
            let head = rng.gen_range(0..number_of_vertices);
            let weight = rng.gen_range(0.0..10.0);
            let _ = graph.add_edge(&tail, &head, weight);
        }

        graph
    }
}

fn parse_value<T: FromStr>(line: usize, value: &str, what: &str) -> Result<T> {
    value.parse().map_err(|_| Error::Parse {
        line,
        reason: format!("unable to parse {} from {:?}", what, value),
    })
}

fn parse_column<T: FromStr>(line: usize, value: Option<&str>, what: &str) -> Result<T> {
    let value = value.ok_or_else(|| Error::Parse {
        line,
        reason: format!("no {} found", what),
    })?;
    parse_value(line, value, what)
}
