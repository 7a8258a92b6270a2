//! Symmetric edge store with distances and pheromone levels.

use log::debug;

use crate::distance::distance;
use crate::models::Location;

/// Inverse-length factor used for zero-length edges.
///
/// Coincident locations would otherwise divide by zero. It also stands in for
/// a positive length so small that its inverse overflows. Every other edge uses
/// its exact inverse length.
pub const DEGENERATE_ATTRACTIVENESS: f64 = 1e6;

/// One undirected edge: a fixed length and a mutable pheromone level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    length: f64,
    pheromone: f64,
}

impl Edge {
    fn new(length: f64, pheromone: f64) -> Self {
        Self { length, pheromone }
    }

    /// Distance between the two endpoints.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Current pheromone level (never negative).
    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    /// `1 / length`, or [`DEGENERATE_ATTRACTIVENESS`] when that is undefined
    /// or not finite.
    pub fn inverse_length(&self) -> f64 {
        let inverse = 1.0 / self.length;
        if self.length > 0.0 && inverse.is_finite() {
            inverse
        } else {
            DEGENERATE_ATTRACTIVENESS
        }
    }

    /// `pheromone^pheromone_weight * (1 / length)^length_weight`.
    pub fn weight(&self, pheromone_weight: f64, length_weight: f64) -> f64 {
        self.pheromone.powf(pheromone_weight) * self.inverse_length().powf(length_weight)
    }
}

/// Complete symmetric edge matrix over a location set.
///
/// Each unordered pair `{i, j}` owns exactly one [`Edge`], stored in a flat
/// upper-triangular array. `edge(i, j)` and `edge(j, i)` resolve to the same
/// slot, so a pheromone update through either direction is seen by both.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::pheromone::EdgeMatrix;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
///     Location::new(6.0, 8.0),
/// ];
/// let mut edges = EdgeMatrix::new(&locations, 1.0);
/// assert_eq!(edges.num_edges(), 3);
///
/// edges.deposit(2, 1, 0.5);
/// assert!((edges.edge(1, 2).pheromone() - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeMatrix {
    edges: Vec<Edge>,
    size: usize,
}

impl EdgeMatrix {
    /// Builds the matrix from location coordinates, with every edge starting
    /// at `initial_pheromone`.
    pub fn new(locations: &[Location], initial_pheromone: f64) -> Self {
        let n = locations.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&locations[i], &locations[j]);
                edges.push(Edge::new(d, initial_pheromone));
            }
        }

        let degenerate = edges.iter().filter(|e| e.length == 0.0).count();
        if degenerate > 0 {
            debug!("edge matrix has {degenerate} zero-length edges, using bounded attractiveness");
        }

        Self { edges, size: n }
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct undirected edges, `n(n-1)/2`.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The edge between `i` and `j`, in either order.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of bounds.
    pub fn edge(&self, i: usize, j: usize) -> &Edge {
        &self.edges[self.index(i, j)]
    }

    /// Edge attractiveness for moving between `i` and `j`.
    pub fn weight(&self, i: usize, j: usize, pheromone_weight: f64, length_weight: f64) -> f64 {
        self.edge(i, j).weight(pheromone_weight, length_weight)
    }

    /// Multiplies every edge's pheromone by `1 - rate`, not letting it fall
    /// below `floor`.
    ///
    /// A negative floor is treated as zero, so even a rate outside `[0, 1]`
    /// cannot produce negative pheromone.
    pub fn evaporate(&mut self, rate: f64, floor: f64) {
        let keep = 1.0 - rate;
        let floor = floor.max(0.0);
        for edge in &mut self.edges {
            edge.pheromone = (edge.pheromone * keep).max(floor);
        }
    }

    /// Adds `amount` pheromone to the edge between `i` and `j`.
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        let idx = self.index(i, j);
        let edge = &mut self.edges[idx];
        edge.pheromone = (edge.pheromone + amount).max(0.0);
    }

    /// Iterates over all edges once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(i != j, "edge matrix has no self-loop ({i}, {i})");
        assert!(
            i < self.size && j < self.size,
            "edge ({i}, {j}) out of bounds for {} locations",
            self.size
        );
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        a * (2 * self.size - a - 1) / 2 + (b - a - 1)
    }
}
