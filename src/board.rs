//! Layered directed graph used as the playing board
//!
//! A board is a `rows x cols` grid of nodes. Edges only ever lead from a node
//! in row `i` to a node in row `i + 1`; they are drawn once when the board is
//! generated and never change afterwards. The only mutable state during a game
//! is the occupant of each node, which is set at most once.

use std::collections::VecDeque;
use std::fmt;

use rand::Rng;

use crate::{config::BoardConfig, player::Player, BoardError, Result};

/// Lower bound of the value drawn for each candidate edge
const EDGE_DRAW_LOW: f64 = 0.1;

/// Upper bound of the value drawn for each candidate edge
const EDGE_DRAW_HIGH: f64 = 0.9;

/// Grid coordinate of a board node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// Layer, 0 at the top where pieces enter
    pub row: usize,
    /// Position within the layer
    pub col: usize,
}

impl Node {
    /// Creates a node coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Node { row, col }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Randomly generated layered board with per-node occupancy
///
/// Nodes are stored row-major, so node `(r, c)` lives at index `r * cols + c`.
/// Cloning a board yields a fully independent copy of its edges and
/// occupancy, which is what speculative simulation relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphBoard {
    config: BoardConfig,

    /// Outgoing edges per node, in insertion order
    successors: Vec<Vec<usize>>,

    /// Incoming edge count per node
    in_degree: Vec<usize>,

    occupants: Vec<Option<Player>>,
}

impl GraphBoard {
    /// Generates a new empty board
    ///
    /// For every node outside the last row and every column of the next row,
    /// a value is drawn uniformly from (0.1, 0.9) and the edge is added when
    /// the value is below `config.edge_probability`.
    pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut board = Self::empty(*config);

        for row in 0..config.rows.saturating_sub(1) {
            for col in 0..config.cols {
                let from = board.index_unchecked(Node::new(row, col));
                for target_col in 0..config.cols {
                    let draw: f64 = rng.gen_range(EDGE_DRAW_LOW..EDGE_DRAW_HIGH);
                    if draw < config.edge_probability {
                        let to = board.index_unchecked(Node::new(row + 1, target_col));
                        board.link(from, to);
                    }
                }
            }
        }

        log::trace!(
            "generated {}x{} board with {} edges (p = {})",
            config.rows,
            config.cols,
            board.edge_count(),
            config.edge_probability
        );
        Ok(board)
    }

    /// Builds an empty board with exactly the given edges
    ///
    /// Every edge must go from some row `i` to row `i + 1`. Duplicate edges are
    /// ignored. This is mostly useful for constructing known positions.
    pub fn with_edges(config: &BoardConfig, edges: &[(Node, Node)]) -> Result<Self> {
        config.validate()?;
        let mut board = Self::empty(*config);

        for &(from, to) in edges {
            let (Some(from_index), Some(to_index)) = (board.index(from), board.index(to)) else {
                return Err(BoardError::InvalidParameter(format!(
                    "edge {} -> {} lies outside the {}x{} board",
                    from, to, config.rows, config.cols
                )));
            };
            if to.row != from.row + 1 {
                return Err(BoardError::InvalidParameter(format!(
                    "edge {} -> {} does not lead to the next row",
                    from, to
                )));
            }
            if !board.successors[from_index].contains(&to_index) {
                board.link(from_index, to_index);
            }
        }

        Ok(board)
    }

    /// Draws a fresh edge set with the same shape and probability, keeping occupancy
    pub fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        let mut board = Self::generate(&self.config, rng)?;
        board.occupants.clone_from(&self.occupants);
        Ok(board)
    }

    fn empty(config: BoardConfig) -> Self {
        let nodes = config.node_count();
        GraphBoard {
            config,
            successors: vec![Vec::new(); nodes],
            in_degree: vec![0; nodes],
            occupants: vec![None; nodes],
        }
    }

    fn link(&mut self, from: usize, to: usize) {
        self.successors[from].push(to);
        self.in_degree[to] += 1;
    }

    /// Configuration this board was generated from
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Edge probability used for generation
    pub fn edge_probability(&self) -> f64 {
        self.config.edge_probability
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.occupants.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Returns true if the coordinate lies on the board
    pub fn contains(&self, node: Node) -> bool {
        node.row < self.rows() && node.col < self.cols()
    }

    /// Row-major index of a node, or `None` when it is off the board
    pub fn index(&self, node: Node) -> Option<usize> {
        self.contains(node).then(|| self.index_unchecked(node))
    }

    fn index_unchecked(&self, node: Node) -> usize {
        node.row * self.cols() + node.col
    }

    /// Node at a row-major index
    pub fn node_at(&self, index: usize) -> Node {
        Node::new(index / self.cols(), index % self.cols())
    }

    /// All nodes in row-major order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.node_count()).map(move |index| self.node_at(index))
    }

    /// The row-0 node where pieces dropped into `column` enter
    pub fn entry_node(&self, column: usize) -> Node {
        Node::new(0, column)
    }

    /// Successors of `node` in insertion order; empty for off-board nodes
    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        let successors = match self.index(node) {
            Some(index) => self.successors[index].as_slice(),
            None => &[][..],
        };
        successors.iter().map(move |&index| self.node_at(index))
    }

    pub(crate) fn successor_indices(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Returns true if there is an edge `from -> to`
    pub fn has_edge(&self, from: Node, to: Node) -> bool {
        match (self.index(from), self.index(to)) {
            (Some(from), Some(to)) => self.successors[from].contains(&to),
            _ => false,
        }
    }

    /// Number of outgoing edges
    pub fn out_degree(&self, node: Node) -> usize {
        self.index(node).map_or(0, |index| self.successors[index].len())
    }

    /// Number of incoming edges
    pub fn in_degree(&self, node: Node) -> usize {
        self.index(node).map_or(0, |index| self.in_degree[index])
    }

    /// Number of incident edges in either direction
    pub fn degree(&self, node: Node) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    /// Returns true if a piece rests on `node`
    pub fn is_occupied(&self, node: Node) -> bool {
        self.occupant_of(node).is_some()
    }

    /// Player whose piece rests on `node`, if any
    pub fn occupant_of(&self, node: Node) -> Option<Player> {
        self.index(node).and_then(|index| self.occupants[index])
    }

    pub(crate) fn occupant_at(&self, index: usize) -> Option<Player> {
        self.occupants[index]
    }

    /// Places `player`'s piece on `node`
    ///
    /// A node is claimed at most once per game; claiming an occupied node
    /// fails with [`BoardError::InvalidState`].
    pub fn set_occupant(&mut self, node: Node, player: Player) -> Result<()> {
        let index = self.index(node).ok_or_else(|| {
            BoardError::InvalidParameter(format!("node {} lies outside the board", node))
        })?;
        if let Some(current) = self.occupants[index] {
            return Err(BoardError::InvalidState(format!(
                "node {} is already occupied by {}",
                node, current
            )));
        }
        self.occupants[index] = Some(player);
        Ok(())
    }

    /// Nodes currently owned by `player`, row-major
    pub fn owned_by(&self, player: Player) -> impl Iterator<Item = Node> + '_ {
        self.occupants
            .iter()
            .enumerate()
            .filter(move |(_, occupant)| **occupant == Some(player))
            .map(move |(index, _)| self.node_at(index))
    }

    /// Number of occupied nodes
    pub fn occupied_count(&self) -> usize {
        self.occupants.iter().filter(|occupant| occupant.is_some()).count()
    }

    /// Columns whose entry node is still free, ascending
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.cols())
            .filter(|&column| !self.is_occupied(self.entry_node(column)))
            .collect()
    }

    /// Number of nodes without any incoming or outgoing edge
    pub fn isolate_count(&self) -> usize {
        (0..self.node_count())
            .filter(|&index| self.in_degree[index] == 0 && self.successors[index].is_empty())
            .count()
    }

    /// Degree of `node` normalised by the number of other nodes
    ///
    /// A single-node board reports 1.0.
    pub fn degree_centrality(&self, node: Node) -> f64 {
        let others = self.node_count().saturating_sub(1);
        if others == 0 {
            return 1.0;
        }
        self.degree(node) as f64 / others as f64
    }

    /// Average local clustering coefficient of the undirected underlying graph
    ///
    /// Nodes with fewer than two neighbours contribute 0. Because edges only
    /// join adjacent layers, a generated board has no triangles and this is
    /// always 0.0; it is reported for completeness.
    pub fn clustering_coefficient(&self) -> f64 {
        let nodes = self.node_count();
        if nodes == 0 {
            return 0.0;
        }

        let mut undirected: Vec<Vec<usize>> = vec![Vec::new(); nodes];
        for (from, successors) in self.successors.iter().enumerate() {
            for &to in successors {
                if from != to {
                    undirected[from].push(to);
                    undirected[to].push(from);
                }
            }
        }
        for neighbours in &mut undirected {
            neighbours.sort_unstable();
            neighbours.dedup();
        }

        let total: f64 = undirected
            .iter()
            .map(|neighbours| {
                let k = neighbours.len();
                if k < 2 {
                    return 0.0;
                }
                let mut links = 0usize;
                for (i, &u) in neighbours.iter().enumerate() {
                    for &v in &neighbours[i + 1..] {
                        if undirected[u].binary_search(&v).is_ok() {
                            links += 1;
                        }
                    }
                }
                2.0 * links as f64 / (k * (k - 1)) as f64
            })
            .sum();

        total / nodes as f64
    }

    /// Every node reachable from `start` along directed edges, `start` first
    ///
    /// Nodes are listed in breadth-first order.
    pub fn reachable_from(&self, start: Node) -> Vec<Node> {
        let Some(start_index) = self.index(start) else {
            return Vec::new();
        };

        let mut seen = vec![false; self.node_count()];
        let mut queue = VecDeque::from([start_index]);
        let mut order = Vec::new();
        seen[start_index] = true;

        while let Some(index) = queue.pop_front() {
            order.push(self.node_at(index));
            for &next in &self.successors[index] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }
}

impl fmt::Display for GraphBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.occupant_of(Node::new(row, col)) {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
