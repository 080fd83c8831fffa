use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first means the start node, last means the end node
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, rest)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in rest {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph, `from` is depended on by `to`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    nodes: BTreeSet<Node>,
    // insertion order, used to keep the sort stable
    order: Vec<Node>,
    routes: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            order: Vec::new(),
            routes: BTreeMap::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) {
        if self.nodes.insert(node) {
            self.order.push(node);
        }
    }

    /// Adds the edge `from -> to`. Duplicate edges collapse into one.
    pub fn route_to(&mut self, from: Node, to: Node) {
        self.add_node(from);
        self.add_node(to);
        self.routes.entry(from).or_default().insert(to);
    }

    fn direct_connected_nodes(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.routes.get(&node).into_iter().flatten().copied()
    }

    /// Kahn's algorithm. Among ready nodes, insertion order wins.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> = self.nodes.iter().map(|&n| (n, 0)).collect();
        for targets in self.routes.values() {
            for to in targets {
                if let Some(deg) = in_degree.get_mut(to) {
                    *deg += 1;
                }
            }
        }

        let mut sorted = Vec::with_capacity(self.order.len());
        let mut remaining: Vec<Node> = self.order.clone();

        while !remaining.is_empty() {
            let Some(pos) = remaining
                .iter()
                .position(|n| in_degree.get(n).copied() == Some(0))
            else {
                let cycle = self.find_cycle(&remaining).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route: cycle }));
            };

            let node = remaining.remove(pos);
            for connected in self.direct_connected_nodes(node) {
                if let Some(deg) = in_degree.get_mut(&connected) {
                    *deg = deg.saturating_sub(1);
                }
            }
            sorted.push(node);
        }

        Ok(sorted)
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let mut visited = BTreeSet::new();
        let mut path: Vec<Node> = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbours = |node: Node| {
            self.direct_connected_nodes(node)
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start in nodes {
            if !visited.insert(start) {
                continue;
            }
            path.push(start);
            stack.push((start, neighbours(start)));

            while let Some((_, next)) = stack.last_mut() {
                match next.next() {
                    Some(neighbour) => {
                        if let Some(pos) = path.iter().position(|&n| n == neighbour) {
                            let mut cycle = path[pos..].to_vec();
                            cycle.push(neighbour);
                            return Some(cycle);
                        }
                        if visited.insert(neighbour) {
                            path.push(neighbour);
                            stack.push((neighbour, neighbours(neighbour)));
                        }
                    }
                    None => {
                        stack.pop();
                        path.pop();
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_sort_orders_dependencies_first() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_node(3);
        graph.route_to(1, 2);
        graph.route_to(2, 3);
        graph.route_to(1, 3);

        let sorted = graph.topology_sort().expect("acyclic graph should sort");
        let pos = |n| sorted.iter().position(|&x| x == n).expect("node present");
        assert!(pos(1) < pos(2));
        assert!(pos(2) < pos(3));
    }

    #[test]
    fn isolated_nodes_keep_insertion_order() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_node(9);
        graph.add_node(4);
        graph.add_node(7);

        assert_eq!(graph.topology_sort().expect("no edges"), vec![9, 4, 7]);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2);
        graph.route_to(1, 2);

        assert_eq!(graph.topology_sort().expect("no cycle"), vec![1, 2]);
    }

    #[test]
    fn cycle_detection_error_msg() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2);
        graph.route_to(2, 3);
        graph.route_to(3, 1);

        match graph.topology_sort() {
            Err(TopologyError::CycleDetected(route)) => {
                assert_eq!(route.nodes().first(), route.nodes().last());
                let err = TopologyError::CycleDetected(route);
                let msg = err.to_string();
                assert!(msg.contains("Cycle detected"), "message was {msg}");
                assert!(msg.contains("->"), "message was {msg}");
            }
            other => panic!("Expected CycleDetected error, got {other:?}"),
        }
    }
}
