use fxhash::FxBuildHasher;
/// This module implements a breadth-first variant of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html)
/// which keeps parent bookkeeping in an index map so the path can be
/// reconstructed without storing a growing path per frontier entry.
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::collections::VecDeque;

use std::hash::Hash;

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches the graph spanned by `successors` in first-in first-out order,
/// starting from `start` and stopping at the first node for which `success`
/// holds. On an unweighted graph the FIFO expansion order makes the returned
/// node sequence a shortest path by edge count; ties are broken by the order
/// in which `successors` enumerates neighbours.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<(Vec<N>, usize)>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = VecDeque::new();
    frontier.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    while let Some(index) = frontier.pop_front() {
        let node = parents.get_index(index).unwrap().0.clone();
        if success(&node) {
            let path = reverse_path(&parents, |&p| p, index);
            let length = path.len() - 1;
            return Some((path, length));
        }
        for successor in successors(&node) {
            // A node that is already in the parent map was discovered on an
            // equally short or shorter chain and must not be enqueued again.
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    warn!("Reachable goal could not be pathed to, is reachable graph correct?");
    None
}
