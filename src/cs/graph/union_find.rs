use super::mst_result::OpCounter;

/// Disjoint-set (union-find) for cycle detection in Kruskal's algorithm.
///
/// Elements are dense vertex indices `0..n`. There is no rank or size
/// heuristic: `union` always hangs the first root under the second.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Initializes a union-find for `n` elements (0..n-1), each in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    /// Uses path compression.
    ///
    /// Ticks `ops` once for every element on the path from `x` to the root,
    /// both ends included, so a find on a root costs one operation.
    ///
    /// # Panics
    /// If `x` is not below the element count given to [`UnionFind::new`].
    pub fn find(&mut self, x: usize, ops: &mut OpCounter) -> usize {
        let mut root = x;
        ops.tick();
        while self.parent[root] != root {
            root = self.parent[root];
            ops.tick();
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Unites the sets containing `x` and `y`, making `y`'s root the parent
    /// of `x`'s root.
    ///
    /// Ticks `ops` once for the union itself plus whatever the two finds cost.
    /// Returns `false` if `x` and `y` were already in the same set.
    pub fn union(&mut self, x: usize, y: usize, ops: &mut OpCounter) -> bool {
        ops.tick();
        let rx = self.find(x, ops);
        let ry = self.find(y, ops);
        if rx == ry {
            return false;
        }
        self.parent[rx] = ry;
        true
    }

    /// Returns whether `x` and `y` share a representative without counting
    /// or compressing anything.
    #[cfg(test)]
    fn connected(&self, x: usize, y: usize) -> bool {
        self.root_of(x) == self.root_of(y)
    }

    #[cfg(test)]
    fn root_of(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }
}
