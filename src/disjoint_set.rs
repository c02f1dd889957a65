/// Union-find over the dense indices `0..n` of a color set.
///
/// `find` compresses iteratively, `union` merges by rank.
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    groups: usize,
}

impl DisjointSetForest {
    /// `n` singleton groups.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            groups: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint groups remaining.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Representative of the group containing `node`.
    ///
    /// Every node visited on the way is re-pointed at the root. Panics if
    /// `node` was never registered.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the groups rooted at `a` and `b` and returns the new root.
    ///
    /// Both arguments must be roots, i.e. results of [`find`](Self::find).
    /// Merging a root with itself is a no-op.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        assert!(
            self.parent[a] == a && self.parent[b] == b,
            "union expects group representatives, got {a} and {b}"
        );
        if a == b {
            return a;
        }

        let (root, child) = if self.rank[a] < self.rank[b] { (b, a) } else { (a, b) };
        self.parent[child] = root;
        if self.rank[root] == self.rank[child] {
            self.rank[root] += 1;
        }
        self.groups -= 1;

        root
    }

    /// Whether `a` and `b` are in the same group.
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
