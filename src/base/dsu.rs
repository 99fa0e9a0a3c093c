struct DSUNode {
    parent: usize,
    size: usize,
}

/// Disjoint-set union over `0..n` with path compression and union by size.
pub struct DSU {
    nodes: Vec<DSUNode>,
    n_components: usize,
}

impl DSU {
    pub fn new(size: usize) -> Self {
        let nodes = (0..size).map(|parent| DSUNode { parent, size: 1 }).collect();
        Self {
            nodes,
            n_components: size,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }
        // 路径压缩
        let mut cur = x;
        while self.nodes[cur].parent != root {
            let next = self.nodes[cur].parent;
            self.nodes[cur].parent = root;
            cur = next;
        }
        root
    }

    pub fn readonly_find(&self, mut x: usize) -> usize {
        while self.nodes[x].parent != x {
            x = self.nodes[x].parent;
        }
        x
    }

    pub fn is_connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
    pub fn readonly_is_connected(&self, x: usize, y: usize) -> bool {
        self.readonly_find(x) == self.readonly_find(y)
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already
    /// in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return false;
        }
        if self.nodes[x].size < self.nodes[y].size {
            std::mem::swap(&mut x, &mut y);
        }
        self.nodes[y].parent = x;
        self.nodes[x].size += self.nodes[y].size;
        self.n_components -= 1;
        true
    }

    /// Number of elements in the set containing `x`.
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.nodes[root].size
    }

    /// Number of disjoint sets, isolated elements included.
    pub fn n_components(&self) -> usize {
        self.n_components
    }
}

#[cfg(test)]
mod tests {
    use super::DSU;

    #[test]
    fn test_union_and_find() {
        let mut dsu = DSU::new(6);
        assert_eq!(dsu.n_components(), 6);

        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert!(dsu.union(1, 3));
        assert!(!dsu.union(0, 2));

        assert!(dsu.is_connected(0, 3));
        assert!(dsu.readonly_is_connected(1, 2));
        assert!(!dsu.is_connected(0, 4));
        assert_eq!(dsu.size_of(2), 4);
        assert_eq!(dsu.size_of(5), 1);
        assert_eq!(dsu.n_components(), 3);
    }

    #[test]
    fn test_long_chain_compresses() {
        let n = 10_000;
        let mut dsu = DSU::new(n);
        for i in 1..n {
            dsu.union(i - 1, i);
        }
        assert_eq!(dsu.n_components(), 1);
        let root = dsu.find(n - 1);
        assert_eq!(dsu.readonly_find(0), root);
        assert_eq!(dsu.size_of(0), n);
    }
}
