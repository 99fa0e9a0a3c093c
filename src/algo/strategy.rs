use std::{fmt, str::FromStr};

/// Which traversal an algorithm should run.
///
/// 同一个问题的几种实现结果相同，只是遍历方式不同。不适用的组合会返回
/// [`GridErr::UnsupportedStrategy`](crate::base::GridErr::UnsupportedStrategy)。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    #[default]
    Bfs,
    DfsRecursive,
    DfsIterative,
    UnionFind,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::DfsRecursive,
        Strategy::DfsIterative,
        Strategy::UnionFind,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::DfsRecursive => "dfs",
            Strategy::DfsIterative => "dfs-iter",
            Strategy::UnionFind => "union-find",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy `{0}`, expected one of: bfs, dfs, dfs-iter, union-find")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" | "dfs-rec" | "dfs-recursive" => Ok(Strategy::DfsRecursive),
            "dfs-iter" | "dfs-iterative" => Ok(Strategy::DfsIterative),
            "union-find" | "dsu" => Ok(Strategy::UnionFind),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
