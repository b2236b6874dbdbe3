use serde::Serialize;

/// アイテムの所属パーティション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Available,
    Selected,
}

impl Partition {
    pub fn all() -> [Partition; 2] {
        [Partition::Available, Partition::Selected]
    }

    /// 反対側のパーティション
    pub fn opposite(self) -> Self {
        match self {
            Partition::Available => Partition::Selected,
            Partition::Selected => Partition::Available,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Partition::Available => 0,
            Partition::Selected => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Partition::Available => "Available",
            Partition::Selected => "Selected",
        }
    }
}
