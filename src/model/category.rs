use serde::{Deserialize, Serialize};

/// Topic names in id order; a name's id is its 1-based position.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Chào hỏi",
    "Gia đình",
    "Thức ăn & đồ uống",
    "Động vật",
    "Màu sắc",
    "Thời tiết",
    "Cơ thể người",
    "Số đếm",
    "Thời gian",
    "Địa điểm",
    "Công việc",
    "Trường học",
    "Giao thông",
    "Mua sắm",
    "Thể thao",
    "Cảm xúc",
    "Công nghệ",
];

/// Which position feeds the round-robin category id.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryAssignment {
    /// Position in the word/transcription-deduplicated sequence. Rows later
    /// dropped for a duplicate gloss still use up their slot, so emitted ids
    /// can skip. This is what existing seed files were generated with.
    #[default]
    SourceIndex,
    /// Position among the rows actually emitted.
    EmissionOrder,
}

/// Ordered, non-empty list of category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryList {
    names: Vec<String>,
}

impl CategoryList {
    /// Returns `None` for an empty list, which would have no valid id.
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// `(index mod N) + 1`
    pub fn id_for(&self, index: usize) -> usize {
        (index % self.names.len()) + 1
    }
}

impl Default for CategoryList {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
