pub const MAX_TAGS: usize = 5;

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAdd {
    Added,
    Duplicate,
    Full,
    Empty,
}

/// Ordered, lowercase, de-duplicated tag set capped at `MAX_TAGS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, raw: &str) -> TagAdd {
        let tag = normalize(raw);
        if tag.is_empty() {
            return TagAdd::Empty;
        }
        if self.is_full() {
            return TagAdd::Full;
        }
        if self.tags.contains(&tag) {
            return TagAdd::Duplicate;
        }
        self.tags.push(tag);
        TagAdd::Added
    }

    /// Removes by exact value; returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.tags.get(idx).map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
