//! Windowed list results.

use serde::{Deserialize, Serialize};

/// Offset/limit window requested by a list operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub offset: usize,
    pub limit: usize,
}

impl PageParams {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

/// A slice of results plus the offset of the next window, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub result: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
}

impl<T> Page<T> {
    pub fn new(result: Vec<T>, next: Option<usize>) -> Self {
        Self { result, next }
    }

    pub fn empty() -> Self {
        Self {
            result: Vec::new(),
            next: None,
        }
    }

    /// Cut the window described by `params` out of an ordered result set.
    ///
    /// `next` is set only when items remain past a non-empty window, so a
    /// client following it always advances.
    pub fn window(items: Vec<T>, params: PageParams) -> Self {
        let total = items.len();
        let result: Vec<T> = items
            .into_iter()
            .skip(params.offset)
            .take(params.limit)
            .collect();
        let end = params.offset.saturating_add(params.limit);
        let next = (params.limit > 0 && end < total).then_some(end);
        Self { result, next }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            result: self.result.into_iter().map(f).collect(),
            next: self.next,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
