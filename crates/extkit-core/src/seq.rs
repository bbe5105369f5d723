//! Sequence helpers: partitioning, pagination and de-duplication.
//!
//! Every helper is available as a free function taking any `IntoIterator`
//! and as a method through [`SeqExt`]:
//!
//! ```
//! use extkit_core::seq::SeqExt;
//!
//! let pages: Vec<Vec<u32>> = (1..=5).chunked(2).collect();
//! assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Peekable, Skip, Take};

use crate::error::{Error, Result};

/// Iterator over fixed-size chunks, see [`partition`].
#[derive(Debug, Clone)]
pub struct Partitions<I> {
    iter: I,
    size: usize,
    done: bool,
}

impl<I: Iterator> Iterator for Partitions<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.size == 0 {
            self.done = true;
            return Some(self.iter.by_ref().collect());
        }

        let chunk: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            self.done = true;
            None
        } else {
            Some(chunk)
        }
    }
}

/// Split items into chunks of `size`; the last chunk may be shorter.
///
/// A `size` of zero yields everything as one chunk (an empty one for an
/// empty input).
pub fn partition<I: IntoIterator>(items: I, size: usize) -> Partitions<I::IntoIter> {
    Partitions {
        iter: items.into_iter(),
        size,
        done: false,
    }
}

/// Split items into pages of `page_len`. Same as [`partition`].
pub fn paginate<I: IntoIterator>(items: I, page_len: usize) -> Partitions<I::IntoIter> {
    partition(items, page_len)
}

/// The zero-based `page_number`th page of `page_size` items.
pub fn page<I: IntoIterator>(
    items: I,
    page_size: usize,
    page_number: usize,
) -> Take<Skip<I::IntoIter>> {
    items
        .into_iter()
        .skip(page_size.saturating_mul(page_number))
        .take(page_size)
}

/// Everything but the first item. Fails on an empty sequence.
pub fn tail<I: IntoIterator>(items: I) -> Result<Skip<Peekable<I::IntoIter>>> {
    let mut iter = items.into_iter().peekable();
    if iter.peek().is_none() {
        return Err(Error::invalid_argument("items", "sequence is empty"));
    }
    Ok(iter.skip(1))
}

/// Keep the first item for each distinct key, preserving order.
pub fn distinct_by_key<I, K, F>(items: I, mut key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Keep the first item of each group of items `eq` considers equal,
/// preserving order.
///
/// Each item is compared against every item kept so far, so this is
/// quadratic; prefer [`distinct_by_key`] when a key can be derived.
pub fn distinct_by<I, F>(items: I, mut eq: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut kept: Vec<I::Item> = Vec::new();
    for item in items {
        if !kept.iter().any(|k| eq(k, &item)) {
            kept.push(item);
        }
    }
    kept
}

/// Sequence helpers as iterator methods.
pub trait SeqExt: Iterator + Sized {
    fn chunked(self, size: usize) -> Partitions<Self> {
        partition(self, size)
    }

    fn paginate(self, page_len: usize) -> Partitions<Self> {
        paginate(self, page_len)
    }

    fn page(self, page_size: usize, page_number: usize) -> Take<Skip<Self>> {
        page(self, page_size, page_number)
    }

    fn tail(self) -> Result<Skip<Peekable<Self>>> {
        tail(self)
    }

    fn distinct_by_key<K, F>(self, key: F) -> Vec<Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        distinct_by_key(self, key)
    }

    fn distinct_by<F>(self, eq: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        distinct_by(self, eq)
    }
}

impl<I: Iterator> SeqExt for I {}
