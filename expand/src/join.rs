//! Equi-join capability used for every expansion hop.
//!
//! The driver only needs "pair every left row with every right row sharing a
//! key". A dataflow engine can provide that with a distributed join; the
//! implementations here are in-memory hash joins.

use rayon::prelude::*;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Join two inputs on extracted keys.
pub trait KeyJoin {
    /// Return every `(l, r)` with `key_left(l) == key_right(r)`.
    fn join_on_key<'a, L, R, K, FL, FR>(
        &self,
        left: &'a [L],
        right: &'a [R],
        key_left: FL,
        key_right: FR,
    ) -> Vec<(&'a L, &'a R)>
    where
        L: Sync,
        R: Sync,
        K: Eq + Hash + Send,
        FL: Fn(&L) -> K + Sync,
        FR: Fn(&R) -> K + Sync;
}

/// Single-threaded hash join.
///
/// Builds a table over the right input and probes it with the left input, so
/// the output follows left order, then right order within a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashJoin;

impl KeyJoin for HashJoin {
    fn join_on_key<'a, L, R, K, FL, FR>(
        &self,
        left: &'a [L],
        right: &'a [R],
        key_left: FL,
        key_right: FR,
    ) -> Vec<(&'a L, &'a R)>
    where
        L: Sync,
        R: Sync,
        K: Eq + Hash + Send,
        FL: Fn(&L) -> K + Sync,
        FR: Fn(&R) -> K + Sync,
    {
        let table = build_table(right.iter().map(|r| (key_right(r), r)));
        probe(&table, left.iter().map(|l| (key_left(l), l)))
    }
}

/// Hash join that partitions both inputs by key hash and joins the
/// partitions in parallel on the rayon pool.
///
/// Produces the same pairs as [`HashJoin`]; only the order differs.
#[derive(Debug, Clone, Copy)]
pub struct PartitionedHashJoin {
    partitions: usize,
}

impl PartitionedHashJoin {
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: partitions.max(1),
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }
}

impl Default for PartitionedHashJoin {
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

impl KeyJoin for PartitionedHashJoin {
    fn join_on_key<'a, L, R, K, FL, FR>(
        &self,
        left: &'a [L],
        right: &'a [R],
        key_left: FL,
        key_right: FR,
    ) -> Vec<(&'a L, &'a R)>
    where
        L: Sync,
        R: Sync,
        K: Eq + Hash + Send,
        FL: Fn(&L) -> K + Sync,
        FR: Fn(&R) -> K + Sync,
    {
        let hasher = RandomState::new();
        let left_rows = left.iter().map(|l| (key_left(l), l));
        let right_rows = right.iter().map(|r| (key_right(r), r));
        let left_parts = partition(&hasher, self.partitions, left_rows);
        let right_parts = partition(&hasher, self.partitions, right_rows);

        left_parts
            .into_par_iter()
            .zip(right_parts.into_par_iter())
            .map(|(left_part, right_part)| {
                let table = build_table(right_part);
                probe(&table, left_part)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

fn build_table<'a, K, R>(rows: impl IntoIterator<Item = (K, &'a R)>) -> HashMap<K, Vec<&'a R>>
where
    K: Eq + Hash,
{
    let mut table: HashMap<K, Vec<&'a R>> = HashMap::new();
    for (key, row) in rows {
        table.entry(key).or_default().push(row);
    }
    table
}

fn probe<'a, K, L, R>(
    table: &HashMap<K, Vec<&'a R>>,
    rows: impl IntoIterator<Item = (K, &'a L)>,
) -> Vec<(&'a L, &'a R)>
where
    K: Eq + Hash,
{
    let mut pairs = Vec::new();
    for (key, l) in rows {
        if let Some(matches) = table.get(&key) {
            pairs.extend(matches.iter().map(|r| (l, *r)));
        }
    }
    pairs
}

fn partition<'a, K, T>(
    hasher: &RandomState,
    partitions: usize,
    rows: impl Iterator<Item = (K, &'a T)>,
) -> Vec<Vec<(K, &'a T)>>
where
    K: Hash,
{
    let mut parts: Vec<Vec<(K, &'a T)>> = (0..partitions).map(|_| Vec::new()).collect();
    for (key, row) in rows {
        let slot = (hasher.hash_one(&key) % partitions as u64) as usize;
        parts[slot].push((key, row));
    }
    parts
}
