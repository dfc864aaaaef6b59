use rayon::prelude::*;
use tracing::debug_span;

use super::Direction;
use crate::mapping::MappingTable;

/// Convert many independent texts in parallel. Output order matches input.
pub fn transliterate_batch<S>(table: &MappingTable, texts: &[S], direction: Direction) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    let _span = debug_span!("transliterate_batch", count = texts.len(), %direction).entered();
    texts
        .par_iter()
        .map(|text| direction.apply(table, text.as_ref()))
        .collect()
}
