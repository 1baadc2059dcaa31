use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;

pub fn run<B: StorageBackend>(store: &CollectionStore<B>) -> Result<CmdResult> {
    let stats = store.stats();
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::info(format!(
        "{} game(s), {} copies across {} platform(s), worth ${:.2}",
        stats.total_games, stats.total_items, stats.platform_count, stats.total_value
    )));
    result.stats = Some(stats);
    Ok(result)
}
