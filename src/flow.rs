//! Chatbot Flow
//!
//! Editing operations on the ordered list of flow blocks.

use crate::models::{next_id, BlockKind, FlowBlock};

/// Append a block; blank content (after trimming) is rejected.
/// Returns the new block's id when added.
pub fn add_block(blocks: &mut Vec<FlowBlock>, kind: BlockKind, content: &str) -> Option<u32> {
    if content.trim().is_empty() {
        return None;
    }
    let id = next_id(blocks);
    blocks.push(FlowBlock {
        id,
        kind,
        content: content.to_string(),
    });
    Some(id)
}

pub fn remove_block(blocks: &mut Vec<FlowBlock>, id: u32) {
    blocks.retain(|b| b.id != id);
}

/// Simulated conversation: every block as a bot line, in flow order
pub fn preview_transcript(blocks: &[FlowBlock]) -> String {
    blocks
        .iter()
        .map(|b| format!("Bot: {}\n\n", b.content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use leptos_dragdrop::reorder;

    #[test]
    fn test_add_block_rejects_blank() {
        let mut blocks = fixtures::flow_blocks();
        assert_eq!(add_block(&mut blocks, BlockKind::Message, "   \n"), None);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_add_and_remove() {
        let mut blocks = fixtures::flow_blocks();
        let id = add_block(&mut blocks, BlockKind::Action, "Escalate").unwrap();
        assert_eq!(id, 3);
        assert_eq!(blocks.last().map(|b| b.kind), Some(BlockKind::Action));

        remove_block(&mut blocks, 1);
        assert_eq!(blocks.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 3]);

        // Ids keep growing after a delete
        assert_eq!(add_block(&mut blocks, BlockKind::Message, "Bye"), Some(4));
    }

    #[test]
    fn test_preview_follows_order() {
        let blocks = reorder(fixtures::flow_blocks(), 1, Some(0));
        let transcript = preview_transcript(&blocks);
        assert!(transcript.starts_with("Bot: Please select an option:"));
        assert!(transcript.ends_with("How can I help you today?\n\n"));
        assert_eq!(transcript.matches("Bot: ").count(), 2);
    }

    #[test]
    fn test_preview_of_empty_flow() {
        assert_eq!(preview_transcript(&[]), "");
    }
}
