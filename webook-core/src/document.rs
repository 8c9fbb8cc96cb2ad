//! Mutation contract of the document model.
//!
//! These are the operations the editing surface calls. Block operations are
//! addressed by chapter and block id; moves swap with the adjacent element
//! and are no-ops at the sequence boundaries; removals of absent blocks are
//! no-ops. Chapter operations have the same shape one level up.

use tracing::debug;

use crate::error::CoreError;
use crate::models::{Block, Chapter, Document, Props};
use crate::registry::{self, create_default};
use crate::schema::check_props;
use webook_types::{BlockId, ChapterId, MoveDirection};

/// How an update treats the block's props
#[derive(Debug, Clone, PartialEq)]
pub enum PropsUpdate {
    /// Leave props untouched
    Keep,
    /// Replace the whole props object. The value must be complete; build it
    /// with [`Block::merged_props`] when only some fields changed.
    Replace(Props),
}

/// Create a block of `variant` with default content and a fresh id
pub fn create_block(variant: &str) -> Result<Block, CoreError> {
    create_default(variant)
}

fn validate(block: &Block) -> Result<(), CoreError> {
    let variant = registry::lookup(&block.variant)?;
    check_props(variant, &block.props)
}

impl Chapter {
    /// Swap the block with its neighbour; returns whether anything moved
    pub fn move_block(&mut self, id: &BlockId, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        match direction.neighbour(index, self.blocks.len()) {
            Some(other) => {
                self.blocks.swap(index, other);
                true
            }
            None => false,
        }
    }

    /// Insert a copy with a new id directly after the source
    pub fn duplicate_block(&mut self, id: &BlockId) -> Option<BlockId> {
        let index = self.position(id)?;
        let copy = self.blocks[index].duplicate();
        let new_id = copy.id.clone();
        self.blocks.insert(index + 1, copy);
        Some(new_id)
    }

    /// Remove by id; absent ids are ignored
    pub fn remove_block(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.position(id)?;
        Some(self.blocks.remove(index))
    }
}

impl Document {
    fn chapter_or_err(&mut self, chapter: &ChapterId) -> Result<&mut Chapter, CoreError> {
        self.chapter_mut(chapter)
            .ok_or_else(|| CoreError::ChapterNotFound(chapter.to_string()))
    }

    /// Append a block to the end of a chapter.
    ///
    /// The block's variant must be registered, its props must match the
    /// variant's shape and its id must not already be in the document.
    pub fn append_block(&mut self, chapter: &ChapterId, block: Block) -> Result<(), CoreError> {
        validate(&block)?;
        if self.find_block(&block.id).is_some() {
            return Err(CoreError::DuplicateBlockId(block.id.to_string()));
        }
        debug!(chapter = %chapter, block = %block.id, variant = %block.variant, "append block");
        self.chapter_or_err(chapter)?.blocks.push(block);
        Ok(())
    }

    pub fn move_block(
        &mut self,
        chapter: &ChapterId,
        block: &BlockId,
        direction: MoveDirection,
    ) -> Result<bool, CoreError> {
        Ok(self.chapter_or_err(chapter)?.move_block(block, direction))
    }

    pub fn duplicate_block(
        &mut self,
        chapter: &ChapterId,
        block: &BlockId,
    ) -> Result<Option<BlockId>, CoreError> {
        Ok(self.chapter_or_err(chapter)?.duplicate_block(block))
    }

    pub fn remove_block(
        &mut self,
        chapter: &ChapterId,
        block: &BlockId,
    ) -> Result<Option<Block>, CoreError> {
        Ok(self.chapter_or_err(chapter)?.remove_block(block))
    }

    /// Replace a block's content, and its props when asked to.
    ///
    /// A props replacement is validated before anything changes, so a
    /// rejected update leaves the block as it was.
    pub fn update_block(
        &mut self,
        id: &BlockId,
        content: impl Into<String>,
        props: PropsUpdate,
    ) -> Result<(), CoreError> {
        let block = self
            .find_block_mut(id)
            .ok_or_else(|| CoreError::BlockNotFound(id.to_string()))?;
        if let PropsUpdate::Replace(new_props) = &props {
            check_props(registry::lookup(&block.variant)?, new_props)?;
        }
        block.content = content.into();
        if let PropsUpdate::Replace(new_props) = props {
            block.props = new_props;
        }
        Ok(())
    }

    /// Append a chapter, titled "Chapter N" when no title is given
    pub fn add_chapter(&mut self, title: Option<&str>) -> ChapterId {
        let title = match title {
            Some(t) => t.to_string(),
            None => format!("Chapter {}", self.chapters.len() + 1),
        };
        let chapter = Chapter::new(title);
        let id = chapter.id.clone();
        self.chapters.push(chapter);
        id
    }

    pub fn rename_chapter(&mut self, id: &ChapterId, title: impl Into<String>) -> Result<(), CoreError> {
        self.chapter_or_err(id)?.title = title.into();
        Ok(())
    }

    pub fn set_chapter_icon(&mut self, id: &ChapterId, icon: impl Into<String>) -> Result<(), CoreError> {
        self.chapter_or_err(id)?.emoji = icon.into();
        Ok(())
    }

    pub fn move_chapter(&mut self, id: &ChapterId, direction: MoveDirection) -> Result<bool, CoreError> {
        let index = self
            .chapter_position(id)
            .ok_or_else(|| CoreError::ChapterNotFound(id.to_string()))?;
        match direction.neighbour(index, self.chapters.len()) {
            Some(other) => {
                self.chapters.swap(index, other);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a chapter; the last remaining chapter cannot be removed
    pub fn remove_chapter(&mut self, id: &ChapterId) -> Result<Chapter, CoreError> {
        let index = self
            .chapter_position(id)
            .ok_or_else(|| CoreError::ChapterNotFound(id.to_string()))?;
        if self.chapters.len() <= 1 {
            return Err(CoreError::LastChapter);
        }
        Ok(self.chapters.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::RatingProps;
    use serde_json::json;

    fn doc_with_blocks(variants: &[&str]) -> (Document, ChapterId, Vec<BlockId>) {
        let mut doc = Document::new("Test");
        let chapter = doc.add_chapter(None);
        let mut ids = Vec::new();
        for v in variants {
            let block = create_block(v).unwrap();
            ids.push(block.id.clone());
            doc.append_block(&chapter, block).unwrap();
        }
        (doc, chapter, ids)
    }

    fn order(doc: &Document, chapter: &ChapterId) -> Vec<BlockId> {
        doc.chapter(chapter)
            .unwrap()
            .blocks
            .iter()
            .map(|b| b.id.clone())
            .collect()
    }

    #[test]
    fn test_add_chapter_default_title() {
        let mut doc = Document::new("T");
        let a = doc.add_chapter(None);
        let b = doc.add_chapter(Some("Custom"));
        assert_eq!(doc.chapter(&a).unwrap().title, "Chapter 1");
        assert_eq!(doc.chapter(&b).unwrap().title, "Custom");
    }

    #[test]
    fn test_move_block_swaps_and_stops_at_bounds() {
        let (mut doc, ch, ids) = doc_with_blocks(&["h1", "paragraph", "quote"]);
        assert!(!doc.move_block(&ch, &ids[0], MoveDirection::Up).unwrap());
        assert!(!doc.move_block(&ch, &ids[2], MoveDirection::Down).unwrap());
        assert!(doc.move_block(&ch, &ids[1], MoveDirection::Up).unwrap());
        assert_eq!(order(&doc, &ch), vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let (mut doc, ch, ids) = doc_with_blocks(&["quiz", "paragraph"]);
        let copy = doc.duplicate_block(&ch, &ids[0]).unwrap().unwrap();
        let now = order(&doc, &ch);
        assert_eq!(now, vec![ids[0].clone(), copy.clone(), ids[1].clone()]);
        let chapter = doc.chapter(&ch).unwrap();
        assert_eq!(chapter.blocks[0].props, chapter.blocks[1].props);
    }

    #[test]
    fn test_remove_absent_block_is_noop() {
        let (mut doc, ch, ids) = doc_with_blocks(&["paragraph"]);
        assert!(doc.remove_block(&ch, &BlockId::new("nope")).unwrap().is_none());
        assert!(doc.remove_block(&ch, &ids[0]).unwrap().is_some());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_missing_chapter_is_an_error() {
        let (mut doc, _, ids) = doc_with_blocks(&["paragraph"]);
        let err = doc.remove_block(&ChapterId::new("x"), &ids[0]).unwrap_err();
        assert_eq!(err, CoreError::ChapterNotFound("x".into()));
    }

    #[test]
    fn test_append_rejects_unknown_and_duplicates() {
        let (mut doc, ch, ids) = doc_with_blocks(&["paragraph"]);
        let mut bogus = create_block("paragraph").unwrap();
        bogus.variant = "hologram".into();
        assert_eq!(
            doc.append_block(&ch, bogus).unwrap_err(),
            CoreError::UnknownVariant("hologram".into())
        );

        let mut dup = create_block("paragraph").unwrap();
        dup.id = ids[0].clone();
        assert!(matches!(
            doc.append_block(&ch, dup),
            Err(CoreError::DuplicateBlockId(_))
        ));
    }

    #[test]
    fn test_update_keep_and_replace() {
        let (mut doc, _, ids) = doc_with_blocks(&["rating"]);
        doc.update_block(&ids[0], "How was it?", PropsUpdate::Keep).unwrap();
        let block = doc.find_block(&ids[0]).unwrap();
        assert_eq!(block.content, "How was it?");

        let patch = json!({ "value": 4 }).as_object().cloned().unwrap();
        let merged = block.merged_props(&patch);
        doc.update_block(&ids[0], "How was it?", PropsUpdate::Replace(merged))
            .unwrap();
        let rating: RatingProps = doc.find_block(&ids[0]).unwrap().props_as().unwrap();
        assert_eq!(rating.value, 4);
        assert_eq!(rating.max, 5);
    }

    #[test]
    fn test_partial_replace_is_rejected_and_block_unchanged() {
        let (mut doc, _, ids) = doc_with_blocks(&["rating"]);
        let partial = json!({ "value": 4 }).as_object().cloned().unwrap();
        let err = doc
            .update_block(&ids[0], "changed", PropsUpdate::Replace(partial))
            .unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch { .. }));
        assert_eq!(doc.find_block(&ids[0]).unwrap().content, "Rate this material");
    }

    #[test]
    fn test_non_integer_counts_are_rejected_at_the_boundary() {
        let (mut doc, ch, ids) = doc_with_blocks(&["rating"]);

        let mut quiz = create_block("quiz").unwrap();
        quiz.props.insert("points".into(), json!(1.5));
        assert!(matches!(
            doc.append_block(&ch, quiz),
            Err(CoreError::SchemaMismatch { .. })
        ));

        let block = doc.find_block(&ids[0]).unwrap();
        let negative = block.merged_props(&json!({ "value": -1 }).as_object().cloned().unwrap());
        assert!(matches!(
            doc.update_block(&ids[0], "x", PropsUpdate::Replace(negative)),
            Err(CoreError::SchemaMismatch { .. })
        ));
        assert!(!doc.has_errors());
    }

    #[test]
    fn test_chapter_ops() {
        let mut doc = Document::new("T");
        let a = doc.add_chapter(None);
        let b = doc.add_chapter(None);
        doc.rename_chapter(&b, "Second").unwrap();
        doc.set_chapter_icon(&b, "🧪").unwrap();
        assert!(doc.move_chapter(&b, MoveDirection::Up).unwrap());
        assert_eq!(doc.chapters[0].title, "Second");
        assert_eq!(doc.chapters[0].emoji, "🧪");
        assert!(!doc.move_chapter(&b, MoveDirection::Up).unwrap());

        doc.remove_chapter(&a).unwrap();
        assert_eq!(doc.remove_chapter(&b).unwrap_err(), CoreError::LastChapter);
    }
}
