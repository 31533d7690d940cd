//! In-memory slide session store. Ephemeral by nature: contents are lost on
//! restart, and concurrent writers to the same slide resolve as last-write-wins.
//! The store is bounded; past capacity the least recently saved slide is evicted.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::DEFAULT_MAX_EDITOR_SESSIONS;
use crate::editor::model::EditorSlide;
use crate::editor::sanitize::sanitize_slide;

/// Slides plus the save counter used to find the least recently saved one.
#[derive(Default)]
struct Sessions {
    slides: HashMap<String, (u64, EditorSlide)>,
    saves: u64,
}

#[derive(Clone)]
pub struct SlideStore {
    sessions: Arc<RwLock<Sessions>>,
    capacity: usize,
}

impl Default for SlideStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_EDITOR_SESSIONS)
    }
}

impl SlideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding at most `capacity` slides (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Sessions::default())),
            capacity: capacity.max(1),
        }
    }

    pub async fn get(&self, id: &str) -> Option<EditorSlide> {
        self.sessions
            .read()
            .await
            .slides
            .get(id)
            .map(|(_, slide)| slide.clone())
    }

    /// Sanitizes and stores the slide under its id, replacing any previous
    /// version, then evicts the least recently saved slides beyond capacity.
    /// Returns what was stored.
    pub async fn put(&self, slide: EditorSlide) -> EditorSlide {
        let mut slide = sanitize_slide(slide);
        slide.updated_at = Utc::now();

        let mut sessions = self.sessions.write().await;
        sessions.saves += 1;
        let seq = sessions.saves;
        sessions.slides.insert(slide.id.clone(), (seq, slide.clone()));

        while sessions.slides.len() > self.capacity {
            let oldest = sessions
                .slides
                .iter()
                .min_by_key(|(_, (seq, _))| *seq)
                .map(|(id, _)| id.clone());
            let Some(id) = oldest else { break };
            sessions.slides.remove(&id);
            info!("Evicted editor slide {id} (capacity {})", self.capacity);
        }
        slide
    }

    pub async fn remove(&self, id: &str) -> Option<EditorSlide> {
        self.sessions
            .write()
            .await
            .slides
            .remove(id)
            .map(|(_, slide)| slide)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::model::{EmojiNode, Node, NodeFrame};
    use crate::generation::input::Theme;

    fn slide(id: &str, x: f64) -> EditorSlide {
        EditorSlide {
            id: id.to_string(),
            template_image: None,
            theme: Theme::Light,
            nodes: vec![Node::Emoji(EmojiNode {
                frame: NodeFrame {
                    id: "e".to_string(),
                    x,
                    y: 0.0,
                    width: 50.0,
                    height: 50.0,
                    rotation: 0.0,
                    opacity: 1.0,
                    z_index: 0,
                    locked: false,
                },
                emoji: "✨".to_string(),
            })],
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_put_sanitizes_and_get_returns_copy() {
        let store = SlideStore::new();
        let stored = store.put(slide("s1", -50.0)).await;
        assert_eq!(stored.nodes[0].frame().x, 0.0);

        let fetched = store.get("s1").await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = SlideStore::new();
        store.put(slide("s1", 10.0)).await;
        store.put(slide("s1", 20.0)).await;
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("s1").await.unwrap().nodes[0].frame().x, 20.0);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SlideStore::new();
        store.put(slide("s1", 0.0)).await;
        assert!(store.remove("s1").await.is_some());
        assert!(store.get("s1").await.is_none());
        assert!(store.remove("s1").await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_saved() {
        let store = SlideStore::with_capacity(2);
        store.put(slide("a", 0.0)).await;
        store.put(slide("b", 0.0)).await;
        // Saving "a" again makes "b" the oldest.
        store.put(slide("a", 5.0)).await;
        store.put(slide("c", 0.0)).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get("b").await.is_none());
        assert!(store.get("a").await.is_some());
        assert!(store.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_store_never_exceeds_capacity() {
        let store = SlideStore::with_capacity(3);
        for i in 0..20 {
            store.put(slide(&format!("s{i}"), 0.0)).await;
        }
        assert_eq!(store.len().await, 3);
        assert!(store.get("s19").await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_still_keeps_latest() {
        let store = SlideStore::with_capacity(0);
        store.put(slide("a", 0.0)).await;
        store.put(slide("b", 0.0)).await;
        assert_eq!(store.len().await, 1);
        assert!(store.get("b").await.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SlideStore::new();
        let handle = store.clone();
        handle.put(slide("shared", 0.0)).await;
        assert!(store.get("shared").await.is_some());
    }
}
