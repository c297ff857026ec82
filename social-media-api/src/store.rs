//! In-memory storage for posts and comments.
//!
//! Both tables are append-only: an entity's id is its position in its table,
//! so ids start at zero, never repeat, and never have gaps.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::{Comment, Id, Post};

/// Thread-safe holder of every post and comment created since startup.
///
/// One mutex guards both tables so that reading the current length and
/// pushing the new entity happen as a single step, even when the runtime
/// serves several requests at once.
#[derive(Default)]
pub struct Store {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // Every critical section leaves the tables consistent, so a panic
        // elsewhere while holding the lock does not invalidate them.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a post whose id is the number of posts stored so far.
    pub fn append_post(&self, body: String) -> Post {
        let mut tables = self.tables();
        let post = Post {
            id: tables.posts.len() as Id,
            body,
        };
        tables.posts.push(post.clone());
        post
    }

    /// Appends a comment whose id is the number of comments stored so far.
    ///
    /// The caller checks [`Store::post_exists`] first; the store does not.
    pub fn append_comment(&self, body: String, post_id: Id) -> Comment {
        let mut tables = self.tables();
        let comment = Comment {
            id: tables.comments.len() as Id,
            body,
            post_id,
        };
        tables.comments.push(comment.clone());
        comment
    }

    /// Returns all posts in creation order.
    pub fn all_posts(&self) -> Vec<Post> {
        self.tables().posts.clone()
    }

    /// True iff `0 <= post_id < post count`.
    pub fn post_exists(&self, post_id: Id) -> bool {
        post_id >= 0 && post_id < self.post_count()
    }

    pub fn get_post(&self, post_id: Id) -> Option<Post> {
        let index = usize::try_from(post_id).ok()?;
        self.tables().posts.get(index).cloned()
    }

    /// Returns the comments made on `post_id`, in creation order.
    pub fn comments_for_post(&self, post_id: Id) -> Vec<Comment> {
        self.tables()
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect()
    }

    pub fn post_count(&self) -> Id {
        self.tables().posts.len() as Id
    }

    pub fn comment_count(&self) -> Id {
        self.tables().comments.len() as Id
    }

    /// Drops every post and comment; ids start again from zero.
    pub fn clear(&self) {
        let mut tables = self.tables();
        tables.posts.clear();
        tables.comments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let store = Store::new();
        let first = store.append_post("first".into());
        let second = store.append_post("second".into());

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(store.all_posts(), vec![first, second]);
    }

    #[test]
    fn comment_ids_are_independent_of_post_ids() {
        let store = Store::new();
        store.append_post("a".into());
        store.append_post("b".into());

        let comment = store.append_comment("hello".into(), 1);

        assert_eq!(comment.id, 0);
        assert_eq!(comment.post_id, 1);
        assert_eq!(store.comment_count(), 1);
    }

    #[test]
    fn existence_is_bounded_on_both_sides() {
        let store = Store::new();
        assert!(!store.post_exists(0));

        store.append_post("only".into());

        assert!(store.post_exists(0));
        assert!(!store.post_exists(1));
        assert!(!store.post_exists(-1));
        assert_eq!(store.get_post(-1), None);
        assert_eq!(store.get_post(0).map(|post| post.body), Some("only".into()));
    }

    #[test]
    fn comments_are_filtered_by_post() {
        let store = Store::new();
        store.append_post("a".into());
        store.append_post("b".into());

        let first = store.append_comment("on a".into(), 0);
        store.append_comment("on b".into(), 1);
        let second = store.append_comment("also on a".into(), 0);

        assert_eq!(store.comments_for_post(0), vec![first, second]);
        assert!(store.comments_for_post(5).is_empty());
    }

    #[test]
    fn clear_resets_ids() {
        let store = Store::new();
        store.append_post("a".into());
        store.append_comment("c".into(), 0);

        store.clear();

        assert_eq!(store.post_count(), 0);
        assert_eq!(store.comment_count(), 0);
        assert_eq!(store.append_post("b".into()).id, 0);
    }

    #[test]
    fn concurrent_appends_get_distinct_ids() {
        let store = std::sync::Arc::new(Store::new());
        let workers: Vec<_> = (0..8)
            .map(|n| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| store.append_post(format!("{n}-{i}")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<Id> = workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker panicked"))
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (0..400).collect::<Vec<Id>>());
    }
}
