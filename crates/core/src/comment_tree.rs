//! Threaded comment assembly.
//!
//! A post's comments arrive from the store as one flat list ordered by
//! creation time. [`assemble`] turns that list into a forest of
//! [`CommentNode`]s in linear time: comments are indexed by id, each one is
//! linked to its parent by a single lookup, and the nested structure is then
//! materialised bottom-up without recursion, so reply depth is unbounded.
//!
//! Comments whose parent is missing from the list are promoted to the root
//! level instead of being dropped. Their ids are reported in
//! [`CommentForest::promoted`] so callers can log the inconsistency.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// A comment row that can be placed in a reply tree.
pub trait ThreadedComment {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// One comment plus its replies, oldest reply first.
#[derive(Debug, Clone, Serialize)]
pub struct CommentNode<T> {
    #[serde(flatten)]
    pub comment: T,
    pub replies: Vec<CommentNode<T>>,
}

/// The assembled thread for a single post.
#[derive(Debug, Clone)]
pub struct CommentForest<T> {
    /// Top-level comments in creation order.
    pub roots: Vec<CommentNode<T>>,
    /// Comments whose parent could not be resolved and were moved to the root level.
    pub promoted: Vec<DbId>,
}

impl<T> CommentForest<T> {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Build the reply forest for a flat, creation-ordered comment list.
///
/// Roots and siblings keep the relative order of the input. A comment is
/// promoted to root when its parent id is absent from `comments`, points at
/// itself, or sits on a parent cycle (the earliest member of the cycle is
/// promoted, which breaks it).
pub fn assemble<T: ThreadedComment>(comments: Vec<T>) -> CommentForest<T> {
    let n = comments.len();

    let index: HashMap<DbId, usize> = comments
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();

    let mut promoted = Vec::new();
    let mut is_root = vec![false; n];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];

    for (i, comment) in comments.iter().enumerate() {
        match comment.parent_id() {
            None => is_root[i] = true,
            Some(parent_id) => match index.get(&parent_id) {
                Some(&p) if p != i => children[p].push(i),
                _ => {
                    is_root[i] = true;
                    promoted.push(comment.id());
                }
            },
        }
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    for i in 0..n {
        if is_root[i] {
            walk(i, &children, &is_root, &mut visited, &mut order);
        }
    }

    // Anything still unvisited hangs off a parent cycle.
    for i in 0..n {
        if !visited[i] {
            is_root[i] = true;
            promoted.push(comments[i].id());
            walk(i, &children, &is_root, &mut visited, &mut order);
        }
    }

    let mut slots: Vec<Option<T>> = comments.into_iter().map(Some).collect();
    let mut built: Vec<Option<CommentNode<T>>> = (0..n).map(|_| None).collect();

    // Reverse pre-order visits every child before its parent.
    for &i in order.iter().rev() {
        let replies = children[i]
            .iter()
            .filter(|&&c| !is_root[c])
            .filter_map(|&c| built[c].take())
            .collect();
        if let Some(comment) = slots[i].take() {
            built[i] = Some(CommentNode { comment, replies });
        }
    }

    let roots = (0..n)
        .filter(|&i| is_root[i])
        .filter_map(|i| built[i].take())
        .collect();

    CommentForest { roots, promoted }
}

/// Iterative pre-order walk from `start`, stopping at nodes that are roots
/// in their own right.
fn walk(
    start: usize,
    children: &[Vec<usize>],
    is_root: &[bool],
    visited: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack = vec![start];
    while let Some(i) = stack.pop() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        order.push(i);
        stack.extend(children[i].iter().rev().filter(|&&c| !is_root[c]));
    }
}

/// Reject a reply whose parent lives on a different post.
pub fn validate_reply_parent(
    post_id: DbId,
    parent_id: DbId,
    parent_post_id: DbId,
) -> Result<(), CoreError> {
    if parent_post_id != post_id {
        return Err(CoreError::Validation(format!(
            "Parent comment {parent_id} belongs to post {parent_post_id}, not post {post_id}"
        )));
    }
    Ok(())
}
