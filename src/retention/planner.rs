// ABOUTME: Retention planner: partitions a repository's tags into kept and deleted.
// ABOUTME: Counts distinct digests newest-first and never deletes a tag whose digest is kept.

use crate::registry::Tag;
use crate::types::Digest;
use std::collections::HashSet;

/// Outcome of planning one repository. Computed per run, never persisted.
#[derive(Debug, Clone, Default)]
pub struct RetentionDecision {
    keep: HashSet<Digest>,
    delete: Vec<Tag>,
    retained: Vec<Tag>,
}

impl RetentionDecision {
    /// Digests whose tags all survive.
    pub fn keep_set(&self) -> &HashSet<Digest> {
        &self.keep
    }

    /// Tags to remove, newest first.
    pub fn delete_list(&self) -> &[Tag] {
        &self.delete
    }

    /// Tags that survive, newest first.
    pub fn retained(&self) -> &[Tag] {
        &self.retained
    }

    /// True when nothing needs deleting.
    pub fn is_noop(&self) -> bool {
        self.delete.is_empty()
    }
}

/// Decide which tags of one repository to delete so that the `keep_count`
/// most recently created distinct digests survive.
///
/// Tags are ordered by creation time, newest first; ties keep the order the
/// registry listed them in. Walking that order, each new digest takes one
/// slot of the quota and a repeated digest takes none. Everything after the
/// last tag that took a slot is deleted, except tags whose digest is kept:
/// removing them would free no content but would lose a usable name.
///
/// Running the plan again over [`RetentionDecision::retained`] deletes nothing.
pub fn plan(mut tags: Vec<Tag>, keep_count: usize) -> RetentionDecision {
    // sort_by is stable, so equal timestamps keep discovery order
    tags.sort_by(|a, b| b.created.cmp(&a.created));

    if tags.len() < keep_count {
        let keep = tags.iter().map(|t| t.digest.clone()).collect();
        return RetentionDecision {
            keep,
            delete: Vec::new(),
            retained: tags,
        };
    }

    let mut keep = HashSet::new();
    let mut boundary = 0;
    for (idx, tag) in tags.iter().enumerate() {
        if keep.len() >= keep_count {
            break;
        }
        if keep.insert(tag.digest.clone()) {
            boundary = idx + 1;
        }
    }

    if boundary >= tags.len() {
        return RetentionDecision {
            keep,
            delete: Vec::new(),
            retained: tags,
        };
    }

    let tail = tags.split_off(boundary);
    let mut retained = tags;
    let mut delete = Vec::new();
    for tag in tail {
        if keep.contains(&tag.digest) {
            retained.push(tag);
        } else {
            delete.push(tag);
        }
    }

    RetentionDecision {
        keep,
        delete,
        retained,
    }
}
