use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use derive_new::new;
use tracing::warn;

/// Restartable walk over a branch's history
///
/// Cloning or calling [`RevList::iter`] again starts over from the tip.
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start_commit_oid: Option<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn iter(&self) -> RevListIntoIter<'r> {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start_commit_oid.clone(),
            truncation: None,
        }
    }
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = Commit;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'r> IntoIterator for &RevList<'r> {
    type Item = Commit;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Why a walk stopped before reaching a root commit
#[derive(Debug)]
pub struct Truncation {
    pub commit_oid: ObjectId,
    pub reason: RepositoryError,
}

pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    truncation: Option<Truncation>,
}

impl RevListIntoIter<'_> {
    /// Set once the walk hit a missing or unreadable commit
    ///
    /// A truncated history is a corruption signal, not the end of history.
    pub fn truncation(&self) -> Option<&Truncation> {
        self.truncation.as_ref()
    }
}

impl Iterator for RevListIntoIter<'_> {
    type Item = Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        let reason = match self.database.parse_object_as_commit(&commit_oid) {
            Ok(Some(commit)) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                return Some(commit);
            }
            Ok(None) => RepositoryError::DanglingObjectReference(commit_oid.clone()),
            Err(err) => RepositoryError::from(err),
        };

        warn!(oid = %commit_oid, %reason, "history truncated");
        self.truncation = Some(Truncation { commit_oid, reason });

        None
    }
}
