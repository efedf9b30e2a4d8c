use revmeta_core::types::{Account, Change};
use revmeta_core::ChangeNumber;

use crate::remote::ChangeRemote;
use crate::SyncError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    /// Nothing issued since the change was last replaced.
    Idle,
    /// A call for `target` is in flight; `seq` identifies the latest one.
    Pending { seq: u64, target: Option<Account> },
    /// The latest call finished and the change reflects it.
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeOp {
    Set(Account),
    Delete,
}

/// A remote call the synchronizer wants issued. Completion must be reported
/// back through [`AssigneeSync::complete`] with the same call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeCall {
    pub seq: u64,
    pub change: ChangeNumber,
    pub op: AssigneeOp,
}

impl AssigneeCall {
    pub fn target(&self) -> Option<&Account> {
        match &self.op {
            AssigneeOp::Set(account) => Some(account),
            AssigneeOp::Delete => None,
        }
    }
}

/// Keeps the single-element assignee view in step with the server.
///
/// Edits are compared by account identity against the effective target: the
/// in-flight target while a call is pending, the change's confirmed assignee
/// otherwise. Equal edits issue nothing.
#[derive(Debug, Clone)]
pub struct AssigneeSync {
    enabled: bool,
    state: SyncState,
    view: Vec<Account>,
    next_seq: u64,
}

/// Accounts carrying neither id nor email are told apart by username, since
/// that is how such an assignee is addressed.
fn same_target(a: Option<&Account>, b: Option<&Account>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            let by_id = a.account_id.is_some() && b.account_id.is_some();
            a.same_identity(b) && (by_id || a.email.is_some() || a.username == b.username)
        }
        (None, None) => true,
        _ => false,
    }
}

impl AssigneeSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: SyncState::Idle,
            view: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn view(&self) -> &[Account] {
        &self.view
    }

    /// Reset the view from a freshly loaded change record.
    pub fn change_changed(&mut self, change: &Change) {
        self.view = change.assignee.iter().cloned().collect();
        self.state = SyncState::Idle;
    }

    fn effective_target<'a>(&'a self, change: &'a Change) -> Option<&'a Account> {
        match &self.state {
            SyncState::Pending { target, .. } => target.as_ref(),
            _ => change.assignee.as_ref(),
        }
    }

    /// Accept a local edit. Returns the call to issue, or `None` when the
    /// edit matches what is already assigned or about to be.
    pub fn begin(
        &mut self,
        change: &Change,
        desired: &[Account],
    ) -> Result<Option<AssigneeCall>, SyncError> {
        if desired.len() > 1 {
            return Err(SyncError::InvalidAssignee(desired.len()));
        }
        if !self.enabled {
            tracing::debug!("assignee editing disabled on this server");
            return Ok(None);
        }

        let number = change.number.ok_or(SyncError::MissingChangeNumber)?;
        let desired = desired.first();
        self.view = desired.cloned().into_iter().collect();
        if same_target(desired, self.effective_target(change)) {
            tracing::debug!("assignee unchanged, skipping remote call");
            return Ok(None);
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.state = SyncState::Pending {
            seq,
            target: desired.cloned(),
        };

        let op = match desired {
            Some(account) => AssigneeOp::Set(account.clone()),
            None => AssigneeOp::Delete,
        };
        Ok(Some(AssigneeCall {
            seq,
            change: number,
            op,
        }))
    }

    /// Apply the outcome of `call`. Success writes the call's own target into
    /// the change even if a newer call was issued since. Once nothing is
    /// pending the view mirrors the change's assignee.
    pub fn complete(
        &mut self,
        call: &AssigneeCall,
        outcome: Result<(), SyncError>,
        change: &mut Change,
    ) -> Result<(), SyncError> {
        if matches!(&self.state, SyncState::Pending { seq, .. } if *seq == call.seq) {
            self.state = SyncState::Settled;
        }

        let result = match outcome {
            Ok(()) => {
                change.assignee = call.target().cloned();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("assignee call {} for change {} failed: {}", call.seq, call.change, e);
                Err(e)
            }
        };

        if !matches!(self.state, SyncState::Pending { .. }) {
            self.view = change.assignee.iter().cloned().collect();
        }
        result
    }
}

/// Run `call` against the remote.
pub async fn issue<R: ChangeRemote + ?Sized>(
    remote: &R,
    call: &AssigneeCall,
) -> Result<(), SyncError> {
    match &call.op {
        AssigneeOp::Set(account) => {
            remote.set_assignee(call.change, account).await?;
        }
        AssigneeOp::Delete => remote.delete_assignee(call.change).await?,
    }
    Ok(())
}
