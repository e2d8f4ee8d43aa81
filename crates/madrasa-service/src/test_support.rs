//! In-memory collaborators for service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;
use uuid::Uuid;

use madrasa_core::error::AppError;
use madrasa_core::result::AppResult;
use madrasa_entity::invitation::{InvitationNotice, NewInvitation, PendingInvitation};
use madrasa_entity::profile::Profile;
use madrasa_entity::{CreateExpense, ExpenseRecord, UpdateExpense};

use crate::context::RequestContext;
use crate::traits::{InvitationStore, InviteNotifier, ProfileLookup, RecordStore};

pub fn ctx(email: Option<&str>) -> RequestContext {
    RequestContext::new(Uuid::new_v4(), email.map(str::to_string))
}

#[derive(Debug, Default)]
pub struct FakeProfiles {
    pub profile: Mutex<Option<Profile>>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeProfiles {
    pub fn with(madrasa: Option<&str>, full_name: Option<&str>) -> Self {
        Self {
            profile: Mutex::new(Some(Profile {
                id: Uuid::new_v4(),
                email: None,
                full_name: full_name.map(str::to_string),
                madrasa_name: madrasa.map(str::to_string),
            })),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ProfileLookup for FakeProfiles {
    async fn find(&self, _actor_id: Uuid) -> AppResult<Option<Profile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::database("profiles unavailable"));
        }
        Ok(self.profile.lock().unwrap().clone())
    }
}

#[derive(Debug, Default)]
pub struct FakeInvitationStore {
    pub rows: Mutex<Vec<PendingInvitation>>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeInvitationStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl InvitationStore for FakeInvitationStore {
    async fn create(&self, data: &NewInvitation) -> AppResult<PendingInvitation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::database("insert rejected"));
        }
        let row = PendingInvitation {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            role: data.role.clone(),
            madrasa_name: data.madrasa_name.clone(),
            created_by: data.created_by,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(0, row.clone());
        Ok(row)
    }

    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<PendingInvitation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.madrasa_name.as_deref() == Some(madrasa_name))
            .cloned()
            .collect())
    }

    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id == id && r.madrasa_name.as_deref() == Some(madrasa_name)));
        Ok(rows.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<InvitationNotice>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<InvitationNotice> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl InviteNotifier for RecordingNotifier {
    async fn notify(&self, notice: &InvitationNotice) -> AppResult<()> {
        self.sent.lock().unwrap().push(notice.clone());
        if self.fail {
            return Err(AppError::external_service("mail provider returned 500"));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeExpenseStore {
    pub rows: Mutex<Vec<ExpenseRecord>>,
    pub list_calls: AtomicUsize,
}

impl FakeExpenseStore {
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore<ExpenseRecord> for FakeExpenseStore {
    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<ExpenseRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.madrasa_name == madrasa_name)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn create(
        &self,
        madrasa_name: &str,
        created_by: Option<Uuid>,
        data: &CreateExpense,
    ) -> AppResult<ExpenseRecord> {
        let now = Utc::now();
        let record = ExpenseRecord {
            id: Uuid::new_v4(),
            madrasa_name: madrasa_name.to_string(),
            amount: data.amount,
            category: data.category,
            description: data.description.clone(),
            paid_to: data.paid_to.clone(),
            payment_method: data.payment_method,
            date: data.date,
            receipt_url: data.receipt_url.clone(),
            voucher_number: data.voucher_number.clone(),
            created_by,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        madrasa_name: &str,
        id: Uuid,
        patch: &UpdateExpense,
    ) -> AppResult<ExpenseRecord> {
        let mut rows = self.rows.lock().unwrap();
        let record = rows
            .iter_mut()
            .find(|r| r.id == id && r.madrasa_name == madrasa_name)
            .ok_or_else(|| AppError::not_found("expense record not found"))?;
        if let Some(amount) = patch.amount {
            record.amount = amount;
        }
        if let Some(description) = &patch.description {
            record.description = description.clone();
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id == id && r.madrasa_name == madrasa_name));
        if rows.len() == before {
            return Err(AppError::not_found("expense record not found"));
        }
        Ok(())
    }
}

/// Expense store whose next `list` call stops after reading its rows until
/// `resume` is notified.
#[derive(Debug, Default)]
pub struct PausingExpenseStore {
    pub inner: FakeExpenseStore,
    armed: AtomicBool,
    pub snapshot_taken: Notify,
    pub resume: Notify,
}

impl PausingExpenseStore {
    pub fn pause_next_list(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore<ExpenseRecord> for PausingExpenseStore {
    async fn list(&self, madrasa_name: &str) -> AppResult<Vec<ExpenseRecord>> {
        let rows = self.inner.list(madrasa_name).await?;
        if self.armed.swap(false, Ordering::SeqCst) {
            self.snapshot_taken.notify_one();
            self.resume.notified().await;
        }
        Ok(rows)
    }

    async fn create(
        &self,
        madrasa_name: &str,
        created_by: Option<Uuid>,
        data: &CreateExpense,
    ) -> AppResult<ExpenseRecord> {
        self.inner.create(madrasa_name, created_by, data).await
    }

    async fn update(
        &self,
        madrasa_name: &str,
        id: Uuid,
        patch: &UpdateExpense,
    ) -> AppResult<ExpenseRecord> {
        self.inner.update(madrasa_name, id, patch).await
    }

    async fn delete(&self, madrasa_name: &str, id: Uuid) -> AppResult<()> {
        self.inner.delete(madrasa_name, id).await
    }
}
