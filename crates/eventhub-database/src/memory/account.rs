//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use eventhub_core::error::AppError;
use eventhub_core::types::AccountId;
use eventhub_entity::account::{
    Account, AccountUpdate, LockoutState, Namespace, NewAccount, normalize_email,
};

use crate::store::{CredentialStore, account_not_found, duplicate_email};

/// Accounts of one namespace.
#[derive(Debug, Default)]
struct Collection {
    by_id: HashMap<AccountId, Account>,
    by_email: HashMap<String, AccountId>,
}

/// Internal state for the memory-based credential store.
#[derive(Debug, Default)]
struct InnerState {
    admins: Collection,
    users: Collection,
}

impl InnerState {
    fn collection(&self, namespace: Namespace) -> &Collection {
        match namespace {
            Namespace::Admin => &self.admins,
            Namespace::User => &self.users,
        }
    }

    fn collection_mut(&mut self, namespace: Namespace) -> &mut Collection {
        match namespace {
            Namespace::Admin => &mut self.admins,
            Namespace::User => &mut self.users,
        }
    }
}

/// In-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryAccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn mutate<T>(
        &self,
        namespace: Namespace,
        id: AccountId,
        apply: impl FnOnce(&mut Account) -> T,
    ) -> Result<T, AppError> {
        let mut state = self.state.lock().await;
        let account = state
            .collection_mut(namespace)
            .by_id
            .get_mut(&id)
            .ok_or_else(|| account_not_found(namespace))?;
        account.updated_at = Utc::now();
        Ok(apply(account))
    }
}

#[async_trait]
impl CredentialStore for MemoryAccountStore {
    async fn find_by_email(
        &self,
        namespace: Namespace,
        email: &str,
    ) -> Result<Option<Account>, AppError> {
        let state = self.state.lock().await;
        let accounts = state.collection(namespace);
        Ok(accounts
            .by_email
            .get(&normalize_email(email))
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(
        &self,
        namespace: Namespace,
        id: AccountId,
    ) -> Result<Option<Account>, AppError> {
        let state = self.state.lock().await;
        Ok(state.collection(namespace).by_id.get(&id).cloned())
    }

    async fn insert(
        &self,
        namespace: Namespace,
        account: NewAccount,
    ) -> Result<Account, AppError> {
        let email = normalize_email(&account.email);
        let mut state = self.state.lock().await;
        let accounts = state.collection_mut(namespace);

        if accounts.by_email.contains_key(&email) {
            return Err(duplicate_email(namespace));
        }

        let now = Utc::now();
        let created = Account {
            id: AccountId::new(),
            email: email.clone(),
            display_name: account.display_name,
            password_hash: account.password_hash,
            login_attempts: 0,
            account_locked: false,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        accounts.by_email.insert(email, created.id);
        accounts.by_id.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_fields(
        &self,
        namespace: Namespace,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AppError> {
        self.mutate(namespace, id, |account| {
            if let Some(name) = update.display_name {
                account.display_name = name;
            }
            if let Some(active) = update.is_active {
                account.is_active = active;
            }
            if let Some(locked) = update.account_locked {
                account.account_locked = locked;
            }
            if let Some(attempts) = update.login_attempts {
                account.login_attempts = attempts;
            }
            if let Some(at) = update.last_login_at {
                account.last_login_at = Some(at);
            }
            account.clone()
        })
        .await
    }

    async fn record_failed_login(
        &self,
        namespace: Namespace,
        id: AccountId,
        threshold: u32,
    ) -> Result<LockoutState, AppError> {
        let threshold = i32::try_from(threshold).unwrap_or(i32::MAX);
        self.mutate(namespace, id, |account| {
            account.login_attempts = account.login_attempts.saturating_add(1);
            if account.login_attempts >= threshold {
                account.account_locked = true;
            }
            LockoutState {
                attempts: account.login_attempts,
                locked: account.account_locked,
            }
        })
        .await
    }

    async fn record_successful_login(
        &self,
        namespace: Namespace,
        id: AccountId,
    ) -> Result<Account, AppError> {
        self.mutate(namespace, id, |account| {
            account.login_attempts = 0;
            account.last_login_at = Some(Utc::now());
            account.clone()
        })
        .await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
