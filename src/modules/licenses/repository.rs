// License repository orchestrates every read and write against the store.
//
// Responsibilities
// - Validate commands through the deciders before touching storage.
// - Run each load, check, mutate and save sequence under one writer lock, so two requests
//   can never both pass a capacity check or overwrite each other's snapshot.
// - Persist the full changed state before returning; a failed save leaves storage unchanged.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::modules::licenses::core::errors::LicenseError;
use crate::modules::licenses::core::license::License;
use crate::modules::licenses::core::ports::{LicenseStore, StoreError};
use crate::modules::licenses::core::stats::LicenseStats;
use crate::modules::licenses::use_cases::add_user::command::AddUser;
use crate::modules::licenses::use_cases::add_user::decide::decide_add_user;
use crate::modules::licenses::use_cases::create_license::command::CreateLicense;
use crate::modules::licenses::use_cases::create_license::decide::decide_create;
use crate::modules::licenses::use_cases::import_licenses::decide::{ImportSummary, decide_import};
use crate::modules::licenses::use_cases::update_license::command::UpdateLicense;
use crate::modules::licenses::use_cases::update_license::decide::decide_update;
use crate::shared::core::ids::IdGenerator;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("license {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Rejected(#[from] LicenseError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub struct LicenseRepository {
    store: Arc<dyn LicenseStore>,
    ids: Arc<dyn IdGenerator>,
    writer: Mutex<()>,
}

impl LicenseRepository {
    pub fn new(store: Arc<dyn LicenseStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            writer: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<License>, RepositoryError> {
        Ok(self.store.load().await?)
    }

    pub async fn get(&self, license_id: &str) -> Result<License, RepositoryError> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|l| l.id == license_id)
            .ok_or_else(|| RepositoryError::NotFound(license_id.to_string()))
    }

    pub async fn stats(&self) -> Result<LicenseStats, RepositoryError> {
        let licenses = self.store.load().await?;
        Ok(LicenseStats::from_licenses(&licenses))
    }

    pub async fn create(&self, command: CreateLicense) -> Result<License, RepositoryError> {
        let draft = decide_create(command)?;

        let _writer = self.writer.lock().await;
        let mut licenses = self.store.load().await?;
        let license = draft.into_license(self.fresh_id(&licenses));
        licenses.push(license.clone());
        self.store.save(&licenses).await?;

        info!(license_id = %license.id, max_users = license.max_users, "license created");
        Ok(license)
    }

    pub async fn update(
        &self,
        license_id: &str,
        command: UpdateLicense,
    ) -> Result<License, RepositoryError> {
        if command.is_empty() {
            return Err(LicenseError::EmptyUpdate.into());
        }

        let _writer = self.writer.lock().await;
        let mut licenses = self.store.load().await?;
        let index = position(&licenses, license_id)?;
        let updated = decide_update(&licenses[index], command)?;
        licenses[index] = updated.clone();
        self.store.save(&licenses).await?;

        info!(license_id, "license updated");
        Ok(updated)
    }

    /// Removes the license together with every user seated on it.
    pub async fn delete(&self, license_id: &str) -> Result<License, RepositoryError> {
        let _writer = self.writer.lock().await;
        let mut licenses = self.store.load().await?;
        let index = position(&licenses, license_id)?;
        let removed = licenses.remove(index);
        self.store.save(&licenses).await?;

        info!(license_id, users_removed = removed.users.len(), "license deleted");
        Ok(removed)
    }

    pub async fn add_user(
        &self,
        license_id: &str,
        command: AddUser,
    ) -> Result<License, RepositoryError> {
        let draft = decide_add_user(command)?;

        let _writer = self.writer.lock().await;
        let mut licenses = self.store.load().await?;
        let index = position(&licenses, license_id)?;
        let user_id = self.fresh_id(&licenses);

        let license = &mut licenses[index];
        if let Err(e) = license.admit(draft.into_user(user_id.clone())) {
            warn!(license_id, max_users = license.max_users, "license is full");
            return Err(e.into());
        }
        let updated = license.clone();
        self.store.save(&licenses).await?;

        info!(license_id, user_id = %user_id, seats_left = updated.available_seats(), "user added");
        Ok(updated)
    }

    /// Returns the license unchanged when no user with `user_id` is seated on it.
    pub async fn remove_user(
        &self,
        license_id: &str,
        user_id: &str,
    ) -> Result<License, RepositoryError> {
        let _writer = self.writer.lock().await;
        let mut licenses = self.store.load().await?;
        let index = position(&licenses, license_id)?;

        if licenses[index].dismiss(user_id).is_none() {
            warn!(license_id, user_id, "user not seated on license");
            return Ok(licenses.swap_remove(index));
        }
        self.store.save(&licenses).await?;

        info!(license_id, user_id, "user removed");
        Ok(licenses.swap_remove(index))
    }

    pub async fn import(&self, incoming: Vec<License>) -> Result<ImportSummary, RepositoryError> {
        let _writer = self.writer.lock().await;
        let mut licenses = self.store.load().await?;
        let decision = decide_import(&licenses, incoming);
        if !decision.accepted.is_empty() {
            licenses.extend(decision.accepted);
            self.store.save(&licenses).await?;
        }

        let summary = decision.summary;
        info!(
            licenses_added = summary.licenses_added,
            users_added = summary.users_added,
            skipped = summary.skipped,
            rejected = summary.rejected,
            "licenses imported"
        );
        Ok(summary)
    }

    // Ids are shared between licenses and users, so skip any value either already holds.
    fn fresh_id(&self, licenses: &[License]) -> String {
        loop {
            let id = self.ids.next_id();
            if !licenses.iter().any(|l| l.uses_id(&id)) {
                return id;
            }
        }
    }
}

fn position(licenses: &[License], license_id: &str) -> Result<usize, RepositoryError> {
    licenses
        .iter()
        .position(|l| l.id == license_id)
        .ok_or_else(|| {
            warn!(license_id, "license not found");
            RepositoryError::NotFound(license_id.to_string())
        })
}
