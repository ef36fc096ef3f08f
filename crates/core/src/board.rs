// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The board store: the single owner of the ledger and its side stores.
//!
//! Every mutation goes through [`Board`], which checks the acting
//! [`Session`]'s permissions, applies the change to the in-memory state and
//! writes the affected store back to the database before returning.

use std::collections::HashSet;
use std::time::Duration;

use crate::case::{CaseUpdate, Platform, TestCase, TestStatus};
use crate::clock::{Clock, SystemClock};
use crate::csv;
use crate::db::{keys, Database};
use crate::error::{Error, Result};
use crate::filter::{self, CaseFilter};
use crate::ledger::{self, Ledger};
use crate::metrics::{self, Kpi, Summary, DEFAULT_CRITICAL_MODULES};
use crate::presence::{Presence, STALE_AFTER};
use crate::registry::{SavedEnvironments, SavedUsers};
use crate::session::{Role, Session, DEFAULT_TEAM};
use crate::version::{Environment, Version};

/// What a user submits to log in.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub name: String,
    pub role: Role,
    /// Version to work on. `None` picks the first version on the board.
    pub version: Option<String>,
    /// Requested environment. Only a QA Lead's choice is applied to an
    /// existing version; other roles inherit the version's environment.
    pub environment: Option<Environment>,
    /// Start a new version named `version`, seeded from the template.
    pub create: bool,
    pub team: Option<String>,
}

impl LoginRequest {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        LoginRequest {
            name: name.into(),
            role,
            version: None,
            environment: None,
            create: false,
            team: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }
}

/// Fields of a manually added case. The id is assigned by the board.
#[derive(Debug, Clone, Default)]
pub struct CaseDraft {
    pub group: String,
    pub module: String,
    pub scenario: String,
    pub expected: String,
}

/// Outcome of a CSV import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Ids appended to the version.
    pub added: Vec<String>,
    /// Ids skipped because the version already had them.
    pub duplicates: Vec<String>,
}

/// Result of toggling ownership of a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    Claimed,
    Released,
}

/// Store object owning the ledger, presence and saved registries.
pub struct Board<C: Clock = SystemClock> {
    db: Database,
    clock: C,
    ledger: Ledger,
    users: SavedUsers,
    environments: SavedEnvironments,
    presence: Presence,
    critical_modules: Vec<String>,
    stale_after: Duration,
}

impl Board<SystemClock> {
    /// Loads the board using the system clock.
    pub fn open(db: Database) -> Result<Self> {
        Board::with_clock(db, SystemClock)
    }
}

impl<C: Clock> Board<C> {
    /// Loads every store from `db`. A missing or empty ledger is replaced
    /// with the first-run ledger and written back.
    pub fn with_clock(db: Database, clock: C) -> Result<Self> {
        let mut ledger: Ledger = db.load_lenient(keys::LEDGER)?.unwrap_or_default();
        let seeded = ledger.is_empty();
        if seeded {
            ledger = Ledger::seeded(clock.now());
        }

        let board = Board {
            users: db.load_lenient(keys::SAVED_USERS)?.unwrap_or_default(),
            environments: db
                .load_lenient(keys::SAVED_ENVIRONMENTS)?
                .unwrap_or_default(),
            presence: db.load_lenient(keys::PRESENCE)?.unwrap_or_default(),
            db,
            clock,
            ledger,
            critical_modules: DEFAULT_CRITICAL_MODULES
                .iter()
                .map(|m| m.to_string())
                .collect(),
            stale_after: STALE_AFTER,
        };
        if seeded {
            board.save_ledger()?;
        }
        Ok(board)
    }

    pub fn with_critical_modules(mut self, modules: Vec<String>) -> Self {
        self.critical_modules = modules;
        self
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn versions(&self) -> &[Version] {
        self.ledger.versions()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &Database {
        &self.db
    }

    // -- sessions and presence --

    /// Validates a login and records the user as online.
    pub fn login(&mut self, request: LoginRequest) -> Result<Session> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidCredentials);
        }

        let version_name = match request.version.as_deref().map(str::trim) {
            Some(v) => v.to_string(),
            None => self
                .ledger
                .versions()
                .first()
                .map(|v| v.name.clone())
                .ok_or(Error::InvalidCredentials)?,
        };
        if version_name.is_empty() {
            return Err(Error::InvalidCredentials);
        }

        let environment = if request.create {
            if !request.role.is_lead() {
                return Err(Error::PermissionDenied {
                    action: "creating a version",
                    required: "QA Lead",
                });
            }
            if self.ledger.contains(&version_name) {
                return Err(Error::VersionExists(version_name));
            }
            let environment = request.environment.unwrap_or_default();
            self.ledger.create_version(
                &version_name,
                &ledger::template(),
                environment.clone(),
                self.clock.now(),
            );
            self.save_ledger()?;
            environment
        } else {
            let existing = self
                .ledger
                .select_version(&version_name)
                .ok_or(Error::InvalidCredentials)?
                .environment
                .clone();
            match request.environment {
                Some(env) if request.role.is_lead() && env != existing => {
                    self.ledger.set_environment(&version_name, env.clone());
                    self.save_ledger()?;
                    env
                }
                _ => existing,
            }
        };

        let session = Session::new(name, request.role, version_name, environment.clone())
            .with_team(request.team.unwrap_or_else(|| DEFAULT_TEAM.to_string()));

        if self.users.add(name, "name")? {
            self.save_users()?;
        }
        if self.environments.add(environment.as_str())? {
            self.save_environments()?;
        }
        self.heartbeat(&session)?;

        tracing::info!(
            user = %session.name,
            role = %session.role,
            version = %session.app_version,
            "logged in"
        );
        Ok(session)
    }

    /// Removes the session from the online list.
    pub fn logout(&mut self, session: &Session) -> Result<()> {
        if self.presence.leave(&session.name) {
            self.save_presence()?;
        }
        tracing::info!(user = %session.name, "logged out");
        Ok(())
    }

    /// Refreshes the session's presence entry.
    pub fn heartbeat(&mut self, session: &Session) -> Result<()> {
        self.presence
            .heartbeat(session, self.clock.now_ms(), self.stale_after);
        self.save_presence()
    }

    /// Sessions seen within the staleness window.
    pub fn online(&self) -> Vec<&Session> {
        self.presence.online(self.clock.now_ms(), self.stale_after)
    }

    // -- versions --

    /// The session's version, if it still exists.
    pub fn current_version(&self, session: &Session) -> Option<&Version> {
        self.ledger.select_version(&session.app_version)
    }

    /// Creates a version seeded from the template.
    pub fn create_version(
        &mut self,
        session: &Session,
        name: &str,
        environment: Environment,
    ) -> Result<&Version> {
        session.require_lead("creating a version")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::FieldEmpty { field: "version" });
        }
        if self.ledger.contains(name) {
            return Err(Error::VersionExists(name.to_string()));
        }
        self.ledger
            .create_version(name, &ledger::template(), environment, self.clock.now());
        self.save_ledger()?;
        self.ledger
            .select_version(name)
            .ok_or_else(|| Error::VersionNotFound(name.to_string()))
    }

    /// Deletes a version other than the session's own, keeping at least one.
    pub fn delete_version(&mut self, session: &Session, name: &str) -> Result<()> {
        session.require_lead("deleting a version")?;
        if name == session.app_version {
            return Err(Error::DeleteCurrentVersion(name.to_string()));
        }
        if !self.ledger.contains(name) {
            return Err(Error::VersionNotFound(name.to_string()));
        }
        if self.ledger.names().iter().all(|n| *n == name) {
            return Err(Error::DeleteLastVersion(name.to_string()));
        }
        self.ledger.delete_version(name);
        self.save_ledger()
    }

    // -- test cases --

    /// Cases of the session's version that match `filter`. Empty if the
    /// version no longer exists.
    pub fn cases(&self, session: &Session, filter: &CaseFilter) -> Vec<&TestCase> {
        self.current_version(session)
            .map(|v| filter.apply(&v.test_cases))
            .unwrap_or_default()
    }

    pub fn case(&self, session: &Session, id: &str) -> Result<&TestCase> {
        self.current_version(session)
            .and_then(|v| v.case(id))
            .ok_or_else(|| Error::CaseNotFound(id.to_string()))
    }

    /// Distinct groups in the session's version.
    pub fn groups(&self, session: &Session) -> Vec<String> {
        self.current_version(session)
            .map(|v| filter::groups(&v.test_cases))
            .unwrap_or_default()
    }

    /// Id the next manually added case will get.
    pub fn next_id(&self, session: &Session) -> String {
        filter::next_id(self.current_cases(session))
    }

    /// Appends a new, unexecuted case.
    pub fn add_case(&mut self, session: &Session, draft: CaseDraft) -> Result<TestCase> {
        session.require_lead("adding test cases")?;
        for (field, value) in [
            ("group", &draft.group),
            ("module", &draft.module),
            ("scenario", &draft.scenario),
            ("expected", &draft.expected),
        ] {
            if value.trim().is_empty() {
                return Err(Error::FieldEmpty { field });
            }
        }

        let mut cases = self.cases_for_update(session)?;
        let case = TestCase::new(
            filter::next_id(&cases),
            draft.group.trim(),
            draft.module.trim(),
            draft.scenario.trim(),
            draft.expected.trim(),
        );
        cases.push(case.clone());
        self.commit(session, cases)?;
        tracing::info!(id = %case.id, version = %session.app_version, "added test case");
        Ok(case)
    }

    /// Appends the rows of a CSV document, skipping ids already present.
    pub fn import_cases(&mut self, session: &Session, text: &str) -> Result<ImportReport> {
        session.require_lead("importing test cases")?;
        let mut cases = self.cases_for_update(session)?;
        let mut seen: HashSet<String> = cases.iter().map(|c| c.id.clone()).collect();

        let mut report = ImportReport::default();
        for case in csv::parse_csv(text) {
            if seen.insert(case.id.clone()) {
                report.added.push(case.id.clone());
                cases.push(case);
            } else {
                report.duplicates.push(case.id);
            }
        }

        if !report.added.is_empty() {
            self.commit(session, cases)?;
        }
        tracing::info!(
            added = report.added.len(),
            duplicates = report.duplicates.len(),
            "imported test cases"
        );
        Ok(report)
    }

    /// Applies one field edit on behalf of `session`.
    ///
    /// Recording a result stamps the executor, date, version and
    /// environment for that platform. An unowned case becomes owned by
    /// whoever records a result or observation on it; definition and
    /// delegation edits by the lead leave ownership untouched.
    pub fn update_case(
        &mut self,
        session: &Session,
        id: &str,
        update: CaseUpdate,
    ) -> Result<TestCase> {
        session.require_write("editing test cases")?;
        if update.is_lead_only() {
            session.require_lead("editing test definitions or delegation")?;
        }

        let mut cases = self.cases_for_update(session)?;
        let case = cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CaseNotFound(id.to_string()))?;

        if update.is_execution_edit() {
            if let Some(owner) = case.locked_by_other(&session.name) {
                return Err(Error::CaseLocked {
                    id: id.to_string(),
                    owner: owner.to_string(),
                });
            }
            if case.assigned_to.is_none() {
                case.assigned_to = Some(session.name.clone());
            }
        }

        match update {
            CaseUpdate::Status(platform, status) => {
                record_status(case, platform, status, session, &self.clock)
            }
            CaseUpdate::Tester(platform, name) => case.set_tester(platform, name),
            CaseUpdate::Group(v) => case.group = v,
            CaseUpdate::Module(v) => case.module = v,
            CaseUpdate::Scenario(v) => case.scenario = v,
            CaseUpdate::Expected(v) => case.expected = v,
            CaseUpdate::Observation(v) => case.observation = v,
            CaseUpdate::Assignee(v) => case.assigned_to = v,
        }

        let updated = case.clone();
        self.commit(session, cases)?;
        tracing::debug!(id, user = %session.name, "updated test case");
        Ok(updated)
    }

    /// Takes an unowned case or releases one the session owns.
    pub fn claim(&mut self, session: &Session, id: &str) -> Result<Claim> {
        session.require_write("claiming test cases")?;
        let mut cases = self.cases_for_update(session)?;
        let case = cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CaseNotFound(id.to_string()))?;

        let owner = case.assigned_to.clone();
        let outcome = match owner.as_deref() {
            Some(owner) if owner == session.name => {
                case.assigned_to = None;
                Claim::Released
            }
            Some(owner) => {
                return Err(Error::CaseLocked {
                    id: id.to_string(),
                    owner: owner.to_string(),
                })
            }
            None => {
                case.assigned_to = Some(session.name.clone());
                Claim::Claimed
            }
        };

        self.commit(session, cases)?;
        Ok(outcome)
    }

    /// Removes a case permanently.
    pub fn delete_case(&mut self, session: &Session, id: &str) -> Result<TestCase> {
        session.require_lead("deleting test cases")?;
        let mut cases = self.cases_for_update(session)?;
        let index = cases
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::CaseNotFound(id.to_string()))?;
        let removed = cases.remove(index);
        self.commit(session, cases)?;
        tracing::info!(id, version = %session.app_version, "deleted test case");
        Ok(removed)
    }

    // -- reporting --

    /// CSV of the filtered cases.
    pub fn export_csv(&self, session: &Session, filter: &CaseFilter) -> String {
        csv::export_csv(self.cases(session, filter))
    }

    pub fn summary(&self, session: &Session, platform: Option<Platform>) -> Summary {
        metrics::summarize_with(
            self.current_cases(session),
            platform,
            &self.critical_modules,
        )
    }

    pub fn kpi(&self, session: &Session) -> Kpi {
        metrics::kpi(self.current_cases(session))
    }

    /// Quality rate of the second-to-last version on the board.
    pub fn previous_rate(&self) -> Option<u32> {
        self.ledger
            .previous_version()
            .map(|v| metrics::quality_rate(&v.test_cases))
    }

    pub fn critical_modules(&self) -> &[String] {
        &self.critical_modules
    }

    // -- saved registries --

    pub fn users(&self) -> &[String] {
        self.users.as_slice()
    }

    pub fn add_user(&mut self, session: &Session, name: &str) -> Result<bool> {
        session.require_lead("managing users")?;
        let added = self.users.add(name, "name")?;
        if added {
            self.save_users()?;
        }
        Ok(added)
    }

    pub fn remove_user(&mut self, session: &Session, name: &str) -> Result<bool> {
        session.require_lead("managing users")?;
        let removed = self.users.remove(name);
        if removed {
            self.save_users()?;
        }
        Ok(removed)
    }

    pub fn environments(&self) -> &[String] {
        self.environments.as_slice()
    }

    pub fn add_environment(&mut self, session: &Session, name: &str) -> Result<bool> {
        session.require_lead("managing environments")?;
        let added = self.environments.add(name)?;
        if added {
            self.save_environments()?;
        }
        Ok(added)
    }

    pub fn remove_environment(&mut self, session: &Session, name: &str) -> Result<bool> {
        session.require_lead("managing environments")?;
        let removed = self.environments.remove(name)?;
        if removed {
            self.save_environments()?;
        }
        Ok(removed)
    }

    // -- internals --

    fn current_cases(&self, session: &Session) -> &[TestCase] {
        self.current_version(session)
            .map(|v| v.test_cases.as_slice())
            .unwrap_or_default()
    }

    fn cases_for_update(&self, session: &Session) -> Result<Vec<TestCase>> {
        self.current_version(session)
            .map(|v| v.test_cases.clone())
            .ok_or_else(|| Error::VersionNotFound(session.app_version.clone()))
    }

    fn commit(&mut self, session: &Session, cases: Vec<TestCase>) -> Result<()> {
        if !self.ledger.mutate_test_cases(&session.app_version, cases) {
            return Err(Error::VersionNotFound(session.app_version.clone()));
        }
        self.save_ledger()
    }

    fn save_ledger(&self) -> Result<()> {
        self.db.save_json(keys::LEDGER, &self.ledger)
    }

    fn save_users(&self) -> Result<()> {
        self.db.save_json(keys::SAVED_USERS, &self.users)
    }

    fn save_environments(&self) -> Result<()> {
        self.db.save_json(keys::SAVED_ENVIRONMENTS, &self.environments)
    }

    fn save_presence(&self) -> Result<()> {
        self.db.save_json(keys::PRESENCE, &self.presence)
    }
}

fn record_status<C: Clock>(
    case: &mut TestCase,
    platform: Platform,
    status: TestStatus,
    session: &Session,
    clock: &C,
) {
    case.set_status(platform, status);
    if status.is_executed() {
        case.set_tester(platform, session.name.clone());
        case.executed_on = clock.today();
        case.executed_version = session.app_version.clone();
        case.executed_environment = session.environment.to_string();
    } else {
        case.set_tester(platform, String::new());
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
