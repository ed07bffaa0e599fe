//! Mock platform service for testing
//!
//! Manually implements `PlatformService` with configurable responses,
//! call tracking, and error injection for failure path testing.

#![allow(dead_code)]

use async_trait::async_trait;
use label_merge::error::{Error, Result};
use label_merge::platform::PlatformService;
use label_merge::types::{
    CheckRunList, MergeMethod, MergeResult, PullRequestDetails, PullRequestSummary, RepoConfig,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `merge_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePrCall {
    pub pr_number: u64,
    pub method: MergeMethod,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable responses per PR number / head ref
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: RepoConfig,
    // Configured responses
    open_prs: Mutex<Vec<PullRequestSummary>>,
    details_responses: Mutex<HashMap<u64, PullRequestDetails>>,
    check_runs_responses: Mutex<HashMap<String, CheckRunList>>,
    merge_responses: Mutex<HashMap<u64, MergeResult>>,
    // Call tracking
    list_open_calls: Mutex<u32>,
    details_calls: Mutex<Vec<u64>>,
    check_runs_calls: Mutex<Vec<String>>,
    merge_calls: Mutex<Vec<MergePrCall>>,
    // Error injection
    error_on_details: Mutex<HashMap<u64, String>>,
    error_on_check_runs: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            open_prs: Mutex::new(Vec::new()),
            details_responses: Mutex::new(HashMap::new()),
            check_runs_responses: Mutex::new(HashMap::new()),
            merge_responses: Mutex::new(HashMap::new()),
            list_open_calls: Mutex::new(0),
            details_calls: Mutex::new(Vec::new()),
            check_runs_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_details: Mutex::new(HashMap::new()),
            error_on_check_runs: Mutex::new(None),
            error_on_merge: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Add a PR to the open list (in call order)
    pub fn add_open_pr(&self, pr: PullRequestSummary) {
        self.open_prs.lock().unwrap().push(pr);
    }

    /// Set the response for `get_pr_details` for a specific PR
    pub fn set_details_response(&self, pr_number: u64, details: PullRequestDetails) {
        self.details_responses
            .lock()
            .unwrap()
            .insert(pr_number, details);
    }

    /// Set the response for `list_check_runs` for a specific head ref
    pub fn set_check_runs_response(&self, ref_name: &str, runs: CheckRunList) {
        self.check_runs_responses
            .lock()
            .unwrap()
            .insert(ref_name.to_string(), runs);
    }

    /// Set the response for `merge_pr` for a specific PR
    pub fn set_merge_response(&self, pr_number: u64, result: MergeResult) {
        self.merge_responses
            .lock()
            .unwrap()
            .insert(pr_number, result);
    }

    // === Error injection ===

    /// Make `get_pr_details` return an error for a specific PR
    pub fn fail_details(&self, pr_number: u64, msg: &str) {
        self.error_on_details
            .lock()
            .unwrap()
            .insert(pr_number, msg.to_string());
    }

    /// Make `list_check_runs` return an error
    pub fn fail_check_runs(&self, msg: &str) {
        *self.error_on_check_runs.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    /// How many times `list_open_prs` was called
    pub fn list_open_call_count(&self) -> u32 {
        *self.list_open_calls.lock().unwrap()
    }

    /// Get all `get_pr_details` calls
    pub fn get_details_calls(&self) -> Vec<u64> {
        self.details_calls.lock().unwrap().clone()
    }

    /// Get all `list_check_runs` calls
    pub fn get_check_runs_calls(&self) -> Vec<String> {
        self.check_runs_calls.lock().unwrap().clone()
    }

    /// Get all `merge_pr` calls
    pub fn get_merge_calls(&self) -> Vec<MergePrCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Get count of `merge_pr` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Assert that `merge_pr` was called for a specific PR
    pub fn assert_merge_called(&self, pr_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.pr_number == pr_number),
            "Expected merge_pr({pr_number}) but got: {calls:?}"
        );
    }

    /// Assert that `merge_pr` was NOT called for a specific PR
    pub fn assert_merge_not_called(&self, pr_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            !calls.iter().any(|c| c.pr_number == pr_number),
            "Expected merge_pr({pr_number}) NOT to be called but it was: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_prs(&self) -> Result<Vec<PullRequestSummary>> {
        *self.list_open_calls.lock().unwrap() += 1;
        Ok(self.open_prs.lock().unwrap().clone())
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        self.details_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_details.lock().unwrap().get(&pr_number) {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.details_responses.lock().unwrap();
        responses.get(&pr_number).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "get_pr_details: no response configured for PR #{pr_number}"
            ))
        })
    }

    async fn list_check_runs(&self, ref_name: &str) -> Result<CheckRunList> {
        self.check_runs_calls
            .lock()
            .unwrap()
            .push(ref_name.to_string());

        if let Some(msg) = self.error_on_check_runs.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.check_runs_responses.lock().unwrap();
        responses.get(ref_name).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "list_check_runs: no response configured for ref '{ref_name}'"
            ))
        })
    }

    async fn merge_pr(&self, pr_number: u64, method: MergeMethod) -> Result<MergeResult> {
        self.merge_calls
            .lock()
            .unwrap()
            .push(MergePrCall { pr_number, method });

        if let Some(msg) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.merge_responses.lock().unwrap();
        responses.get(&pr_number).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "merge_pr: no response configured for PR #{pr_number}"
            ))
        })
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
