//! Mock job service for tests: in-memory job table, no network.

use std::collections::HashMap;
use std::sync::Mutex;
use zoidberg_types::{
    JobId, JobService, JobServiceError, ServiceStatus, StatusRecord, StatusRequest, SubmitRequest,
    SubmitResponse,
};

#[derive(Default)]
struct Inner {
    next_id: i64,
    submitted: Vec<SubmitRequest>,
    statuses: HashMap<JobId, ServiceStatus>,
}

/// Mock service that assigns increasing ids starting at 1 and marks new jobs `Submitted`.
/// With `failing`, every call returns an HTTP 500 style error.
#[derive(Default)]
pub struct MockJobService {
    inner: Mutex<Inner>,
    failing: bool,
}

impl MockJobService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Set the status reported for `id`.
    pub fn set_status(&self, id: JobId, status: impl Into<ServiceStatus>) {
        let mut inner = self.inner.lock().unwrap();
        inner.statuses.insert(id, status.into());
    }

    /// All submit requests seen so far, in order.
    pub fn submitted(&self) -> Vec<SubmitRequest> {
        self.inner.lock().unwrap().submitted.clone()
    }

    fn check(&self) -> Result<(), JobServiceError> {
        if self.failing {
            return Err(JobServiceError::Api {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl JobService for MockJobService {
    async fn submit_batch(
        &self,
        jobs: &[SubmitRequest],
    ) -> Result<Vec<SubmitResponse>, JobServiceError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let mut out = Vec::with_capacity(jobs.len());
        for job in jobs {
            inner.next_id += 1;
            let id = JobId(inner.next_id);
            inner.submitted.push(job.clone());
            inner.statuses.insert(id, ServiceStatus::from("Submitted"));
            out.push(SubmitResponse { id });
        }
        Ok(out)
    }

    async fn status_batch(
        &self,
        ids: &[StatusRequest],
    ) -> Result<Vec<StatusRecord>, JobServiceError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|r| inner.statuses.get(&r.id))
            .map(|status| StatusRecord {
                status: status.clone(),
            })
            .collect())
    }
}
