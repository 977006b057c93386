use crate::traits::TaskStore;
use crate::{Error, Result};
use async_trait::async_trait;
use taskdeck_types::{Task, TaskDraft, TaskId};

/// Client for the REST collection at `{base}/tarefas`.
///
/// Every failure on this path, whether the request never left the machine or
/// the service answered with a non-success status, collapses into
/// [`Error::Unavailable`]; the caller surfaces it once as a notice and keeps
/// its last state.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/tarefas", self.base_url)
    }

    fn record_url(&self, id: TaskId) -> String {
        format!("{}/tarefas/{}", self.base_url, id)
    }

    fn check_status(response: &reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Unavailable(format!(
                "backend returned {}",
                response.status()
            )))
        }
    }
}

fn network(err: reqwest::Error) -> Error {
    Error::Unavailable(err.to_string())
}

#[async_trait]
impl TaskStore for RemoteStore {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(network)?;
        Self::check_status(&response)?;

        let body = response.text().await.map_err(network)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, draft: TaskDraft) -> Result<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .await
            .map_err(network)?;
        Self::check_status(&response)
    }

    async fn update(&self, id: TaskId, task: Task) -> Result<()> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(&task)
            .send()
            .await
            .map_err(network)?;
        Self::check_status(&response)
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(network)?;
        Self::check_status(&response)
    }
}
