use std::{
    sync::{
        atomic::{
            AtomicU64,
            Ordering,
        },
        mpsc,
        Arc,
    },
    thread,
};

use reqwest::Client;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api,
    core::NewCourse,
};

/// Runs every network request off the GUI thread. Each request is spawned on
/// its own thread blocking on a shared tokio runtime; outcomes come back over
/// an mpsc channel drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: Client,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    roster_generation: Arc<AtomicU64>,
    catalog_generation: Arc<AtomicU64>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self {
            runtime,
            client: Client::new(),
            receiver,
            sender,
            roster_generation: Arc::new(AtomicU64::new(0)),
            catalog_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Client) {
        (self.sender.clone(), self.runtime.clone(), self.client.clone())
    }

    /// Start a roster fetch. Returns the generation assigned to this request;
    /// the caller tracks it and ignores results tagged with an older one.
    pub fn load_roster(&self, base_url: String) -> u64 {
        let generation = self.roster_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::fetch_roster(&client, &base_url).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::Roster { generation, result });
        });

        generation
    }

    /// Start a course-catalog fetch, tokenized the same way as the roster.
    pub fn load_catalog(&self, base_url: String) -> u64 {
        let generation = self.catalog_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::list_courses(&client, &base_url).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::Catalog { generation, result });
        });

        generation
    }

    pub fn create_course(&self, base_url: String, course: NewCourse) {
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::create_course(&client, &base_url, &course).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::CourseCreated(result));
        });
    }

    pub fn check_backend(&self, base_url: String) {
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let reachable = runtime.block_on(api::probe(&client, &base_url));
            let _ = sender.send(TaskResult::BackendStatus(reachable));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
