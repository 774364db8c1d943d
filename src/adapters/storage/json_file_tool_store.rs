//! JSON File Tool Store Adapter
//!
//! Keeps the whole catalog in memory as the working copy and mirrors it to a
//! single pretty-printed JSON array on disk after every mutation.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::tool::{Tool, ToolDraft, ToolId};
use crate::ports::{StoreError, ToolStore};

/// File-backed tool store.
///
/// Every operation holds one mutex across read-modify-persist, so ids are
/// never handed out twice and whole-file writes never interleave. A mutation
/// is committed to memory only after its file write succeeded.
///
/// Mutations run on their own task: once started they finish even if the
/// caller's future is dropped, so memory and disk cannot drift apart.
#[derive(Debug, Clone)]
pub struct JsonFileToolStore {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    path: PathBuf,
    state: Mutex<WorkingCopy>,
}

#[derive(Debug, Default)]
struct WorkingCopy {
    tools: Vec<Tool>,
    /// Highest id ever issued. Does not go down on delete.
    last_id: Option<ToolId>,
}

/// Next state of the working copy plus the value handed back to the caller.
struct Change<T> {
    tools: Vec<Tool>,
    last_id: Option<ToolId>,
    output: T,
}

impl WorkingCopy {
    /// `tools` must be sorted by id without duplicates.
    fn new(tools: Vec<Tool>) -> Self {
        let last_id = tools.last().map(|t| t.id);
        Self { tools, last_id }
    }

    fn next_id(&self) -> Result<ToolId, StoreError> {
        match self.last_id {
            Some(last) => last.next().ok_or(StoreError::IdsExhausted(last)),
            None => Ok(ToolId::new(1)),
        }
    }

    fn position(&self, id: ToolId) -> Result<usize, StoreError> {
        self.tools
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, draft: ToolDraft) -> Result<Change<Tool>, StoreError> {
        let tool = Tool::from_draft(self.next_id()?, draft);
        let mut tools = self.tools.clone();
        tools.push(tool.clone());
        Ok(Change {
            tools,
            last_id: Some(tool.id),
            output: tool,
        })
    }

    fn update(&self, id: ToolId, draft: ToolDraft) -> Result<Change<Tool>, StoreError> {
        let index = self.position(id)?;
        let mut tools = self.tools.clone();
        tools[index].apply(draft);
        let updated = tools[index].clone();
        Ok(Change {
            tools,
            last_id: self.last_id,
            output: updated,
        })
    }

    fn remove(&self, id: ToolId) -> Result<Change<()>, StoreError> {
        let index = self.position(id)?;
        let mut tools = self.tools.clone();
        tools.remove(index);
        Ok(Change {
            tools,
            last_id: self.last_id,
            output: (),
        })
    }
}

impl JsonFileToolStore {
    /// Open the store, loading the document at `path` once.
    ///
    /// A missing, unreadable, or unparsable document yields an empty store;
    /// the problem is logged and startup continues.
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileToolStore::open("./data/tools.json").await;
    /// ```
    pub async fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let tools = load_document(&path).await;
        tracing::info!(path = %path.display(), count = tools.len(), "Loaded tool catalog");

        Self {
            shared: Arc::new(Shared {
                path,
                state: Mutex::new(WorkingCopy::new(tools)),
            }),
        }
    }

    /// Location of the persisted document.
    pub fn path(&self) -> &Path {
        &self.shared.path
    }

    /// Plan a change under the lock, persist it, then commit it to memory.
    async fn mutate<T, F>(&self, plan: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&WorkingCopy) -> Result<Change<T>, StoreError> + Send + 'static,
    {
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            let mut state = shared.state.lock().await;
            let change = plan(&*state)?;

            shared.persist(&change.tools).await?;

            state.tools = change.tools;
            state.last_id = change.last_id;
            Ok::<T, StoreError>(change.output)
        });

        task.await
            .map_err(|e| StoreError::Io(format!("Store task failed: {}", e)))?
    }
}

impl Shared {
    /// Overwrite the document with `tools` via temp file + rename.
    async fn persist(&self, tools: &[Tool]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(tools)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(format!("Failed to create directory: {}", e)))?;
        }

        let temp_path = temp_path_for(&self.path);
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to create temporary file: {}", e)))?;
        file.write_all(&json)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write temporary file: {}", e)))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::Io(format!("Failed to flush temporary file: {}", e)))?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::Io(format!("Failed to rename file: {}", e)));
        }

        Ok(())
    }
}

#[async_trait]
impl ToolStore for JsonFileToolStore {
    async fn list(&self) -> Result<Vec<Tool>, StoreError> {
        let state = self.shared.state.lock().await;
        Ok(state.tools.clone())
    }

    async fn exists(&self, id: ToolId) -> Result<bool, StoreError> {
        let state = self.shared.state.lock().await;
        Ok(state.position(id).is_ok())
    }

    async fn insert(&self, draft: ToolDraft) -> Result<Tool, StoreError> {
        self.mutate(move |state| state.insert(draft)).await
    }

    async fn update(&self, id: ToolId, draft: ToolDraft) -> Result<Tool, StoreError> {
        self.mutate(move |state| state.update(id, draft)).await
    }

    async fn remove(&self, id: ToolId) -> Result<(), StoreError> {
        self.mutate(move |state| state.remove(id)).await
    }
}

async fn load_document(path: &Path) -> Vec<Tool> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No tool document found, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read tool document, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(tools) => unique_by_id(tools, path),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse tool document, starting empty");
            Vec::new()
        }
    }
}

/// Sort by id, keeping the last record of each repeated id.
fn unique_by_id(tools: Vec<Tool>, path: &Path) -> Vec<Tool> {
    let total = tools.len();
    let by_id: BTreeMap<ToolId, Tool> = tools.into_iter().map(|t| (t.id, t)).collect();

    let duplicates = total - by_id.len();
    if duplicates > 0 {
        tracing::warn!(
            path = %path.display(),
            duplicates,
            "Tool document repeats ids, keeping the last record of each"
        );
    }

    by_id.into_values().collect()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}
