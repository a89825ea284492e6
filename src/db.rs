use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use crate::models::Entry;

const DEFAULT_DATABASE: &str = "Blog";
const ENTRIES_COLLECTION: &str = "entries";

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn insert(&self, entry: &Entry) -> crate::Result<()>;
    async fn find_all(&self) -> crate::Result<Vec<Entry>>;
}

pub struct MongoStore {
    entries: Collection<Entry>,
}

impl MongoStore {
    pub async fn connect(uri: &str) -> crate::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        // The client connects lazily; ping so a bad URI fails at startup.
        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            entries: database.collection(ENTRIES_COLLECTION),
        })
    }
}

#[async_trait]
impl EntryStore for MongoStore {
    async fn insert(&self, entry: &Entry) -> crate::Result<()> {
        self.entries.insert_one(entry).await?;
        Ok(())
    }

    async fn find_all(&self) -> crate::Result<Vec<Entry>> {
        let cursor = self.entries.find(doc! {}).await?;
        let entries = cursor.try_collect().await?;
        Ok(entries)
    }
}

#[cfg(test)]
pub struct MemoryStore {
    entries: std::sync::Mutex<Vec<Entry>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl EntryStore for MemoryStore {
    async fn insert(&self, entry: &Entry) -> crate::Result<()> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn find_all(&self) -> crate::Result<Vec<Entry>> {
        Ok(self.entries())
    }
}
