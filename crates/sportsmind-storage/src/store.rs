use std::collections::BTreeMap;
use std::sync::Arc;

use aws_sdk_s3::Client;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::objects;

/// Key-value object store holding JSON documents.
#[derive(Clone)]
pub enum ObjectStore {
    S3 { client: Client, bucket: String },
    Memory(Arc<RwLock<BTreeMap<String, Vec<u8>>>>),
}

impl ObjectStore {
    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        ObjectStore::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn memory() -> Self {
        ObjectStore::Memory(Arc::default())
    }

    pub fn backend(&self) -> &'static str {
        match self {
            ObjectStore::S3 { .. } => "s3",
            ObjectStore::Memory(_) => "memory",
        }
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self {
            ObjectStore::S3 { client, bucket } => objects::get_object(client, bucket, key).await,
            ObjectStore::Memory(map) => {
                map.read()
                    .await
                    .get(key)
                    .cloned()
                    .ok_or_else(|| StorageError::NotFound {
                        key: key.to_string(),
                    })
            }
        }
    }

    pub async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        match self {
            ObjectStore::S3 { client, bucket } => {
                objects::put_object(client, bucket, key, body).await
            }
            ObjectStore::Memory(map) => {
                map.write().await.insert(key.to_string(), body);
                Ok(())
            }
        }
    }

    /// Keys under `prefix`, in lexicographic order.
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        match self {
            ObjectStore::S3 { client, bucket } => {
                let mut keys = objects::list_objects(client, bucket, prefix).await?;
                keys.sort();
                Ok(keys)
            }
            ObjectStore::Memory(map) => Ok(map
                .read()
                .await
                .range(prefix.to_string()..)
                .take_while(|(key, _)| key.starts_with(prefix))
                .map(|(key, _)| key.clone())
                .collect()),
        }
    }
}

impl std::fmt::Debug for ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectStore::S3 { bucket, .. } => f.debug_struct("S3").field("bucket", bucket).finish(),
            ObjectStore::Memory(_) => f.write_str("Memory"),
        }
    }
}
