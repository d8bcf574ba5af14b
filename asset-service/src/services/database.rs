use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use serde::{de::DeserializeOwned, Serialize};
use service_core::error::AppError;

/// Thin adapter over a shared MongoDB connection. Constructed once at startup
/// and cloned into the request state; the driver handles pooling and
/// thread-safety.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Insert one record; the driver assigns the identifier.
    pub async fn create<T>(&self, collection: &str, record: &T) -> Result<ObjectId, AppError>
    where
        T: Serialize,
    {
        let result = self
            .collection::<T>(collection)
            .insert_one(record, None)
            .await
            .map_err(AppError::from)?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!("insert did not return an ObjectId"))
        })
    }

    /// Up to `limit` matching records, in store-native order.
    pub async fn find<T>(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let options = FindOptions::builder().limit(limit).build();
        let mut cursor = self
            .collection::<T>(collection)
            .find(filter, options)
            .await
            .map_err(AppError::from)?;

        let mut records = Vec::new();
        while let Some(record) = cursor.try_next().await.map_err(AppError::from)? {
            records.push(record);
        }
        Ok(records)
    }

    pub async fn find_by_id<T>(&self, collection: &str, id: ObjectId) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        self.collection::<T>(collection)
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)
    }

    /// `$set` the given fields plus `updated_at` on the record with that id.
    /// Returns the matched count; the route layer decides how to report a miss.
    pub async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<u64, AppError> {
        let mut set = fields;
        set.insert("updated_at", mongodb::bson::DateTime::now());
        let result = self
            .collection::<Document>(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await
            .map_err(AppError::from)?;
        Ok(result.matched_count)
    }

    /// Remove the record with that id. No match is not an error.
    pub async fn delete_one(&self, collection: &str, id: ObjectId) -> Result<(), AppError> {
        self.collection::<Document>(collection)
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
