use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::models::{Group, Trainer};

pub const TRAINERS_COLLECTION: &str = "trainers";
pub const GROUPS_COLLECTION: &str = "groups";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] mongodb::error::Error),
}

/// Handle on the two collections backing the tracker. Cheap to clone; all
/// clones share the driver's connection pool.
#[derive(Clone)]
pub struct Store {
    db: Database,
    trainers: Collection<Trainer>,
    groups: Collection<Group>,
}

impl Store {
    /// Parse the connection string and set up collection handles. The driver
    /// connects lazily; use [`Store::ping`] to probe the deployment.
    pub async fn connect(database_url: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(database_url).await?;
        let db = client.database(database_name);
        Ok(Self {
            trainers: db.collection(TRAINERS_COLLECTION),
            groups: db.collection(GROUPS_COLLECTION),
            db,
        })
    }

    /// Round-trip to the deployment. Startup logs the outcome and carries on
    /// either way; each request fails on its own if the database stays down.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! {"ping": 1}).await?;
        Ok(())
    }

    /// Unique indexes backing the email and group-name invariants. The
    /// handler-level existence checks can race under concurrent requests;
    /// these close that race at the database.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = IndexOptions::builder().unique(true).build();
        self.trainers
            .create_index(
                IndexModel::builder()
                    .keys(doc! {"email": 1})
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        self.groups
            .create_index(
                IndexModel::builder()
                    .keys(doc! {"group_name": 1})
                    .options(unique)
                    .build(),
            )
            .await?;
        Ok(())
    }

    pub async fn find_trainer_by_email(&self, email: &str) -> Result<Option<Trainer>, StoreError> {
        Ok(self.trainers.find_one(doc! {"email": email}).await?)
    }

    pub async fn find_trainer_by_id(&self, id: ObjectId) -> Result<Option<Trainer>, StoreError> {
        Ok(self.trainers.find_one(doc! {"_id": id}).await?)
    }

    pub async fn insert_trainer(&self, trainer: &Trainer) -> Result<(), StoreError> {
        self.trainers.insert_one(trainer).await?;
        Ok(())
    }

    pub async fn find_group_by_name(&self, group_name: &str) -> Result<Option<Group>, StoreError> {
        Ok(self.groups.find_one(doc! {"group_name": group_name}).await?)
    }

    pub async fn insert_group(&self, group: &Group) -> Result<(), StoreError> {
        self.groups.insert_one(group).await?;
        Ok(())
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        let cursor = self.groups.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
