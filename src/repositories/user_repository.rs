//! User repository for all MongoDB operations related to users.
//!
//! This repository encapsulates database access for the users collection,
//! providing the [`UserStore`] port for the service layer.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::{Client, Collection, Database, IndexModel};

use crate::config::CONFIG;
use crate::constants::{COLLECTION_USERS, ERR_MISSING_RECORD_ID};
use crate::errors::{is_duplicate_key, DirectoryError};
use crate::models::{User, UserPatch};
use crate::repositories::UserStore;
use crate::utils::mask_email;

/// [`UserStore`] backed by a MongoDB collection.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Connect using `MONGODB_URI` and `DATABASE_NAME` from the environment.
    pub async fn connect_from_env() -> Result<Self, DirectoryError> {
        info!("Connecting to MongoDB...");
        let client = Client::with_uri_str(&CONFIG.mongodb_uri).await?;
        let db = client.database(&CONFIG.database_name);
        Ok(Self::new(&db))
    }

    /// Create the email index. Call once during startup.
    ///
    /// The index is unique: the server rejects a second record per email even
    /// when two creates race past the application-level existence check.
    pub async fn create_indexes(&self) -> Result<(), DirectoryError> {
        info!("Creating database indexes for users collection...");

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        debug!("Repository: finding user by email: {}", mask_email(email));

        // Read up to two documents instead of find_one so a broken uniqueness
        // invariant surfaces as an error rather than an arbitrary pick.
        let matches: Vec<User> = self
            .collection
            .find(doc! { "email": email })
            .limit(2)
            .await?
            .try_collect()
            .await?;

        if matches.len() > 1 {
            return Err(DirectoryError::IntegrityViolation {
                email: email.to_string(),
                count: matches.len(),
            });
        }
        Ok(matches.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<User>, DirectoryError> {
        debug!("Repository: listing all users");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, DirectoryError> {
        let result = self.collection.insert_one(user).await.map_err(|err| {
            if is_duplicate_key(&err) {
                DirectoryError::DuplicateEmail(user.email.clone())
            } else {
                DirectoryError::Database(err)
            }
        })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DirectoryError::Internal(ERR_MISSING_RECORD_ID.to_string()))
    }

    async fn apply_patch(&self, id: ObjectId, patch: &UserPatch) -> Result<(), DirectoryError> {
        let mut update = doc! {
            "name": patch.name.clone(),
            "updated_at": DateTime::now(),
        };
        if let Some(ref password) = patch.password {
            update.insert("password", password.clone());
        }

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?;
        Ok(())
    }
}
