//! MongoDB-backed guild store.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, UpdateOptions};
use mongodb::{Client, Collection};
use tracing::{info, warn};

use crate::config::Config;
use crate::database::models::{GuildData, TempAction};
use crate::database::store::GuildStore;
use crate::error::StoreError;

/// One document per guild in the `guilds` collection.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<GuildData>,
}

impl MongoStore {
    /// Connect to MongoDB using the configured URI and database name.
    ///
    /// # Errors
    /// Returns error if connection fails.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(&config.mongodb_uri).await?;
        let client = Client::with_options(options)?;

        // Ping the database to verify connection
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Successfully connected to MongoDB");

        let collection = client
            .database(&config.mongodb_database)
            .collection("guilds");

        Ok(Self { client, collection })
    }

    /// Get a reference to the underlying MongoDB client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn find_guild(&self, guild_id: i64) -> Result<Option<GuildData>, StoreError> {
        let filter = doc! { "guild_id": guild_id };
        Ok(self.collection.find_one(filter).await?)
    }

    fn upsert() -> UpdateOptions {
        UpdateOptions::builder().upsert(true).build()
    }
}

#[async_trait]
impl GuildStore for MongoStore {
    async fn all_guilds(&self) -> Result<HashMap<i64, GuildData>, StoreError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut guilds = HashMap::new();

        while let Some(result) = cursor.next().await {
            match result {
                Ok(guild) => {
                    guilds.insert(guild.guild_id, guild);
                }
                Err(e) => warn!("Skipping undecodable guild document: {}", e),
            }
        }

        Ok(guilds)
    }

    async fn mute_role(&self, guild_id: i64) -> Result<Option<i64>, StoreError> {
        Ok(self.find_guild(guild_id).await?.and_then(|g| g.mute_role))
    }

    async fn set_mute_role(&self, guild_id: i64, role_id: i64) -> Result<(), StoreError> {
        let filter = doc! { "guild_id": guild_id };
        let update = doc! { "$set": { "mute_role": role_id } };

        self.collection
            .update_one(filter, update)
            .with_options(Self::upsert())
            .await?;

        Ok(())
    }

    async fn temp_actions(&self, guild_id: i64) -> Result<HashMap<u64, TempAction>, StoreError> {
        let actions = self
            .find_guild(guild_id)
            .await?
            .map(|g| g.temp_actions_by_user())
            .unwrap_or_default();

        Ok(actions)
    }

    async fn set_temp_action(
        &self,
        guild_id: i64,
        user_id: u64,
        action: TempAction,
    ) -> Result<(), StoreError> {
        let filter = doc! { "guild_id": guild_id };
        let field = format!("temp_actions.{user_id}");
        let value = mongodb::bson::to_bson(&action)?;
        let update = doc! { "$set": { field: value } };

        self.collection
            .update_one(filter, update)
            .with_options(Self::upsert())
            .await?;

        Ok(())
    }

    async fn clear_temp_action(&self, guild_id: i64, user_id: u64) -> Result<(), StoreError> {
        let filter = doc! { "guild_id": guild_id };
        // $unset on a missing field or document matches nothing, which is
        // exactly the wanted no-op.
        let field = format!("temp_actions.{user_id}");
        let update = doc! { "$unset": { field: "" } };

        self.collection.update_one(filter, update).await?;

        Ok(())
    }

    async fn set_temp_actions(
        &self,
        guild_id: i64,
        actions: HashMap<u64, TempAction>,
    ) -> Result<(), StoreError> {
        let keyed: HashMap<String, &TempAction> = actions
            .iter()
            .map(|(id, action)| (id.to_string(), action))
            .collect();

        let filter = doc! { "guild_id": guild_id };
        let value = mongodb::bson::to_bson(&keyed)?;
        let update = doc! { "$set": { "temp_actions": value } };

        self.collection
            .update_one(filter, update)
            .with_options(Self::upsert())
            .await?;

        Ok(())
    }
}
