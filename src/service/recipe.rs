use reqwest::Method;

use super::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::Recipe;
use crate::model::RecipeList;

/// CRUD over the recipe resource, one HTTP verb per operation.
#[derive(Debug, Clone)]
pub struct RecipeService {
    client: ApiClient,
    path: String,
}

impl RecipeService {
    pub fn new(client: ApiClient, config: &ApiConfig) -> Self {
        Self {
            client,
            path: config.recipes_path.clone(),
        }
    }

    pub async fn list(&self) -> Result<RecipeList, ApiError> {
        self.client.send_json(self.client.request(Method::GET, &self.path)).await
    }

    pub async fn create(&self, recipe: &Recipe) -> Result<Recipe, ApiError> {
        self.client.send_json(self.client.request(Method::POST, &self.path).json(recipe)).await
    }

    pub async fn update(&self, recipe: &Recipe) -> Result<(), ApiError> {
        self.client.send(self.client.request(Method::PUT, &self.path).json(recipe)).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("{}/{}", self.path, id);
        self.client.send(self.client.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
