mod common;

use common::TestBackend;
use pretty_assertions::assert_eq;
use recipebook::model::Recipe;
use recipebook::model::Session;
use recipebook::service::RecipeService;
use serde_json::json;
use wiremock::Mock;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

fn pancakes() -> Recipe {
    Recipe {
        id: None,
        name: "Pancakes".to_string(),
        description: "Sunday breakfast".to_string(),
        ingredients: vec!["flour".to_string(), "milk".to_string(), "eggs".to_string()],
    }
}

#[tokio::test]
async fn list_sends_bearer_token_of_current_session() {
    let backend = TestBackend::start().await;
    backend
        .session
        .store(&Session { token: "abc".to_string(), login: "chef42".to_string(), expires_at: None }, false)
        .unwrap();
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Pancakes", "description": "Sunday breakfast", "ingredients": ["flour"] },
            { "id": 2, "name": "Soup" }
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let recipes = RecipeService::new(backend.client.clone(), &backend.config).list().await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].ingredients, vec!["flour".to_string()]);
    assert_eq!(recipes[1].id, Some(2));
    assert_eq!(recipes[1].description, "");
}

#[tokio::test]
async fn create_returns_stored_recipe() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .and(body_json(json!({
            "name": "Pancakes",
            "description": "Sunday breakfast",
            "ingredients": ["flour", "milk", "eggs"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "name": "Pancakes",
            "description": "Sunday breakfast",
            "ingredients": ["flour", "milk", "eggs"],
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let created = RecipeService::new(backend.client.clone(), &backend.config).create(&pancakes()).await.unwrap();

    assert_eq!(created, Recipe { id: Some(12), ..pancakes() });
}

#[tokio::test]
async fn update_puts_on_collection_path() {
    let backend = TestBackend::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/recipes"))
        .and(body_json(json!({
            "id": 12,
            "name": "Pancakes",
            "description": "Sunday breakfast",
            "ingredients": ["flour", "milk", "eggs"],
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    RecipeService::new(backend.client.clone(), &backend.config)
        .update(&Recipe { id: Some(12), ..pancakes() })
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_targets_recipe_id() {
    let backend = TestBackend::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/12"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend.server)
        .await;

    RecipeService::new(backend.client.clone(), &backend.config).delete(12).await.unwrap();
}

#[tokio::test]
async fn failure_without_message_uses_status_text() {
    let backend = TestBackend::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend.server)
        .await;

    let err = RecipeService::new(backend.client.clone(), &backend.config).delete(99).await.unwrap_err();

    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&backend.server)
        .await;

    let err = RecipeService::new(backend.client.clone(), &backend.config).list().await.unwrap_err();

    assert!(matches!(err, recipebook::ApiError::Decode(_)));
}
