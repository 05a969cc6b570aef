//! Meal suggestion call: `POST /ai/suggest-meal`.

use cantina_core::StoreResult;

use crate::dto::{SuggestRequestDto, SuggestResponseDto};
use crate::http::RestClient;

/// Ask the suggestion backend for a dish using the given ingredient names.
/// Returns the suggestion text (Markdown) as-is.
pub async fn suggest_meal(client: &RestClient, ingredients: Vec<String>) -> StoreResult<String> {
    let response: SuggestResponseDto = client
        .post_json("/ai/suggest-meal", &SuggestRequestDto { ingredients })
        .await?;
    Ok(response.suggestion)
}
