use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    constants::{API_MESSAGE, SELECTION_ADDED_MSG, SELECTION_REMOVED_MSG},
    data_types::{
        dish_types::{Dish, DishWithIngredients, MealType},
        ApiMessage, DishQuery, MealTypesResponse, Selection, SelectionSummary, SelectionsMessage,
    },
    errors::AppError,
    shared_main::AppState,
};

pub async fn root_handler() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: API_MESSAGE.to_string(),
    })
}

pub async fn dishes_handler(
    State(state): State<AppState>,
    Query(query): Query<DishQuery>,
) -> Json<Vec<Dish>> {
    let now = Instant::now();
    let dishes = state.catalog.find(&query);
    log::debug!("{:?} -> {} dishes in {:.2?}", query, dishes.len(), now.elapsed());

    Json(dishes)
}

pub async fn ingredients_handler(
    State(state): State<AppState>,
    Path(dish_id): Path<i64>,
) -> Result<Json<DishWithIngredients>, AppError> {
    state.catalog.get_ingredients(dish_id).map(Json)
}

pub async fn meal_types_handler() -> Json<MealTypesResponse> {
    Json(MealTypesResponse {
        meal_types: MealType::ALL.to_vec(),
        display_names: MealType::ALL
            .iter()
            .map(|meal_type| (*meal_type, meal_type.display_name().to_string()))
            .collect(),
    })
}

pub async fn add_selection_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(selection): Json<Selection>,
) -> Result<Json<SelectionsMessage>, AppError> {
    let selections = state
        .selections
        .add(&user_id, selection.dish_id, selection.quantity)
        .await?;

    Ok(Json(SelectionsMessage {
        message: SELECTION_ADDED_MSG.to_string(),
        selections,
    }))
}

pub async fn remove_selection_handler(
    State(state): State<AppState>,
    Path((user_id, dish_id)): Path<(String, i64)>,
) -> Result<Json<SelectionsMessage>, AppError> {
    let selections = state.selections.remove(&user_id, dish_id).await?;

    Ok(Json(SelectionsMessage {
        message: SELECTION_REMOVED_MSG.to_string(),
        selections,
    }))
}

pub async fn selection_summary_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SelectionSummary>, AppError> {
    state.selections.summary(&user_id).await.map(Json)
}
