pub mod dish_types;

use std::collections::BTreeMap;

use dish_types::MealType;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use crate::errors::AppError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Selection {
    pub dish_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub selections: Vec<Selection>,
    pub total_count: i64,
    pub category_counts: BTreeMap<MealType, i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectionsMessage {
    pub message: String,
    pub selections: Vec<Selection>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MealTypesResponse {
    pub meal_types: Vec<MealType>,
    pub display_names: BTreeMap<MealType, String>,
}

/// Query string of `GET /api/dishes`. Values stay raw strings so that an
/// unknown token filters to nothing instead of failing the request.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DishQuery {
    pub meal_type: Option<String>,
    pub dish_type: Option<String>,
    pub search: Option<String>,
}

pub type SelectionReply = Result<Vec<Selection>, AppError>;

pub type SelectionTaskType = (
    mpsc::Sender<SelectionTask>,
    mpsc::Receiver<SelectionTask>,
);

// used internally by the selection store task
#[derive(Debug, Clone)]
pub enum JobType {
    Add { dish_id: i64, quantity: i64 },
    Remove { dish_id: i64 },
    Query,
}

#[derive(Debug)]
pub struct SelectionTask {
    pub job_type: JobType,
    pub user_id: String,
    pub reply_tx: oneshot::Sender<SelectionReply>,
}

pub struct AddSelectionTask {
    pub user_id: String,
    pub dish_id: i64,
    pub quantity: i64,
    pub reply_tx: oneshot::Sender<SelectionReply>,
}
impl From<AddSelectionTask> for SelectionTask {
    fn from(job: AddSelectionTask) -> Self {
        SelectionTask {
            job_type: JobType::Add {
                dish_id: job.dish_id,
                quantity: job.quantity,
            },
            user_id: job.user_id,
            reply_tx: job.reply_tx,
        }
    }
}

pub struct RemoveSelectionTask {
    pub user_id: String,
    pub dish_id: i64,
    pub reply_tx: oneshot::Sender<SelectionReply>,
}
impl From<RemoveSelectionTask> for SelectionTask {
    fn from(job: RemoveSelectionTask) -> Self {
        SelectionTask {
            job_type: JobType::Remove {
                dish_id: job.dish_id,
            },
            user_id: job.user_id,
            reply_tx: job.reply_tx,
        }
    }
}

pub struct QuerySelectionTask {
    pub user_id: String,
    pub reply_tx: oneshot::Sender<SelectionReply>,
}
impl From<QuerySelectionTask> for SelectionTask {
    fn from(job: QuerySelectionTask) -> Self {
        SelectionTask {
            job_type: JobType::Query,
            user_id: job.user_id,
            reply_tx: job.reply_tx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_quantity_defaults_to_one() {
        let sel: Selection = serde_json::from_str(r#"{"dish_id": 101}"#).unwrap();
        assert_eq!(
            sel,
            Selection {
                dish_id: 101,
                quantity: 1
            }
        );
    }

    #[test]
    fn category_counts_serialize_with_meal_tokens_in_menu_order() {
        let summary = SelectionSummary {
            selections: vec![],
            total_count: 0,
            category_counts: MealType::ALL.iter().map(|m| (*m, 0)).collect(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"selections":[],"total_count":0,"category_counts":{"STARTER":0,"MAIN_COURSE":0,"DESSERT":0,"SIDES":0}}"#
        );
    }
}
