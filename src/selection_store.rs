//! Per-user party menu selections.
//!
//! The map of selections is owned by a single task; everything else talks to
//! it through [`SelectionStore`], so each add/remove is one uninterrupted
//! read-modify-write and a user never holds two entries for the same dish.
use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::{mpsc, oneshot};

use crate::{
    constants::SELECTION_QUEUE_SIZE,
    data_backend::catalog::Catalog,
    data_types::{
        dish_types::MealType, AddSelectionTask, JobType, QuerySelectionTask,
        RemoveSelectionTask, Selection, SelectionReply, SelectionSummary, SelectionTask,
        SelectionTaskType,
    },
    errors::AppError,
};

type UserSelections = BTreeMap<String, Vec<Selection>>;

#[derive(Clone)]
pub struct SelectionStore {
    task_tx: mpsc::Sender<SelectionTask>,
    catalog: Arc<Catalog>,
}

impl SelectionStore {
    /// Starts the owning task on the current runtime. It lives until the last
    /// handle is dropped.
    pub fn spawn(catalog: Arc<Catalog>) -> Self {
        let (task_tx, task_rx): SelectionTaskType = mpsc::channel(SELECTION_QUEUE_SIZE);

        tokio::spawn(async move {
            log::info!(target: "party_menu_rs::SelectionStore", "Starting selection store...");
            run_selection_store(task_rx).await;
        });

        SelectionStore { task_tx, catalog }
    }

    /// Adds `quantity` of a dish, merging into an existing entry. Dishes
    /// missing from the catalog are rejected before the store is touched.
    pub async fn add(
        &self,
        user_id: &str,
        dish_id: i64,
        quantity: i64,
    ) -> Result<Vec<Selection>, AppError> {
        if self.catalog.get_dish(dish_id).is_none() {
            log::debug!("{} tried to add unknown dish {}", user_id, dish_id);
            return Err(AppError::DishNotFound(dish_id));
        }

        self.request(|reply_tx| {
            AddSelectionTask {
                user_id: user_id.to_string(),
                dish_id,
                quantity,
                reply_tx,
            }
            .into()
        })
        .await
    }

    pub async fn remove(&self, user_id: &str, dish_id: i64) -> Result<Vec<Selection>, AppError> {
        self.request(|reply_tx| {
            RemoveSelectionTask {
                user_id: user_id.to_string(),
                dish_id,
                reply_tx,
            }
            .into()
        })
        .await
    }

    pub async fn get(&self, user_id: &str) -> Result<Vec<Selection>, AppError> {
        self.request(|reply_tx| {
            QuerySelectionTask {
                user_id: user_id.to_string(),
                reply_tx,
            }
            .into()
        })
        .await
    }

    pub async fn summary(&self, user_id: &str) -> Result<SelectionSummary, AppError> {
        let selections = self.get(user_id).await?;
        Ok(summarize(&self.catalog, selections))
    }

    async fn request<F>(&self, make_task: F) -> Result<Vec<Selection>, AppError>
    where
        F: FnOnce(oneshot::Sender<SelectionReply>) -> SelectionTask,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.task_tx
            .send(make_task(reply_tx))
            .await
            .map_err(|_| AppError::StoreUnavailable)?;

        reply_rx.await.map_err(|_| AppError::StoreUnavailable)?
    }
}

async fn run_selection_store(mut task_rx: mpsc::Receiver<SelectionTask>) {
    let mut user_selections = UserSelections::new();

    log::info!(target: "party_menu_rs::SelectionStore", "Ready.");

    while let Some(task) = task_rx.recv().await {
        let SelectionTask {
            job_type,
            user_id,
            reply_tx,
        } = task;

        let reply = match job_type {
            JobType::Add { dish_id, quantity } => {
                handle_add_selection_task(&mut user_selections, &user_id, dish_id, quantity)
            }
            JobType::Remove { dish_id } => {
                Ok(handle_remove_selection_task(&mut user_selections, &user_id, dish_id))
            }
            JobType::Query => Ok(handle_query_selection_task(&user_selections, &user_id)),
        };

        // requester may be gone already (client hung up)
        if reply_tx.send(reply).is_err() {
            log::debug!("Dropped selection reply for {}", user_id);
        }
    }

    log::info!(target: "party_menu_rs::SelectionStore", "Selection store stopped");
}

fn handle_add_selection_task(
    user_selections: &mut UserSelections,
    user_id: &str,
    dish_id: i64,
    quantity: i64,
) -> SelectionReply {
    log::info!("Add: {} x{} for {}", dish_id, quantity, user_id);

    let selections = user_selections.entry(user_id.to_string()).or_default();

    match selections.iter_mut().find(|s| s.dish_id == dish_id) {
        Some(existing) => {
            // stored entry stays untouched when the sum does not fit
            existing.quantity = existing.quantity.checked_add(quantity).ok_or_else(|| {
                log::warn!("Quantity overflow: {} for {}", dish_id, user_id);
                AppError::QuantityOverflow(dish_id)
            })?;
        }
        None => selections.push(Selection { dish_id, quantity }),
    }

    Ok(selections.clone())
}

fn handle_remove_selection_task(
    user_selections: &mut UserSelections,
    user_id: &str,
    dish_id: i64,
) -> Vec<Selection> {
    log::info!("Remove: {} for {}", dish_id, user_id);

    match user_selections.get_mut(user_id) {
        Some(selections) => {
            selections.retain(|s| s.dish_id != dish_id);
            selections.clone()
        }
        None => Vec::new(),
    }
}

fn handle_query_selection_task(user_selections: &UserSelections, user_id: &str) -> Vec<Selection> {
    user_selections.get(user_id).cloned().unwrap_or_default()
}

/// Totals for a selection list. Every meal type is present in
/// `category_counts`, zero if nothing was picked for it.
pub fn summarize(catalog: &Catalog, selections: Vec<Selection>) -> SelectionSummary {
    let mut category_counts: BTreeMap<MealType, i64> =
        MealType::ALL.iter().map(|meal_type| (*meal_type, 0)).collect();
    let mut total_count: i64 = 0;

    for selection in &selections {
        // unknown ids are rejected by `add`, skip them regardless
        if let Some(dish) = catalog.get_dish(selection.dish_id) {
            let count = category_counts.entry(dish.meal_type).or_insert(0);
            *count = count.saturating_add(selection.quantity);
            total_count = total_count.saturating_add(selection.quantity);
        }
    }

    SelectionSummary {
        selections,
        total_count,
        category_counts,
    }
}
