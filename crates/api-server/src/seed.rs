//! Sample data for an empty store

use serde_json::json;
use tracing::info;

use taskboard_core::query::GetTasksArgs;

use crate::state::AppState;

const CATEGORIES: [&str; 2] = ["Work", "Personal"];

/// (title, description, priority, done, category name)
const TASKS: [(&str, &str, u8, bool, &str); 5] = [
    (
        "Finish GraphQL API",
        "Complete the GraphQL resolvers and schema definitions.",
        3,
        false,
        "Work",
    ),
    (
        "Buy groceries",
        "Milk, eggs, bread, and vegetables.",
        1,
        true,
        "Personal",
    ),
    (
        "Refactor Zustand store",
        "Simplify task filtering and sorting logic.",
        2,
        false,
        "Work",
    ),
    (
        "Workout",
        "30 minutes of cardio and strength training.",
        2,
        false,
        "Personal",
    ),
    (
        "Plan weekend trip",
        "Find hotel and plan activities for Saturday and Sunday.",
        4,
        false,
        "Personal",
    ),
];

/// Creates sample categories and tasks through the services.
///
/// Each half is skipped independently when the store already holds data of
/// that kind.
pub async fn seed_if_empty(state: &AppState) -> taskboard_core::Result<()> {
    let category_service = state.category_service();
    let task_service = state.task_service();

    if category_service.get_categories().await?.is_empty() {
        info!("Creating categories");
        for name in CATEGORIES {
            category_service
                .create_category(&json!({ "name": name }))
                .await?;
        }
    } else {
        info!("Categories already exist, skipping");
    }

    let categories = category_service.get_categories().await?;

    if task_service
        .get_tasks(&GetTasksArgs::default())
        .await?
        .is_empty()
    {
        info!("Creating sample tasks");
        for (title, description, priority, is_done, category) in TASKS {
            let category_id = categories
                .iter()
                .find(|c| c.name == category)
                .map(|c| c.id.to_string());
            task_service
                .create_task(&json!({
                    "title": title,
                    "description": description,
                    "priority": priority,
                    "isDone": is_done,
                    "categoryId": category_id,
                }))
                .await?;
        }
    } else {
        info!("Tasks already exist, skipping");
    }

    Ok(())
}
