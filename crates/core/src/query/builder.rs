//! Translation of listing arguments into a [`TaskQuery`]

use super::{
    GetTasksArgs, OrderBy, StatusFilter, TaskCondition, TaskFilter, TaskQuery, TaskWhere,
    TextField,
};

/// Builds the where clause for `filter`.
///
/// Each active criterion adds one condition and the conditions are ANDed.
/// Search is the one disjunction: title OR description.
pub fn build_filter(filter: Option<&TaskFilter>) -> TaskWhere {
    let Some(filter) = filter else {
        return TaskWhere::default();
    };
    let mut conditions = Vec::new();

    match filter.status.unwrap_or_default() {
        StatusFilter::All => {}
        StatusFilter::Done => conditions.push(TaskCondition::Done(true)),
        StatusFilter::Undone => conditions.push(TaskCondition::Done(false)),
    }

    if let Some(category_id) = filter.category_id {
        conditions.push(TaskCondition::Category(category_id));
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(TaskCondition::AnyOf(vec![
            TaskCondition::contains(TextField::Title, search),
            TaskCondition::contains(TextField::Description, search),
        ]));
    }

    if let Some(range) = filter.priority {
        if range.min.is_some() || range.max.is_some() {
            conditions.push(TaskCondition::Priority {
                gte: range.min,
                lte: range.max,
            });
        }
    }

    TaskWhere { conditions }
}

pub fn build_order(order_by: Option<OrderBy>) -> OrderBy {
    order_by.unwrap_or_default()
}

/// Resolves listing arguments; pagination is passed through untouched
pub fn build_query(args: &GetTasksArgs) -> TaskQuery {
    TaskQuery {
        filter: build_filter(args.filter.as_ref()),
        order: build_order(args.order_by),
        skip: args.skip,
        take: args.take,
    }
}
