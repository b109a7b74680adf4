use super::task::Task;

/// Case-insensitive substring match against task titles only. An empty
/// query matches every task; descriptions are never searched.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let lq = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&lq))
        .collect()
}
