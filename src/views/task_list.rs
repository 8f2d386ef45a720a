//! Task List View
//!
//! Opens on pending tasks. Rows can be completed (status-only PATCH) or
//! deleted after confirmation.

use leptos::prelude::*;
use paged_list::FilterValue;

use crate::api::tasks;
use crate::components::{DateRange, DeleteButton, FilterSelect, ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::use_list;
use crate::models::Task;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<Task>(tasks::list_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    let task_row = move |task: Task| {
        let id = task.id;
        let done = task.status.is_terminal();
        let prompt = format!("Delete task \"{}\"?", task.title);
        let overdue = task
            .days_overdue
            .filter(|days| *days > 0)
            .map(|days| format!("{} days", days));

        view! {
            <tr class:done=done>
                <td class="task-title">{task.title}</td>
                <td>{task.status.label()}</td>
                <td>{task.priority.unwrap_or_default()}</td>
                <td>{task.assignee.unwrap_or_default()}</td>
                <td>{task.due_date.unwrap_or_default()}</td>
                <td class="overdue">{overdue}</td>
                <td class="row-actions">
                    <button
                        class="complete-btn"
                        title="Mark completed"
                        disabled=done
                        on:click=move |_| list.mutate(tasks::complete(id))
                    >
                        "✓"
                    </button>
                    <DeleteButton on_request=move |_| {
                        list.ask_confirmation(prompt.clone(), tasks::delete(id))
                    } />
                </td>
            </tr>
        }
    };

    view! {
        <section class="list-view task-list">
            <header class="list-header">
                <h2>"Tasks"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(tasks::SEARCH)
                        placeholder="Search tasks..."
                        on_input=move |text: String| list.set_field(tasks::SEARCH, text.into())
                    />
                    <FilterSelect
                        label="Status"
                        options=tasks::STATUS_OPTIONS
                        value=list.text(tasks::STATUS)
                        on_change=move |status: String| list.set_field(tasks::STATUS, status.into())
                    />
                    <DateRange
                        from=list.text(tasks::DUE_FROM)
                        to=list.text(tasks::DUE_TO)
                        on_from=move |date: String| list.set_field(tasks::DUE_FROM, FilterValue::Date(date))
                        on_to=move |date: String| list.set_field(tasks::DUE_TO, FilterValue::Date(date))
                    />
                    <button class="clear-btn" on:click=move |_| list.clear()>"Clear filters"</button>
                </div>
            </header>

            {list.banner_view()}

            <ListFrame loading=list.loading()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Title" field="title" filter=filter on_sort=on_sort />
                            <SortHeader label="Status" field="status" filter=filter on_sort=on_sort />
                            <SortHeader label="Priority" field="priority" filter=filter on_sort=on_sort />
                            <th>"Assignee"</th>
                            <SortHeader label="Due" field="dueDate" filter=filter on_sort=on_sort />
                            <th>"Overdue"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(task_row).collect_view()}
                        {list.empty_view(7, "No tasks match these filters")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
            {list.confirm_view()}
        </section>
    }
}
