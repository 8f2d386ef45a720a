//! User List View
//!
//! User administration: filter by role and state, soft-delete, restore and
//! create. Validation errors from the create form are shown per field.

use leptos::prelude::*;

use crate::api::users::{self, NewUser};
use crate::components::{DeleteButton, FieldError, FilterSelect, ListFrame, SearchInput, SortHeader};
use crate::context::use_app_context;
use crate::list_view::{use_list, ListHandle};
use crate::models::User;

/// Role choices for the create form, without the "all" entry
fn assignable_roles() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    users::ROLE_OPTIONS.iter().filter(|(value, _)| !value.is_empty())
}

#[component]
fn NewUserForm(list: ListHandle<User>) -> impl IntoView {
    let form = RwSignal::new(NewUser {
        role: "CLERK".to_string(),
        ..Default::default()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = form.get_untracked();
        list.mutate_then(users::create(&user), move || {
            form.set(NewUser {
                role: user.role,
                ..Default::default()
            });
        });
    };

    view! {
        <form class="create-form" on:submit=on_submit>
            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <FieldError message=list.field_error("username") />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <FieldError message=list.field_error("email") />
            </label>
            <label>
                "Role"
                <select
                    prop:value=move || form.with(|f| f.role.clone())
                    on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                >
                    {assignable_roles().map(|(value, text)| {
                        view! { <option value=*value>{*text}</option> }
                    }).collect_view()}
                </select>
                <FieldError message=list.field_error("role") />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <FieldError message=list.field_error("password") />
            </label>
            <button type="submit" class="create-btn" disabled=move || list.submitting().get()>
                "+ Add user"
            </button>
        </form>
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let ctx = use_app_context();
    let list = use_list::<User>(users::list_config(ctx.page_size()));
    let rows = list.rows();
    let filter = list.filter();
    let on_sort = Callback::new(move |field: &'static str| list.set_sort(field));

    let user_row = move |user: User| {
        let id = user.id;
        let active = user.active;
        let prompt = format!("Delete user \"{}\"?", user.username);

        view! {
            <tr class:inactive=!active>
                <td>{user.username}</td>
                <td>{user.email}</td>
                <td>{user.role}</td>
                <td>{if active { "Active" } else { "Deleted" }}</td>
                <td class="row-actions">
                    <button
                        class="restore-btn"
                        title="Restore"
                        disabled=active
                        on:click=move |_| list.mutate(users::restore(id))
                    >
                        "↺"
                    </button>
                    <DeleteButton
                        disabled=!active
                        on_request=move |_| list.ask_confirmation(prompt.clone(), users::delete(id))
                    />
                </td>
            </tr>
        }
    };

    view! {
        <section class="list-view user-list">
            <header class="list-header">
                <h2>"Users"</h2>
                <div class="filter-panel">
                    <SearchInput
                        value=list.text(users::SEARCH)
                        placeholder="Username or email..."
                        on_input=move |text: String| list.set_field(users::SEARCH, text.into())
                    />
                    <FilterSelect
                        label="Role"
                        options=users::ROLE_OPTIONS
                        value=list.text(users::ROLE)
                        on_change=move |role: String| list.set_field(users::ROLE, role.into())
                    />
                    <FilterSelect
                        label="State"
                        options=users::ACTIVE_OPTIONS
                        value=list.text(users::ACTIVE)
                        on_change=move |state: String| {
                            list.set_field(users::ACTIVE, users::active_filter(&state))
                        }
                    />
                    <button class="clear-btn" on:click=move |_| list.clear()>"Clear filters"</button>
                </div>
            </header>

            <NewUserForm list=list />

            {list.banner_view()}

            <ListFrame loading=list.loading()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Username" field="username" filter=filter on_sort=on_sort />
                            <SortHeader label="Email" field="email" filter=filter on_sort=on_sort />
                            <SortHeader label="Role" field="role" filter=filter on_sort=on_sort />
                            <th>"State"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(user_row).collect_view()}
                        {list.empty_view(5, "No users match these filters")}
                    </tbody>
                </table>
            </ListFrame>

            {list.pagination_view()}
            {list.confirm_view()}
        </section>
    }
}
