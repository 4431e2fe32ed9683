//! Diesel schema for task list persistence.

diesel::table! {
    /// Task list records.
    task_lists (id) {
        /// Task list identifier.
        id -> Text,
        /// List name.
        name -> Text,
        /// Free-text description.
        description -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
