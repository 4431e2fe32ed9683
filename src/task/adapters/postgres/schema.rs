//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Text,
        /// Owning task list, empty when unassigned.
        list_id -> Text,
        /// Task title.
        title -> Text,
        /// Free-text description.
        description -> Text,
        /// Progress state.
        #[max_length = 20]
        status -> Varchar,
        /// Urgency.
        #[max_length = 10]
        priority -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
