/// Identity on whose behalf an operation runs. Every store operation is
/// scoped to `user_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i32,
}
