#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CreateSubscription,
    UpdateSubscription,
    DeleteSubscription,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CreateSubscription => "CREATE_SUBSCRIPTION",
            AuditAction::UpdateSubscription => "UPDATE_SUBSCRIPTION",
            AuditAction::DeleteSubscription => "DELETE_SUBSCRIPTION",
        }
    }

    /// Free-text description stored next to the action.
    pub fn describe(&self, subscription_name: &str) -> String {
        let verb = match self {
            AuditAction::CreateSubscription => "Created",
            AuditAction::UpdateSubscription => "Updated",
            AuditAction::DeleteSubscription => "Deleted",
        };
        format!("{} subscription: {}", verb, subscription_name)
    }
}

impl TryFrom<String> for AuditAction {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "CREATE_SUBSCRIPTION" => Ok(Self::CreateSubscription),
            "UPDATE_SUBSCRIPTION" => Ok(Self::UpdateSubscription),
            "DELETE_SUBSCRIPTION" => Ok(Self::DeleteSubscription),
            other => Err(format!("{} is not a known audit action.", other)),
        }
    }
}
