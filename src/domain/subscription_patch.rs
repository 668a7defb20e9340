use crate::domain::{RawAmount, StartDate, SubscriptionAmount};
use crate::models::Subscription;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A partial update as received from the caller, kept as raw JSON. Fields are
/// typed only once the subscription it targets is known to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPatch(Value);

impl From<Value> for SubscriptionPatch {
    fn from(body: Value) -> Self {
        Self(body)
    }
}

impl Default for SubscriptionPatch {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionChanges {
    pub name: Option<String>,
    pub amount: Option<SubscriptionAmount>,
    pub period: Option<String>,
    pub start_date: Option<StartDate>,
}

/// An absent key is no change. A present key, `null` included, must hold a
/// valid value.
fn field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, String> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::Null) => Err(format!("{} must not be null.", key)),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| format!("Invalid {}: {}", key, e)),
    }
}

impl TryFrom<SubscriptionPatch> for SubscriptionChanges {
    type Error = String;

    fn try_from(patch: SubscriptionPatch) -> Result<Self, Self::Error> {
        let fields = patch
            .0
            .as_object()
            .ok_or_else(|| "The request body must be a JSON object.".to_string())?;
        let amount = field::<RawAmount>(fields, "amount")?
            .map(SubscriptionAmount::parse)
            .transpose()?;
        let start_date = field::<String>(fields, "start_date")?
            .map(StartDate::parse)
            .transpose()?;
        Ok(SubscriptionChanges {
            name: field(fields, "name")?,
            amount,
            period: field(fields, "period")?,
            start_date,
        })
    }
}

impl SubscriptionChanges {
    /// Overwrites the fields that were provided and leaves the rest alone.
    pub fn apply_to(self, subscription: &mut Subscription) {
        if let Some(name) = self.name {
            subscription.name = name;
        }
        if let Some(amount) = self.amount {
            subscription.amount = amount.value();
        }
        if let Some(period) = self.period {
            subscription.period = period;
        }
        if let Some(start_date) = self.start_date {
            subscription.start_date = start_date.date();
        }
    }
}
