/// An amount as it arrives over the wire: either a JSON number or a string
/// holding one.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubscriptionAmount(f64);

impl SubscriptionAmount {
    /// Accepts any finite number. Sign and magnitude are not checked.
    pub fn parse(raw: RawAmount) -> Result<SubscriptionAmount, String> {
        let value = match raw {
            RawAmount::Number(value) => value,
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("'{}' is not a valid amount: {}", text, e))?,
        };
        if !value.is_finite() {
            return Err(format!("{} is not a valid amount.", value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
