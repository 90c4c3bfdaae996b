use serde::{Deserialize, Serialize};

pub type WalletId = i64;

/// Points are stored as a plain floating-point balance.
pub type Points = f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub user: String,
    pub points: Points,
    pub description: Option<String>,
}

impl Wallet {
    pub fn new(id: WalletId, user: impl Into<String>, points: Points) -> Self {
        Self {
            id,
            user: user.into(),
            points,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the balance covers a withdrawal of `amount`.
    /// Withdrawing the whole balance is allowed.
    pub fn can_cover(&self, amount: Points) -> bool {
        amount <= self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_can_cover_allows_exact_balance() {
        let wallet = Wallet::new(1, "Ahmed", 10.0);
        assert!(wallet.can_cover(10.0));
        assert!(wallet.can_cover(0.0));
        assert!(!wallet.can_cover(10.5));
    }

    #[test]
    fn test_description_serializes_as_null_when_absent() {
        let wallet = Wallet::new(2, "Omar", 20.0);
        let value = serde_json::to_value(&wallet).unwrap();
        assert_eq!(
            value,
            json!({"id": 2, "user": "Omar", "points": 20.0, "description": null})
        );
    }

    #[test]
    fn test_deserialize_accepts_integer_points_and_missing_description() {
        let wallet: Wallet =
            serde_json::from_value(json!({"id": 1, "user": "Ahmed", "points": 10})).unwrap();
        assert_eq!(wallet, Wallet::new(1, "Ahmed", 10.0));
    }

    #[test]
    fn test_deserialize_rejects_missing_id() {
        let result = serde_json::from_value::<Wallet>(json!({"user": "Ahmed", "points": 10}));
        assert!(result.is_err());
    }
}
