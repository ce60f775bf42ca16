//! Roast ingredients

use crate::config::RoastConfig;
use crate::error::{Result, RoastError};
use crate::value::Bean;
use serde::{Deserialize, Serialize};

/// A quantity of one bean used in a roast
///
/// The ingredient owns its bean. Ingredients are keyed by bean name when
/// removed from a roast.
///
/// `amount` is stored verbatim, negative values included. Use
/// [`Ingredient::validate_amount`] to enforce a non-negative policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    bean: Bean,
    amount: i32,
}

impl Ingredient {
    /// Create an ingredient that takes ownership of `bean`
    pub fn new(bean: Bean, amount: i32) -> Self {
        Self { bean, amount }
    }

    /// Amount of bean used
    #[inline]
    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Owned bean
    #[inline]
    pub fn bean(&self) -> &Bean {
        &self.bean
    }

    /// Bean name (removal key)
    #[inline]
    pub fn bean_name(&self) -> &str {
        self.bean.name()
    }

    /// Check the amount against the config's sign policy.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` when the amount is below zero and the config
    /// disallows negative amounts.
    pub fn validate_amount(&self, config: &RoastConfig) -> Result<()> {
        if self.amount < 0 && !config.allow_negative_amounts {
            return Err(RoastError::NegativeAmount {
                bean: self.bean.name().to_string(),
                amount: self.amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_fields() {
        let ingredient = Ingredient::new(Bean::new("Yirgacheffe"), 250);
        assert_eq!(ingredient.amount(), 250);
        assert_eq!(ingredient.bean(), &Bean::new("Yirgacheffe"));
        assert_eq!(ingredient.bean_name(), "Yirgacheffe");
    }

    #[test]
    fn test_ingredient_caller_keeps_own_bean() {
        let bean = Bean::new("Huila");
        let ingredient = Ingredient::new(bean.clone(), 100);
        drop(ingredient);
        assert_eq!(bean.name(), "Huila");
    }

    #[test]
    fn test_ingredient_clone_is_independent() {
        let i1 = Ingredient::new(Bean::new("Sidamo"), 300);
        let mut i2 = i1.clone();
        i2.clone_from(&Ingredient::new(Bean::new("Kona"), 50));

        assert_eq!(i1.bean_name(), "Sidamo");
        assert_eq!(i1.amount(), 300);
        assert_eq!(i2.bean_name(), "Kona");
        assert_eq!(i2.amount(), 50);
    }

    #[test]
    fn test_ingredient_accepts_negative_amount() {
        let ingredient = Ingredient::new(Bean::new("Sidamo"), -10);
        assert_eq!(ingredient.amount(), -10);
        assert!(ingredient.validate_amount(&RoastConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_amount_strict_config() {
        let strict = RoastConfig::new().with_allow_negative_amounts(false);

        let bad = Ingredient::new(Bean::new("Sidamo"), -10);
        match bad.validate_amount(&strict) {
            Err(RoastError::NegativeAmount { bean, amount }) => {
                assert_eq!(bean, "Sidamo");
                assert_eq!(amount, -10);
            }
            other => panic!("expected NegativeAmount, got {:?}", other),
        }

        let zero = Ingredient::new(Bean::new("Sidamo"), 0);
        assert!(zero.validate_amount(&strict).is_ok());
    }
}
