//! 毛利計算

use rigbuild_core::{Result, StoreError};
use rust_decimal::Decimal;
use serde::Serialize;

/// 毛利
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    /// 毛利金額（售價 - 成本）
    pub amount: Decimal,
    /// 毛利率（毛利 / 售價），售價為 0 時無意義
    pub rate: Option<Decimal>,
}

impl Margin {
    /// 是否虧損
    pub fn is_loss(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// 毛利率百分比（四捨五入到小數兩位）
    pub fn percent(&self) -> Option<Decimal> {
        self.rate.map(|r| (r * Decimal::ONE_HUNDRED).round_dp(2))
    }
}

/// 毛利計算器
pub struct MarginCalculator;

impl MarginCalculator {
    /// 由售價與單台成本計算毛利
    pub fn compute(sale_price: Decimal, unit_cost: Decimal) -> Margin {
        let amount = sale_price - unit_cost;
        let rate = if sale_price.is_zero() {
            None
        } else {
            Some(amount / sale_price)
        };
        Margin { amount, rate }
    }

    /// 依目標毛利率反推售價
    ///
    /// 售價 = 成本 / (1 - 毛利率)，四捨五入到小數兩位。
    pub fn price_for_margin(unit_cost: Decimal, target_rate: Decimal) -> Result<Decimal> {
        if target_rate < Decimal::ZERO || target_rate >= Decimal::ONE {
            return Err(StoreError::InvalidQuantity(format!(
                "目標毛利率必須介於 0 與 1 之間: {}",
                target_rate
            )));
        }
        Ok((unit_cost / (Decimal::ONE - target_rate)).round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_margin() {
        let margin = MarginCalculator::compute(Decimal::from(1500), Decimal::from(1200));

        assert_eq!(margin.amount, Decimal::from(300));
        assert_eq!(margin.rate, Some(Decimal::new(2, 1)));
        assert_eq!(margin.percent(), Some(Decimal::from(20)));
        assert!(!margin.is_loss());
    }

    #[test]
    fn test_loss_and_zero_price() {
        let margin = MarginCalculator::compute(Decimal::ZERO, Decimal::from(110));

        assert_eq!(margin.amount, Decimal::from(-110));
        assert_eq!(margin.rate, None);
        assert!(margin.is_loss());
    }

    #[test]
    fn test_price_for_margin() {
        // 成本 750，目標毛利率 25% → 1000
        let price = MarginCalculator::price_for_margin(Decimal::from(750), Decimal::new(25, 2)).unwrap();
        assert_eq!(price, Decimal::from(1000));

        assert!(MarginCalculator::price_for_margin(Decimal::from(750), Decimal::ONE).is_err());
        assert!(MarginCalculator::price_for_margin(Decimal::from(750), Decimal::from(-1)).is_err());
    }
}
