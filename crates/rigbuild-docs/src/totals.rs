//! 文件金額彙總

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::document::DocumentLine;

/// 文件金額
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentTotals {
    /// 未稅合計
    pub subtotal: Decimal,
    /// 稅額
    pub tax: Decimal,
    /// 含稅總計
    pub total: Decimal,
}

impl DocumentTotals {
    /// 彙總明細金額
    ///
    /// 各行小計先以完整精度加總，最後才四捨五入到小數兩位；
    /// 總計 = 未稅合計 + 稅額（皆為四捨五入後的值）。
    pub fn compute(lines: &[DocumentLine], tax_rate: Decimal) -> Self {
        let raw_subtotal: Decimal = lines.iter().map(DocumentLine::line_total).sum();

        let subtotal = round_money(raw_subtotal);
        let tax = round_money(raw_subtotal * tax_rate);

        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// 金額四捨五入到小數兩位（0.005 進位）
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_compute_totals() {
        let lines = vec![
            DocumentLine::new("Monitor", 2, Decimal::from(199)),
            DocumentLine::new("Keyboard", 1, Decimal::new(7990, 2)),
        ];

        let totals = DocumentTotals::compute(&lines, Decimal::new(20, 2));

        assert_eq!(totals.subtotal, Decimal::new(47790, 2));
        assert_eq!(totals.tax, Decimal::new(9558, 2));
        assert_eq!(totals.total, Decimal::new(57348, 2));
    }

    #[test]
    fn test_rounding_happens_once() {
        // 3 x 0.333 = 0.999，逐行四捨五入會得到 0.99
        let lines = vec![
            DocumentLine::new("Screw", 1, Decimal::new(333, 3)),
            DocumentLine::new("Screw", 1, Decimal::new(333, 3)),
            DocumentLine::new("Screw", 1, Decimal::new(333, 3)),
        ];

        let totals = DocumentTotals::compute(&lines, Decimal::ZERO);
        assert_eq!(totals.subtotal, Decimal::ONE);
    }

    #[rstest]
    #[case(Decimal::ZERO, Decimal::from(100))]
    #[case(Decimal::new(55, 3), Decimal::new(10550, 2))]
    #[case(Decimal::new(20, 2), Decimal::from(120))]
    fn test_tax_rates(#[case] rate: Decimal, #[case] expected_total: Decimal) {
        let lines = vec![DocumentLine::new("Headset", 1, Decimal::from(100))];
        assert_eq!(DocumentTotals::compute(&lines, rate).total, expected_total);
    }

    #[test]
    fn test_half_cent_rounds_up() {
        // 0.125 的稅額：銀行家捨入會得到 0.12
        let lines = vec![DocumentLine::new("Cable", 1, Decimal::new(125, 2))];
        let totals = DocumentTotals::compute(&lines, Decimal::new(10, 2));
        assert_eq!(totals.tax, Decimal::new(13, 2));
    }

    #[test]
    fn test_empty_lines() {
        let totals = DocumentTotals::compute(&[], Decimal::new(20, 2));
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
