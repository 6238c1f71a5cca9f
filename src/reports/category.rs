//! Category breakdown
//!
//! Groups expenses by their category text and reports each group's share of
//! total spending.

use std::collections::HashMap;

use crate::models::{Expense, Money};

use super::summary::total_expenses;

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category text exactly as entered
    pub category: String,
    /// Sum of the category's expenses
    pub amount: Money,
    /// Number of expenses in the category
    pub entry_count: usize,
    /// Share of total spending in percent, rounded to one decimal place
    pub percentage: f64,
}

/// Group expenses by category
///
/// Grouping is by exact, case-sensitive match with no trimming. Categories
/// appear in the order they were first used. When total spending is zero
/// every percentage is reported as 0.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
    let grand_total = total_expenses(expenses);

    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let position = *positions
            .entry(expense.category.as_str())
            .or_insert_with(|| {
                shares.push(CategoryShare {
                    category: expense.category.clone(),
                    amount: Money::zero(),
                    entry_count: 0,
                    percentage: 0.0,
                });
                shares.len() - 1
            });

        let share = &mut shares[position];
        share.amount += expense.amount;
        share.entry_count += 1;
    }

    for share in &mut shares {
        share.percentage = percentage_of(share.amount, grand_total);
    }

    shares
}

/// `part / total * 100`, rounded to one decimal place; 0 when `total` is zero
pub fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    let raw = part.cents() as f64 / total.cents() as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, cents: i64) -> Expense {
        Expense::new("x", category, Money::from_cents(cents))
    }

    #[test]
    fn test_breakdown_scenario() {
        let expenses = vec![expense("Food", 350), expense("Transport", 200)];
        let shares = category_breakdown(&expenses);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Food");
        assert_eq!(shares[0].amount.cents(), 350);
        assert_eq!(shares[0].percentage, 63.6);
        assert_eq!(shares[1].category, "Transport");
        assert_eq!(shares[1].amount.cents(), 200);
        assert_eq!(shares[1].percentage, 36.4);
    }

    #[test]
    fn test_first_occurrence_order_and_grouping() {
        let expenses = vec![
            expense("Rent", 1000),
            expense("Food", 100),
            expense("Rent", 500),
            expense("Fun", 50),
            expense("Food", 200),
        ];
        let shares = category_breakdown(&expenses);

        let names: Vec<_> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, ["Rent", "Food", "Fun"]);
        assert_eq!(shares[0].amount.cents(), 1500);
        assert_eq!(shares[0].entry_count, 2);
        assert_eq!(shares[1].amount.cents(), 300);
    }

    #[test]
    fn test_grouping_is_case_sensitive_and_untrimmed() {
        let expenses = vec![expense("food", 100), expense("Food", 100), expense("Food ", 100)];
        assert_eq!(category_breakdown(&expenses).len(), 3);
    }

    #[test]
    fn test_percentages_sum_to_about_100() {
        let expenses = vec![
            expense("a", 333),
            expense("b", 333),
            expense("c", 334),
            expense("d", 1),
            expense("e", 1999),
        ];
        let sum: f64 = category_breakdown(&expenses)
            .iter()
            .map(|s| s.percentage)
            .sum();
        // Each share is off by at most 0.05 after rounding
        assert!((sum - 100.0).abs() <= 0.05 * 5.0 + 1e-9, "sum was {}", sum);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let expenses = vec![expense("a", 0), expense("b", 0)];
        let shares = category_breakdown(&expenses);
        assert!(shares.iter().all(|s| s.percentage == 0.0));

        let offsetting = vec![expense("refund", -500), expense("shop", 500)];
        let shares = category_breakdown(&offsetting);
        assert!(shares.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn test_empty_expenses() {
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(Money::from_cents(1), Money::from_cents(3)), 33.3);
        assert_eq!(percentage_of(Money::from_cents(2), Money::from_cents(3)), 66.7);
        assert_eq!(percentage_of(Money::from_cents(5), Money::zero()), 0.0);
    }
}
