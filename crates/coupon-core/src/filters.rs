//! Client-side coupon filtering over an already fetched list.

use crate::domain::{Category, Coupon};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponFilter {
    pub category: Option<Category>,
    pub max_price: Option<f64>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

impl CouponFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() { None } else { Some(text.trim().to_lowercase()) };
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.max_price.is_none() && self.search.is_none()
    }

    pub fn matches(&self, coupon: &Coupon) -> bool {
        if let Some(category) = self.category {
            if coupon.category != category {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if coupon.price > max_price {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !coupon.title.to_lowercase().contains(search.as_str()) {
                return false;
            }
        }
        true
    }

    /// Keeps the input order.
    pub fn apply(&self, coupons: &[Coupon]) -> Vec<Coupon> {
        coupons.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn coupon(id: i64, category: Category, title: &str, price: f64) -> Coupon {
        Coupon {
            id,
            company_id: 1,
            category,
            title: title.to_string(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            amount: 10,
            price,
            image: String::new(),
        }
    }

    fn catalogue() -> Vec<Coupon> {
        vec![
            coupon(1, Category::Food, "Burger combo", 30.0),
            coupon(2, Category::Vacation, "Eilat weekend", 900.0),
            coupon(3, Category::Food, "Sushi platter", 120.0),
            coupon(4, Category::Sports, "Gym month", 150.0),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CouponFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&catalogue()).len(), 4);
    }

    #[test]
    fn test_category_and_price_combine() {
        let filter = CouponFilter::new().category(Category::Food).max_price(100.0);
        let ids: Vec<_> = filter.apply(&catalogue()).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let filter = CouponFilter::new().max_price(150.0);
        let ids: Vec<_> = filter.apply(&catalogue()).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = CouponFilter::new().search("  SUSHI ");
        let ids: Vec<_> = filter.apply(&catalogue()).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3]);

        assert!(CouponFilter::new().search("   ").is_empty());
    }
}
