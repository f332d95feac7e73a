use serde::Serialize;

use coupon_core::{Company, Coupon, Customer, UserInfo};

/// Renders results either as aligned text or as pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn message(&self, text: &str) -> anyhow::Result<()> {
        if self.json {
            self.json(&serde_json::json!({ "message": text }))
        } else {
            println!("{}", text);
            Ok(())
        }
    }

    pub fn user(&self, user: &UserInfo) -> anyhow::Result<()> {
        if self.json {
            return self.json(user);
        }
        println!("Signed in as {} <{}> ({}, id {})", user.name, user.email, user.client_type, user.id);
        Ok(())
    }

    pub fn companies(&self, companies: &[Company]) -> anyhow::Result<()> {
        if self.json {
            return self.json(companies);
        }
        println!("{:>6}  {:<30}  {}", "ID", "NAME", "EMAIL");
        for c in companies {
            println!("{:>6}  {:<30}  {}", c.id, truncate(&c.name, 30), c.email);
        }
        Ok(())
    }

    pub fn customers(&self, customers: &[Customer]) -> anyhow::Result<()> {
        if self.json {
            return self.json(customers);
        }
        println!("{:>6}  {:<30}  {}", "ID", "NAME", "EMAIL");
        for c in customers {
            println!("{:>6}  {:<30}  {}", c.id, truncate(&c.full_name(), 30), c.email);
        }
        Ok(())
    }

    pub fn coupons(&self, coupons: &[Coupon]) -> anyhow::Result<()> {
        if self.json {
            return self.json(coupons);
        }
        if coupons.is_empty() {
            println!("No coupons found.");
            return Ok(());
        }
        println!(
            "{:>6}  {:<12}  {:<28}  {:>9}  {:>5}  {:<10}  {:<10}",
            "ID", "CATEGORY", "TITLE", "PRICE", "LEFT", "START", "END"
        );
        for c in coupons {
            println!(
                "{:>6}  {:<12}  {:<28}  {:>9.2}  {:>5}  {:<10}  {:<10}",
                c.id,
                c.category.as_str(),
                truncate(&c.title, 28),
                c.price,
                c.amount,
                c.start_date,
                c.end_date
            );
        }
        Ok(())
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
