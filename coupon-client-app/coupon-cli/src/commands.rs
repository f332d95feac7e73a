//! Subcommand handlers

use anyhow::{bail, Context};
use tracing::debug;

use coupon_client::{ApiClient, SessionManager};
use coupon_core::{
    Category, ClientType, Coupon, CouponFilter, CouponPayload, CompanyPayload, Credentials,
    CustomerPayload,
};

use crate::cli::{
    AdminCommand, Commands, CompanyAction, CompanyCommand, CouponQuery, CustomerAction,
    CustomerCommand,
};
use crate::output::Output;

pub async fn run(
    command: Commands,
    manager: &SessionManager<ApiClient>,
    client: &ApiClient,
    out: Output,
) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password, role } => {
            let mut credentials = Credentials::new(email, password);
            if let Some(role) = role {
                credentials = credentials.with_client_type(role);
            }
            let user = manager.login(&credentials).await?;
            out.user(&user)?;
            if !out.is_json() {
                println!("Dashboard: {}", user.client_type.dashboard_path());
            }
            Ok(())
        }
        Commands::Logout => {
            manager.logout()?;
            out.message("Logged out.")
        }
        Commands::Whoami => match manager.current_user() {
            Some(user) => {
                out.user(&user)?;
                if !out.is_json() {
                    print_menu(user.client_type);
                }
                Ok(())
            }
            None => out.message("Not signed in."),
        },
        Commands::Refresh => {
            let user = manager.refresh_token().await?;
            out.user(&user)
        }
        Commands::Health => {
            let status = client.health().await?;
            if out.is_json() {
                out.json(&status)
            } else {
                out.message(&format!("{} is {}", client.base_url(), status.status))
            }
        }
        Commands::Browse { id, category, max_price, search } => {
            let public = client.public();
            if let Some(id) = id {
                let coupon = public.coupon(id).await?;
                return out.coupons(std::slice::from_ref(&coupon));
            }
            let filter = build_filter(category, max_price, search);
            let coupons = public.coupons().await?;
            out.coupons(&filter.apply(&coupons))
        }
        Commands::Categories => {
            let categories = client.public().categories().await?;
            if out.is_json() {
                return out.json(&categories);
            }
            for category in categories {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::Admin { command } => {
            debug!("Dispatching admin command");
            require_role(manager, ClientType::Admin)?;
            run_admin(command, client, out).await
        }
        Commands::Company { command } => {
            require_role(manager, ClientType::Company)?;
            run_company(command, client, out).await
        }
        Commands::Customer { command } => {
            require_role(manager, ClientType::Customer)?;
            run_customer(command, client, out).await
        }
    }
}

async fn run_admin(command: AdminCommand, client: &ApiClient, out: Output) -> anyhow::Result<()> {
    let admin = client.admin();
    match command {
        AdminCommand::Companies { action } => match action {
            CompanyAction::List => out.companies(&admin.companies().await?),
            CompanyAction::Get { id } => {
                let company = admin.company(id).await?;
                out.companies(std::slice::from_ref(&company))
            }
            CompanyAction::Create { name, email, password } => {
                let payload = CompanyPayload::new(name, email).with_password(password);
                let company = admin.create_company(&payload).await?;
                out.companies(std::slice::from_ref(&company))
            }
            CompanyAction::Update { id, name, email, password } => {
                let mut payload = CompanyPayload::new(name, email);
                if let Some(password) = password {
                    payload = payload.with_password(password);
                }
                let company = admin.update_company(id, &payload).await?;
                out.companies(std::slice::from_ref(&company))
            }
            CompanyAction::Delete { id } => {
                admin.delete_company(id).await?;
                out.message(&format!("Company {} deleted.", id))
            }
        },
        AdminCommand::Customers { action } => match action {
            CustomerAction::List => out.customers(&admin.customers().await?),
            CustomerAction::Get { id } => {
                let customer = admin.customer(id).await?;
                out.customers(std::slice::from_ref(&customer))
            }
            CustomerAction::Create { first_name, last_name, email, password } => {
                let payload = CustomerPayload::new(first_name, last_name, email).with_password(password);
                let customer = admin.create_customer(&payload).await?;
                out.customers(std::slice::from_ref(&customer))
            }
            CustomerAction::Update { id, first_name, last_name, email, password } => {
                let mut payload = CustomerPayload::new(first_name, last_name, email);
                if let Some(password) = password {
                    payload = payload.with_password(password);
                }
                let customer = admin.update_customer(id, &payload).await?;
                out.customers(std::slice::from_ref(&customer))
            }
            CustomerAction::Delete { id } => {
                admin.delete_customer(id).await?;
                out.message(&format!("Customer {} deleted.", id))
            }
        },
    }
}

async fn run_company(command: CompanyCommand, client: &ApiClient, out: Output) -> anyhow::Result<()> {
    let company = client.company();
    match command {
        CompanyCommand::Details => {
            let details = company.details().await?;
            out.companies(std::slice::from_ref(&details))
        }
        CompanyCommand::Coupons { query } => {
            let coupons = match (query.category, query.max_price) {
                (Some(category), _) => company.coupons_by_category(category).await?,
                (None, Some(max_price)) => company.coupons_by_max_price(max_price).await?,
                (None, None) => company.coupons().await?,
            };
            out.coupons(&narrow(&query, coupons))
        }
        CompanyCommand::AddCoupon { coupon } => {
            let created = company.create_coupon(&CouponPayload::from(coupon)).await?;
            out.coupons(std::slice::from_ref(&created))
        }
        CompanyCommand::UpdateCoupon { id, coupon } => {
            let updated = company.update_coupon(id, &CouponPayload::from(coupon)).await?;
            out.coupons(std::slice::from_ref(&updated))
        }
        CompanyCommand::DeleteCoupon { id } => {
            company.delete_coupon(id).await?;
            out.message(&format!("Coupon {} deleted.", id))
        }
    }
}

async fn run_customer(command: CustomerCommand, client: &ApiClient, out: Output) -> anyhow::Result<()> {
    let customer = client.customer();
    match command {
        CustomerCommand::Details => {
            let details = customer.details().await?;
            out.customers(std::slice::from_ref(&details))
        }
        CustomerCommand::Coupons { query } => {
            let coupons = match (query.category, query.max_price) {
                (Some(category), _) => customer.coupons_by_category(category).await?,
                (None, Some(max_price)) => customer.coupons_by_max_price(max_price).await?,
                (None, None) => customer.coupons().await?,
            };
            out.coupons(&narrow(&query, coupons))
        }
        CustomerCommand::Purchase { id } => {
            customer
                .purchase_coupon(id)
                .await
                .with_context(|| format!("purchase of coupon {} failed", id))?;
            out.message(&format!("Coupon {} purchased.", id))
        }
    }
}

/// Gate a role section on the stored identity. The backend enforces the same rule.
fn require_role(manager: &SessionManager<ApiClient>, role: ClientType) -> anyhow::Result<()> {
    let Some(user) = manager.current_user() else {
        bail!("not signed in; run `coupon login` first");
    };
    if user.client_type != role {
        bail!("this command requires the {} role, signed in as {}", role, user.client_type);
    }
    Ok(())
}

fn print_menu(role: ClientType) {
    let entries: &[&str] = match role {
        ClientType::Admin => &["admin companies list|get|create|update|delete", "admin customers list|get|create|update|delete"],
        ClientType::Company => &["company details", "company coupons", "company add-coupon", "company update-coupon", "company delete-coupon"],
        ClientType::Customer => &["customer details", "customer coupons", "customer purchase <id>", "browse"],
    };
    println!("Available ({}):", role.dashboard_path());
    for entry in entries {
        println!("  coupon {}", entry);
    }
}

fn build_filter(category: Option<Category>, max_price: Option<f64>, search: Option<String>) -> CouponFilter {
    let mut filter = CouponFilter::new();
    if let Some(category) = category {
        filter = filter.category(category);
    }
    if let Some(max_price) = max_price {
        filter = filter.max_price(max_price);
    }
    if let Some(search) = search {
        filter = filter.search(search);
    }
    filter
}

/// The server filters on one criterion per call; the rest is applied here.
fn narrow(query: &CouponQuery, coupons: Vec<Coupon>) -> Vec<Coupon> {
    let filter = build_filter(query.category, query.max_price, None);
    if filter.is_empty() {
        coupons
    } else {
        filter.apply(&coupons)
    }
}
