//! Command-line surface

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use coupon_core::{Category, ClientType, CouponPayload};
use coupon_shared::EntityId;

#[derive(Parser, Debug)]
#[command(name = "coupon", version, about = "Coupon marketplace client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL, overrides `api.base_url`
    #[arg(long, global = true, env = "COUPON_API_URL")]
    pub api_url: Option<String>,

    /// Where the session is persisted, overrides `storage.path`
    #[arg(long, global = true, env = "COUPON_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "COUPON_PASSWORD", hide_env_values = true)]
        password: String,

        /// admin, company or customer
        #[arg(long)]
        role: Option<ClientType>,
    },
    /// Clear the stored session
    Logout,
    /// Show the current identity
    Whoami,
    /// Exchange the refresh token for a new session
    Refresh,
    /// Check that the backend is reachable
    Health,
    /// Browse public coupons, filtered locally
    Browse {
        /// Show a single coupon
        #[arg(long, conflicts_with_all = ["category", "max_price", "search"])]
        id: Option<EntityId>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,
    },
    /// Public category list
    Categories,
    /// Administrator operations
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Company operations
    Company {
        #[command(subcommand)]
        command: CompanyCommand,
    },
    /// Customer operations
    Customer {
        #[command(subcommand)]
        command: CustomerCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    Companies {
        #[command(subcommand)]
        action: CompanyAction,
    },
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompanyAction {
    List,
    Get { id: EntityId },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Update {
        id: EntityId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    Delete { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum CustomerAction {
    List,
    Get { id: EntityId },
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Update {
        id: EntityId,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    Delete { id: EntityId },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CouponQuery {
    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub max_price: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum CompanyCommand {
    Details,
    Coupons {
        #[command(flatten)]
        query: CouponQuery,
    },
    AddCoupon {
        #[command(flatten)]
        coupon: CouponArgs,
    },
    UpdateCoupon {
        id: EntityId,
        #[command(flatten)]
        coupon: CouponArgs,
    },
    DeleteCoupon { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    Details,
    Coupons {
        #[command(flatten)]
        query: CouponQuery,
    },
    Purchase { id: EntityId },
}

#[derive(Args, Debug, Clone)]
pub struct CouponArgs {
    #[arg(long)]
    pub category: Category,

    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: NaiveDate,

    /// YYYY-MM-DD
    #[arg(long)]
    pub end_date: NaiveDate,

    #[arg(long)]
    pub amount: i32,

    #[arg(long)]
    pub price: f64,

    #[arg(long, default_value = "")]
    pub image: String,
}

impl From<CouponArgs> for CouponPayload {
    fn from(args: CouponArgs) -> Self {
        Self {
            category: args.category,
            title: args.title.trim().to_string(),
            description: args.description,
            start_date: args.start_date,
            end_date: args.end_date,
            amount: args.amount,
            price: args.price,
            image: args.image,
        }
    }
}
