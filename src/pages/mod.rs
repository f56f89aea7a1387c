//! Pages
//!
//! One component per route.

mod campaigns;
mod chatbot;
mod contact;
mod customers;
mod dashboard;
mod developer_api;
mod features;
mod home;
mod orders;
mod pricing;
mod settings;

pub use campaigns::CampaignsPage;
pub use chatbot::ChatbotPage;
pub use contact::ContactPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use developer_api::DeveloperApiPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use orders::OrdersPage;
pub use pricing::PricingPage;
pub use settings::SettingsPage;
