//! Frontend Models
//!
//! View-models for the dashboard screens and the marketing pages.

use serde::Serialize;

/// Records with a stable numeric id
pub trait HasId {
    fn id(&self) -> u32;
}

/// Next free id: one past the current maximum, so deleted ids are never reused
pub fn next_id<T: HasId>(items: &[T]) -> u32 {
    items.iter().map(HasId::id).max().map_or(1, |max| max + 1)
}

// ========================
// Dashboard
// ========================

/// KPI card on the dashboard overview
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub id: u32,
    pub title: String,
    pub value: String,
    /// Signed change in percent
    pub change: i32,
    /// Whether the change is good news (a falling response time is)
    pub is_positive: bool,
}

impl KpiCard {
    pub fn change_label(&self) -> String {
        if self.change >= 0 {
            format!("+{}%", self.change)
        } else {
            format!("{}%", self.change)
        }
    }
}

/// One labelled value in a chart series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub age: String,
}

// ========================
// Chatbot
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Welcome,
    Menu,
    #[default]
    Message,
    Condition,
    Action,
}

impl BlockKind {
    /// Kinds offered when adding a block
    pub const ADDABLE: [BlockKind; 4] = [BlockKind::Message, BlockKind::Menu, BlockKind::Condition, BlockKind::Action];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Welcome => "welcome",
            BlockKind::Menu => "menu",
            BlockKind::Message => "message",
            BlockKind::Condition => "condition",
            BlockKind::Action => "action",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        [BlockKind::Welcome, BlockKind::Menu, BlockKind::Message, BlockKind::Condition, BlockKind::Action]
            .into_iter()
            .find(|k| k.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Welcome => "Welcome",
            BlockKind::Menu => "Menu",
            BlockKind::Message => "Message",
            BlockKind::Condition => "Condition",
            BlockKind::Action => "Action",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BlockKind::Welcome => "Greet the user when the conversation starts",
            BlockKind::Menu => "Present options for the user to choose from",
            BlockKind::Message => "Send a text message to the user",
            BlockKind::Condition => "Branch the conversation based on user input",
            BlockKind::Action => "Perform an action (e.g., send email, update database)",
        }
    }
}

/// Step in the chatbot flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowBlock {
    pub id: u32,
    pub kind: BlockKind,
    pub content: String,
}

impl HasId for FlowBlock {
    fn id(&self) -> u32 {
        self.id
    }
}

// ========================
// Settings
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCondition {
    Language,
    Time,
    Priority,
}

impl RuleCondition {
    pub const ALL: [RuleCondition; 3] = [RuleCondition::Language, RuleCondition::Time, RuleCondition::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCondition::Language => "language",
            RuleCondition::Time => "time",
            RuleCondition::Priority => "priority",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RuleCondition::Language => "Language",
            RuleCondition::Time => "Time",
            RuleCondition::Priority => "Priority",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Assign,
    Forward,
    Notify,
}

impl RuleAction {
    pub const ALL: [RuleAction; 3] = [RuleAction::Assign, RuleAction::Forward, RuleAction::Notify];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleAction::Assign => "assign",
            RuleAction::Forward => "forward",
            RuleAction::Notify => "notify",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RuleAction::Assign => "Assign to",
            RuleAction::Forward => "Forward to",
            RuleAction::Notify => "Notify",
        }
    }
}

/// Conversation routing rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingRule {
    pub id: u32,
    pub condition: RuleCondition,
    pub value: String,
    pub action: RuleAction,
    pub target: String,
}

impl HasId for RoutingRule {
    fn id(&self) -> u32 {
        self.id
    }
}

// ========================
// Records
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Audience {
    All,
    High,
    Low,
    New,
}

impl Audience {
    pub const ALL: [Audience; 4] = [Audience::All, Audience::High, Audience::Low, Audience::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::High => "high",
            Audience::Low => "low",
            Audience::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::All => "All Customers",
            Audience::High => "High Engagement",
            Audience::Low => "Low Engagement",
            Audience::New => "New Customers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub id: String,
    pub message: String,
    pub audience: Audience,
    pub sent: u32,
    pub opened: u32,
    pub replied: u32,
    pub date: String,
}

/// Draft from the "Create New Campaign" form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignDraft {
    pub message: String,
    pub audience: Audience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    New,
    InProgress,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::New, OrderStatus::InProgress, OrderStatus::Delivered];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::New => "status-badge status-new",
            OrderStatus::InProgress => "status-badge status-progress",
            OrderStatus::Delivered => "status-badge status-delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub status: OrderStatus,
    pub whatsapp: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    High,
    Low,
}

impl Engagement {
    pub const ALL: [Engagement; 2] = [Engagement::High, Engagement::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Engagement::High => "High",
            Engagement::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub last_seen: String,
    pub total_messages: u32,
    pub language: String,
    pub engagement: Engagement,
}

// ========================
// Marketing
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub monthly: &'static str,
    pub yearly: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

impl PricingPlan {
    pub fn price(&self, cycle: BillingCycle) -> &'static str {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Yearly => self.yearly,
        }
    }

    /// Suffix shown after the price; custom-priced plans have none
    pub fn period(&self, cycle: BillingCycle) -> &'static str {
        if !self.price(cycle).starts_with('$') {
            return "";
        }
        match cycle {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u32) -> FlowBlock {
        FlowBlock { id, kind: BlockKind::Message, content: format!("Block {}", id) }
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id::<FlowBlock>(&[]), 1);
        assert_eq!(next_id(&[block(1), block(2)]), 3);
        // Gaps left by deletions are not refilled
        assert_eq!(next_id(&[block(5), block(2)]), 6);
    }

    #[test]
    fn test_change_label() {
        let mut card = KpiCard {
            id: 1,
            title: "Total Messages".to_string(),
            value: "12,500".to_string(),
            change: 15,
            is_positive: true,
        };
        assert_eq!(card.change_label(), "+15%");
        card.change = -2;
        assert_eq!(card.change_label(), "-2%");
    }

    #[test]
    fn test_block_kind_strings() {
        assert_eq!(BlockKind::Menu.as_str(), "menu");
        assert_eq!(BlockKind::parse("condition"), Some(BlockKind::Condition));
        assert_eq!(BlockKind::parse("unknown"), None);
    }

    #[test]
    fn test_rule_enums_parse() {
        assert_eq!(RuleCondition::parse("time"), Some(RuleCondition::Time));
        assert_eq!(RuleCondition::parse(""), None);
        assert_eq!(RuleAction::parse("forward"), Some(RuleAction::Forward));
        assert_eq!(Audience::parse("new"), Some(Audience::New));
    }

    #[test]
    fn test_plan_price_by_cycle() {
        let plan = PricingPlan {
            name: "Basic",
            monthly: "$29",
            yearly: "$290",
            description: "",
            features: &[],
            cta: "Start Free Trial",
            popular: false,
        };
        assert_eq!(plan.price(BillingCycle::Monthly), "$29");
        assert_eq!(plan.price(BillingCycle::Yearly), "$290");
        assert_eq!(plan.period(BillingCycle::Yearly), "/year");

        let custom = PricingPlan { monthly: "Custom", yearly: "Custom", ..plan };
        assert_eq!(custom.period(BillingCycle::Monthly), "");
    }
}
