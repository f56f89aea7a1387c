//! Seeded Data
//!
//! Hard-coded records standing in for a real data source.

use crate::models::*;

pub fn kpi_cards() -> Vec<KpiCard> {
    let card = |id, title: &str, value: &str, change, is_positive| KpiCard {
        id,
        title: title.to_string(),
        value: value.to_string(),
        change,
        is_positive,
    };
    vec![
        card(1, "Total Messages", "12,500", 15, true),
        card(2, "Response Rate", "92%", 5, true),
        card(3, "Active Users", "1,250", -2, false),
        card(4, "Avg. Response Time", "2.5 min", -10, true),
    ]
}

fn series(points: &[(&str, u32)]) -> Vec<SeriesPoint> {
    points
        .iter()
        .map(|(label, value)| SeriesPoint { label: label.to_string(), value: *value })
        .collect()
}

/// Messages per weekday, last 7 days
pub fn message_volume() -> Vec<SeriesPoint> {
    series(&[("Mon", 1200), ("Tue", 1900), ("Wed", 1500), ("Thu", 2200), ("Fri", 1800), ("Sat", 1000), ("Sun", 800)])
}

/// Share of replies per response-time bucket, in percent
pub fn response_times() -> Vec<SeriesPoint> {
    series(&[("< 1 min", 65), ("1-5 min", 25), ("5-15 min", 7), ("> 15 min", 3)])
}

/// Users per month, last 6 months
pub fn user_growth() -> Vec<SeriesPoint> {
    series(&[("Jan", 100), ("Feb", 150), ("Mar", 200), ("Apr", 250), ("May", 300), ("Jun", 400)])
}

/// Customer interactions per weekday
pub fn customer_interactions() -> Vec<SeriesPoint> {
    series(&[("Mon", 120), ("Tue", 150), ("Wed", 200), ("Thu", 180), ("Fri", 250), ("Sat", 300), ("Sun", 280)])
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            message: "New order received from Customer #1234".to_string(),
            age: "2 minutes ago".to_string(),
        },
        Notification {
            message: "Campaign \"Summer Sale\" completed".to_string(),
            age: "1 hour ago".to_string(),
        },
    ]
}

pub fn flow_blocks() -> Vec<FlowBlock> {
    vec![
        FlowBlock {
            id: 1,
            kind: BlockKind::Welcome,
            content: "Welcome to our WhatsApp service! How can I help you today?".to_string(),
        },
        FlowBlock {
            id: 2,
            kind: BlockKind::Menu,
            content: "Please select an option:\n1. Order Status\n2. Product Info\n3. Support".to_string(),
        },
    ]
}

pub fn routing_rules() -> Vec<RoutingRule> {
    vec![
        RoutingRule {
            id: 1,
            condition: RuleCondition::Language,
            value: "English".to_string(),
            action: RuleAction::Assign,
            target: "Agent 1".to_string(),
        },
        RoutingRule {
            id: 2,
            condition: RuleCondition::Time,
            value: "9:00-17:00".to_string(),
            action: RuleAction::Assign,
            target: "Agent 2".to_string(),
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "CAMP-001".to_string(),
            message: "Summer Sale - 50% off on all items!".to_string(),
            audience: Audience::All,
            sent: 1000,
            opened: 850,
            replied: 120,
            date: "2024-04-18".to_string(),
        },
        Campaign {
            id: "CAMP-002".to_string(),
            message: "New menu items available!".to_string(),
            audience: Audience::High,
            sent: 500,
            opened: 400,
            replied: 80,
            date: "2024-04-17".to_string(),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    let order = |id: &str, customer: &str, product: &str, status, whatsapp: &str, date: &str| Order {
        id: id.to_string(),
        customer: customer.to_string(),
        product: product.to_string(),
        status,
        whatsapp: whatsapp.to_string(),
        date: date.to_string(),
    };
    vec![
        order("ORD-001", "John Doe", "Pizza Margherita", OrderStatus::New, "+1 234 567 8900", "2024-04-19"),
        order("ORD-002", "Jane Smith", "Burger Combo", OrderStatus::InProgress, "+1 234 567 8901", "2024-04-19"),
        order("ORD-003", "Mike Johnson", "Pasta Carbonara", OrderStatus::Delivered, "+1 234 567 8902", "2024-04-18"),
    ]
}

pub fn customers() -> Vec<Customer> {
    let customer = |id: &str, name: &str, last_seen: &str, total_messages, language: &str, engagement| Customer {
        id: id.to_string(),
        name: name.to_string(),
        last_seen: last_seen.to_string(),
        total_messages,
        language: language.to_string(),
        engagement,
    };
    vec![
        customer("CUST-001", "John Doe", "2 hours ago", 45, "English", Engagement::High),
        customer("CUST-002", "Jane Smith", "1 day ago", 12, "Hindi", Engagement::Low),
        customer("CUST-003", "Mike Johnson", "3 hours ago", 78, "Urdu", Engagement::High),
    ]
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        monthly: "$29",
        yearly: "$290",
        description: "Perfect for small businesses getting started",
        features: &[
            "Up to 1,000 messages/month",
            "Basic chatbot templates",
            "Email support",
            "Basic analytics",
            "Single user",
        ],
        cta: "Start Free Trial",
        popular: false,
    },
    PricingPlan {
        name: "Pro",
        monthly: "$99",
        yearly: "$990",
        description: "For growing businesses with advanced needs",
        features: &[
            "Up to 10,000 messages/month",
            "Custom chatbot flows",
            "Priority support",
            "Advanced analytics",
            "Up to 5 users",
            "API access",
            "Webhook integration",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        monthly: "Custom",
        yearly: "Custom",
        description: "For large organizations with custom requirements",
        features: &[
            "Unlimited messages",
            "Custom development",
            "24/7 support",
            "Custom analytics",
            "Unlimited users",
            "Dedicated account manager",
            "SLA guarantee",
            "Custom integrations",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What happens after my free trial?",
        answer: "After your 14-day free trial, you can choose any of our paid plans. Your data and settings will be preserved when you upgrade.",
    },
    Faq {
        question: "Can I change plans later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes will be reflected in your next billing cycle.",
    },
    Faq {
        question: "Do you offer refunds?",
        answer: "We offer a 30-day money-back guarantee if you're not satisfied with our service.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and bank transfers for annual plans.",
    },
    Faq {
        question: "Is there a contract?",
        answer: "No, you can cancel your subscription at any time. No long-term contracts required.",
    },
];

/// Highlights on the landing page
pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "Business Automation",
        description: "Automate customer interactions and streamline your workflow with our powerful chatbot.",
    },
    Feature {
        title: "24/7 Customer Support",
        description: "Provide instant support to your customers anytime, anywhere with automated responses.",
    },
    Feature {
        title: "Enterprise Security",
        description: "Bank-grade security with end-to-end encryption and data protection.",
    },
    Feature {
        title: "Lightning Fast",
        description: "Quick setup and instant deployment with our intuitive interface.",
    },
];

/// Full list on the features page
pub const PRODUCT_FEATURES: &[Feature] = &[
    Feature {
        title: "Automated Messaging",
        description: "Set up automated responses and workflows to handle customer inquiries 24/7.",
    },
    Feature {
        title: "Analytics Dashboard",
        description: "Track message volume, response times, and customer engagement metrics.",
    },
    Feature {
        title: "Team Collaboration",
        description: "Assign conversations to team members and manage customer interactions efficiently.",
    },
    Feature {
        title: "API Integration",
        description: "Seamlessly integrate with your existing systems and workflows.",
    },
    Feature {
        title: "Custom Templates",
        description: "Create and manage message templates for quick responses.",
    },
    Feature {
        title: "Security & Compliance",
        description: "Enterprise-grade security with end-to-end encryption and data protection.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart",
        initials: "SJ",
        content: "This platform has transformed our customer service. Response times are down 80% and customer satisfaction is through the roof!",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Operations Manager, RetailPro",
        initials: "MC",
        content: "The automation features have saved us countless hours. Our team can now focus on more important tasks.",
    },
    Testimonial {
        name: "Emma Davis",
        role: "Marketing Director, GrowthCo",
        initials: "ED",
        content: "The campaign management tools are incredible. We've seen a 3x increase in engagement since switching.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_ids_are_unique() {
        let blocks: HashSet<u32> = flow_blocks().iter().map(|b| b.id).collect();
        assert_eq!(blocks.len(), flow_blocks().len());

        let rules: HashSet<u32> = routing_rules().iter().map(|r| r.id).collect();
        assert_eq!(rules.len(), routing_rules().len());

        let cards: HashSet<u32> = kpi_cards().iter().map(|c| c.id).collect();
        assert_eq!(cards.len(), 4);
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Pro"]);
    }
}
