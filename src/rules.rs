//! Routing Rules
//!
//! Draft validation and list edits for the settings page.

use serde::Serialize;

use crate::models::{next_id, RoutingRule, RuleAction, RuleCondition};

/// Form state of the "add rule" row; every field is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleDraft {
    pub condition: String,
    pub value: String,
    pub action: String,
    pub target: String,
}

impl RuleDraft {
    /// Build a rule once all four fields are filled in
    pub fn complete(&self, id: u32) -> Option<RoutingRule> {
        if self.value.is_empty() || self.target.is_empty() {
            return None;
        }
        Some(RoutingRule {
            id,
            condition: RuleCondition::parse(&self.condition)?,
            value: self.value.clone(),
            action: RuleAction::parse(&self.action)?,
            target: self.target.clone(),
        })
    }
}

/// Append the draft as a new rule; incomplete drafts are ignored
pub fn add_rule(rules: &mut Vec<RoutingRule>, draft: &RuleDraft) -> Option<u32> {
    let rule = draft.complete(next_id(rules))?;
    let id = rule.id;
    rules.push(rule);
    Some(id)
}

pub fn remove_rule(rules: &mut Vec<RoutingRule>, id: u32) {
    rules.retain(|r| r.id != id);
}

/// Snapshot logged by "Save Changes"
#[derive(Debug, Serialize)]
pub struct SettingsSnapshot<'a> {
    #[serde(rename = "apiKey")]
    pub api_key: &'a str,
    #[serde(rename = "crmConnected")]
    pub crm_connected: bool,
    #[serde(rename = "webScraping")]
    pub web_scraping: bool,
    #[serde(rename = "routingRules")]
    pub routing_rules: &'a [RoutingRule],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn draft(condition: &str, value: &str, action: &str, target: &str) -> RuleDraft {
        RuleDraft {
            condition: condition.to_string(),
            value: value.to_string(),
            action: action.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_incomplete_draft_is_ignored() {
        let mut rules = fixtures::routing_rules();
        assert_eq!(add_rule(&mut rules, &draft("", "VIP", "notify", "Manager")), None);
        assert_eq!(add_rule(&mut rules, &draft("priority", "", "notify", "Manager")), None);
        assert_eq!(add_rule(&mut rules, &draft("priority", "VIP", "", "Manager")), None);
        assert_eq!(add_rule(&mut rules, &draft("priority", "VIP", "notify", "")), None);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_add_rule() {
        let mut rules = fixtures::routing_rules();
        let id = add_rule(&mut rules, &draft("priority", "VIP", "notify", "Manager")).unwrap();
        assert_eq!(id, 3);
        let added = rules.last().unwrap();
        assert_eq!(added.condition, RuleCondition::Priority);
        assert_eq!(added.action, RuleAction::Notify);
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let mut rules = fixtures::routing_rules();
        remove_rule(&mut rules, 1);
        let id = add_rule(&mut rules, &draft("language", "Hindi", "forward", "Agent 3")).unwrap();
        assert_eq!(id, 3);
        assert_ne!(rules[0].id, rules[1].id);
    }

    #[test]
    fn test_snapshot_serializes_like_the_form() {
        let rules = fixtures::routing_rules();
        let snapshot = SettingsSnapshot {
            api_key: "",
            crm_connected: true,
            web_scraping: false,
            routing_rules: &rules,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["crmConnected"], true);
        assert_eq!(json["routingRules"][1]["condition"], "time");
        assert_eq!(json["routingRules"][0]["target"], "Agent 1");
    }
}
