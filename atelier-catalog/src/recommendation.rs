use crate::service::ServiceCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the visitor said they are trying to achieve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectGoal {
    LaunchProduct,
    GrowAudience,
    Rebrand,
    SellOnline,
    ProduceContent,
}

/// Typed quiz answers collected by the storefront questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizProfile {
    pub goal: ProjectGoal,
    pub budget_usd: f64,
    pub timeline_weeks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub id: Uuid,
    pub name: String,
    pub conditions: Vec<RuleCondition>,
    pub actions: Vec<RuleAction>,
    pub priority: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RuleCondition {
    GoalIs(ProjectGoal),
    BudgetAtLeast(f64),
    BudgetBelow(f64),
    TimelineUnderWeeks(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RuleAction {
    Recommend(ServiceCategory),
    Note(String),
}

/// Maps quiz answers onto service categories. Pure and deterministic;
/// all conditions on a rule must hold for its actions to fire.
pub struct RecommendationEngine {
    rules: Vec<RecommendationRule>,
}

impl RecommendationEngine {
    pub fn new(rules: Vec<RecommendationRule>) -> Self {
        let mut rules = rules;
        rules.sort_by_key(|r| -r.priority);
        Self { rules }
    }

    /// Categories to recommend, highest-priority rules first, deduplicated
    pub fn recommend(&self, profile: &QuizProfile) -> Vec<ServiceCategory> {
        let mut categories = Vec::new();

        for rule in &self.rules {
            if !rule.is_active {
                continue;
            }

            if self.matches(rule, profile) {
                for action in &rule.actions {
                    if let RuleAction::Recommend(category) = action {
                        if !categories.contains(category) {
                            categories.push(*category);
                        }
                    }
                }
            }
        }

        categories
    }

    /// Advisory copy attached by matching rules
    pub fn notes(&self, profile: &QuizProfile) -> Vec<String> {
        let mut notes = Vec::new();

        for rule in &self.rules {
            if !rule.is_active {
                continue;
            }

            if self.matches(rule, profile) {
                for action in &rule.actions {
                    if let RuleAction::Note(note) = action {
                        notes.push(note.clone());
                    }
                }
            }
        }

        notes
    }

    fn matches(&self, rule: &RecommendationRule, profile: &QuizProfile) -> bool {
        for condition in &rule.conditions {
            match condition {
                RuleCondition::GoalIs(goal) => {
                    if profile.goal != *goal {
                        return false;
                    }
                }
                RuleCondition::BudgetAtLeast(min) => {
                    if profile.budget_usd < *min {
                        return false;
                    }
                }
                RuleCondition::BudgetBelow(max) => {
                    if profile.budget_usd >= *max {
                        return false;
                    }
                }
                RuleCondition::TimelineUnderWeeks(weeks) => {
                    if profile.timeline_weeks >= *weeks {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// The studio's standing quiz mapping
pub fn default_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Full Product Launch".to_string(),
            priority: 100,
            is_active: true,
            conditions: vec![
                RuleCondition::GoalIs(ProjectGoal::LaunchProduct),
                RuleCondition::BudgetAtLeast(2500.0),
            ],
            actions: vec![
                RuleAction::Recommend(ServiceCategory::WebDevelopment),
                RuleAction::Recommend(ServiceCategory::UiUxDesign),
                RuleAction::Recommend(ServiceCategory::Branding),
            ],
        },
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Lean Launch".to_string(),
            priority: 90,
            is_active: true,
            conditions: vec![
                RuleCondition::GoalIs(ProjectGoal::LaunchProduct),
                RuleCondition::BudgetBelow(2500.0),
            ],
            actions: vec![
                RuleAction::Recommend(ServiceCategory::WebDevelopment),
                RuleAction::Note(
                    "A landing page plus SEO foundation covers most early launches".to_string(),
                ),
            ],
        },
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Audience Growth".to_string(),
            priority: 80,
            is_active: true,
            conditions: vec![RuleCondition::GoalIs(ProjectGoal::GrowAudience)],
            actions: vec![
                RuleAction::Recommend(ServiceCategory::DigitalMarketing),
                RuleAction::Recommend(ServiceCategory::Seo),
            ],
        },
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Online Store".to_string(),
            priority: 80,
            is_active: true,
            conditions: vec![RuleCondition::GoalIs(ProjectGoal::SellOnline)],
            actions: vec![
                RuleAction::Recommend(ServiceCategory::WebDevelopment),
                RuleAction::Recommend(ServiceCategory::DigitalMarketing),
            ],
        },
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Rebrand".to_string(),
            priority: 80,
            is_active: true,
            conditions: vec![RuleCondition::GoalIs(ProjectGoal::Rebrand)],
            actions: vec![
                RuleAction::Recommend(ServiceCategory::Branding),
                RuleAction::Recommend(ServiceCategory::UiUxDesign),
            ],
        },
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Content Engine".to_string(),
            priority: 80,
            is_active: true,
            conditions: vec![RuleCondition::GoalIs(ProjectGoal::ProduceContent)],
            actions: vec![
                RuleAction::Recommend(ServiceCategory::ContentCreation),
                RuleAction::Recommend(ServiceCategory::VideoProduction),
            ],
        },
        RecommendationRule {
            id: Uuid::new_v4(),
            name: "Rush Timeline".to_string(),
            priority: 10,
            is_active: true,
            conditions: vec![RuleCondition::TimelineUnderWeeks(4)],
            actions: vec![RuleAction::Note(
                "Timelines under four weeks are scoped as rush delivery".to_string(),
            )],
        },
    ]
}
