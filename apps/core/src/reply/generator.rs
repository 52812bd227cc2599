//! Response Generator.
//!
//! Buckets the fused confidence into a tier, routes (tier, intent) through the dispatch
//! table and renders the matching template. Always yields a non-empty reply.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::dispatch::{fallback_step, route, FallbackStep, Route};
use super::picker::{choose, VariantPicker};
use crate::brain::context::Level;
use crate::brain::lexicon::CatalogEntry;
use crate::brain::{AnalysisResult, ConfidenceTier, Lexicon, ProductTag, TierThresholds};

/// Product priority for the high-tier product reply
pub const PRODUCT_REPLY_PRIORITY: [ProductTag; 4] = [
    ProductTag::Headphone,
    ProductTag::Phone,
    ProductTag::Watch,
    ProductTag::Gaming,
];

/// Used only if a custom lexicon renders an empty template
const LAST_RESORT_REPLY: &str = "How can I help you with your shopping today?";

/// A generated reply and how it was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub tier: ConfidenceTier,
    pub route: Route,
}

/// Format whole rupees with Indian digit grouping, e.g. `₹1,23,456`.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

/// Substitute `{key}` placeholders.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{}}}", key), value)
    })
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

pub struct ResponseGenerator {
    lexicon: Arc<Lexicon>,
    thresholds: TierThresholds,
    assistant_name: String,
}

impl ResponseGenerator {
    pub fn new(lexicon: Arc<Lexicon>, thresholds: TierThresholds, assistant_name: &str) -> Self {
        Self {
            lexicon,
            thresholds,
            assistant_name: assistant_name.to_string(),
        }
    }

    pub fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    pub fn tier(&self, analysis: &AnalysisResult) -> ConfidenceTier {
        self.thresholds.tier(analysis.confidence)
    }

    /// Produce the reply for an analyzed message.
    pub fn generate(&self, analysis: &AnalysisResult, picker: &mut dyn VariantPicker) -> Reply {
        let tier = self.tier(analysis);
        let route = route(tier, analysis.intent.intent);

        let text = match route {
            Route::Greeting => self.greeting(picker),
            Route::Product => self.product(analysis),
            Route::PriceRange => self.price_range(analysis),
            Route::Comparison => self.comparison(analysis),
            Route::Purchase => self.purchase(),
            Route::Support => self.support(analysis),
            Route::Shipping => self.shipping(analysis),
            Route::Recommendation => self.recommendation(analysis),
            Route::Hedge => self.hedge(analysis, picker),
            Route::Fallback => self.fallback(analysis, picker),
        };

        let text = if text.trim().is_empty() {
            LAST_RESORT_REPLY.to_string()
        } else {
            text
        };

        debug!(
            "Reply routed: tier={:?}, intent={}, route={:?}",
            tier, analysis.intent.intent, route
        );

        Reply { text, tier, route }
    }

    fn pick_from(&self, pool: &[String], picker: &mut dyn VariantPicker) -> String {
        choose(picker, pool).cloned().unwrap_or_default()
    }

    fn catalog_price(&self, entry: &CatalogEntry) -> String {
        format_rupees(entry.price)
    }

    fn express_suffix(&self, analysis: &AnalysisResult) -> &str {
        if analysis.context.urgency == Level::High {
            &self.lexicon.templates().express_clause
        } else {
            ""
        }
    }

    fn detected_entries(&self, analysis: &AnalysisResult) -> Vec<&CatalogEntry> {
        ProductTag::ALL
            .iter()
            .filter(|p| analysis.entities.products.contains(*p))
            .filter_map(|p| self.lexicon.catalog_entry(*p))
            .collect()
    }

    fn greeting(&self, picker: &mut dyn VariantPicker) -> String {
        let template = self.pick_from(&self.lexicon.templates().greetings, picker);
        render(&template, &[("assistant", self.assistant_name.as_str())])
    }

    fn product(&self, analysis: &AnalysisResult) -> String {
        let templates = self.lexicon.templates();
        analysis
            .entities
            .first_product_in(&PRODUCT_REPLY_PRIORITY)
            .and_then(|p| self.lexicon.catalog_entry(p))
            .and_then(|entry| {
                let pitch = entry.pitch.as_ref()?;
                Some(render(pitch, &[("price", self.catalog_price(entry).as_str())]))
            })
            .unwrap_or_else(|| templates.generic_product.clone())
    }

    fn price_range(&self, analysis: &AnalysisResult) -> String {
        let templates = self.lexicon.templates();
        let text = render(
            &templates.price_range,
            &[
                ("min", format_rupees(templates.price_floor).as_str()),
                ("max", format_rupees(templates.price_ceiling).as_str()),
            ],
        );
        text + self.express_suffix(analysis)
    }

    fn comparison(&self, analysis: &AnalysisResult) -> String {
        let templates = self.lexicon.templates();
        let entries = self.detected_entries(analysis);
        if entries.is_empty() {
            return templates.comparison.clone();
        }
        let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        let summaries: Vec<String> = entries.iter().map(|e| self.summary(e)).collect();
        render(
            &templates.comparison_with_products,
            &[
                ("products", join_names(&names).as_str()),
                ("summaries", summaries.join(" ").as_str()),
            ],
        )
    }

    fn purchase(&self) -> String {
        let templates = self.lexicon.templates();
        render(
            &templates.purchase,
            &[("free_shipping", format_rupees(templates.free_shipping_over).as_str())],
        )
    }

    fn support(&self, analysis: &AnalysisResult) -> String {
        let templates = self.lexicon.templates();
        let lower = analysis.text.to_lowercase();
        if self
            .lexicon
            .return_words()
            .iter()
            .any(|w| lower.contains(w.as_str()))
        {
            templates.returns.clone()
        } else {
            templates.support.clone()
        }
    }

    fn shipping(&self, analysis: &AnalysisResult) -> String {
        let templates = self.lexicon.templates();
        let text = render(
            &templates.shipping,
            &[("free_shipping", format_rupees(templates.free_shipping_over).as_str())],
        );
        text + self.express_suffix(analysis)
    }

    fn recommendation(&self, analysis: &AnalysisResult) -> String {
        let templates = self.lexicon.templates();
        match self.detected_entries(analysis).first() {
            Some(entry) => render(
                &templates.recommendation_with_product,
                &[("name", entry.name.as_str()), ("price", self.catalog_price(entry).as_str())],
            ),
            None => render(
                &templates.recommendation,
                &[("price", format_rupees(templates.price_ceiling).as_str())],
            ),
        }
    }

    fn summary(&self, entry: &CatalogEntry) -> String {
        render(
            &self.lexicon.templates().product_summary,
            &[("name", entry.name.as_str()), ("price", self.catalog_price(entry).as_str())],
        )
    }

    fn hedge(&self, analysis: &AnalysisResult, picker: &mut dyn VariantPicker) -> String {
        let templates = self.lexicon.templates();
        let entries = self.detected_entries(analysis);

        let products = if entries.is_empty() {
            String::new()
        } else {
            let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
            format!(" for our {}", join_names(&names))
        };
        let template = self.pick_from(&templates.hedges, picker);
        let hedge = render(
            &template,
            &[
                ("intent", analysis.intent.intent.phrase()),
                ("products", products.as_str()),
            ],
        );

        let summary = match entries.first() {
            Some(entry) => self.summary(entry),
            None => templates.generic_summary.clone(),
        };
        format!("{} {}", hedge, summary)
    }

    fn fallback(&self, analysis: &AnalysisResult, picker: &mut dyn VariantPicker) -> String {
        let templates = self.lexicon.templates();
        match fallback_step(analysis) {
            FallbackStep::Clarify => templates.clarify.clone(),
            FallbackStep::TellMeMore => templates.tell_me_more.clone(),
            FallbackStep::Positive => templates.positive.clone(),
            FallbackStep::Negative => templates.negative.clone(),
            FallbackStep::Generic => self.pick_from(&templates.fallbacks, picker),
        }
    }
}
