//! Reply Module Tests
//!
//! Tiered dispatch and the reply handlers, driven through the analyzer with pinned
//! variant selection.

use crate::brain::{
    AnalysisResult, Analyzer, ConfidenceTier, IntentLabel, Lexicon, LexiconData, ProductTag,
    SentimentLabel, TierThresholds,
};
use std::sync::Arc;
use crate::config::DEFAULT_ASSISTANT_NAME;
use crate::reply::dispatch::fallback_step;
use crate::reply::{FallbackStep, Reply, ResponseGenerator, Route, ScriptedPicker};

fn generator() -> ResponseGenerator {
    ResponseGenerator::new(
        Lexicon::builtin(),
        TierThresholds::default(),
        DEFAULT_ASSISTANT_NAME,
    )
}

fn reply_to(text: &str) -> Reply {
    let analysis = Analyzer::default().analyze(text);
    generator().generate(&analysis, &mut ScriptedPicker::first())
}

#[cfg(test)]
mod high_tier_tests {
    use super::*;

    #[test]
    fn test_product_reply_names_price() {
        let reply = reply_to(
            "I really love these headphones, show me and find them, I want and need them",
        );
        assert_eq!(reply.tier, ConfidenceTier::High);
        assert_eq!(reply.route, Route::Product);
        assert!(reply.text.contains("Wireless Bluetooth Headphones"));
        assert!(reply.text.contains("₹6,639"));
    }

    #[test]
    fn test_price_range_and_express_clause() {
        let calm = reply_to("price cost budget cheap phone");
        assert_eq!(calm.tier, ConfidenceTier::High);
        assert_eq!(calm.route, Route::PriceRange);
        assert!(calm.text.contains("₹2,489"));
        assert!(calm.text.contains("₹82,999"));
        assert!(!calm.text.contains("express"));

        let urgent = reply_to("price cost budget cheap phone!");
        assert_eq!(urgent.route, Route::PriceRange);
        assert!(urgent.text.ends_with("We also offer express delivery options."));
    }

    #[test]
    fn test_shipping_reply() {
        // "fast" is also an urgency word
        let reply = reply_to("ship delivery fast when headphones");
        assert_eq!(reply.tier, ConfidenceTier::High);
        assert_eq!(reply.route, Route::Shipping);
        assert!(reply.text.contains("₹5,000"));
        assert!(reply.text.contains("express"));
    }

    #[test]
    fn test_support_mentions_returns_only_when_asked() {
        let returns = reply_to("help support problem issue with my headphones return");
        assert_eq!(returns.route, Route::Support);
        assert!(returns.text.contains("30-day return policy"));

        let general = reply_to("help support problem issue with my headphones");
        assert_eq!(general.route, Route::Support);
        assert!(general.text.contains("personal shopping assistant"));
    }

    #[test]
    fn test_comparison_lists_detected_products() {
        let reply = reply_to("compare difference better vs phone and watch");
        assert_eq!(reply.route, Route::Comparison);
        assert!(reply.text.starts_with("Let's compare Smartphone Pro Max and Smart Fitness Watch."));
        assert!(reply.text.contains("₹16,599"));
    }

    #[test]
    fn test_purchase_and_recommendation() {
        let purchase = reply_to("buy purchase order cart checkout headphones");
        assert_eq!(purchase.route, Route::Purchase);
        assert!(purchase.text.contains("checkout"));

        let recommendation = reply_to("please recommend and suggest some advice on headphones");
        assert_eq!(recommendation.route, Route::Recommendation);
        assert_eq!(
            recommendation.text,
            "Based on what you told me, I'd recommend our Wireless Bluetooth Headphones (₹6,639)."
        );
    }

    #[test]
    fn test_fused_score_just_above_high_threshold() {
        // 0.4 + 0.8 + 0.6 sums to a hair over 1.8 in f64, so the mean clears 0.6
        let analysis = Analyzer::default().analyze("buy order nice phone");
        assert_eq!(analysis.intent.intent, IntentLabel::Purchase);
        assert!(analysis.confidence > 0.6);

        let reply = generator().generate(&analysis, &mut ScriptedPicker::first());
        assert_eq!(reply.tier, ConfidenceTier::High);
        assert_eq!(reply.route, Route::Purchase);
    }

    #[test]
    fn test_product_without_pitch_uses_generic_prompt() {
        let lexicon = Lexicon::builtin();
        let speaker = lexicon.catalog_entry(ProductTag::Speaker).unwrap();
        assert_eq!(speaker.pitch, None);

        let reply = reply_to("show find look search need want speaker");
        assert_eq!(reply.tier, ConfidenceTier::High);
        assert_eq!(reply.route, Route::Product);
        assert_eq!(reply.text, lexicon.templates().generic_product);

        let mut data = LexiconData::builtin();
        for entry in &mut data.templates.catalog {
            if entry.product == ProductTag::Headphone {
                entry.pitch = None;
            }
        }
        let custom = ResponseGenerator::new(
            Arc::new(Lexicon::compile(data).unwrap()),
            TierThresholds::default(),
            DEFAULT_ASSISTANT_NAME,
        );
        let analysis = Analyzer::default().analyze("show find look search need want headphones");
        let reply = custom.generate(&analysis, &mut ScriptedPicker::first());
        assert_eq!(reply.route, Route::Product);
        assert_eq!(reply.text, lexicon.templates().generic_product);
    }

    #[test]
    fn test_high_greeting_uses_pool() {
        let reply = reply_to("hi hello hey good morning evening headphones");
        assert_eq!(reply.tier, ConfidenceTier::High);
        assert_eq!(reply.route, Route::Greeting);
        assert!(reply.text.contains("I'm REX"));
    }
}

#[cfg(test)]
mod medium_tier_tests {
    use super::*;

    #[test]
    fn test_hedge_with_product_summary() {
        let analysis = Analyzer::default().analyze("I need headphones");
        let reply = generator().generate(&analysis, &mut ScriptedPicker::new(vec![1]));

        assert_eq!(reply.tier, ConfidenceTier::Medium);
        assert_eq!(reply.route, Route::Hedge);
        assert_eq!(
            reply.text,
            "It sounds like you're interested in finding a product for our Wireless Bluetooth \
             Headphones. You can get our Wireless Bluetooth Headphones for ₹6,639."
        );
    }

    #[test]
    fn test_hedge_without_products() {
        let analysis = Analyzer::default().analyze("help me with a problem");
        let reply = generator().generate(&analysis, &mut ScriptedPicker::first());

        assert_eq!(reply.tier, ConfidenceTier::Medium);
        assert_eq!(
            reply.text,
            "I think you're asking about getting some help. We carry headphones, smartphones, \
             fitness watches, gaming gear and speakers at a range of prices."
        );
    }
}

#[cfg(test)]
mod low_tier_tests {
    use super::*;

    fn low(text: &str) -> AnalysisResult {
        let analysis = Analyzer::default().analyze(text);
        assert_eq!(
            TierThresholds::default().tier(analysis.confidence),
            ConfidenceTier::Low,
            "'{}' should be low confidence",
            text
        );
        analysis
    }

    #[test]
    fn test_fallback_chain_order() {
        assert_eq!(fallback_step(&low("ok?")), FallbackStep::Clarify);
        assert_eq!(fallback_step(&low("ok")), FallbackStep::TellMeMore);
        assert_eq!(
            fallback_step(&low("tell me about your store today")),
            FallbackStep::Generic
        );

        let mut positive = low("tell me about your store today");
        positive.sentiment.label = SentimentLabel::Positive;
        assert_eq!(fallback_step(&positive), FallbackStep::Positive);

        let mut negative = positive.clone();
        negative.sentiment.label = SentimentLabel::Negative;
        assert_eq!(fallback_step(&negative), FallbackStep::Negative);

        // a question marker outranks everything
        let mut question = negative;
        question.text.push('?');
        assert_eq!(fallback_step(&question), FallbackStep::Clarify);
    }

    #[test]
    fn test_generic_pool_follows_picker() {
        let analysis = low("tell me about your store today");
        let lexicon = Lexicon::builtin();
        let pool = &lexicon.templates().fallbacks;

        let mut picker = ScriptedPicker::new(vec![0, 3]);
        let first = generator().generate(&analysis, &mut picker);
        let second = generator().generate(&analysis, &mut picker);

        assert_eq!(first.route, Route::Fallback);
        assert_eq!(first.text, pool[0]);
        assert_eq!(second.text, pool[3]);
    }
}

#[cfg(test)]
mod total_reply_tests {
    use super::*;

    #[test]
    fn test_every_tier_intent_and_fallback_yields_text() {
        let generator = generator();
        let analyzer = Analyzer::default();
        let bases = [
            analyzer.analyze("tell me about your store today"),
            analyzer.analyze("ok"),
            analyzer.analyze("ok?"),
            analyzer.analyze("compare the phone, the watch and the speaker"),
            analyzer.analyze(""),
        ];
        let confidences = [0.95, 0.45, 0.1];
        let labels = [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ];

        for base in &bases {
            for confidence in confidences {
                for intent in IntentLabel::ALL {
                    for label in labels {
                        let mut analysis = base.clone();
                        analysis.confidence = confidence;
                        analysis.intent.intent = intent;
                        analysis.sentiment.label = label;

                        for seed in 0..3 {
                            let reply = generator
                                .generate(&analysis, &mut ScriptedPicker::new(vec![seed]));
                            assert!(
                                !reply.text.trim().is_empty(),
                                "Empty reply for {:?}/{} on '{}'",
                                reply.tier,
                                intent,
                                analysis.text
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_thresholds_shift_tiers() {
        let analysis = Analyzer::default().analyze("I need headphones");
        let strict = ResponseGenerator::new(
            Lexicon::builtin(),
            TierThresholds {
                high: 0.95,
                medium: 0.9,
            },
            DEFAULT_ASSISTANT_NAME,
        );
        let reply = strict.generate(&analysis, &mut ScriptedPicker::first());
        assert_eq!(reply.tier, ConfidenceTier::Low);
        assert_eq!(reply.route, Route::Fallback);
    }
}
