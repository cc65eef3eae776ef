//! Built-in blueprint presets.
//!
//! Static reference data exposed through `GET /api/campaigns/templates`
//! and usable as a starting point when creating a campaign.

use std::collections::HashMap;

use crate::domain::{CampaignBlueprint, CampaignStage, ContentTemplate, PostFrequency};

/// Preset blueprint for a named kind. Unknown kinds yield an empty
/// custom blueprint rather than an error.
pub fn blueprint_template(kind: &str) -> CampaignBlueprint {
    match kind {
        "productLaunch" => product_launch(),
        "seasonalCampaign" => seasonal_campaign(),
        "brandAwareness" => brand_awareness(),
        _ => custom(),
    }
}

/// All named presets, for the templates listing endpoint.
pub fn all_templates() -> Vec<CampaignBlueprint> {
    vec![product_launch(), seasonal_campaign(), brand_awareness()]
}

fn product_launch() -> CampaignBlueprint {
    CampaignBlueprint {
        name: "Product Launch Campaign".to_string(),
        description: "A comprehensive campaign structure for launching a new product".to_string(),
        category: "launch".to_string(),
        objectives: vec![
            "Awareness".to_string(),
            "Interest".to_string(),
            "Conversion".to_string(),
        ],
        duration: 14,
        content_types: vec![
            "post".to_string(),
            "carousel".to_string(),
            "story".to_string(),
            "reel".to_string(),
        ],
        post_frequency: PostFrequency::Daily,
        is_template: true,
        content_structure: vec![
            ContentTemplate {
                content_type: Some("story".to_string()),
                theme: "Teaser".to_string(),
                primary_message: "Something exciting is coming soon...".to_string(),
                visual_elements: vec!["product_silhouette".to_string(), "countdown".to_string()],
                caption_template: "Something big is coming. Stay tuned! #comingsoon".to_string(),
                hashtag_group: Some("teaser".to_string()),
                stage: Some(CampaignStage::Awareness),
            },
            ContentTemplate {
                content_type: Some("carousel".to_string()),
                theme: "Announcement".to_string(),
                primary_message: "Introducing our new product".to_string(),
                visual_elements: vec!["product_hero".to_string(), "key_features".to_string()],
                caption_template: "Introducing {product_name}! We're thrilled to finally share \
                                   our newest {product_type} with you. #newlaunch"
                    .to_string(),
                hashtag_group: Some("launch".to_string()),
                stage: Some(CampaignStage::Awareness),
            },
            ContentTemplate {
                content_type: Some("post".to_string()),
                theme: "Features".to_string(),
                primary_message: "Key feature spotlight".to_string(),
                visual_elements: vec!["feature_closeup".to_string()],
                caption_template: "Let's talk about what makes {product_name} special. This \
                                   {feature_name} is a game-changer because {benefit}."
                    .to_string(),
                hashtag_group: Some("features".to_string()),
                stage: Some(CampaignStage::Consideration),
            },
            ContentTemplate {
                content_type: Some("reel".to_string()),
                theme: "Testimonial".to_string(),
                primary_message: "See what people are saying".to_string(),
                visual_elements: vec![
                    "customer_using_product".to_string(),
                    "quote_overlay".to_string(),
                ],
                caption_template: "Don't just take our word for it! Here's what \
                                   @{customer_handle} had to say about {product_name}."
                    .to_string(),
                hashtag_group: Some("testimonials".to_string()),
                stage: Some(CampaignStage::Consideration),
            },
            ContentTemplate {
                content_type: Some("carousel".to_string()),
                theme: "Tutorial".to_string(),
                primary_message: "How to use the product".to_string(),
                visual_elements: vec!["step_by_step".to_string(), "tips".to_string()],
                caption_template: "Here's how to get the most out of your {product_name} in \
                                   {number} easy steps."
                    .to_string(),
                hashtag_group: Some("howto".to_string()),
                stage: Some(CampaignStage::Conversion),
            },
            ContentTemplate {
                content_type: Some("post".to_string()),
                theme: "Promotion".to_string(),
                primary_message: "Special launch offer".to_string(),
                visual_elements: vec!["product_with_offer".to_string(), "countdown".to_string()],
                caption_template: "Limited time offer! Get {discount} off {product_name} until \
                                   {end_date}. Link in bio to shop now!"
                    .to_string(),
                hashtag_group: Some("promotion".to_string()),
                stage: Some(CampaignStage::Conversion),
            },
            ContentTemplate {
                content_type: Some("story".to_string()),
                theme: "FAQ".to_string(),
                primary_message: "Answering your questions".to_string(),
                visual_elements: vec!["question_graphics".to_string()],
                caption_template: "You asked, we answered! Swipe through for our top FAQs about \
                                   {product_name}."
                    .to_string(),
                hashtag_group: Some("general".to_string()),
                stage: Some(CampaignStage::Consideration),
            },
        ],
        hashtag_groups: HashMap::from([
            (
                "teaser".to_string(),
                tags(&["#comingsoon", "#sneakpeek", "#staytuned", "#newproduct"]),
            ),
            (
                "launch".to_string(),
                tags(&[
                    "#newlaunch",
                    "#justlaunched",
                    "#newproduct",
                    "#introducing",
                    "#finally",
                ]),
            ),
            (
                "features".to_string(),
                tags(&[
                    "#featurefocus",
                    "#productivity",
                    "#innovation",
                    "#design",
                    "#quality",
                ]),
            ),
            (
                "testimonials".to_string(),
                tags(&["#customerlove", "#testimonial", "#happycustomer", "#review"]),
            ),
            (
                "howto".to_string(),
                tags(&["#howto", "#tutorial", "#tips", "#hack", "#learnfromme"]),
            ),
            (
                "promotion".to_string(),
                tags(&[
                    "#specialoffer",
                    "#discount",
                    "#limitedtime",
                    "#deal",
                    "#sale",
                ]),
            ),
        ]),
        kpis: vec![
            "Reach".to_string(),
            "Engagement".to_string(),
            "Website Clicks".to_string(),
            "Conversions".to_string(),
        ],
        visual_theme: serde_json::json!({
            "colorPalette": ["#primary", "#secondary", "#accent"],
            "fontStyle": "modern",
            "visualStyle": "clean",
        }),
        ..Default::default()
    }
}

fn seasonal_campaign() -> CampaignBlueprint {
    CampaignBlueprint {
        name: "Seasonal Campaign".to_string(),
        description: "A campaign structure for seasonal promotions and holidays".to_string(),
        category: "seasonal".to_string(),
        objectives: vec![
            "Awareness".to_string(),
            "Engagement".to_string(),
            "Conversion".to_string(),
        ],
        duration: 14,
        content_types: vec![
            "post".to_string(),
            "carousel".to_string(),
            "story".to_string(),
            "reel".to_string(),
        ],
        post_frequency: PostFrequency::ThriceWeekly,
        is_template: true,
        ..Default::default()
    }
}

fn brand_awareness() -> CampaignBlueprint {
    CampaignBlueprint {
        name: "Brand Awareness Campaign".to_string(),
        description: "A campaign to build brand recognition and identity".to_string(),
        category: "branding".to_string(),
        objectives: vec![
            "Recognition".to_string(),
            "Reach".to_string(),
            "Engagement".to_string(),
        ],
        duration: 30,
        content_types: vec!["post".to_string(), "story".to_string(), "reel".to_string()],
        post_frequency: PostFrequency::ThriceWeekly,
        is_template: true,
        ..Default::default()
    }
}

fn custom() -> CampaignBlueprint {
    CampaignBlueprint {
        name: "Custom Campaign".to_string(),
        description: "Create your own custom campaign structure".to_string(),
        is_template: false,
        ..Default::default()
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_launch_is_fully_specified() {
        let bp = blueprint_template("productLaunch");

        assert!(bp.is_template);
        assert_eq!(bp.content_structure.len(), 7);
        assert_eq!(bp.hashtag_groups.len(), 6);
        assert_eq!(bp.duration, 14);
        assert_eq!(bp.post_frequency, PostFrequency::Daily);
        // Referenced groups exist on the blueprint.
        assert_ne!(
            bp.hashtags("launch"),
            CampaignBlueprint::default().hashtags("launch")
        );
    }

    #[test]
    fn partial_presets_have_no_structure() {
        for kind in ["seasonalCampaign", "brandAwareness"] {
            let bp = blueprint_template(kind);
            assert!(bp.is_template);
            assert!(bp.content_structure.is_empty());
            assert!(bp.hashtag_groups.is_empty());
        }
    }

    #[test]
    fn unknown_kind_yields_custom_blueprint() {
        let bp = blueprint_template("whatever");
        assert_eq!(bp.name, "Custom Campaign");
        assert!(!bp.is_template);
    }

    #[test]
    fn listing_contains_all_named_presets() {
        assert_eq!(all_templates().len(), 3);
    }
}
