//! The content-generation demo: six prompts sent one after another.

use std::io::Write;

use tracing::info;

use crate::{AiClient, Error};

/// Width of the rule printed under each heading.
const RULE_WIDTH: usize = 50;

const ARCHITECTURE_PROMPT: &str = r#"Analyze the WordPress AI Building Blocks architecture.

IMPORTANT: Return your response as valid JSON with this exact structure:
{
  "foundation_layer": "description of foundation layer",
  "abstraction_layer": "description of abstraction layer",
  "integration_layer": "description of integration layer",
  "communication_layer": "description of communication layer",
  "benefits": ["benefit1", "benefit2", "benefit3"]
}"#;

const PLUGIN_FEATURES_INSTRUCTION: &str = r#"You are a WordPress AI expert. ALWAYS respond with valid JSON in this format: {"features": [{"name": "feature_name", "description": "feature_description", "importance": "high/medium/low"}], "target_users": ["user_type1", "user_type2"], "pricing_model": "description"}. Do not include any text before or after the JSON."#;

/// One demonstration prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentExample {
    pub title: &'static str,
    pub prompt: &'static str,
    pub system_instruction: Option<&'static str>,
    pub temperature: f32,
}

/// The six demonstration prompts, in run order.
pub fn catalog() -> Vec<ContentExample> {
    vec![
        ContentExample {
            title: "Generating a blog post about WordPress AI...",
            prompt: "Write a comprehensive blog post about integrating AI into WordPress websites. Include practical benefits and implementation tips.",
            system_instruction: None,
            temperature: 0.7,
        },
        ContentExample {
            title: "Generating a product description...",
            prompt: "Write a compelling product description for a WordPress AI plugin that helps content creators generate blog posts automatically.",
            system_instruction: None,
            temperature: 0.8,
        },
        ContentExample {
            title: "Generating social media content...",
            prompt: "Create 3 engaging Twitter posts about WordPress development tips. Keep each under 280 characters.",
            system_instruction: None,
            temperature: 0.9,
        },
        ContentExample {
            title: "Generating technical documentation...",
            prompt: "Write a technical guide explaining how to use WordPress hooks and filters for beginners. Include code examples.",
            system_instruction: None,
            temperature: 0.5,
        },
        ContentExample {
            title: "WordPress AI Building Blocks Architecture Analysis (JSON in prompt)...",
            prompt: ARCHITECTURE_PROMPT,
            system_instruction: Some("You are a WordPress AI architect. Analyze the 4-layer Building Blocks system. Always respond with valid JSON only."),
            temperature: 0.3,
        },
        ContentExample {
            title: "WordPress AI Plugin Features Analysis (Strong system instructions)...",
            prompt: "List the key features of a WordPress AI content generation plugin",
            system_instruction: Some(PLUGIN_FEATURES_INSTRUCTION),
            temperature: 0.4,
        },
    ]
}

/// Errors raised while running the demo.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error(transparent)]
    Generation(#[from] Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Run `examples` in order, writing the report to `out`.
///
/// Numbering follows each example's position in the full catalog, so a
/// filtered run still prints the catalog numbers. The first failure stops
/// the run.
pub async fn run<W: Write>(
    client: &AiClient,
    examples: &[(usize, ContentExample)],
    out: &mut W,
) -> Result<(), ShowcaseError> {
    writeln!(out, "🏗️ WordPress AI Building Blocks Content Generator")?;
    writeln!(out, "================================================")?;
    writeln!(out, "Foundation Layer (AI Client SDK) Demonstration")?;
    writeln!(out)?;

    for (number, example) in examples {
        writeln!(out, "{number}. {}", example.title)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        out.flush()?;

        info!(example = number, temperature = example.temperature, "Generating");
        let mut builder = client
            .prompt(example.prompt)?
            .using_temperature(example.temperature)?;
        if let Some(instruction) = example.system_instruction {
            builder = builder.using_system_instruction(instruction);
        }
        let text = builder.generate_text().await?;

        writeln!(out, "{text}")?;
        writeln!(out)?;
    }

    writeln!(out, "✅ WordPress AI Building Blocks Foundation Demo Complete!")?;
    writeln!(out, "🏗️ You've experienced the foundation layer that powers:")?;
    writeln!(out, "   • Abilities API (Abstraction Layer)")?;
    writeln!(out, "   • MCP Adapter (Communication Layer)")?;
    writeln!(out)?;
    writeln!(out, "🤝 Ready to contribute to WordPress AI Building Blocks?")?;
    writeln!(out, "   Join us at https://make.wordpress.org/ai/")?;
    out.flush()?;

    Ok(())
}

/// The full catalog, numbered from 1.
pub fn numbered_catalog() -> Vec<(usize, ContentExample)> {
    catalog()
        .into_iter()
        .enumerate()
        .map(|(index, example)| (index + 1, example))
        .collect()
}
