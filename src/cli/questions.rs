//! Questions command - print a catalog

use anyhow::Result;
use console::style;

use crate::catalog::{self, Scale};

pub(crate) fn run(scale: Scale, level: Option<u32>, json: bool) -> Result<()> {
    let questions: Vec<_> = match level {
        Some(level) => catalog::questions_by_level(scale.questions(), level),
        None => scale.questions().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    println!("\n{} ({} questions)\n", style(scale.label()).bold(), questions.len());

    let mut current_level = 0;
    for question in questions {
        if question.level != current_level {
            current_level = question.level;
            let name = match scale {
                Scale::Star => format!(
                    "Level {} - {}",
                    current_level,
                    catalog::star::level_name(current_level)
                ),
                Scale::Dass => format!("Level {}", current_level),
            };
            println!("{}", style(name).cyan().bold());
        }
        println!(
            "  {:>3}. [{}] {}",
            style(question.id).dim(),
            question.group.label(),
            question.prompt
        );
    }

    println!(
        "\n{}",
        style("Options score 0-3: never, sometimes, often, almost always.").dim()
    );
    Ok(())
}
